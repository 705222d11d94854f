//! # Directory Actors
//!
//! In-process lookup services the order engine consumes: users, restaurants,
//! dishes and delivery addresses. Each is a plain resource actor with no context
//! and no custom actions; they exist so orders can be validated and priced.
//!
//! ## Structure
//!
//! - [`user`], [`restaurant`], [`menu`], [`address`]: [`ActorEntity`](actor_framework::ActorEntity)
//!   implementations
//! - [`error`]: [`DirectoryError`], shared by all four
//! - factory functions returning each actor with its typed client
//!
//! ## Usage
//!
//! ```rust
//! use eatgo_orders::directory;
//! use eatgo_orders::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, users) = directory::users(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = users.create_user(UserCreate::client("ana@example.com", "Ana")).await?;
//!     let found = users.find_user_by_email("ANA@example.com").await?;
//!     assert_eq!(found.map(|u| u.id), Some(id));
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod error;
pub mod menu;
pub mod restaurant;
pub mod user;

pub use error::*;

use crate::clients::{AddressBook, MenuDirectory, RestaurantDirectory, UserDirectory};
use crate::model::{Address, Dish, Restaurant, User};
use actor_framework::ResourceActor;

/// Creates the User actor and its client.
pub fn users(buffer_size: usize) -> (ResourceActor<User>, UserDirectory) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, UserDirectory::new(client))
}

/// Creates the Restaurant actor and its client.
pub fn restaurants(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantDirectory) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, RestaurantDirectory::new(client))
}

/// Creates the Dish actor and its client.
pub fn menu(buffer_size: usize) -> (ResourceActor<Dish>, MenuDirectory) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, MenuDirectory::new(client))
}

/// Creates the Address actor and its client.
pub fn addresses(buffer_size: usize) -> (ResourceActor<Address>, AddressBook) {
    let (actor, client) = ResourceActor::new(buffer_size);
    (actor, AddressBook::new(client))
}
