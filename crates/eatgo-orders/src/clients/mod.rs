//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod address_book;
pub mod menu_directory;
pub mod order_client;
pub mod restaurant_directory;
pub mod review_client;
pub mod user_directory;

pub use address_book::*;
pub use menu_directory::*;
pub use order_client::*;
pub use restaurant_directory::*;
pub use review_client::*;
pub use user_directory::*;

/// The lookup services consumed by the order engine.
#[derive(Clone)]
pub struct Directories {
    pub users: UserDirectory,
    pub restaurants: RestaurantDirectory,
    pub menu: MenuDirectory,
    pub addresses: AddressBook,
}
