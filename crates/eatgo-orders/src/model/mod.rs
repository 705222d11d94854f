//! Domain types owned by the resource actors.

pub mod address;
pub mod dish;
pub mod ids;
pub mod order;
pub mod restaurant;
pub mod review;
pub mod status;
pub mod user;

pub use address::*;
pub use dish::*;
pub use ids::*;
pub use order::*;
pub use restaurant::*;
pub use review::*;
pub use status::*;
pub use user::*;
