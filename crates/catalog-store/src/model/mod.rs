//! Pure data structures for the catalog: users, products, and orders.

pub mod user;
pub mod product;
pub mod order;

pub use user::*;
pub use product::*;
pub use order::*;
