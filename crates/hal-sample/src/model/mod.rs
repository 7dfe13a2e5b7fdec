//! Pure data structures (DTOs) for the storefront domain.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;
