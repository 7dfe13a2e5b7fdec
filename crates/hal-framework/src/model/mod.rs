//! The resource graph: resources, embedded relations and links.

pub mod link;
pub mod resource;

pub use link::*;
pub use resource::*;
