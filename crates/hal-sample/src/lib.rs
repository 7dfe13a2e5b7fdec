//! # HAL Sample App Library
//!
//! A storefront that serves users, products and orders as HAL documents.
//! This library exposes the modules of the application for integration testing.

pub mod error;
pub mod lifecycle;
pub mod model;
pub mod resources;
pub mod storefront;
