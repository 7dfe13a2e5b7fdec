//! # HAL Framework
//!
//! This crate renders an in-memory resource graph into HAL documents
//! (`application/hal+json`): a JSON object per resource with its links under
//! `_links`, its own state flattened to the top level, and related resources
//! nested under `_embedded`.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into four layers:
//!
//! 1. **Model Layer** ([`model`]) - [`Resource`], [`EmbeddedResource`], [`Link`] and a fluent builder
//! 2. **Writer Layer** ([`ResourceWriter`], [`LinksWriter`]) - the recursive layout algorithm
//! 3. **Engine Layer** ([`HalSerializer`]) - a dispatch table from [`RenderKind`] to [`Converter`]
//! 4. **Service Layer** ([`RenderActor`], [`RenderClient`]) - async rendering over a Tokio channel
//!
//! Writers never build text themselves. They drive a [`DocumentSink`] with
//! begin/end object, begin/end array, property name and raw token calls.
//! [`JsonSink`] turns those calls into compact JSON and refuses sequences that
//! would break the document.
//!
//! ## Example
//!
//! ```rust
//! use hal_framework::{HalSerializer, Link, Resource};
//! use serde_json::json;
//!
//! let product = |id: u32| {
//!     Resource::builder()
//!         .self_link(format!("/products/{id}"))
//!         .state(&json!({ "id": id }))
//!         .map(|b| b.build())
//! };
//!
//! let order = Resource::builder()
//!     .self_link("/orders/1")
//!     .link("curies", Link::templated("/docs/{rel}").with_name("shop"))
//!     .state(&json!({ "total": 30.0, "status": "open" }))?
//!     .embed_many("items", vec![product(1)?, product(2)?])
//!     .build();
//!
//! let json = HalSerializer::default().to_string(&order)?;
//! assert_eq!(
//!     json,
//!     concat!(
//!         r#"{"_links":{"self":{"href":"/orders/1"},"curies":{"href":"/docs/{rel}","templated":true,"name":"shop"}},"#,
//!         r#""total":30.0,"status":"open","#,
//!         r#""_embedded":{"items":["#,
//!         r#"{"_links":{"self":{"href":"/products/1"}},"id":1},"#,
//!         r#"{"_links":{"self":{"href":"/products/2"}},"id":2}]}}"#
//!     )
//! );
//! # Ok::<(), hal_framework::HalError>(())
//! ```
//!
//! ## Reading Documents
//!
//! The inverse direction is not supported. [`HalSerializer::from_str`] and
//! [`RenderClient::parse`] always answer [`HalError::Unsupported`].
//!
//! ## Concurrency Model
//!
//! - The writer is synchronous and keeps no state between calls
//! - One [`HalSerializer`] can serve any number of concurrent renders, each with its own sink
//! - [`RenderActor`] processes requests sequentially in its own Tokio task
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`RecordingSink`](mock::RecordingSink) for
//! asserting exact call sequences and a [`MockRenderer`](mock::MockRenderer)
//! for testing callers without spawning an actor.

pub mod actor;
pub mod client;
pub mod engine;
pub mod error;
pub mod links;
pub mod message;
pub mod mock;
pub mod model;
pub mod options;
pub mod renderer;
pub mod sink;
pub mod tracing;
pub mod writer;

// Re-export core types for convenience
pub use actor::RenderActor;
pub use client::RenderClient;
pub use engine::{
    to_token, Converter, HalSerializer, RenderKind, Renderable, SerializationEngine, MEDIA_TYPE,
};
pub use error::HalError;
pub use links::LinksWriter;
pub use message::{RenderRequest, Response};
pub use model::{EmbeddedResource, Link, LinkCollection, Resource, ResourceBuilder};
pub use options::{EmptyRelationPolicy, NonObjectStatePolicy, WriterOptions};
pub use renderer::DocumentRenderer;
pub use sink::{DocumentSink, JsonSink};
pub use writer::ResourceWriter;
