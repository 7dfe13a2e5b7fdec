//! # Test Doubles
//!
//! Utilities for testing code that renders resources.
//!
//! - [`RecordingSink`] records every document-building call instead of
//!   producing text. Use it to assert the exact sequence the writer issues,
//!   including sequences a strict JSON sink would refuse.
//! - [`MockRenderer`] stands in for a [`DocumentRenderer`] with queued
//!   responses, so callers can be tested without spawning a render actor.
//!
//! Both live in the library instead of behind `#[cfg(test)]` so integration
//! tests and downstream crates can use them.

use crate::error::HalError;
use crate::model::Resource;
use crate::renderer::DocumentRenderer;
use crate::sink::DocumentSink;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One call made on a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    BeginObject,
    EndObject,
    BeginArray,
    EndArray,
    PropertyName(String),
    RawToken(Value),
}

/// A sink that accepts every call and remembers it.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }
}

impl DocumentSink for RecordingSink {
    fn begin_object(&mut self) -> Result<(), HalError> {
        self.events.push(SinkEvent::BeginObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), HalError> {
        self.events.push(SinkEvent::EndObject);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), HalError> {
        self.events.push(SinkEvent::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), HalError> {
        self.events.push(SinkEvent::EndArray);
        Ok(())
    }

    fn write_property_name(&mut self, name: &str) -> Result<(), HalError> {
        self.events.push(SinkEvent::PropertyName(name.to_string()));
        Ok(())
    }

    fn write_raw_token(&mut self, token: &Value) -> Result<(), HalError> {
        self.events.push(SinkEvent::RawToken(token.clone()));
        Ok(())
    }
}

/// A renderer that replays queued responses.
///
/// # Example
/// ```
/// use hal_framework::mock::MockRenderer;
/// use hal_framework::{DocumentRenderer, Resource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockRenderer::new();
/// mock.expect_render().return_ok("{\"id\":1}");
///
/// let json = mock.render(Resource::new()).await.unwrap();
/// assert_eq!(json, "{\"id\":1}");
/// assert_eq!(mock.received().len(), 1);
/// mock.verify(); // Ensures all expectations were met
/// # }
/// ```
#[derive(Clone, Default)]
pub struct MockRenderer {
    responses: Arc<Mutex<VecDeque<Result<String, HalError>>>>,
    received: Arc<Mutex<Vec<Resource>>>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one more `render` call.
    pub fn expect_render(&self) -> RenderExpectationBuilder {
        RenderExpectationBuilder {
            responses: self.responses.clone(),
        }
    }

    /// Resources passed to `render` so far, in call order.
    pub fn received(&self) -> Vec<Resource> {
        self.received.lock().unwrap().clone()
    }

    /// Panics if any queued response was never consumed.
    pub fn verify(&self) {
        let remaining = self.responses.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `render` expectations.
pub struct RenderExpectationBuilder {
    responses: Arc<Mutex<VecDeque<Result<String, HalError>>>>,
}

impl RenderExpectationBuilder {
    pub fn return_ok(self, document: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(document.into()));
    }

    pub fn return_err(self, error: HalError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }
}

#[async_trait]
impl DocumentRenderer for MockRenderer {
    async fn render(&self, resource: Resource) -> Result<String, HalError> {
        self.received.lock().unwrap().push(resource);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected render call"))
    }
}
