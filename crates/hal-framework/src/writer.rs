//! # Resource Writer
//!
//! The converter that turns a [`Resource`] tree into one JSON object per
//! resource. The layout is:
//!
//! ```text
//! {
//!   "_links": { ... },          links, written by the engine
//!   "field1": "value1",         state fields, flattened to the top level
//!   "field2": 42,
//!   "_embedded": {
//!     "customer": { ... },      relation with one resource: an object
//!     "items": [ {...}, {...} ] relation with several: an array
//!   }
//! }
//! ```
//!
//! Links are only written when the collection is non-empty, `_embedded` only
//! when at least one relation will be written. Under
//! [`EmptyRelationPolicy::Omit`] a resource whose relations are all empty
//! gets no `_embedded` at all. A relation with a single resource is
//! indistinguishable on the wire from a to-one relation.
//!
//! ## Edge cases
//!
//! Two shapes cannot be expressed cleanly in this layout. What the writer does
//! with them is governed by [`WriterOptions`]; the defaults write exactly what
//! the algorithm asks for and leave the sink to object:
//!
//! - **Empty relation**: the relation name is written with no value.
//!   [`JsonSink`](crate::sink::JsonSink) closes a trailing one with `null` and
//!   rejects one that is followed by another relation.
//! - **Non-object state**: the token is written verbatim where the state
//!   fields would go. A strict sink rejects it.
//!
//! The writer keeps no state between calls; recursion depth equals embedding
//! depth.

use crate::engine::{Converter, RenderKind, Renderable, SerializationEngine};
use crate::error::HalError;
use crate::model::{EmbeddedResource, Resource};
use crate::options::{EmptyRelationPolicy, NonObjectStatePolicy, WriterOptions};
use crate::sink::DocumentSink;
use serde_json::Value;
use tracing::{trace, warn};

/// Reserved property holding embedded resources.
pub const EMBEDDED_PROPERTY: &str = "_embedded";

/// Property used for non-object state under [`NonObjectStatePolicy::Wrap`].
pub const STATE_PROPERTY: &str = "state";

/// Converter for [`RenderKind::Resource`].
#[derive(Debug, Clone, Default)]
pub struct ResourceWriter {
    options: WriterOptions,
}

impl ResourceWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Writes `resource` as one JSON object.
    pub fn render(
        &self,
        resource: &Resource,
        sink: &mut dyn DocumentSink,
        engine: &dyn SerializationEngine,
    ) -> Result<(), HalError> {
        self.render_at(resource, sink, engine, 1)
    }

    fn render_at(
        &self,
        resource: &Resource,
        sink: &mut dyn DocumentSink,
        engine: &dyn SerializationEngine,
        depth: usize,
    ) -> Result<(), HalError> {
        if let Some(max) = self.options.max_depth {
            if depth > max {
                warn!(depth, max, "Resource nesting too deep");
                return Err(HalError::DepthExceeded { max });
            }
        }

        sink.begin_object()?;

        if !resource.links.is_empty() {
            engine.serialize(sink, Renderable::Links(&resource.links))?;
        }

        if let Some(state) = &resource.state {
            self.write_state(state, sink, engine)?;
        }

        if resource
            .embedded_resources
            .iter()
            .any(|relation| self.writes_relation(relation))
        {
            sink.write_property_name(EMBEDDED_PROPERTY)?;
            sink.begin_object()?;
            for relation in &resource.embedded_resources {
                self.write_relation(relation, sink, engine, depth)?;
            }
            sink.end_object()?;
        }

        sink.end_object()
    }

    fn write_state(
        &self,
        state: &Value,
        sink: &mut dyn DocumentSink,
        engine: &dyn SerializationEngine,
    ) -> Result<(), HalError> {
        match state {
            Value::Object(fields) => {
                for (name, value) in fields {
                    sink.write_property_name(name)?;
                    engine.serialize(sink, Renderable::Value(value))?;
                }
                Ok(())
            }
            other => {
                trace!(policy = ?self.options.non_object_state, "Non-object state");
                if self.options.non_object_state == NonObjectStatePolicy::Wrap {
                    sink.write_property_name(STATE_PROPERTY)?;
                }
                engine.serialize(sink, Renderable::Value(other))
            }
        }
    }

    fn writes_relation(&self, relation: &EmbeddedResource) -> bool {
        !relation.resources.is_empty() || self.options.empty_relations != EmptyRelationPolicy::Omit
    }

    fn write_relation(
        &self,
        relation: &EmbeddedResource,
        sink: &mut dyn DocumentSink,
        engine: &dyn SerializationEngine,
        depth: usize,
    ) -> Result<(), HalError> {
        if !self.writes_relation(relation) {
            return Ok(());
        }

        sink.write_property_name(&relation.name)?;
        match relation.resources.as_slice() {
            [] => {
                trace!(relation = %relation.name, "Empty relation");
                if self.options.empty_relations == EmptyRelationPolicy::EmptyArray {
                    sink.begin_array()?;
                    sink.end_array()?;
                }
                Ok(())
            }
            [single] => self.render_at(single, sink, engine, depth + 1),
            many => {
                sink.begin_array()?;
                for resource in many {
                    self.render_at(resource, sink, engine, depth + 1)?;
                }
                sink.end_array()
            }
        }
    }
}

impl Converter for ResourceWriter {
    fn can_handle(&self, kind: RenderKind) -> bool {
        kind == RenderKind::Resource
    }

    fn write(
        &self,
        sink: &mut dyn DocumentSink,
        value: Renderable<'_>,
        engine: &dyn SerializationEngine,
    ) -> Result<(), HalError> {
        match value {
            Renderable::Resource(resource) => self.render(resource, sink, engine),
            other => Err(HalError::Unhandled(other.kind())),
        }
    }
}
