//! # Serialization Engine
//!
//! The engine decides *who* writes a value. Every value the framework can
//! render is tagged with a [`RenderKind`], and [`HalSerializer`] keeps a
//! dispatch table from kind to [`Converter`]. The table is filled in when a
//! converter is registered, so rendering is a single lookup per value.
//!
//! Out of the box the table holds:
//!
//! | Kind                   | Converter                               |
//! |------------------------|-----------------------------------------|
//! | [`RenderKind::Resource`] | [`ResourceWriter`]                    |
//! | [`RenderKind::Links`]    | [`LinksWriter`]                       |
//! | [`RenderKind::Value`]    | none, tokens are written as they are  |
//!
//! Registering another converter for a kind replaces the entry for that kind.

use crate::error::HalError;
use crate::links::LinksWriter;
use crate::model::{LinkCollection, Resource};
use crate::options::WriterOptions;
use crate::sink::{DocumentSink, JsonSink};
use crate::writer::ResourceWriter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Media type of the documents this engine produces.
pub const MEDIA_TYPE: &str = "application/hal+json";

/// The kinds of value the engine knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderKind {
    Resource,
    Links,
    Value,
}

impl RenderKind {
    pub const ALL: [RenderKind; 3] = [RenderKind::Resource, RenderKind::Links, RenderKind::Value];
}

/// A borrowed value handed to the engine, tagged with its kind.
#[derive(Debug, Clone, Copy)]
pub enum Renderable<'a> {
    Resource(&'a Resource),
    Links(&'a LinkCollection),
    Value(&'a Value),
}

impl Renderable<'_> {
    pub fn kind(&self) -> RenderKind {
        match self {
            Renderable::Resource(_) => RenderKind::Resource,
            Renderable::Links(_) => RenderKind::Links,
            Renderable::Value(_) => RenderKind::Value,
        }
    }
}

/// Writes one kind of value to a sink.
pub trait Converter: Send + Sync {
    /// Whether this converter writes values of `kind`. Consulted once, at
    /// registration.
    fn can_handle(&self, kind: RenderKind) -> bool;

    /// Whether [`Converter::read`] can produce anything.
    fn can_read(&self) -> bool {
        false
    }

    fn write(
        &self,
        sink: &mut dyn DocumentSink,
        value: Renderable<'_>,
        engine: &dyn SerializationEngine,
    ) -> Result<(), HalError>;

    /// The inverse direction. `None` means "no value produced".
    fn read(&self, _document: &Value) -> Option<Resource> {
        None
    }
}

/// The capability converters use to write nested values.
pub trait SerializationEngine {
    /// Writes `value`'s representation into `sink` at the current position.
    fn serialize(&self, sink: &mut dyn DocumentSink, value: Renderable<'_>)
        -> Result<(), HalError>;
}

/// Converts any serializable value into an inspectable JSON token.
pub fn to_token<T: Serialize + ?Sized>(value: &T) -> Result<Value, HalError> {
    Ok(serde_json::to_value(value)?)
}

/// The engine: a dispatch table of converters plus entry points for
/// rendering whole documents.
///
/// `HalSerializer` holds no per-render state, so one instance can be shared
/// by any number of concurrent renders as long as each has its own sink.
pub struct HalSerializer {
    converters: Vec<Arc<dyn Converter>>,
    table: HashMap<RenderKind, usize>,
}

impl Default for HalSerializer {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl HalSerializer {
    /// Creates an engine with the built-in links and resource converters.
    pub fn new(options: WriterOptions) -> Self {
        let mut serializer = Self {
            converters: Vec::new(),
            table: HashMap::new(),
        };
        serializer.register(Arc::new(LinksWriter));
        serializer.register(Arc::new(ResourceWriter::new(options)));
        serializer
    }

    /// Adds a converter and points every kind it handles at it.
    pub fn register(&mut self, converter: Arc<dyn Converter>) {
        let index = self.converters.len();
        for kind in RenderKind::ALL {
            if converter.can_handle(kind) {
                debug!(?kind, index, "Converter registered");
                self.table.insert(kind, index);
            }
        }
        self.converters.push(converter);
    }

    pub fn converter_for(&self, kind: RenderKind) -> Option<&dyn Converter> {
        self.table
            .get(&kind)
            .and_then(|&index| self.converters.get(index))
            .map(|converter| converter.as_ref())
    }

    pub fn media_type(&self) -> &'static str {
        MEDIA_TYPE
    }

    /// Renders `resource` into a caller-supplied sink.
    pub fn write_resource(
        &self,
        sink: &mut dyn DocumentSink,
        resource: &Resource,
    ) -> Result<(), HalError> {
        self.serialize(sink, Renderable::Resource(resource))
    }

    /// Renders `resource` as compact JSON text.
    pub fn to_string(&self, resource: &Resource) -> Result<String, HalError> {
        let mut sink = JsonSink::new();
        self.write_resource(&mut sink, resource)?;
        sink.finish()
    }

    /// Renders `resource` and parses the result back into a generic token.
    pub fn to_value(&self, resource: &Resource) -> Result<Value, HalError> {
        Ok(serde_json::from_str(&self.to_string(resource)?)?)
    }

    /// Reading documents back into resources is not supported by the built-in
    /// converters; this reports [`HalError::Unsupported`] without parsing.
    pub fn from_str(&self, document: &str) -> Result<Resource, HalError> {
        let unsupported = HalError::Unsupported(RenderKind::Resource);
        match self.converter_for(RenderKind::Resource) {
            Some(converter) if converter.can_read() => {
                let token: Value = serde_json::from_str(document)?;
                converter.read(&token).ok_or(unsupported)
            }
            _ => Err(unsupported),
        }
    }
}

impl SerializationEngine for HalSerializer {
    fn serialize(
        &self,
        sink: &mut dyn DocumentSink,
        value: Renderable<'_>,
    ) -> Result<(), HalError> {
        match (self.converter_for(value.kind()), value) {
            (Some(converter), _) => converter.write(sink, value, self),
            (None, Renderable::Value(token)) => sink.write_raw_token(token),
            (None, other) => Err(HalError::Unhandled(other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{RecordingSink, SinkEvent};
    use serde_json::json;

    /// Upper-cases every string value it is asked to write.
    struct ShoutingValues;

    impl Converter for ShoutingValues {
        fn can_handle(&self, kind: RenderKind) -> bool {
            kind == RenderKind::Value
        }

        fn write(
            &self,
            sink: &mut dyn DocumentSink,
            value: Renderable<'_>,
            _engine: &dyn SerializationEngine,
        ) -> Result<(), HalError> {
            match value {
                Renderable::Value(Value::String(s)) => {
                    sink.write_raw_token(&Value::String(s.to_uppercase()))
                }
                Renderable::Value(other) => sink.write_raw_token(other),
                other => Err(HalError::Unhandled(other.kind())),
            }
        }
    }

    #[test]
    fn test_builtin_table_resolves_resource_and_links() {
        let serializer = HalSerializer::default();
        assert!(serializer.converter_for(RenderKind::Resource).is_some());
        assert!(serializer.converter_for(RenderKind::Links).is_some());
        assert!(serializer.converter_for(RenderKind::Value).is_none());
    }

    #[test]
    fn test_value_without_converter_is_written_raw() {
        let serializer = HalSerializer::default();
        let mut sink = RecordingSink::new();
        serializer
            .serialize(&mut sink, Renderable::Value(&json!([1, 2])))
            .unwrap();
        assert_eq!(sink.events(), &[SinkEvent::RawToken(json!([1, 2]))]);
    }

    #[test]
    fn test_registered_converter_takes_over_state_values() {
        let mut serializer = HalSerializer::default();
        serializer.register(Arc::new(ShoutingValues));

        let resource = Resource::builder()
            .state_value(json!({ "name": "alice", "age": 30 }))
            .build();
        assert_eq!(
            serializer.to_string(&resource).unwrap(),
            r#"{"name":"ALICE","age":30}"#
        );
    }

    #[test]
    fn test_from_str_reports_unsupported() {
        let serializer = HalSerializer::default();
        let result = serializer.from_str(r#"{"a":1}"#);
        assert!(matches!(
            result,
            Err(HalError::Unsupported(RenderKind::Resource))
        ));

        // Not even parsed: garbage input gives the same answer.
        assert!(matches!(
            serializer.from_str("not json"),
            Err(HalError::Unsupported(RenderKind::Resource))
        ));
    }

    #[test]
    fn test_media_type() {
        assert_eq!(HalSerializer::default().media_type(), "application/hal+json");
    }
}
