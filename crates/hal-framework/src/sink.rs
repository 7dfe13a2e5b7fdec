//! # Document Sinks
//!
//! The writer never builds a tree of its own. It issues a flat sequence of
//! document-building calls to a [`DocumentSink`], in the same way a streaming
//! JSON writer is driven.
//!
//! [`JsonSink`] is the production sink: it emits compact JSON text and keeps
//! just enough state to reject writes that would break the document. For
//! asserting the exact call sequence, see [`RecordingSink`](crate::mock::RecordingSink).

use crate::error::HalError;
use serde_json::Value;

/// Streaming target for document-building calls.
///
/// A sink is driven by exactly one render at a time; the `&mut` receiver
/// makes sharing one across in-flight renders a compile error.
pub trait DocumentSink {
    fn begin_object(&mut self) -> Result<(), HalError>;
    fn end_object(&mut self) -> Result<(), HalError>;
    fn begin_array(&mut self) -> Result<(), HalError>;
    fn end_array(&mut self) -> Result<(), HalError>;
    fn write_property_name(&mut self, name: &str) -> Result<(), HalError>;

    /// Writes `token` verbatim at the current position.
    fn write_raw_token(&mut self, token: &Value) -> Result<(), HalError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Object,
    Array,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    count: usize,
    pending_name: bool,
}

/// Compact JSON text sink.
///
/// Mirrors a strict streaming writer:
/// - a value inside an object must follow a property name;
/// - a property name may not follow another name that has no value yet;
/// - closing an object while a name awaits its value writes `null` for it.
#[derive(Debug, Default)]
pub struct JsonSink {
    buf: String,
    stack: Vec<Frame>,
    root_written: bool,
}

impl JsonSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the sink and returns the document, failing if any container
    /// is still open.
    pub fn finish(self) -> Result<String, HalError> {
        if !self.stack.is_empty() {
            return Err(HalError::Incomplete {
                open: self.stack.len(),
            });
        }
        Ok(self.buf)
    }

    fn state(&self) -> &'static str {
        match self.stack.last() {
            None if self.root_written => "Complete",
            None => "Start",
            Some(frame) if frame.pending_name => "Property",
            Some(frame) => match frame.container {
                Container::Object => "Object",
                Container::Array => "Array",
            },
        }
    }

    fn invalid(&self, token: &'static str) -> HalError {
        HalError::InvalidToken {
            token,
            state: self.state(),
        }
    }

    fn before_value(&mut self, token: &'static str) -> Result<(), HalError> {
        let state = self.state();
        match self.stack.last_mut() {
            None if self.root_written => Err(HalError::InvalidToken { token, state }),
            None => {
                self.root_written = true;
                Ok(())
            }
            Some(frame) => match frame.container {
                Container::Object if frame.pending_name => {
                    frame.pending_name = false;
                    Ok(())
                }
                Container::Object => Err(HalError::InvalidToken { token, state }),
                Container::Array => {
                    if frame.count > 0 {
                        self.buf.push(',');
                    }
                    frame.count += 1;
                    Ok(())
                }
            },
        }
    }

    fn open(&mut self, container: Container, token: &'static str) -> Result<(), HalError> {
        self.before_value(token)?;
        self.buf.push(match container {
            Container::Object => '{',
            Container::Array => '[',
        });
        self.stack.push(Frame {
            container,
            count: 0,
            pending_name: false,
        });
        Ok(())
    }

    fn close(&mut self, container: Container, token: &'static str) -> Result<(), HalError> {
        match self.stack.last() {
            Some(frame) if frame.container == container => {}
            _ => return Err(self.invalid(token)),
        }
        if let Some(frame) = self.stack.pop() {
            if frame.pending_name {
                self.buf.push_str("null");
            }
        }
        self.buf.push(match container {
            Container::Object => '}',
            Container::Array => ']',
        });
        Ok(())
    }
}

fn token_name(token: &Value) -> &'static str {
    match token {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::String(_) => "String",
        Value::Array(_) => "StartArray",
        Value::Object(_) => "StartObject",
    }
}

impl DocumentSink for JsonSink {
    fn begin_object(&mut self) -> Result<(), HalError> {
        self.open(Container::Object, "StartObject")
    }

    fn end_object(&mut self) -> Result<(), HalError> {
        self.close(Container::Object, "EndObject")
    }

    fn begin_array(&mut self) -> Result<(), HalError> {
        self.open(Container::Array, "StartArray")
    }

    fn end_array(&mut self) -> Result<(), HalError> {
        self.close(Container::Array, "EndArray")
    }

    fn write_property_name(&mut self, name: &str) -> Result<(), HalError> {
        let state = self.state();
        let frame = match self.stack.last_mut() {
            Some(frame) if frame.container == Container::Object && !frame.pending_name => frame,
            _ => {
                return Err(HalError::InvalidToken {
                    token: "PropertyName",
                    state,
                })
            }
        };
        if frame.count > 0 {
            self.buf.push(',');
        }
        frame.count += 1;
        frame.pending_name = true;
        self.buf.push_str(&serde_json::to_string(name)?);
        self.buf.push(':');
        Ok(())
    }

    fn write_raw_token(&mut self, token: &Value) -> Result<(), HalError> {
        self.before_value(token_name(token))?;
        self.buf.push_str(&serde_json::to_string(token)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_nested_containers_with_separators() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        sink.write_property_name("a").unwrap();
        sink.write_raw_token(&json!(1)).unwrap();
        sink.write_property_name("list").unwrap();
        sink.begin_array().unwrap();
        sink.write_raw_token(&json!("x")).unwrap();
        sink.begin_object().unwrap();
        sink.end_object().unwrap();
        sink.end_array().unwrap();
        sink.end_object().unwrap();

        assert_eq!(sink.finish().unwrap(), r#"{"a":1,"list":["x",{}]}"#);
    }

    #[test]
    fn test_escapes_property_names() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        sink.write_property_name("say \"hi\"").unwrap();
        sink.write_raw_token(&json!(true)).unwrap();
        sink.end_object().unwrap();

        assert_eq!(sink.finish().unwrap(), r#"{"say \"hi\"":true}"#);
    }

    #[test]
    fn test_rejects_value_without_property_name() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        let err = sink.write_raw_token(&json!(42)).unwrap_err();

        assert!(matches!(
            err,
            HalError::InvalidToken {
                token: "Integer",
                state: "Object"
            }
        ));
    }

    #[test]
    fn test_rejects_second_name_while_value_pending() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        sink.write_property_name("first").unwrap();
        let err = sink.write_property_name("second").unwrap_err();

        assert!(matches!(
            err,
            HalError::InvalidToken {
                token: "PropertyName",
                state: "Property"
            }
        ));
    }

    #[test]
    fn test_closing_pending_name_writes_null() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        sink.write_property_name("dangling").unwrap();
        sink.end_object().unwrap();

        assert_eq!(sink.finish().unwrap(), r#"{"dangling":null}"#);
    }

    #[test]
    fn test_mismatched_close_and_unfinished_document() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        assert!(sink.end_array().is_err());
        assert!(matches!(sink.finish(), Err(HalError::Incomplete { open: 1 })));
    }

    #[test]
    fn test_second_root_value_is_rejected() {
        let mut sink = JsonSink::new();
        sink.begin_object().unwrap();
        sink.end_object().unwrap();
        assert!(matches!(
            sink.begin_object(),
            Err(HalError::InvalidToken {
                state: "Complete",
                ..
            })
        ));
    }
}
