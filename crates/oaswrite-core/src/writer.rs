//! Structural writer: the event sink the serialization core writes to.
//!
//! The core is format-agnostic. It emits an ordered sequence of primitive
//! structural events and never sees the concrete encoding; any output format
//! implements [`StructuralWriter`]. Two sinks ship with the crate:
//! [`JsonWriter`] folds the stream into a [`serde_json::Value`], and
//! [`EventWriter`] records the raw stream for inspection.

use serde_json::Number;

/// An error raised while writing structural events.
///
/// Serialization failures propagate synchronously to the caller; output
/// already written to the sink is not rolled back. Callers that need
/// atomicity must buffer externally and discard the sink on failure.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The event is not legal in the sink's current state, e.g. a property
    /// name outside an object or an unmatched close event.
    #[error("unexpected `{event}` event: {reason}")]
    UnexpectedEvent {
        /// The offending event.
        event: &'static str,
        /// Why the event is not legal here.
        reason: &'static str,
    },

    /// An element could not be written because the element itself is
    /// malformed.
    #[error("malformed element: {0}")]
    Malformed(String),
}

/// An opaque sink accepting an ordered sequence of structural events.
///
/// Writers are append-only and single-pass: one sink per serialization pass,
/// with no coordination required between passes over the same frozen model.
pub trait StructuralWriter {
    /// Opens an object.
    fn begin_object(&mut self) -> Result<(), WriteError>;

    /// Closes the innermost open object.
    fn end_object(&mut self) -> Result<(), WriteError>;

    /// Opens an array.
    fn begin_array(&mut self) -> Result<(), WriteError>;

    /// Closes the innermost open array.
    fn end_array(&mut self) -> Result<(), WriteError>;

    /// Writes a property name inside the innermost open object. The next
    /// event supplies the property's value.
    fn property(&mut self, name: &str) -> Result<(), WriteError>;

    /// Writes a string scalar.
    fn string(&mut self, value: &str) -> Result<(), WriteError>;

    /// Writes a boolean scalar.
    fn bool(&mut self, value: bool) -> Result<(), WriteError>;

    /// Writes a numeric scalar.
    fn number(&mut self, value: &Number) -> Result<(), WriteError>;

    /// Writes a null scalar.
    fn null(&mut self) -> Result<(), WriteError>;
}

/// A single recorded structural event.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteEvent {
    /// An object was opened.
    BeginObject,
    /// An object was closed.
    EndObject,
    /// An array was opened.
    BeginArray,
    /// An array was closed.
    EndArray,
    /// A property name was written.
    Property(String),
    /// A string scalar was written.
    String(String),
    /// A boolean scalar was written.
    Bool(bool),
    /// A numeric scalar was written.
    Number(Number),
    /// A null scalar was written.
    Null,
}

/// A sink that records the raw event stream.
///
/// Useful for asserting on property order and on pass-to-pass determinism
/// without committing to a concrete encoding.
#[derive(Debug, Default)]
pub struct EventWriter {
    events: Vec<WriteEvent>,
}

impl EventWriter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The events recorded so far, in write order.
    pub fn events(&self) -> &[WriteEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    pub fn into_events(self) -> Vec<WriteEvent> {
        self.events
    }
}

impl StructuralWriter for EventWriter {
    fn begin_object(&mut self) -> Result<(), WriteError> {
        self.events.push(WriteEvent::BeginObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), WriteError> {
        self.events.push(WriteEvent::EndObject);
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), WriteError> {
        self.events.push(WriteEvent::BeginArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), WriteError> {
        self.events.push(WriteEvent::EndArray);
        Ok(())
    }

    fn property(&mut self, name: &str) -> Result<(), WriteError> {
        self.events.push(WriteEvent::Property(name.to_string()));
        Ok(())
    }

    fn string(&mut self, value: &str) -> Result<(), WriteError> {
        self.events.push(WriteEvent::String(value.to_string()));
        Ok(())
    }

    fn bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.events.push(WriteEvent::Bool(value));
        Ok(())
    }

    fn number(&mut self, value: &Number) -> Result<(), WriteError> {
        self.events.push(WriteEvent::Number(value.clone()));
        Ok(())
    }

    fn null(&mut self) -> Result<(), WriteError> {
        self.events.push(WriteEvent::Null);
        Ok(())
    }
}

/// A container being built by the [`JsonWriter`].
#[derive(Debug)]
enum Frame {
    Object {
        fields: serde_json::Map<String, serde_json::Value>,
        pending: Option<String>,
    },
    Array(Vec<serde_json::Value>),
}

/// A sink folding the event stream into a [`serde_json::Value`].
///
/// Property order follows write order (`serde_json`'s `preserve_order`
/// feature backs the object map with an insertion-ordered map). Ill-formed
/// event sequences are rejected with [`WriteError::UnexpectedEvent`].
#[derive(Debug, Default)]
pub struct JsonWriter {
    stack: Vec<Frame>,
    finished: Option<serde_json::Value>,
}

impl JsonWriter {
    /// Creates a writer with no open containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the writer and returns the completed value.
    ///
    /// Fails if no value was written or a container is still open.
    pub fn finish(self) -> Result<serde_json::Value, WriteError> {
        if !self.stack.is_empty() {
            return Err(WriteError::UnexpectedEvent {
                event: "finish",
                reason: "a container is still open",
            });
        }
        self.finished.ok_or(WriteError::UnexpectedEvent {
            event: "finish",
            reason: "no value has been written",
        })
    }

    fn push_value(&mut self, value: serde_json::Value) -> Result<(), WriteError> {
        match self.stack.last_mut() {
            Some(Frame::Object { fields, pending }) => {
                let name = pending.take().ok_or(WriteError::UnexpectedEvent {
                    event: "value",
                    reason: "no property name is pending in the open object",
                })?;
                fields.insert(name, value);
                Ok(())
            }
            Some(Frame::Array(items)) => {
                items.push(value);
                Ok(())
            }
            None => {
                if self.finished.is_some() {
                    return Err(WriteError::UnexpectedEvent {
                        event: "value",
                        reason: "the root value is already complete",
                    });
                }
                self.finished = Some(value);
                Ok(())
            }
        }
    }
}

impl StructuralWriter for JsonWriter {
    fn begin_object(&mut self) -> Result<(), WriteError> {
        if self.finished.is_some() && self.stack.is_empty() {
            return Err(WriteError::UnexpectedEvent {
                event: "begin_object",
                reason: "the root value is already complete",
            });
        }
        self.stack.push(Frame::Object {
            fields: serde_json::Map::new(),
            pending: None,
        });
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), WriteError> {
        match self.stack.pop() {
            Some(Frame::Object { fields, pending }) => {
                if pending.is_some() {
                    return Err(WriteError::UnexpectedEvent {
                        event: "end_object",
                        reason: "a property name is pending without a value",
                    });
                }
                self.push_value(serde_json::Value::Object(fields))
            }
            Some(frame @ Frame::Array(_)) => {
                self.stack.push(frame);
                Err(WriteError::UnexpectedEvent {
                    event: "end_object",
                    reason: "the innermost open container is an array",
                })
            }
            None => Err(WriteError::UnexpectedEvent {
                event: "end_object",
                reason: "no object is open",
            }),
        }
    }

    fn begin_array(&mut self) -> Result<(), WriteError> {
        if self.finished.is_some() && self.stack.is_empty() {
            return Err(WriteError::UnexpectedEvent {
                event: "begin_array",
                reason: "the root value is already complete",
            });
        }
        self.stack.push(Frame::Array(Vec::new()));
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), WriteError> {
        match self.stack.pop() {
            Some(Frame::Array(items)) => self.push_value(serde_json::Value::Array(items)),
            Some(frame @ Frame::Object { .. }) => {
                self.stack.push(frame);
                Err(WriteError::UnexpectedEvent {
                    event: "end_array",
                    reason: "the innermost open container is an object",
                })
            }
            None => Err(WriteError::UnexpectedEvent {
                event: "end_array",
                reason: "no array is open",
            }),
        }
    }

    fn property(&mut self, name: &str) -> Result<(), WriteError> {
        match self.stack.last_mut() {
            Some(Frame::Object { pending, .. }) => {
                if pending.is_some() {
                    return Err(WriteError::UnexpectedEvent {
                        event: "property",
                        reason: "the previous property has no value yet",
                    });
                }
                *pending = Some(name.to_string());
                Ok(())
            }
            _ => Err(WriteError::UnexpectedEvent {
                event: "property",
                reason: "no object is open",
            }),
        }
    }

    fn string(&mut self, value: &str) -> Result<(), WriteError> {
        self.push_value(serde_json::Value::String(value.to_string()))
    }

    fn bool(&mut self, value: bool) -> Result<(), WriteError> {
        self.push_value(serde_json::Value::Bool(value))
    }

    fn number(&mut self, value: &Number) -> Result<(), WriteError> {
        self.push_value(serde_json::Value::Number(value.clone()))
    }

    fn null(&mut self) -> Result<(), WriteError> {
        self.push_value(serde_json::Value::Null)
    }
}
