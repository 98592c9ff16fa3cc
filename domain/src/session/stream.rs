//! Streaming events for the deep-tier response.
//!
//! [`StreamEvent`] is the transport-neutral shape of one decoded stream event:
//! either a text delta or a control/metadata event that carries no answer text.
//! The orchestration layer depends only on this type, never on a concrete
//! envelope schema.

/// Kind of a non-text event in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    MessageStart,
    ContentBlockStart,
    ContentBlockStop,
    MessageStop,
    /// Usage and latency metrics.
    Metadata,
    /// Anything else the transport emits (heartbeats, unknown keys).
    Other(String),
}

/// An event in a streaming LLM response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model. May be empty.
    Delta(String),
    /// A control or metadata event.
    Control(ControlKind),
}

impl StreamEvent {
    pub fn delta(text: impl Into<String>) -> Self {
        StreamEvent::Delta(text.into())
    }

    /// Returns the text if this is a delta with a non-empty payload.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event signals the end of the message.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Control(ControlKind::MessageStop))
    }
}
