//! Session Sink
//!
//! Every action selection produces exactly one outbound notification,
//! `{ "modalId": ..., "actionId": ... }`. The engine fires it and moves on:
//! it never waits for an acknowledgement, and a failing sink does not keep
//! the modal on screen.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::rc::Rc;
use thiserror::Error;

/// Outbound notification for one selected action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSelection {
    pub modal_id: String,
    pub action_id: String,
}

impl ActionSelection {
    pub fn new(modal_id: impl Into<String>, action_id: impl Into<String>) -> Self {
        ActionSelection {
            modal_id: modal_id.into(),
            action_id: action_id.into(),
        }
    }
}

/// Errors a sink may report back to the engine
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode selection: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("session is closed")]
    Closed,
}

/// Destination for action selections (usually the realtime room client)
pub trait SessionSink {
    fn send_selection(&mut self, selection: &ActionSelection) -> Result<(), SinkError>;
}

/// In-memory sink
///
/// Clones share the same record, so a test (or a host panel) can keep a
/// handle after boxing the sink into the engine.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    sent: Rc<RefCell<Vec<ActionSelection>>>,
    attempts: Rc<Cell<usize>>,
    closed: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// A sink that rejects every selection with [`SinkError::Closed`]
    pub fn closed() -> Self {
        RecordingSink {
            closed: true,
            ..Default::default()
        }
    }

    /// Selections accepted so far
    pub fn sent(&self) -> Vec<ActionSelection> {
        self.sent.borrow().clone()
    }

    /// Number of send attempts, including rejected ones
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl SessionSink for RecordingSink {
    fn send_selection(&mut self, selection: &ActionSelection) -> Result<(), SinkError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.sent.borrow_mut().push(selection.clone());
        Ok(())
    }
}

/// Writes each selection as one line of JSON
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        JsonLineSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SessionSink for JsonLineSink<W> {
    fn send_selection(&mut self, selection: &ActionSelection) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.writer, selection)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wire_shape() {
        let selection = ActionSelection::new("dead", "respawn");
        let value = serde_json::to_value(&selection).unwrap();

        assert_eq!(value, serde_json::json!({ "modalId": "dead", "actionId": "respawn" }));
    }

    #[test]
    fn test_recording_sink_shares_record_between_clones() {
        let sink = RecordingSink::new();
        let mut handle = sink.clone();

        handle.send_selection(&ActionSelection::new("a", "ok")).unwrap();

        assert_eq!(sink.sent(), vec![ActionSelection::new("a", "ok")]);
        assert_eq!(sink.attempts(), 1);
    }

    #[test]
    fn test_closed_sink_counts_attempts() {
        let sink = RecordingSink::closed();
        let mut handle = sink.clone();

        let result = handle.send_selection(&ActionSelection::new("a", "ok"));
        assert!(matches!(result, Err(SinkError::Closed)));
        assert_eq!(sink.attempts(), 1);
        assert!(sink.sent().is_empty());
    }

    #[test]
    fn test_json_line_sink_writes_one_line_per_selection() {
        let mut sink = JsonLineSink::new(Vec::new());
        sink.send_selection(&ActionSelection::new("kicked", "ok")).unwrap();
        sink.send_selection(&ActionSelection::new("dead", "spectate")).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"modalId":"kicked","actionId":"ok"}"#,
                r#"{"modalId":"dead","actionId":"spectate"}"#,
            ]
        );
    }
}
