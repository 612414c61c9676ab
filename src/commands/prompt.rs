//! Line Editor
//!
//! Interactive input with line editing and in-memory history. The editor
//! blocks on the terminal, so it lives on its own thread and hands each line
//! to the async command loop over a channel.

use std::sync::mpsc as std_mpsc;
use std::thread;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// What one prompt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A line was entered (possibly blank)
    Line(String),
    /// Ctrl+C at the prompt
    Interrupted,
    /// Ctrl+D or end of piped input
    Eof,
}

/// Handle to the editor thread.
///
/// The thread only prompts when asked, so command output is never
/// interleaved with the next prompt.
pub struct LineReader {
    requests: std_mpsc::Sender<()>,
    events: mpsc::Receiver<Result<ReadEvent>>,
}

impl LineReader {
    /// Starts the editor thread with the given prompt.
    pub fn spawn(prompt: &'static str) -> Self {
        let (requests, request_rx) = std_mpsc::channel::<()>();
        let (event_tx, events) = mpsc::channel(1);

        thread::spawn(move || {
            let mut editor = match DefaultEditor::new() {
                Ok(editor) => editor,
                Err(err) => {
                    let _ = event_tx.blocking_send(Err(PokedexError::Prompt(err.to_string())));
                    return;
                }
            };

            while request_rx.recv().is_ok() {
                let event = into_event(editor.readline(prompt));
                if let Ok(ReadEvent::Line(line)) = &event {
                    if let Some(entry) = history_entry(line) {
                        let _ = editor.add_history_entry(entry);
                    }
                }
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }

            debug!("Line editor thread stopped");
        });

        Self { requests, events }
    }

    /// Shows the prompt and waits for the user.
    pub async fn read_line(&mut self) -> Result<ReadEvent> {
        if self.requests.send(()).is_err() {
            return Ok(ReadEvent::Eof);
        }
        self.events.recv().await.unwrap_or(Ok(ReadEvent::Eof))
    }
}

/// Maps an editor result onto a [`ReadEvent`].
fn into_event(result: rustyline::Result<String>) -> Result<ReadEvent> {
    match result {
        Ok(line) => Ok(ReadEvent::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(ReadEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(ReadEvent::Eof),
        Err(err) => Err(PokedexError::Prompt(err.to_string())),
    }
}

/// The history entry for a line: trimmed, and `None` for blank lines.
fn history_entry(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
