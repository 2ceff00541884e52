//! Business logic for each menu action.
//!
//! Every command is a plain function over the notebook and (where it
//! mutates) the snapshot store, returning a [`CmdResult`]. Commands never
//! print; the shell renders the returned records and messages. Persistence
//! failures are absorbed here as warnings, so nothing a command does can
//! abort the interactive session.

use crate::model::Record;

pub mod add;
pub mod helpers;
pub mod list;
pub mod open;
pub mod remove;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the shell: records to display (in display
/// order, numbered from 1 at print time) and user-facing messages.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }
}
