//! # Command Layer
//!
//! This module contains the **core logic** of stask. Each command lives in its
//! own submodule as plain functions generic over [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! - Load the staskfile, change it, save it back (read-modify-write)
//! - Return structured [`CmdResult`] values, never strings meant for a terminal
//! - Report expected outcomes ("no such profile") as typed errors
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: No stdout, stderr, colors or exit codes
//! - **Argument parsing**: That's the CLI layer's job
//! - **Process spawning**: `run` only renders here; the CLI executes
//!
//! ## Testing Strategy
//!
//! Command tests use [`crate::store::memory::InMemoryStore`] and cover every
//! branch, including write failures.
//!
//! ## Command Modules
//!
//! - [`init`]: Create an empty staskfile
//! - [`state`]: Show, set and clear state values
//! - [`tasks`]: List, add and remove tasks
//! - [`render`]: Fill a task's placeholders from state
//! - [`profile`]: List, show, save, load and delete profiles
//!
//! [`DataStore`]: crate::store::DataStore

use crate::model::{StateChange, StateMap};
use std::path::PathBuf;

pub mod init;
pub mod profile;
pub mod render;
pub mod state;
pub mod tasks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
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
}

/// Structured result of a command.
///
/// Only the fields relevant to a command are filled:
/// - `values`: a state-shaped map (`state`, `profile show`)
/// - `names`: task or profile names (`tasks`, `profile list`)
/// - `changes`: per-key effect of `profile load`
/// - `rendered`: a task with its placeholders filled (`dryrun`, `run`)
/// - `path`: the staskfile location (`init`)
#[derive(Debug, Default)]
pub struct CmdResult {
    pub values: Option<StateMap>,
    pub names: Vec<String>,
    pub changes: Vec<StateChange>,
    pub rendered: Option<String>,
    pub path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_values(mut self, values: StateMap) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn with_changes(mut self, changes: Vec<StateChange>) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_rendered(mut self, rendered: String) -> Self {
        self.rendered = Some(rendered);
        self
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}
