use crate::template::TemplateError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// What went wrong while decoding a staskfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeKind {
    /// Not valid JSON.
    Syntax,
    /// Valid JSON whose values don't fit the staskfile shape.
    Type,
}

impl fmt::Display for DecodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeKind::Syntax => write!(f, "syntax error"),
            DecodeKind::Type => write!(f, "type error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StaskError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("{kind} - line {line}, character {character}: {message}")]
    Decode {
        kind: DecodeKind,
        line: usize,
        character: usize,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no profile named '{0}' in staskfile")]
    ProfileNotFound(String),

    #[error("task '{0}' was not found in staskfile")]
    TaskNotFound(String),

    #[error("task keys not found in state: {}", .0.join(", "))]
    MissingState(Vec<String>),

    #[error("staskfile already exists at path: {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("no shell set, set either STASK_SHELL or SHELL to the shell stask should use")]
    NoShell,

    #[error("could not parse STASK_SHELL_FLAGS: {0}")]
    ShellFlags(#[from] shell_words::ParseError),

    #[error("error while writing staskfile, changes may not have been applied: {0}")]
    Unconfirmed(Box<StaskError>),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StaskError>;
