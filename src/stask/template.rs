//! # Task Templates
//!
//! Tasks are shell command strings with `{name}` placeholders. Each placeholder is
//! filled from the stored state when the task is run:
//!
//! ```text
//! "deploy": "kubectl --context {cluster} apply -f {manifest}"
//! ```
//!
//! Templates are handled in two steps:
//!
//! 1. [`parse`] scans the raw string once and produces a [`Template`]: the *stripped*
//!    text (all `{name}` markers removed) plus the list of [`Placeholder`]s, each
//!    remembering where in the stripped text its value goes.
//! 2. [`apply`] rebuilds the final string from a `Template` and a name → value map,
//!    reporting the names it could not find instead of failing.
//!
//! ## Syntax
//!
//! - A placeholder name is any run of characters other than `{` and `}`.
//! - Braces must balance and cannot nest: `{a{b}}` is rejected.
//! - Empty names (`{}`) are rejected.
//! - A `{` left open at the end of the string is rejected.
//!
//! There is no escape for literal braces.

use std::collections::BTreeMap;
use thiserror::Error;

/// Malformed template syntax. `position` is the character offset in the raw
/// template where the problem was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("found opening '{{' before closing '}}' at character {position}")]
    UnexpectedOpenBrace { position: usize },

    #[error("found closing '}}' before opening '{{' at character {position}")]
    UnmatchedCloseBrace { position: usize },

    #[error("empty placeholder name at character {position}")]
    EmptyPlaceholderName { position: usize },

    #[error("placeholder opened at character {position} is never closed")]
    UnterminatedPlaceholder { position: usize },
}

/// One `{name}` occurrence. `index` is the byte offset into the stripped text
/// where the value is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub index: usize,
    pub name: String,
}

impl Placeholder {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// A parsed task template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    stripped: String,
    placeholders: Vec<Placeholder>,
}

impl Template {
    /// The template text with every placeholder marker removed.
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    /// Placeholders in source order (non-decreasing `index`).
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Placeholder names in source order, without duplicates.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in &self.placeholders {
            if !names.contains(&p.name.as_str()) {
                names.push(&p.name);
            }
        }
        names
    }
}

pub fn parse(raw: &str) -> Result<Template, TemplateError> {
    let mut stripped = String::with_capacity(raw.len());
    let mut placeholders = Vec::new();

    let mut name = String::new();
    let mut open_at: Option<(usize, usize)> = None; // (char position, stripped offset)

    for (position, chr) in raw.chars().enumerate() {
        match chr {
            '{' => {
                if open_at.is_some() {
                    return Err(TemplateError::UnexpectedOpenBrace { position });
                }
                open_at = Some((position, stripped.len()));
            }
            '}' => {
                let Some((_, index)) = open_at else {
                    return Err(TemplateError::UnmatchedCloseBrace { position });
                };
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholderName { position });
                }
                placeholders.push(Placeholder {
                    index,
                    name: std::mem::take(&mut name),
                });
                open_at = None;
            }
            _ if open_at.is_some() => name.push(chr),
            _ => stripped.push(chr),
        }
    }

    if let Some((position, _)) = open_at {
        return Err(TemplateError::UnterminatedPlaceholder { position });
    }

    Ok(Template {
        stripped,
        placeholders,
    })
}

/// Fills `template` from `values`.
///
/// Returns the rendered string and the names that had no value, in the order
/// they were encountered (a name missing twice is reported twice). A missing
/// placeholder renders as nothing. Callers that require every value decide
/// what a non-empty `missing` means.
pub fn apply(template: &Template, values: &BTreeMap<String, String>) -> (String, Vec<String>) {
    let mut missing = Vec::new();
    let mut out = String::with_capacity(template.stripped.len());
    let mut cursor = 0;

    for placeholder in &template.placeholders {
        let Some(value) = values.get(&placeholder.name) else {
            missing.push(placeholder.name.clone());
            continue;
        };
        out.push_str(&template.stripped[cursor..placeholder.index]);
        out.push_str(value);
        cursor = placeholder.index;
    }
    out.push_str(&template.stripped[cursor..]);

    (out, missing)
}
