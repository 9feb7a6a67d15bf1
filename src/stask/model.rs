//! # Staskfile Model
//!
//! Everything stask knows lives in a single JSON document, the *staskfile*:
//!
//! ```text
//! {
//!     "Tasks":    { "<name>": "<template string>" },
//!     "State":    { "<name>": "<value>" },
//!     "Profiles": { "<name>": { "<name>": "<value>" } }
//! }
//! ```
//!
//! Any section missing from the file, or set to `null`, loads as an empty map,
//! so older files without `Profiles` keep working. Lowercase section names
//! (`tasks`, `state`, `profiles`) are accepted on read; writes always use the
//! capitalized form. The maps are `BTreeMap`s: key order carries no meaning,
//! but sorted keys keep the written file and the listings stable.
//!
//! Profiles are plain owned copies of `State`. Saving one clones the live state,
//! so later `set`/`clear` calls never reach back into a saved profile.

use crate::error::{DecodeKind, Result, StaskError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::error::Category;
use std::collections::BTreeMap;

pub type StateMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staskfile {
    #[serde(
        rename = "Tasks",
        alias = "tasks",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub tasks: BTreeMap<String, String>,

    #[serde(
        rename = "State",
        alias = "state",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub state: StateMap,

    #[serde(
        rename = "Profiles",
        alias = "profiles",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub profiles: BTreeMap<String, StateMap>,
}

/// A section written as `null` loads as an empty map.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The effect of loading a profile on one state key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    pub key: String,
    /// Value before the profile was applied; `None` if the key was not set.
    pub previous: Option<String>,
    pub value: String,
}

impl StateChange {
    pub fn is_unchanged(&self) -> bool {
        self.previous.as_deref() == Some(self.value.as_str())
    }
}

impl Staskfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(decode_error)
    }

    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        Serialize::serialize(self, &mut ser)?;
        Ok(buf)
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn profile(&self, name: &str) -> Option<&StateMap> {
        self.profiles.get(name)
    }

    /// Snapshots the live state under `name`. Returns `true` if an existing
    /// profile was overwritten.
    pub fn save_profile(&mut self, name: &str) -> bool {
        self.profiles
            .insert(name.to_string(), self.state.clone())
            .is_some()
    }

    /// Merges profile `name` into the live state. Keys not in the profile are
    /// left alone. Returns `None` (and changes nothing) if there is no such
    /// profile.
    pub fn apply_profile(&mut self, name: &str) -> Option<Vec<StateChange>> {
        let profile = self.profiles.get(name)?;

        let mut changes = Vec::with_capacity(profile.len());
        for (key, value) in profile {
            let previous = self.state.insert(key.clone(), value.clone());
            changes.push(StateChange {
                key: key.clone(),
                previous,
                value: value.clone(),
            });
        }
        Some(changes)
    }

    pub fn remove_profile(&mut self, name: &str) -> Option<StateMap> {
        self.profiles.remove(name)
    }
}

/// Attaches line/character to decode failures that carry a position; anything
/// else (I/O while reading) is passed through untouched.
fn decode_error(err: serde_json::Error) -> StaskError {
    if err.is_io() || err.line() == 0 {
        return StaskError::Serialization(err);
    }

    let kind = match err.classify() {
        Category::Data => DecodeKind::Type,
        _ => DecodeKind::Syntax,
    };
    let line = err.line();
    let character = err.column();
    let full = err.to_string();
    let suffix = format!(" at line {} column {}", line, character);
    let message = full.strip_suffix(&suffix).unwrap_or(&full).to_string();

    StaskError::Decode {
        kind,
        line,
        character,
        message,
    }
}
