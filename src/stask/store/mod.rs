//! # Storage Layer
//!
//! The staskfile is always read and written whole. Every mutating command
//! follows the same read-modify-write cycle:
//!
//! 1. `load()` the full [`Staskfile`]
//! 2. change it in memory
//! 3. `save()` it back, overwriting the previous contents
//!
//! There is no locking: two stask processes writing the same file at the same
//! time race, and the last writer wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file on disk.
//! - [`memory::InMemoryStore`]: For testing command logic without the filesystem.

use crate::error::Result;
use crate::model::Staskfile;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for staskfile persistence.
pub trait DataStore {
    /// Whether a staskfile has been written yet.
    fn exists(&self) -> bool;

    /// Read and decode the whole staskfile.
    fn load(&self) -> Result<Staskfile>;

    /// Overwrite the staskfile with `staskfile`.
    fn save(&mut self, staskfile: &Staskfile) -> Result<()>;

    /// Where the staskfile lives (a real path for file stores).
    fn location(&self) -> PathBuf;
}
