use super::DataStore;
use crate::error::{Result, StaskError};
use crate::model::Staskfile;
use std::path::PathBuf;

/// In-memory staskfile for testing.
///
/// Starts out missing, like a fresh install before `stask init`.
#[derive(Default)]
pub struct InMemoryStore {
    staskfile: Option<Staskfile>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `staskfile`.
    pub fn with_staskfile(staskfile: Staskfile) -> Self {
        Self {
            staskfile: Some(staskfile),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.staskfile.is_some()
    }

    fn load(&self) -> Result<Staskfile> {
        self.staskfile.clone().ok_or_else(|| {
            StaskError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "staskfile not found",
            ))
        })
    }

    fn save(&mut self, staskfile: &Staskfile) -> Result<()> {
        if self.simulate_write_error {
            return Err(StaskError::Store("Simulated write error".to_string()));
        }
        self.staskfile = Some(staskfile.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://staskfile.json")
    }
}
