//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all stask operations, whatever the UI.
//!
//! It dispatches to the matching command function and returns its structured
//! [`CmdResult`]. It holds no logic of its own, never prints, and never exits.
//!
//! ## Generic Over DataStore
//!
//! `StaskApi<S: DataStore>` is generic over the storage backend:
//! - Production: `StaskApi<FileStore>`
//! - Testing: `StaskApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct StaskApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> StaskApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn state(&self) -> Result<CmdResult> {
        commands::state::show(&self.store)
    }

    pub fn set_state(&mut self, name: &str, value: &str) -> Result<CmdResult> {
        commands::state::set(&mut self.store, name, value)
    }

    pub fn clear_state(&mut self, name: &str) -> Result<CmdResult> {
        commands::state::clear(&mut self.store, name)
    }

    pub fn tasks(&self) -> Result<CmdResult> {
        commands::tasks::list(&self.store)
    }

    pub fn add_task(&mut self, name: &str, template: &str) -> Result<CmdResult> {
        commands::tasks::add(&mut self.store, name, template)
    }

    pub fn remove_task(&mut self, name: &str) -> Result<CmdResult> {
        commands::tasks::remove(&mut self.store, name)
    }

    pub fn render_task(&self, name: &str) -> Result<CmdResult> {
        commands::render::run(&self.store, name)
    }

    pub fn list_profiles(&self) -> Result<CmdResult> {
        commands::profile::list(&self.store)
    }

    pub fn show_profile(&self, name: &str) -> Result<CmdResult> {
        commands::profile::show(&self.store, name)
    }

    pub fn save_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::save(&mut self.store, name)
    }

    pub fn load_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::load(&mut self.store, name)
    }

    pub fn delete_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::delete(&mut self.store, name)
    }

    pub fn staskfile_path(&self) -> PathBuf {
        self.store.location()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
