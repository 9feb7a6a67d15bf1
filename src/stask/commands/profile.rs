//! Profiles are named snapshots of state.
//!
//! - `save` copies the whole live state under a name, replacing any profile
//!   with that name.
//! - `load` merges a profile back: every key in the profile overwrites the live
//!   value, keys the profile doesn't mention are kept.
//!
//! `load` changes state in memory before writing. If the write fails the
//! error comes back as [`StaskError::Unconfirmed`]: the file may or may not
//! hold the merged state, and nothing is rolled back.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaskError};
use crate::store::DataStore;

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let sf = store.load()?;
    Ok(CmdResult::default().with_names(sf.profile_names()))
}

pub fn show<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let sf = store.load()?;
    let profile = sf
        .profile(name)
        .ok_or_else(|| StaskError::ProfileNotFound(name.to_string()))?;
    Ok(CmdResult::default().with_values(profile.clone()))
}

pub fn save<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    let overwritten = sf.save_profile(name);
    store.save(&sf)?;

    let mut result = CmdResult::default();
    let verb = if overwritten { "overwritten" } else { "saved" };
    result.add_message(CmdMessage::success(format!(
        "profile '{}' {} successfully",
        name, verb
    )));
    Ok(result)
}

pub fn load<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    let changes = sf
        .apply_profile(name)
        .ok_or_else(|| StaskError::ProfileNotFound(name.to_string()))?;

    store
        .save(&sf)
        .map_err(|e| StaskError::Unconfirmed(Box::new(e)))?;

    let mut result = CmdResult::default().with_changes(changes);
    result.add_message(CmdMessage::success("profile applied successfully"));
    Ok(result)
}

pub fn delete<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    if sf.remove_profile(name).is_none() {
        return Err(StaskError::ProfileNotFound(name.to_string()));
    }
    store.save(&sf)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "profile '{}' deleted successfully",
        name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state;
    use crate::model::Staskfile;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        let mut sf = Staskfile::new();
        sf.state.insert("env".into(), "dev".into());
        sf.state.insert("region".into(), "us".into());
        InMemoryStore::with_staskfile(sf)
    }

    #[test]
    fn list_is_empty_without_profiles() {
        let store = store();
        assert!(list(&store).unwrap().names.is_empty());
    }

    #[test]
    fn save_reports_create_then_overwrite() {
        let mut store = store();
        let first = save(&mut store, "dev").unwrap();
        assert!(first.messages[0].content.contains("saved"));

        let second = save(&mut store, "dev").unwrap();
        assert!(second.messages[0].content.contains("overwritten"));

        assert_eq!(list(&store).unwrap().names, vec!["dev"]);
    }

    #[test]
    fn save_then_load_is_all_unchanged() {
        let mut store = store();
        save(&mut store, "p").unwrap();

        let result = load(&mut store, "p").unwrap();
        assert_eq!(result.changes.len(), 2);
        assert!(result.changes.iter().all(|c| c.is_unchanged()));
    }

    #[test]
    fn show_keeps_snapshot_after_state_changes() {
        let mut store = store();
        save(&mut store, "p").unwrap();
        state::set(&mut store, "env", "prod").unwrap();
        state::clear(&mut store, "region").unwrap();

        let values = show(&store, "p").unwrap().values.unwrap();
        assert_eq!(values.get("env").map(String::as_str), Some("dev"));
        assert_eq!(values.get("region").map(String::as_str), Some("us"));
    }

    #[test]
    fn load_merges_into_state() {
        let mut store = store();
        save(&mut store, "p").unwrap();
        state::set(&mut store, "env", "prod").unwrap();
        state::set(&mut store, "extra", "kept").unwrap();

        let result = load(&mut store, "p").unwrap();
        let env = result.changes.iter().find(|c| c.key == "env").unwrap();
        assert_eq!(env.previous.as_deref(), Some("prod"));
        assert_eq!(env.value, "dev");
        assert!(!env.is_unchanged());

        let values = state::show(&store).unwrap().values.unwrap();
        assert_eq!(values.get("env").map(String::as_str), Some("dev"));
        assert_eq!(values.get("extra").map(String::as_str), Some("kept"));
    }

    #[test]
    fn load_reports_keys_absent_from_state() {
        let mut store = store();
        save(&mut store, "p").unwrap();
        state::clear(&mut store, "region").unwrap();

        let result = load(&mut store, "p").unwrap();
        let region = result.changes.iter().find(|c| c.key == "region").unwrap();
        assert_eq!(region.previous, None);
    }

    #[test]
    fn load_unknown_profile_leaves_state() {
        let mut store = store();
        let before = state::show(&store).unwrap().values;
        let saves = store.saves();

        assert!(matches!(
            load(&mut store, "nope"),
            Err(StaskError::ProfileNotFound(_))
        ));
        assert_eq!(state::show(&store).unwrap().values, before);
        assert_eq!(store.saves(), saves);
    }

    #[test]
    fn load_write_failure_is_unconfirmed() {
        let mut store = store();
        save(&mut store, "p").unwrap();
        store.set_simulate_write_error(true);

        assert!(matches!(
            load(&mut store, "p"),
            Err(StaskError::Unconfirmed(_))
        ));
    }

    #[test]
    fn show_and_delete_unknown_profile() {
        let mut store = store();
        assert!(matches!(
            show(&store, "nope"),
            Err(StaskError::ProfileNotFound(_))
        ));
        assert!(matches!(
            delete(&mut store, "nope"),
            Err(StaskError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_profile() {
        let mut store = store();
        save(&mut store, "p").unwrap();
        delete(&mut store, "p").unwrap();
        assert!(list(&store).unwrap().names.is_empty());
    }
}
