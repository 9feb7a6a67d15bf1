use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaskError};
use crate::store::DataStore;
use crate::template;

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let sf = store.load()?;
    let names = sf.tasks.keys().cloned().collect();
    Ok(CmdResult::default().with_names(names))
}

/// Defines (or redefines) a task. The template must parse; a malformed one is
/// rejected and nothing is written.
pub fn add<S: DataStore>(store: &mut S, name: &str, raw: &str) -> Result<CmdResult> {
    let tmpl = template::parse(raw)?;

    let mut sf = store.load()?;
    let replaced = sf.tasks.insert(name.to_string(), raw.to_string()).is_some();
    store.save(&sf)?;

    let mut result = CmdResult::default().with_names(
        tmpl.names().into_iter().map(String::from).collect(),
    );
    let verb = if replaced { "updated" } else { "added" };
    result.add_message(CmdMessage::success(format!("task '{}' {}", name, verb)));

    let missing: Vec<&str> = tmpl
        .names()
        .into_iter()
        .filter(|n| !sf.state.contains_key(*n))
        .collect();
    if !missing.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "state not set yet: {}",
            missing.join(", ")
        )));
    }
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    if sf.tasks.remove(name).is_none() {
        return Err(StaskError::TaskNotFound(name.to_string()));
    }
    store.save(&sf)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("task '{}' removed", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Staskfile;
    use crate::store::memory::InMemoryStore;
    use crate::template::TemplateError;

    fn store() -> InMemoryStore {
        InMemoryStore::with_staskfile(Staskfile::new())
    }

    #[test]
    fn add_then_list() {
        let mut store = store();
        add(&mut store, "build", "cargo build --profile {profile}").unwrap();
        add(&mut store, "hello", "echo hi").unwrap();

        let result = list(&store).unwrap();
        assert_eq!(result.names, vec!["build", "hello"]);
    }

    #[test]
    fn add_reports_placeholders_and_unset_state() {
        let mut store = store();
        let result = add(&mut store, "greet", "echo {greeting} {name}").unwrap();

        assert_eq!(result.names, vec!["greeting", "name"]);
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert!(result.messages[1].content.contains("greeting, name"));
    }

    #[test]
    fn add_rejects_malformed_template() {
        let mut store = store();
        let err = add(&mut store, "bad", "echo {oops").unwrap_err();
        assert!(matches!(
            err,
            StaskError::Template(TemplateError::UnterminatedPlaceholder { .. })
        ));
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn remove_unknown_task_is_not_found() {
        let mut store = store();
        assert!(matches!(
            remove(&mut store, "nope"),
            Err(StaskError::TaskNotFound(_))
        ));
    }

    #[test]
    fn remove_deletes_task() {
        let mut store = store();
        add(&mut store, "hello", "echo hi").unwrap();
        remove(&mut store, "hello").unwrap();
        assert!(list(&store).unwrap().names.is_empty());
    }
}
