use crate::commands::CmdResult;
use crate::error::{Result, StaskError};
use crate::store::DataStore;
use crate::template;

/// Renders task `name` with the live state. Every placeholder must have a
/// value; any that don't are reported together as `MissingState`.
pub fn run<S: DataStore>(store: &S, name: &str) -> Result<CmdResult> {
    let sf = store.load()?;
    let raw = sf
        .tasks
        .get(name)
        .ok_or_else(|| StaskError::TaskNotFound(name.to_string()))?;

    let tmpl = template::parse(raw)?;
    let (rendered, missing) = template::apply(&tmpl, &sf.state);
    if !missing.is_empty() {
        return Err(StaskError::MissingState(missing));
    }

    Ok(CmdResult::default().with_rendered(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Staskfile;
    use crate::store::memory::InMemoryStore;

    fn store_with(task: &str, state: &[(&str, &str)]) -> InMemoryStore {
        let mut sf = Staskfile::new();
        sf.tasks.insert("t".into(), task.into());
        for (k, v) in state {
            sf.state.insert(k.to_string(), v.to_string());
        }
        InMemoryStore::with_staskfile(sf)
    }

    #[test]
    fn renders_with_state() {
        let store = store_with("ssh {user}@{host}", &[("user", "root"), ("host", "box")]);
        let result = run(&store, "t").unwrap();
        assert_eq!(result.rendered.as_deref(), Some("ssh root@box"));
    }

    #[test]
    fn missing_state_is_an_error() {
        let store = store_with("ssh {user}@{host}", &[("host", "box")]);
        match run(&store, "t") {
            Err(StaskError::MissingState(missing)) => assert_eq!(missing, vec!["user"]),
            other => panic!("expected MissingState, got {:?}", other),
        }
    }

    #[test]
    fn unknown_task_is_not_found() {
        let store = store_with("echo", &[]);
        assert!(matches!(
            run(&store, "other"),
            Err(StaskError::TaskNotFound(_))
        ));
    }

    #[test]
    fn malformed_stored_task_is_template_error() {
        let store = store_with("echo }", &[]);
        assert!(matches!(run(&store, "t"), Err(StaskError::Template(_))));
    }
}
