use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn show<S: DataStore>(store: &S) -> Result<CmdResult> {
    let sf = store.load()?;
    Ok(CmdResult::default().with_values(sf.state))
}

pub fn set<S: DataStore>(store: &mut S, name: &str, value: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    let previous = sf.state.insert(name.to_string(), value.to_string());
    store.save(&sf)?;

    let mut result = CmdResult::default();
    let message = match previous {
        Some(old) if old != value => format!("{} : {} -> {}", name, old, value),
        Some(_) => format!("{} : {} [unchanged]", name, value),
        None => format!("{} : {}", name, value),
    };
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

/// Removes `name` from state. Clearing a key that is not set is not an error.
pub fn clear<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut sf = store.load()?;
    let mut result = CmdResult::default();

    match sf.state.remove(name) {
        Some(_) => {
            store.save(&sf)?;
            result.add_message(CmdMessage::success(format!("cleared '{}'", name)));
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "no state named '{}' in staskfile",
                name
            )));
        }
    }
    Ok(result)
}
