use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StaskError};
use crate::model::Staskfile;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let location = store.location();
    if store.exists() {
        return Err(StaskError::AlreadyInitialized(location));
    }

    store.save(&Staskfile::new())?;

    let mut result = CmdResult::default().with_path(location.clone());
    result.add_message(CmdMessage::success(format!(
        "success - wrote default staskfile at path: {}",
        location.display()
    )));
    Ok(result)
}
