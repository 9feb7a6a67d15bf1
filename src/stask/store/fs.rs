use super::DataStore;
use crate::error::{Result, StaskError};
use crate::model::Staskfile;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StaskError::Io)?;
            }
        }
        Ok(())
    }

    #[cfg(unix)]
    fn open_for_write(&self) -> std::io::Result<fs::File> {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o777)
            .open(&self.path)
    }

    #[cfg(not(unix))]
    fn open_for_write(&self) -> std::io::Result<fs::File> {
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
    }
}

impl DataStore for FileStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<Staskfile> {
        let data = fs::read(&self.path).map_err(StaskError::Io)?;
        Staskfile::parse(&data)
    }

    fn save(&mut self, staskfile: &Staskfile) -> Result<()> {
        let data = staskfile.serialize()?;
        self.ensure_parent_dir()?;

        let mut file = self.open_for_write().map_err(StaskError::Io)?;
        file.write_all(&data).map_err(StaskError::Io)?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("stask").join("staskfile.json"))
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut sf = Staskfile::new();
        sf.tasks.insert("hello".into(), "hello task".into());
        sf.state.insert("state".into(), "foo".into());

        store.save(&sf).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), sf);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&Staskfile::new()).unwrap();
        assert!(dir.path().join("stask").is_dir());
    }

    #[test]
    fn save_overwrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        let mut big = Staskfile::new();
        for i in 0..50 {
            big.state.insert(format!("key{}", i), "x".repeat(40));
        }
        store.save(&big).unwrap();
        store.save(&Staskfile::new()).unwrap();

        assert_eq!(store.load().unwrap(), Staskfile::new());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.exists());
        assert!(matches!(store.load(), Err(StaskError::Io(_))));
    }

    #[test]
    fn malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let path = store.location();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\n  \"State\": {\"a\": \"b\",}\n}").unwrap();

        match store.load() {
            Err(StaskError::Decode { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_world_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&Staskfile::new()).unwrap();

        // umask may strip bits, but the owner always keeps read/write
        let mode = fs::metadata(store.location()).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
    }
}
