//! # Configuration
//!
//! stask is configured only through environment variables, read once at startup
//! into a [`StaskConfig`] and passed down from there.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STASKFILE_PATH` | `~/.config/stask/staskfile.json` | Location of the staskfile |
//! | `STASK_SHELL` | `$SHELL` | Shell used by `stask run` |
//! | `STASK_SHELL_FLAGS` | `-ic` | Flags passed to the shell before the task |
//!
//! A task runs as `<shell> <flags...> "<task>"`.

use crate::error::Result;
use directories::BaseDirs;
use std::path::PathBuf;

pub const STASKFILE_PATH_VAR: &str = "STASKFILE_PATH";
pub const SHELL_VAR: &str = "STASK_SHELL";
pub const SHELL_FLAGS_VAR: &str = "STASK_SHELL_FLAGS";
pub const SYSTEM_SHELL_VAR: &str = "SHELL";
pub const DEFAULT_SHELL_FLAGS: &str = "-ic";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaskConfig {
    pub staskfile_path: PathBuf,
    /// `None` when neither `STASK_SHELL` nor `SHELL` is set.
    pub shell: Option<String>,
    pub shell_flags: String,
}

impl StaskConfig {
    pub fn from_env() -> Self {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self::from_lookup(|name| std::env::var(name).ok(), home)
    }

    /// Builds the config from an arbitrary variable lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F, home: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let staskfile_path = var(STASKFILE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| default_staskfile_path(home));

        Self {
            staskfile_path,
            shell: var(SHELL_VAR).or_else(|| var(SYSTEM_SHELL_VAR)),
            shell_flags: var(SHELL_FLAGS_VAR).unwrap_or_else(|| DEFAULT_SHELL_FLAGS.to_string()),
        }
    }

    /// Shell flags as separate arguments, split with shell quoting rules so
    /// `--rcfile "/tmp/my rc"` stays two arguments.
    pub fn shell_args(&self) -> Result<Vec<String>> {
        Ok(shell_words::split(&self.shell_flags)?)
    }
}

fn default_staskfile_path(home: Option<PathBuf>) -> PathBuf {
    home.unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("stask")
        .join("staskfile.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StaskError;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> StaskConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StaskConfig::from_lookup(|name| env.get(name).cloned(), Some(PathBuf::from("/home/u")))
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]);
        assert_eq!(
            cfg.staskfile_path,
            PathBuf::from("/home/u/.config/stask/staskfile.json")
        );
        assert_eq!(cfg.shell, None);
        assert_eq!(cfg.shell_flags, "-ic");
        assert_eq!(cfg.shell_args().unwrap(), vec!["-ic"]);
    }

    #[test]
    fn staskfile_path_override() {
        let cfg = config(&[("STASKFILE_PATH", "/tmp/s.json")]);
        assert_eq!(cfg.staskfile_path, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let cfg = config(&[("STASKFILE_PATH", ""), ("STASK_SHELL_FLAGS", "")]);
        assert_eq!(
            cfg.staskfile_path,
            PathBuf::from("/home/u/.config/stask/staskfile.json")
        );
        assert_eq!(cfg.shell_flags, "-ic");
    }

    #[test]
    fn stask_shell_wins_over_shell() {
        let cfg = config(&[("SHELL", "/bin/bash"), ("STASK_SHELL", "/bin/zsh")]);
        assert_eq!(cfg.shell.as_deref(), Some("/bin/zsh"));

        let cfg = config(&[("SHELL", "/bin/bash")]);
        assert_eq!(cfg.shell.as_deref(), Some("/bin/bash"));
    }

    #[test]
    fn custom_flags_split_on_whitespace() {
        let cfg = config(&[("STASK_SHELL_FLAGS", "-l  -c")]);
        assert_eq!(cfg.shell_args().unwrap(), vec!["-l", "-c"]);
    }

    #[test]
    fn quoted_flags_stay_one_argument() {
        let cfg = config(&[("STASK_SHELL_FLAGS", r#"--rcfile "/tmp/my rc" -ic"#)]);
        assert_eq!(
            cfg.shell_args().unwrap(),
            vec!["--rcfile", "/tmp/my rc", "-ic"]
        );
    }

    #[test]
    fn unbalanced_quote_in_flags_is_an_error() {
        let cfg = config(&[("STASK_SHELL_FLAGS", r#"-c "oops"#)]);
        assert!(matches!(cfg.shell_args(), Err(StaskError::ShellFlags(_))));
    }
}
