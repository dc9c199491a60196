//! Filesystem layout rooted at `$HOME`.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::types::Config;
use crate::error::WrapperError;
use crate::hooks::HookPhase;

/// Directory of stored passwords under the base dir.
pub const SECRET_DIR: &str = "sshpass";

/// Resolved base directory for hooks and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperPaths {
    base: PathBuf,
}

impl WrapperPaths {
    /// Resolve paths from the `HOME` environment variable.
    ///
    /// Without `HOME` no path can be built, so this is fatal.
    pub fn from_env(config: &Config) -> Result<Self, WrapperError> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .ok_or(WrapperError::MissingHome)?;
        Ok(Self::from_home(Path::new(&home), config))
    }

    /// Resolve paths against an explicit home directory.
    pub fn from_home(home: &Path, config: &Config) -> Self {
        Self {
            base: home.join(&config.base_dir),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/pre.d` or `<base>/post.d`.
    pub fn hook_dir(&self, phase: HookPhase) -> PathBuf {
        self.base.join(phase.dir_name())
    }

    /// `<base>/sshpass`.
    pub fn secret_dir(&self) -> PathBuf {
        self.base.join(SECRET_DIR)
    }
}

/// Append `segment` to `dir` with a literal `/`.
///
/// Unlike `Path::join`, an absolute segment does not replace `dir`, and
/// `..` is not collapsed. Targets such as `../x` therefore still resolve
/// outside `dir`; that is accepted and left to the user's hook layout.
pub fn literal_join(dir: &Path, segment: impl AsRef<OsStr>) -> PathBuf {
    let mut joined: OsString = dir.as_os_str().to_owned();
    joined.push("/");
    joined.push(segment);
    PathBuf::from(joined)
}
