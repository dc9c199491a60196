//! Stored sshpass credentials.
//!
//! One file per target under `<base>/sshpass/`. The file's raw bytes are
//! the password; nothing is trimmed or decoded.

use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::paths::literal_join;

/// Raw password bytes that never show up in `Debug` or `Display` output.
///
/// Use `expose()` / `to_os_string()` only when handing the value to the
/// child environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Vec<u8>);

impl Credential {
    /// Wrap raw secret bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Expose the inner bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }

    /// The secret as an environment value, byte-for-byte on Unix.
    pub fn to_os_string(&self) -> OsString {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStringExt;
            OsString::from_vec(self.0.clone())
        }
        #[cfg(not(unix))]
        {
            OsString::from(String::from_utf8_lossy(&self.0).into_owned())
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(••••••••)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Looks up the credential file for a target.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    dir: PathBuf,
}

impl CredentialResolver {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path the credential for `target` would live at.
    pub fn path_for(&self, target: impl AsRef<OsStr>) -> PathBuf {
        literal_join(&self.dir, target)
    }

    /// Read the credential for `target`.
    ///
    /// A missing file is the normal case and returns `None` quietly. Any
    /// other failure is downgraded to a warning and also returns `None`,
    /// so a broken credential never stops the connection attempt.
    pub fn resolve(&self, target: impl AsRef<OsStr>) -> Option<Credential> {
        let target = target.as_ref();
        let path = self.path_for(target);
        match read_regular_file(&path) {
            Ok(Some(bytes)) => {
                debug!(target_host = ?target, path = %path.display(), "credential found");
                Some(Credential::new(bytes))
            }
            Ok(None) => {
                debug!(target_host = ?target, path = %path.display(), "no credential");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable credential file");
                None
            }
        }
    }
}

/// `Ok(None)` if nothing exists at `path`.
fn read_regular_file(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    let meta = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    if !meta.is_file() {
        return Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    std::fs::read(path).map(Some)
}
