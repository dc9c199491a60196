//! Environment builder — per-child env vars in one place.

use std::ffi::{OsStr, OsString};

use crate::config::Credential;

/// Builder for environment variables passed to the spawned shell.
///
/// Values are applied to the child only; the wrapper's own environment
/// is never touched.
#[derive(Clone, Default)]
pub struct EnvSet {
    vars: Vec<(OsString, OsString)>,
}

impl EnvSet {
    /// Create an empty environment set.
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Export the stored password under `var` for the helper to read.
    pub fn with_secret(mut self, var: &str, credential: Option<&Credential>) -> Self {
        if let Some(c) = credential {
            self.vars.push((var.into(), c.to_os_string()));
        }
        self
    }

    /// Variable names only, safe to log.
    pub fn keys(&self) -> impl Iterator<Item = &OsStr> {
        self.vars.iter().map(|(k, _)| k.as_os_str())
    }

    /// Build the final environment variable list.
    pub fn build(self) -> Vec<(OsString, OsString)> {
        self.vars
    }
}

impl std::fmt::Debug for EnvSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_credential_exports_nothing() {
        let env = EnvSet::new().with_secret("SSHPASS", None).build();
        assert!(env.is_empty());
    }

    #[test]
    fn credential_is_exported_verbatim() {
        let cred = Credential::new(b"hunter2\n".to_vec());
        let env = EnvSet::new().with_secret("SSHPASS", Some(&cred)).build();
        assert_eq!(env.len(), 1);
        assert_eq!(env[0].0, OsString::from("SSHPASS"));
        assert_eq!(env[0].1, OsString::from("hunter2\n"));
    }

    #[test]
    fn debug_shows_only_keys() {
        let cred = Credential::new(b"hunter2".to_vec());
        let env = EnvSet::new().with_secret("SSHPASS", Some(&cred));
        let out = format!("{:?}", env);
        assert!(out.contains("SSHPASS"));
        assert!(!out.contains("hunter2"));
    }
}
