//! Argument assembler — the shell command line handed to the client.

use std::ffi::OsString;

use crate::config::Credential;

/// Builder for the command line run through the shell.
///
/// The user's tokens are kept verbatim and in order, as raw OS strings.
/// They are joined with single spaces and not escaped, so the shell sees
/// exactly what the user typed after the wrapper name.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    prefix: Vec<String>,
    client: String,
    args: Vec<OsString>,
}

impl ArgAssembler {
    /// Start from the client name and the raw user tokens.
    pub fn new(client: &str, raw_args: &[OsString]) -> Self {
        Self {
            prefix: Vec::new(),
            client: client.to_string(),
            args: raw_args.to_vec(),
        }
    }

    /// Prefix the password helper (e.g. `sshpass -e`) when a credential exists.
    pub fn with_password_helper(
        mut self,
        helper: &str,
        flag: &str,
        credential: Option<&Credential>,
    ) -> Self {
        if credential.is_some() {
            self.prefix = [helper, flag]
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        self
    }

    /// Whether the helper prefix is in place.
    pub fn uses_helper(&self) -> bool {
        !self.prefix.is_empty()
    }

    /// Tokens forwarded to the client, exactly as received.
    pub fn forwarded(&self) -> &[OsString] {
        &self.args
    }

    /// Build the final command line.
    pub fn build(&self) -> OsString {
        let mut line = OsString::new();
        for word in &self.prefix {
            line.push(word);
            line.push(" ");
        }
        line.push(&self.client);
        for arg in &self.args {
            line.push(" ");
            line.push(arg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn plain_client_with_args() {
        let line = ArgAssembler::new("ssh", &raw(&["-p", "22", "host", "ls -la"])).build();
        assert_eq!(line, "ssh -p 22 host ls -la");
    }

    #[test]
    fn no_args_is_just_client() {
        assert_eq!(ArgAssembler::new("ssh", &[]).build(), "ssh");
    }

    #[test]
    fn helper_prefix_only_with_credential() {
        let args = raw(&["db1"]);
        let without = ArgAssembler::new("ssh", &args).with_password_helper("sshpass", "-e", None);
        assert!(!without.uses_helper());
        assert_eq!(without.build(), "ssh db1");

        let cred = Credential::new(b"pw".to_vec());
        let with = ArgAssembler::new("ssh", &args).with_password_helper("sshpass", "-e", Some(&cred));
        assert!(with.uses_helper());
        assert_eq!(with.build(), "sshpass -e ssh db1");
    }

    #[test]
    fn empty_helper_flag_is_dropped() {
        let cred = Credential::new(b"pw".to_vec());
        let line = ArgAssembler::new("ssh", &raw(&["h"]))
            .with_password_helper("pw-helper", "", Some(&cred))
            .build();
        assert_eq!(line, "pw-helper ssh h");
    }

    #[test]
    fn forwarded_tokens_are_untouched() {
        let args = raw(&["-o", "A=b c", "", "host"]);
        let cred = Credential::new(b"pw".to_vec());
        let asm = ArgAssembler::new("ssh", &args).with_password_helper("sshpass", "-e", Some(&cred));
        assert_eq!(asm.forwarded(), args.as_slice());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_bytes_reach_the_line() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let args = vec![OsString::from("host"), OsString::from_vec(b"caf\xe9".to_vec())];
        let line = ArgAssembler::new("ssh", &args).build();
        assert_eq!(line.as_bytes(), b"ssh host caf\xe9");
    }
}
