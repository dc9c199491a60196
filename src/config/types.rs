use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every field has a default, so an empty or missing config file yields
/// the stock `~/.ssh` + `ssh` + `sshpass -e` behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `pre.d`, `post.d` and `sshpass`. Relative paths
    /// are resolved against `$HOME`.
    pub base_dir: String,
    /// Remote-login client invoked with the user's tokens.
    pub client: String,
    /// Password automation helper prefixed when a credential exists.
    pub password_helper: String,
    /// Flag telling the helper to read the secret from the environment.
    pub password_helper_flag: String,
    /// Environment variable carrying the secret to the helper.
    pub secret_env_var: String,
    /// Shell used to run the composed command line.
    pub shell: String,
    /// Exit with the client's exit code instead of always succeeding.
    pub propagate_exit_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: ".ssh".to_string(),
            client: "ssh".to_string(),
            password_helper: "sshpass".to_string(),
            password_helper_flag: "-e".to_string(),
            secret_env_var: "SSHPASS".to_string(),
            shell: "/bin/sh".to_string(),
            propagate_exit_status: false,
        }
    }
}
