mod credentials;
mod loader;
mod paths;
mod types;

pub use credentials::{Credential, CredentialResolver};
pub use loader::{ConfigError, CONFIG_ENV};
pub use paths::{literal_join, WrapperPaths, SECRET_DIR};
pub use types::Config;
