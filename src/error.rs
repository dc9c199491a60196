use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors; everything else is logged and skipped.
#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("HOME is not set; cannot locate hooks or credentials")]
    MissingHome,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
