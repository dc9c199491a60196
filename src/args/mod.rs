//! Argument handling for sshwrap.
//!
//! ```text
//! User Input → Classify → Assemble (+ EnvSet) → shell command line
//! ```
//!
//! Classification is a pure function over the raw tokens; the tokens
//! themselves are forwarded unchanged, as `OsString`s.

mod assembler;
mod classifier;
mod env_builder;
mod registry;

pub use assembler::ArgAssembler;
pub use classifier::{classify, ParsedInvocation};
pub use env_builder::EnvSet;
pub use registry::{arity, flag_registry, lookup, FlagArity, FlagDef, VERBOSITY_LETTER};
