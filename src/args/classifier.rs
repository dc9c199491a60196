//! Argument classifier — raw ssh args → connection target + verbosity.

use std::ffi::{OsStr, OsString};

use tracing::trace;

use crate::args::registry::{lookup, FlagArity};

/// What the classifier learned from the raw ssh argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// First token that is neither a flag nor a flag's value.
    pub target: Option<OsString>,
    /// Number of `v` letters across all flag clusters.
    pub verbosity: u8,
}

/// Classify raw args against the flag registry.
///
/// Every letter of a flag cluster is inspected, so `-vp 22` counts one
/// verbosity level and consumes `22` as the port. Tokens are never
/// modified and need not be UTF-8; the caller keeps forwarding the
/// original slice.
pub fn classify(raw_args: &[OsString]) -> ParsedInvocation {
    let mut parsed = ParsedInvocation::default();
    let mut expecting_value = false;

    for arg in raw_args {
        if arg.is_empty() {
            continue;
        }

        // Previous cluster asked for a value
        if expecting_value {
            expecting_value = false;
            continue;
        }

        if let Some(cluster) = flag_cluster(arg) {
            for &byte in cluster {
                let letter = char::from(byte);
                let Some(def) = lookup(letter) else {
                    trace!(%letter, "unregistered flag letter, treated as boolean");
                    continue;
                };
                match def.arity {
                    FlagArity::RequiresValue => {
                        trace!(%letter, description = def.description, "flag takes a value");
                        expecting_value = true;
                    }
                    FlagArity::Verbosity => {
                        parsed.verbosity = parsed.verbosity.saturating_add(1)
                    }
                    FlagArity::NoValue => {}
                }
            }
            continue;
        }

        if parsed.target.is_none() {
            parsed.target = Some(arg.clone());
        }
    }

    parsed
}

/// Bytes after the leading dash, if `arg` is a flag cluster.
///
/// A bare `-` is not a flag. Non-ASCII bytes never match a registered
/// letter, so only the leading dash has to be ASCII.
fn flag_cluster(arg: &OsStr) -> Option<&[u8]> {
    arg.as_encoded_bytes()
        .strip_prefix(b"-")
        .filter(|rest| !rest.is_empty())
}
