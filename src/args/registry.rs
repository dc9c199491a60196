//! Flag registry — single source of truth for the ssh client's option letters.

/// What a flag letter does to the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean flag, no value (e.g., -A, -N, -T).
    NoValue,
    /// The next token is this flag's value (e.g., -p 2222).
    RequiresValue,
    /// Bumps the verbosity counter once per occurrence (-v).
    Verbosity,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Option letter, without the leading dash.
    pub letter: char,
    /// Does it take a value?
    pub arity: FlagArity,
    /// Human-readable description (for diagnostics).
    pub description: &'static str,
}

/// The letter counted for verbosity.
pub const VERBOSITY_LETTER: char = 'v';

const FLAGS: &[FlagDef] = &[
    // === Boolean flags ===
    def('4', FlagArity::NoValue, "Force IPv4"),
    def('6', FlagArity::NoValue, "Force IPv6"),
    def('A', FlagArity::NoValue, "Enable agent forwarding"),
    def('a', FlagArity::NoValue, "Disable agent forwarding"),
    def('C', FlagArity::NoValue, "Request compression"),
    def('f', FlagArity::NoValue, "Go to background before command execution"),
    def('G', FlagArity::NoValue, "Print configuration and exit"),
    def('g', FlagArity::NoValue, "Allow remote hosts to connect to forwarded ports"),
    def('K', FlagArity::NoValue, "Enable GSSAPI authentication"),
    def('k', FlagArity::NoValue, "Disable GSSAPI credential forwarding"),
    def('M', FlagArity::NoValue, "Master mode for connection sharing"),
    def('N', FlagArity::NoValue, "Do not execute a remote command"),
    def('n', FlagArity::NoValue, "Redirect stdin from /dev/null"),
    def('q', FlagArity::NoValue, "Quiet mode"),
    def('s', FlagArity::NoValue, "Request a subsystem"),
    def('T', FlagArity::NoValue, "Disable pseudo-terminal allocation"),
    def('t', FlagArity::NoValue, "Force pseudo-terminal allocation"),
    def('V', FlagArity::NoValue, "Display version"),
    def('X', FlagArity::NoValue, "Enable X11 forwarding"),
    def('x', FlagArity::NoValue, "Disable X11 forwarding"),
    def('Y', FlagArity::NoValue, "Enable trusted X11 forwarding"),
    def('y', FlagArity::NoValue, "Send log output to syslog"),
    // === Verbosity ===
    def(VERBOSITY_LETTER, FlagArity::Verbosity, "Verbose mode (repeatable)"),
    // === Flags taking a value ===
    def('B', FlagArity::RequiresValue, "Bind interface"),
    def('b', FlagArity::RequiresValue, "Bind address"),
    def('c', FlagArity::RequiresValue, "Cipher specification"),
    def('D', FlagArity::RequiresValue, "Dynamic port forwarding"),
    def('E', FlagArity::RequiresValue, "Append debug logs to file"),
    def('e', FlagArity::RequiresValue, "Escape character"),
    def('F', FlagArity::RequiresValue, "Per-user configuration file"),
    def('I', FlagArity::RequiresValue, "PKCS#11 shared library"),
    def('i', FlagArity::RequiresValue, "Identity file"),
    def('J', FlagArity::RequiresValue, "Jump host"),
    def('L', FlagArity::RequiresValue, "Local port forwarding"),
    def('l', FlagArity::RequiresValue, "Login name"),
    def('m', FlagArity::RequiresValue, "MAC specification"),
    def('O', FlagArity::RequiresValue, "Control an active master process"),
    def('o', FlagArity::RequiresValue, "Configuration option"),
    def('p', FlagArity::RequiresValue, "Port"),
    def('Q', FlagArity::RequiresValue, "Query supported algorithms"),
    def('R', FlagArity::RequiresValue, "Remote port forwarding"),
    def('S', FlagArity::RequiresValue, "Control socket path"),
    def('W', FlagArity::RequiresValue, "Forward stdio to host:port"),
    def('w', FlagArity::RequiresValue, "Tunnel device forwarding"),
];

/// The complete flag registry.
pub fn flag_registry() -> &'static [FlagDef] {
    FLAGS
}

const fn def(letter: char, arity: FlagArity, description: &'static str) -> FlagDef {
    FlagDef {
        letter,
        arity,
        description,
    }
}

/// Find the registry entry for one option letter.
pub fn lookup(letter: char) -> Option<&'static FlagDef> {
    flag_registry().iter().find(|d| d.matches(letter))
}

/// Arity of one option letter. Letters outside the registry are treated
/// as boolean flags.
pub fn arity(letter: char) -> FlagArity {
    lookup(letter).map_or(FlagArity::NoValue, |d| d.arity)
}

impl FlagDef {
    /// Check if this definition matches the given option letter.
    pub fn matches(&self, letter: char) -> bool {
        self.letter == letter
    }
}
