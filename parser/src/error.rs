//! Parse error taxonomy.

use thiserror::Error;

/// Violations detected by the parse engine.
///
/// Every variant is fatal at the binary boundary: the `gds` binary prints
/// the message to stderr and exits non-zero. The engine never returns a
/// partial record, and recovery (re-prompting, retrying) is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// First token does not name a registered subcommand.
    #[error("unknown subcommand '{0}'")]
    UnknownSubcommand(String),
    /// Flag-like token not registered in the current scope.
    #[error("unknown flag '{flag}' in '{scope}' scope")]
    UnknownFlag { scope: String, flag: String },
    /// A value-bearing flag with no following value token.
    #[error("flag '{flag}' requires a value")]
    MissingValue { flag: String },
    /// An integer field's token failed strict base-10 parsing.
    #[error("invalid integer '{token}' for flag '{flag}'")]
    InvalidInteger { flag: String, token: String },
    /// A non-list flag given more than once.
    #[error("flag '{flag}' may only be given once")]
    DuplicateFlag { flag: String },
    /// A required positional value was not supplied.
    #[error("'{subcommand}' requires a {field}")]
    MissingPositional { subcommand: String, field: String },
    /// A token matched no flag and no positional slot.
    #[error("unexpected argument '{0}'")]
    UnexpectedToken(String),
}
