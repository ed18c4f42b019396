//! Grammar type definitions for invocation parsing.
//!
//! The grammar is pure data: it describes which invocations the front end
//! accepts and which field each flag resolves into. The parse engine in
//! `gds-cli-parser` interprets it; nothing here performs I/O or touches the
//! process environment, so a grammar can be built once and shared across
//! parse calls without synchronization.

use serde::Serialize;

use crate::Value;

/// Value shape accepted by a flag or positional slot.
///
/// `Path` is a string whose provided value is resolved against the fixed
/// dictionary base directory by pure path joining; the parser never checks
/// that the file exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    /// Boolean presence, no value token.
    Switch,
    /// Single free-form string.
    Text,
    /// Single strict base-10 integer.
    Integer,
    /// Single dictionary path, joined under the dictionary base directory.
    Path,
    /// One or more strings.
    TextList,
    /// One or more strict base-10 integers.
    IntegerList,
}

impl ValueKind {
    /// The arity a well-formed grammar pairs this kind with.
    pub fn expected_arity(&self) -> Arity {
        match self {
            ValueKind::Switch => Arity::Zero,
            ValueKind::Text | ValueKind::Integer | ValueKind::Path => Arity::One,
            ValueKind::TextList | ValueKind::IntegerList => Arity::AtLeastOne,
        }
    }
}

/// Number of value tokens a flag consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arity {
    /// Presence-only: the field is set to `true` when the flag appears.
    Zero,
    /// Exactly one following value token.
    One,
    /// One or more following value tokens, up to the next registered alias.
    AtLeastOne,
}

/// Specification of a single flag.
///
/// A flag is identified by one or more exact alias tokens (e.g. `-i` and
/// `--ids`) and resolves into one target field of the argument record.
///
/// # Examples
///
/// ```
/// use gds_cli_core::{Arity, FlagSpec, Value, ValueKind};
///
/// let ids = FlagSpec::integer_list(&["-i", "--ids"], "ids");
/// assert!(ids.matches("-i"));
/// assert!(ids.matches("--ids"));
/// assert!(!ids.matches("-ids"));
/// assert_eq!(ids.arity, Arity::AtLeastOne);
/// assert_eq!(ids.default, Value::None);
///
/// let list = FlagSpec::switch(&["-l", "--list"], "list");
/// assert_eq!(list.kind, ValueKind::Switch);
/// assert_eq!(list.default, Value::Bool(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlagSpec {
    /// Exact token forms recognized for this flag, short form first.
    pub aliases: Vec<String>,
    /// Field name this flag resolves into.
    pub field: String,
    /// Value shape of the field.
    pub kind: ValueKind,
    /// Number of value tokens consumed.
    pub arity: Arity,
    /// Value the field takes when the flag is omitted.
    pub default: Value,
}

impl FlagSpec {
    fn new(aliases: &[&str], field: &str, kind: ValueKind, default: Value) -> Self {
        Self {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            field: field.to_string(),
            kind,
            arity: kind.expected_arity(),
            default,
        }
    }

    /// Creates a presence-only flag defaulting to `false`.
    pub fn switch(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::Switch, Value::Bool(false))
    }

    /// Creates a single-string flag with no default.
    pub fn text(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::Text, Value::None)
    }

    /// Creates a single-integer flag with no default.
    pub fn integer(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::Integer, Value::None)
    }

    /// Creates a dictionary-path flag with no default.
    pub fn path(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::Path, Value::None)
    }

    /// Creates a one-or-more-strings flag with no default.
    pub fn text_list(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::TextList, Value::None)
    }

    /// Creates a one-or-more-integers flag with no default.
    pub fn integer_list(aliases: &[&str], field: &str) -> Self {
        Self::new(aliases, field, ValueKind::IntegerList, Value::None)
    }

    /// Replaces the default value taken when the flag is omitted.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    /// Checks a token against the alias set by exact string comparison.
    ///
    /// Exact matching keeps value tokens that merely start with `-` (such
    /// as a negative channel id) from being mistaken for flags.
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }

    /// Returns the preferred alias for messages and usage output (the long
    /// form when one exists, otherwise the only form).
    pub fn canonical_alias(&self) -> &str {
        self.aliases
            .last()
            .map(String::as_str)
            .unwrap_or(self.field.as_str())
    }
}

/// Positional slots for a subcommand: one required leading value followed
/// by a variadic trailing list.
///
/// Only `command-send` carries positionals in the standard grammar; its
/// command name fills `name_field` and every later non-flag token appends
/// to `rest_field` in original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionalSpec {
    /// Field receiving the required first positional token.
    pub name_field: String,
    /// Field receiving the remaining positional tokens (default empty).
    pub rest_field: String,
}

impl PositionalSpec {
    pub fn new(name_field: &str, rest_field: &str) -> Self {
        Self {
            name_field: name_field.to_string(),
            rest_field: rest_field.to_string(),
        }
    }
}

/// Dispatch identity attached to each subcommand.
///
/// The grammar stays pure data: a parse resolves to one of these tags and
/// the binary's dispatch table maps the tag to the handler implementation.
/// The parser itself never invokes a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandlerId {
    Channels,
    Commands,
    Events,
    CommandSend,
}

impl HandlerId {
    /// Stable lowercase label, matching the subcommand name.
    pub fn label(&self) -> &'static str {
        match self {
            HandlerId::Channels => "channels",
            HandlerId::Commands => "commands",
            HandlerId::Events => "events",
            HandlerId::CommandSend => "command-send",
        }
    }
}

/// Specification of a subcommand: its name, scoped flags, dispatch tag,
/// and optional positional slots.
///
/// # Examples
///
/// ```
/// use gds_cli_core::{FlagSpec, HandlerId, PositionalSpec, SubcommandSpec};
///
/// let send = SubcommandSpec::new("command-send", HandlerId::CommandSend)
///     .with_positional(PositionalSpec::new("command_name", "arguments"));
/// assert_eq!(send.name, "command-send");
/// assert!(send.positional.is_some());
/// assert!(send.flags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcommandSpec {
    /// Name matched against the first invocation token.
    pub name: String,
    /// Dispatch tag recorded in the resolved record.
    pub handler: HandlerId,
    /// Flags scoped to this subcommand (shared flags are held by the
    /// grammar and apply in addition).
    pub flags: Vec<FlagSpec>,
    /// Positional slots, if the subcommand takes any.
    pub positional: Option<PositionalSpec>,
}

impl SubcommandSpec {
    pub fn new(name: &str, handler: HandlerId) -> Self {
        Self {
            name: name.to_string(),
            handler,
            flags: Vec::new(),
            positional: None,
        }
    }

    /// Adds a flag scoped to this subcommand.
    pub fn with_flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Declares the positional slots for this subcommand.
    pub fn with_positional(mut self, positional: PositionalSpec) -> Self {
        self.positional = Some(positional);
        self
    }
}

/// The complete invocation grammar: shared flags inherited by every
/// subcommand, plus the subcommands themselves.
///
/// # Examples
///
/// ```
/// use gds_cli_core::*;
///
/// let grammar = Grammar::new(vec![FlagSpec::text(&["-ip"], "ip_address")])
///     .with_subcommand(SubcommandSpec::new("events", HandlerId::Events));
///
/// assert!(grammar.find_subcommand("events").is_some());
/// assert!(grammar.find_subcommand("evens").is_none());
/// assert_eq!(grammar.subcommand_names(), vec!["events"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grammar {
    /// Flags present in every subcommand scope.
    pub shared_flags: Vec<FlagSpec>,
    /// Registered subcommands in declaration order.
    pub subcommands: Vec<SubcommandSpec>,
}

impl Grammar {
    pub fn new(shared_flags: Vec<FlagSpec>) -> Self {
        Self {
            shared_flags,
            subcommands: Vec::new(),
        }
    }

    /// Registers a subcommand.
    pub fn with_subcommand(mut self, subcommand: SubcommandSpec) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Finds a subcommand by exact name.
    pub fn find_subcommand(&self, name: &str) -> Option<&SubcommandSpec> {
        self.subcommands.iter().find(|sub| sub.name == name)
    }

    /// All flags in scope for a subcommand: shared flags first, then the
    /// subcommand's own, in declaration order.
    pub fn flags_for<'a>(&'a self, subcommand: &'a SubcommandSpec) -> Vec<&'a FlagSpec> {
        let mut flags: Vec<&FlagSpec> = self.shared_flags.iter().collect();
        flags.extend(subcommand.flags.iter());
        flags
    }

    /// All registered subcommand names in declaration order.
    pub fn subcommand_names(&self) -> Vec<&str> {
        self.subcommands.iter().map(|sub| sub.name.as_str()).collect()
    }
}
