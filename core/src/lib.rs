//! Core grammar types for the GDS command-line front end.
//!
//! This crate defines the data model the argument parser is driven by:
//!
//! - [`Grammar`] — the full invocation grammar (shared flags plus
//!   subcommands), built once at startup and immutable afterwards.
//! - [`FlagSpec`] — a flag with its aliases, target field, value kind,
//!   arity, and default.
//! - [`SubcommandSpec`] — a subcommand with its scoped flags, dispatch tag,
//!   and optional positional slots.
//! - [`HandlerId`] — the tagged dispatch identity a successful parse
//!   resolves to. The grammar never holds function references; a lookup
//!   table in the `gds-cli` binary maps tags to handler implementations.
//! - [`Value`] / [`ResolvedArgs`] — the resolved argument record produced
//!   by the parse engine in `gds-cli-parser`.
//!
//! Validation ([`validate_grammar`]) catches structural errors such as
//! duplicate aliases, duplicate target fields, and kind/arity mismatches.
//!
//! # Example
//!
//! ```
//! use gds_cli_core::*;
//!
//! let grammar = Grammar::new(vec![
//!     FlagSpec::integer(&["--port"], "port").with_default(Value::Int(50050)),
//! ])
//! .with_subcommand(
//!     SubcommandSpec::new("channels", HandlerId::Channels)
//!         .with_flag(FlagSpec::switch(&["-l", "--list"], "list"))
//!         .with_flag(FlagSpec::integer_list(&["-i", "--ids"], "ids")),
//! );
//!
//! let channels = grammar.find_subcommand("channels").unwrap();
//! assert_eq!(grammar.flags_for(channels).len(), 3); // --port + -l + -i
//! assert!(validate_grammar(&grammar).is_empty());
//! ```

mod types;
mod validate;
mod value;

pub use types::*;
pub use validate::{GrammarError, validate_grammar};
pub use value::{ResolvedArgs, Value};
