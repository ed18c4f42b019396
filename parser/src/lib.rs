//! Invocation parsing for the GDS command-line front end.
//!
//! Two pieces, composed linearly:
//!
//! - [`build_grammar`] — constructs the standard GDS grammar: the shared
//!   dictionary/address/port flags, the uniform filter vocabulary of the
//!   `channels`, `commands`, and `events` subcommands, and the positional
//!   contract of `command-send`. Deterministic and side-effect-free; build
//!   it once at startup and reuse it.
//! - [`parse`] — applies a grammar to an argv-style token sequence and
//!   either returns a fully defaulted
//!   [`ResolvedArgs`](gds_cli_core::ResolvedArgs) record or reports the
//!   first violation as a [`ParseError`]. Parsing is a pure function of
//!   the token sequence; the `gds` binary turns an error into a message on
//!   stderr and a non-zero exit.
//!
//! # Example
//!
//! ```
//! use gds_cli_core::HandlerId;
//! use gds_cli_parser::{build_grammar, parse};
//!
//! let grammar = build_grammar();
//! let tokens: Vec<String> = ["commands", "-i", "3", "4", "8"]
//!     .iter()
//!     .map(|t| t.to_string())
//!     .collect();
//!
//! let record = parse(&grammar, &tokens).unwrap();
//! assert_eq!(record.handler, Some(HandlerId::Commands));
//! assert_eq!(record.int_list_field("ids"), Some(&[3, 4, 8][..]));
//! ```

pub mod engine;
pub mod error;
pub mod grammar;

pub use engine::parse;
pub use error::ParseError;
pub use grammar::{
    DEFAULT_DICTIONARY_FILE, DEFAULT_IP_ADDRESS, DEFAULT_PORT, DICTIONARY_BASE_DIR, build_grammar,
    resolve_dictionary_path,
};
