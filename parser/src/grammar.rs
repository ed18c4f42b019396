//! The standard GDS invocation grammar.
//!
//! `channels`, `commands`, and `events` deliberately share one filter
//! vocabulary; that uniformity is part of the front end's contract, so the
//! three subcommands are assembled from the same helper rather than
//! special-cased. Every helper builds fresh containers on each call —
//! grammar construction has no shared state between invocations.

use std::path::Path;

use gds_cli_core::{FlagSpec, Grammar, HandlerId, PositionalSpec, SubcommandSpec, Value};

/// Default target address when `-ip` is omitted.
pub const DEFAULT_IP_ADDRESS: &str = "127.0.0.1";

/// Default target port when `--port` is omitted.
pub const DEFAULT_PORT: i64 = 50050;

/// Fixed repository-relative directory dictionary paths resolve against.
pub const DICTIONARY_BASE_DIR: &str = "dictionaries";

/// Dictionary file used when `-d`/`--dictionary` is omitted.
pub const DEFAULT_DICTIONARY_FILE: &str = "TargetDictionary.xml";

/// Builds the standard grammar: shared flags plus the four subcommands.
///
/// Deterministic and side-effect-free — no I/O, no environment reads —
/// so repeated calls produce grammars that parse identically.
///
/// # Examples
///
/// ```
/// use gds_cli_parser::build_grammar;
///
/// let grammar = build_grammar();
/// assert_eq!(
///     grammar.subcommand_names(),
///     vec!["channels", "commands", "events", "command-send"]
/// );
/// ```
pub fn build_grammar() -> Grammar {
    Grammar::new(shared_flags())
        .with_subcommand(filtered_view("channels", HandlerId::Channels))
        .with_subcommand(filtered_view("commands", HandlerId::Commands))
        .with_subcommand(filtered_view("events", HandlerId::Events))
        .with_subcommand(
            SubcommandSpec::new("command-send", HandlerId::CommandSend)
                .with_positional(PositionalSpec::new("command_name", "arguments")),
        )
}

/// Flags present in every subcommand scope.
fn shared_flags() -> Vec<FlagSpec> {
    vec![
        FlagSpec::path(&["-d", "--dictionary"], "dictionary")
            .with_default(Value::Text(resolve_dictionary_path(DEFAULT_DICTIONARY_FILE))),
        FlagSpec::text(&["-ip"], "ip_address")
            .with_default(Value::Text(DEFAULT_IP_ADDRESS.to_string())),
        FlagSpec::integer(&["--port"], "port").with_default(Value::Int(DEFAULT_PORT)),
    ]
}

/// The uniform filter vocabulary shared by `channels`, `commands`, and
/// `events`.
fn filtered_view(name: &str, handler: HandlerId) -> SubcommandSpec {
    SubcommandSpec::new(name, handler)
        .with_flag(FlagSpec::switch(&["-l", "--list"], "list"))
        .with_flag(FlagSpec::switch(&["-f", "--follow"], "follow"))
        .with_flag(FlagSpec::integer_list(&["-i", "--ids"], "ids"))
        .with_flag(FlagSpec::text_list(&["-c", "--components"], "components"))
        .with_flag(FlagSpec::text(&["-s", "--search"], "search"))
        .with_flag(FlagSpec::switch(&["-j", "--json"], "json"))
}

/// Joins a user-supplied dictionary path under [`DICTIONARY_BASE_DIR`].
///
/// Pure string handling: no normalization beyond the join, and no check
/// that the file exists. An absolute path replaces the base entirely.
///
/// # Examples
///
/// ```
/// use gds_cli_parser::resolve_dictionary_path;
///
/// assert_eq!(
///     resolve_dictionary_path("TargetDictionary.xml"),
///     "dictionaries/TargetDictionary.xml"
/// );
/// assert_eq!(
///     resolve_dictionary_path("../testing/UnitTestDictionary.xml"),
///     "dictionaries/../testing/UnitTestDictionary.xml"
/// );
/// ```
pub fn resolve_dictionary_path(raw: &str) -> String {
    Path::new(DICTIONARY_BASE_DIR)
        .join(raw)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use gds_cli_core::validate_grammar;

    use super::*;

    #[test]
    fn test_standard_grammar_is_structurally_valid() {
        assert!(validate_grammar(&build_grammar()).is_empty());
    }

    #[test]
    fn test_filter_subcommands_share_one_vocabulary() {
        let grammar = build_grammar();
        let channels = grammar.find_subcommand("channels").unwrap();
        let commands = grammar.find_subcommand("commands").unwrap();
        let events = grammar.find_subcommand("events").unwrap();

        assert_eq!(channels.flags, commands.flags);
        assert_eq!(commands.flags, events.flags);
    }

    #[test]
    fn test_command_send_has_only_shared_flags_and_positionals() {
        let grammar = build_grammar();
        let send = grammar.find_subcommand("command-send").unwrap();

        assert!(send.flags.is_empty());
        let positional = send.positional.as_ref().unwrap();
        assert_eq!(positional.name_field, "command_name");
        assert_eq!(positional.rest_field, "arguments");
        assert_eq!(grammar.flags_for(send).len(), 3);
    }

    #[test]
    fn test_shared_defaults() {
        let grammar = build_grammar();
        let dictionary = grammar
            .shared_flags
            .iter()
            .find(|flag| flag.field == "dictionary")
            .unwrap();
        assert_eq!(
            dictionary.default,
            Value::Text("dictionaries/TargetDictionary.xml".to_string())
        );

        let port = grammar
            .shared_flags
            .iter()
            .find(|flag| flag.field == "port")
            .unwrap();
        assert_eq!(port.default, Value::Int(50050));
    }

    #[test]
    fn test_absolute_dictionary_path_replaces_base() {
        assert_eq!(
            resolve_dictionary_path("/tmp/Dictionary.xml"),
            "/tmp/Dictionary.xml"
        );
    }
}
