//! Structural grammar validation.
//!
//! Checks the invariants the parse engine relies on: unique subcommand
//! names, unique aliases and target fields within each scope (shared flags
//! count against every subcommand scope), well-formed alias tokens, and
//! kind/arity consistency. A grammar that passes validation parses any
//! token sequence deterministically.
//!
//! # Examples
//!
//! ```
//! use gds_cli_core::*;
//!
//! let grammar = Grammar::new(vec![FlagSpec::integer(&["--port"], "port")])
//!     .with_subcommand(SubcommandSpec::new("events", HandlerId::Events));
//! assert!(validate_grammar(&grammar).is_empty());
//!
//! // A scoped flag reusing the shared "--port" alias is rejected.
//! let clash = Grammar::new(vec![FlagSpec::integer(&["--port"], "port")])
//!     .with_subcommand(
//!         SubcommandSpec::new("events", HandlerId::Events)
//!             .with_flag(FlagSpec::text(&["--port"], "udp_port")),
//!     );
//! assert!(!validate_grammar(&clash).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Arity, FlagSpec, Grammar, SubcommandSpec, ValueKind};

/// Grammar structural errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A subcommand has an empty or whitespace-only name.
    #[error("subcommand name cannot be empty")]
    EmptySubcommandName,
    /// Two subcommands share a name.
    #[error("duplicate subcommand: {0}")]
    DuplicateSubcommand(String),
    /// A flag declares no alias tokens.
    #[error("flag for field '{0}' must define at least one alias")]
    MissingAlias(String),
    /// An alias does not start with `-` or is too short.
    #[error("invalid alias '{alias}' for field '{field}'")]
    InvalidAlias { field: String, alias: String },
    /// Two flags in the same scope share an alias.
    #[error("duplicate alias in scope '{scope}': {alias}")]
    DuplicateAlias { scope: String, alias: String },
    /// Two fields in the same scope share a name.
    #[error("duplicate field in scope '{scope}': {field}")]
    DuplicateField { scope: String, field: String },
    /// A flag's declared arity disagrees with its value kind.
    #[error("field '{field}' pairs {kind:?} with arity {arity:?}")]
    ArityMismatch {
        field: String,
        kind: ValueKind,
        arity: Arity,
    },
    /// A positional field name is empty or collides within its scope.
    #[error("invalid positional field '{field}' in scope '{scope}'")]
    InvalidPositional { scope: String, field: String },
}

/// Validates a grammar, returning the errors found.
///
/// Stops at the first error per scope in declaration order, mirroring how
/// the grammar is built: fix the first report and re-validate.
pub fn validate_grammar(grammar: &Grammar) -> Vec<GrammarError> {
    let mut errors = Vec::new();

    let mut seen_names: HashSet<&str> = HashSet::new();
    for subcommand in &grammar.subcommands {
        let name = subcommand.name.trim();
        if name.is_empty() {
            errors.push(GrammarError::EmptySubcommandName);
            return errors;
        }
        if !seen_names.insert(name) {
            errors.push(GrammarError::DuplicateSubcommand(name.to_string()));
            return errors;
        }
    }

    errors.extend(validate_scope("shared", &grammar.shared_flags, &[]));
    if !errors.is_empty() {
        return errors;
    }

    for subcommand in &grammar.subcommands {
        errors.extend(validate_subcommand(grammar, subcommand));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_subcommand(grammar: &Grammar, subcommand: &SubcommandSpec) -> Vec<GrammarError> {
    let mut errors = validate_scope(
        &subcommand.name,
        &subcommand.flags,
        &grammar.shared_flags,
    );
    if !errors.is_empty() {
        return errors;
    }

    if let Some(positional) = &subcommand.positional {
        let flag_fields: HashSet<&str> = grammar
            .flags_for(subcommand)
            .iter()
            .map(|flag| flag.field.as_str())
            .collect();
        for field in [&positional.name_field, &positional.rest_field] {
            if field.trim().is_empty() || flag_fields.contains(field.as_str()) {
                errors.push(GrammarError::InvalidPositional {
                    scope: subcommand.name.clone(),
                    field: field.clone(),
                });
                return errors;
            }
        }
        if positional.name_field == positional.rest_field {
            errors.push(GrammarError::InvalidPositional {
                scope: subcommand.name.clone(),
                field: positional.rest_field.clone(),
            });
        }
    }

    errors
}

/// Validates one flag scope. `inherited` flags (the shared set) occupy
/// alias and field slots in the scope without being re-validated.
fn validate_scope(scope: &str, flags: &[FlagSpec], inherited: &[FlagSpec]) -> Vec<GrammarError> {
    let mut errors = Vec::new();
    let mut seen_aliases: HashSet<&str> = HashSet::new();
    let mut seen_fields: HashSet<&str> = HashSet::new();

    for flag in inherited {
        for alias in &flag.aliases {
            seen_aliases.insert(alias);
        }
        seen_fields.insert(&flag.field);
    }

    for flag in flags {
        if flag.aliases.is_empty() {
            errors.push(GrammarError::MissingAlias(flag.field.clone()));
            return errors;
        }

        for alias in &flag.aliases {
            if !alias.starts_with('-') || alias.len() < 2 {
                errors.push(GrammarError::InvalidAlias {
                    field: flag.field.clone(),
                    alias: alias.clone(),
                });
                return errors;
            }
            if !seen_aliases.insert(alias) {
                errors.push(GrammarError::DuplicateAlias {
                    scope: scope.to_string(),
                    alias: alias.clone(),
                });
                return errors;
            }
        }

        if !seen_fields.insert(&flag.field) {
            errors.push(GrammarError::DuplicateField {
                scope: scope.to_string(),
                field: flag.field.clone(),
            });
            return errors;
        }

        if flag.arity != flag.kind.expected_arity() {
            errors.push(GrammarError::ArityMismatch {
                field: flag.field.clone(),
                kind: flag.kind,
                arity: flag.arity,
            });
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandlerId, PositionalSpec};

    fn events_grammar(flags: Vec<FlagSpec>) -> Grammar {
        let mut subcommand = SubcommandSpec::new("events", HandlerId::Events);
        for flag in flags {
            subcommand = subcommand.with_flag(flag);
        }
        Grammar::new(vec![FlagSpec::integer(&["--port"], "port")]).with_subcommand(subcommand)
    }

    #[test]
    fn test_rejects_duplicate_subcommand_names() {
        let grammar = Grammar::new(vec![])
            .with_subcommand(SubcommandSpec::new("events", HandlerId::Events))
            .with_subcommand(SubcommandSpec::new("events", HandlerId::Events));

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::DuplicateSubcommand("events".to_string())]
        );
    }

    #[test]
    fn test_rejects_alias_without_leading_dash() {
        let grammar = events_grammar(vec![FlagSpec::switch(&["json"], "json")]);

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::InvalidAlias {
                field: "json".to_string(),
                alias: "json".to_string(),
            }]
        );
    }

    #[test]
    fn test_rejects_scoped_alias_shadowing_shared_flag() {
        let grammar = events_grammar(vec![FlagSpec::text(&["--port"], "udp_port")]);

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::DuplicateAlias {
                scope: "events".to_string(),
                alias: "--port".to_string(),
            }]
        );
    }

    #[test]
    fn test_rejects_duplicate_field_within_scope() {
        let grammar = events_grammar(vec![
            FlagSpec::switch(&["-l", "--list"], "list"),
            FlagSpec::switch(&["-f", "--full"], "list"),
        ]);

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::DuplicateField {
                scope: "events".to_string(),
                field: "list".to_string(),
            }]
        );
    }

    #[test]
    fn test_rejects_kind_arity_mismatch() {
        let mut flag = FlagSpec::integer_list(&["-i", "--ids"], "ids");
        flag.arity = Arity::One;
        let grammar = events_grammar(vec![flag]);

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::ArityMismatch {
                field: "ids".to_string(),
                kind: ValueKind::IntegerList,
                arity: Arity::One,
            }]
        );
    }

    #[test]
    fn test_rejects_positional_colliding_with_flag_field() {
        let grammar = Grammar::new(vec![FlagSpec::path(&["-d"], "dictionary")])
            .with_subcommand(
                SubcommandSpec::new("command-send", HandlerId::CommandSend)
                    .with_positional(PositionalSpec::new("dictionary", "arguments")),
            );

        assert_eq!(
            validate_grammar(&grammar),
            vec![GrammarError::InvalidPositional {
                scope: "command-send".to_string(),
                field: "dictionary".to_string(),
            }]
        );
    }

    #[test]
    fn test_accepts_well_formed_grammar() {
        let grammar = events_grammar(vec![
            FlagSpec::switch(&["-l", "--list"], "list"),
            FlagSpec::integer_list(&["-i", "--ids"], "ids"),
            FlagSpec::text(&["-s", "--search"], "search"),
        ]);

        assert!(validate_grammar(&grammar).is_empty());
    }
}
