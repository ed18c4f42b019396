//! The parse and validate engine.
//!
//! One [`parse`] call processes one invocation to completion: classify the
//! subcommand, scan the remaining tokens left to right against the closed
//! set of in-scope aliases, consume values per declared arity, then fill
//! defaults. The grammar is read-only throughout, so one grammar may serve
//! concurrent parse calls.

use std::collections::HashSet;
use std::iter::Peekable;
use std::slice::Iter;

use gds_cli_core::{FlagSpec, Grammar, ResolvedArgs, Value, ValueKind};
use tracing::debug;

use crate::error::ParseError;
use crate::grammar::resolve_dictionary_path;

/// Parses an argv-style token sequence against a grammar.
///
/// An empty sequence is a valid bare invocation: the record carries every
/// shared-scope default and no handler, and the caller decides what a
/// bare invocation means. Any malformed input yields the first violation
/// encountered; no partial record is ever returned.
pub fn parse(grammar: &Grammar, tokens: &[String]) -> Result<ResolvedArgs, ParseError> {
    let Some((first, rest)) = tokens.split_first() else {
        let mut record = ResolvedArgs::new(None);
        for flag in &grammar.shared_flags {
            record.set_default(&flag.field, flag.default.clone());
        }
        return Ok(record);
    };

    let Some(subcommand) = grammar.find_subcommand(first) else {
        // The global scope registers no flags, so a leading flag token is
        // an unknown flag rather than an unknown subcommand.
        if looks_like_flag(first) {
            return Err(ParseError::UnknownFlag {
                scope: "global".to_string(),
                flag: first.clone(),
            });
        }
        return Err(ParseError::UnknownSubcommand(first.clone()));
    };
    debug!(subcommand = %subcommand.name, "matched subcommand");

    let in_scope = grammar.flags_for(subcommand);
    let mut record = ResolvedArgs::new(Some(subcommand.handler));
    let mut seen: HashSet<String> = HashSet::new();
    let mut positionals: Vec<String> = Vec::new();

    let mut tokens = rest.iter().peekable();
    while let Some(token) = tokens.next() {
        if let Some(flag) = in_scope.iter().copied().find(|flag| flag.matches(token)) {
            consume_flag(flag, token, &mut tokens, &in_scope, &mut record, &mut seen)?;
        } else if looks_like_flag(token) {
            return Err(ParseError::UnknownFlag {
                scope: subcommand.name.clone(),
                flag: token.clone(),
            });
        } else if subcommand.positional.is_some() {
            positionals.push(token.clone());
        } else {
            return Err(ParseError::UnexpectedToken(token.clone()));
        }
    }

    if let Some(positional) = &subcommand.positional {
        let mut values = positionals.into_iter();
        let Some(name) = values.next() else {
            return Err(ParseError::MissingPositional {
                subcommand: subcommand.name.clone(),
                field: positional.name_field.clone(),
            });
        };
        record.set(&positional.name_field, Value::Text(name));
        record.set(&positional.rest_field, Value::TextList(values.collect()));
    }

    for flag in &in_scope {
        record.set_default(&flag.field, flag.default.clone());
    }

    Ok(record)
}

/// Consumes one flag occurrence and its value tokens.
fn consume_flag(
    flag: &FlagSpec,
    alias: &str,
    tokens: &mut Peekable<Iter<'_, String>>,
    in_scope: &[&FlagSpec],
    record: &mut ResolvedArgs,
    seen: &mut HashSet<String>,
) -> Result<(), ParseError> {
    let repeated = !seen.insert(flag.field.clone());
    let is_list = matches!(flag.kind, ValueKind::TextList | ValueKind::IntegerList);
    if repeated && !is_list {
        return Err(ParseError::DuplicateFlag {
            flag: alias.to_string(),
        });
    }

    match flag.kind {
        ValueKind::Switch => {
            record.set(&flag.field, Value::Bool(true));
        }
        ValueKind::Text | ValueKind::Path | ValueKind::Integer => {
            let raw = next_value(tokens, in_scope).ok_or_else(|| ParseError::MissingValue {
                flag: alias.to_string(),
            })?;
            let value = match flag.kind {
                ValueKind::Path => Value::Text(resolve_dictionary_path(&raw)),
                ValueKind::Integer => Value::Int(parse_integer(alias, &raw)?),
                _ => Value::Text(raw),
            };
            record.set(&flag.field, value);
        }
        ValueKind::TextList | ValueKind::IntegerList => {
            let mut values = Vec::new();
            while let Some(raw) = next_value(tokens, in_scope) {
                values.push(raw);
            }
            if values.is_empty() {
                return Err(ParseError::MissingValue {
                    flag: alias.to_string(),
                });
            }
            append_list(flag, alias, record, values)?;
        }
    }
    debug!(flag = alias, field = %flag.field, "consumed flag");
    Ok(())
}

/// Takes the next token as a value unless it is a registered alias or the
/// input is exhausted. Only exact alias matches stop consumption, so a
/// negative id like `-5` stays a value.
fn next_value(tokens: &mut Peekable<Iter<'_, String>>, in_scope: &[&FlagSpec]) -> Option<String> {
    let candidate = tokens.peek()?;
    if in_scope.iter().any(|flag| flag.matches(candidate)) {
        return None;
    }
    tokens.next().cloned()
}

/// Appends list values, merging with an earlier occurrence of the same
/// flag in token order.
fn append_list(
    flag: &FlagSpec,
    alias: &str,
    record: &mut ResolvedArgs,
    values: Vec<String>,
) -> Result<(), ParseError> {
    match flag.kind {
        ValueKind::IntegerList => {
            let mut parsed = Vec::with_capacity(values.len());
            for raw in &values {
                parsed.push(parse_integer(alias, raw)?);
            }
            let merged = match record.get(&flag.field) {
                Some(Value::IntList(existing)) => {
                    let mut merged = existing.clone();
                    merged.extend(parsed);
                    merged
                }
                _ => parsed,
            };
            record.set(&flag.field, Value::IntList(merged));
        }
        _ => {
            let merged = match record.get(&flag.field) {
                Some(Value::TextList(existing)) => {
                    let mut merged = existing.clone();
                    merged.extend(values);
                    merged
                }
                _ => values,
            };
            record.set(&flag.field, Value::TextList(merged));
        }
    }
    Ok(())
}

/// Strict base-10 integer parsing: an optional leading sign and digits
/// only. Fractional tokens such as `34.8` are rejected, never truncated.
fn parse_integer(alias: &str, raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        flag: alias.to_string(),
        token: raw.to_string(),
    })
}

/// Whether an unregistered token should be reported as an unknown flag.
/// Negative numbers remain eligible as values and positionals.
fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && token.parse::<f64>().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_is_strict() {
        assert_eq!(parse_integer("-i", "34").unwrap(), 34);
        assert_eq!(parse_integer("-i", "-34").unwrap(), -34);
        assert_eq!(parse_integer("-i", "+34").unwrap(), 34);

        for bad in ["34.8", "34.0", "crashtime", "0x22", "3_4", ""] {
            assert_eq!(
                parse_integer("-i", bad),
                Err(ParseError::InvalidInteger {
                    flag: "-i".to_string(),
                    token: bad.to_string(),
                }),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_flag_likeness_spares_negative_numbers() {
        assert!(looks_like_flag("--watch"));
        assert!(looks_like_flag("-x"));
        assert!(looks_like_flag("-ip"));
        assert!(!looks_like_flag("-5"));
        assert!(!looks_like_flag("-3.5"));
        assert!(!looks_like_flag("-"));
        assert!(!looks_like_flag("value"));
    }
}
