//! Resolved values and the argument record.
//!
//! A successful parse produces a [`ResolvedArgs`] record: a flat mapping
//! from every field declared in the shared scope and the invoked
//! subcommand's scope to its resolved [`Value`], plus the dispatch tag.
//! The record is created fresh per invocation and never mutated after the
//! engine returns it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::HandlerId;

/// A resolved field value.
///
/// `None` is the absent value an unset optional scalar or list takes;
/// switches default to `Bool(false)` instead. Serializes untagged, so a
/// record renders as flat JSON (`None` becomes `null`).
///
/// # Examples
///
/// ```
/// use gds_cli_core::Value;
///
/// let ids = Value::IntList(vec![3, 4, 8]);
/// assert_eq!(ids.as_int_list(), Some(&[3, 4, 8][..]));
/// assert_eq!(ids.as_text(), None);
/// assert!(Value::None.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    IntList(Vec<i64>),
    TextList(Vec<String>),
    #[default]
    None,
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            Value::IntList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Value::TextList(values) => Some(values),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

/// The resolved argument record returned by a successful parse.
///
/// The field set is the union of the shared scope and the invoked
/// subcommand's scope; fields belonging to other subcommands are absent
/// from the map entirely, not merely unset. `handler` is `None` only for
/// the bare invocation with no subcommand.
///
/// # Examples
///
/// ```
/// use gds_cli_core::{HandlerId, ResolvedArgs, Value};
///
/// let mut record = ResolvedArgs::new(Some(HandlerId::Events));
/// record.set("search", Value::Text("thermal".into()));
/// record.set("json", Value::Bool(false));
///
/// assert_eq!(record.text_field("search"), Some("thermal"));
/// assert!(!record.bool_field("json"));
/// assert_eq!(record.get("ids"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedArgs {
    /// Dispatch tag of the invoked subcommand, if one was given.
    pub handler: Option<HandlerId>,
    /// Flat field name to resolved value mapping.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ResolvedArgs {
    pub fn new(handler: Option<HandlerId>) -> Self {
        Self {
            handler,
            fields: BTreeMap::new(),
        }
    }

    /// Looks up a field's resolved value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    /// Sets a field only if it has not been set yet.
    pub fn set_default(&mut self, field: &str, value: Value) {
        self.fields.entry(field.to_string()).or_insert(value);
    }

    /// A switch field's value; `false` when absent.
    pub fn bool_field(&self, field: &str) -> bool {
        self.get(field).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn int_field(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_int)
    }

    pub fn text_field(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_text)
    }

    pub fn int_list_field(&self, field: &str) -> Option<&[i64]> {
        self.get(field).and_then(Value::as_int_list)
    }

    pub fn text_list_field(&self, field: &str) -> Option<&[String]> {
        self.get(field).and_then(Value::as_text_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_default_keeps_explicit_value() {
        let mut record = ResolvedArgs::new(Some(HandlerId::Channels));
        record.set("port", Value::Int(50051));
        record.set_default("port", Value::Int(50050));
        record.set_default("ip_address", Value::Text("127.0.0.1".into()));

        assert_eq!(record.int_field("port"), Some(50051));
        assert_eq!(record.text_field("ip_address"), Some("127.0.0.1"));
    }

    #[test]
    fn test_typed_accessors_reject_wrong_shapes() {
        let mut record = ResolvedArgs::new(None);
        record.set("ids", Value::IntList(vec![10]));

        assert_eq!(record.int_list_field("ids"), Some(&[10][..]));
        assert_eq!(record.int_field("ids"), None);
        assert_eq!(record.text_list_field("ids"), None);
        assert!(!record.bool_field("ids"));
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut record = ResolvedArgs::new(Some(HandlerId::CommandSend));
        record.set("command_name", Value::Text("sys.noop".into()));
        record.set("arguments", Value::TextList(vec![]));
        record.set("search", Value::None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["handler"], "command-send");
        assert_eq!(json["command_name"], "sys.noop");
        assert_eq!(json["arguments"], serde_json::json!([]));
        assert!(json["search"].is_null());
    }
}
