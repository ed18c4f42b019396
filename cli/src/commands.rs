//! Per-subcommand handler front ends.
//!
//! Each handler turns the resolved argument record into a typed query (or
//! send request) description and prints it, as text or as JSON when the
//! `json` switch is set. The GDS transport itself — actually fetching
//! channels, events, and command results from the target — lives behind
//! these front ends and is out of scope here.

use gds_cli_core::ResolvedArgs;
use serde::Serialize;
use tracing::debug;

/// Connection settings every subcommand shares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetEndpoint {
    pub ip_address: String,
    pub port: i64,
    pub dictionary: String,
}

impl TargetEndpoint {
    /// Extracts the shared-scope fields. The parser guarantees all three
    /// are present (defaulted when omitted).
    pub fn from_args(args: &ResolvedArgs) -> Self {
        Self {
            ip_address: args.text_field("ip_address").unwrap_or_default().to_string(),
            port: args.int_field("port").unwrap_or_default(),
            dictionary: args.text_field("dictionary").unwrap_or_default().to_string(),
        }
    }
}

/// Filter settings of the uniform channels/commands/events vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSet {
    pub list: bool,
    pub follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterSet {
    pub fn from_args(args: &ResolvedArgs) -> Self {
        Self {
            list: args.bool_field("list"),
            follow: args.bool_field("follow"),
            ids: args.int_list_field("ids").map(<[i64]>::to_vec),
            components: args.text_list_field("components").map(<[String]>::to_vec),
            search: args.text_field("search").map(str::to_string),
        }
    }

    fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.list {
            parts.push("list".to_string());
        }
        if self.follow {
            parts.push("follow".to_string());
        }
        if let Some(ids) = &self.ids {
            let rendered: Vec<String> = ids.iter().map(i64::to_string).collect();
            parts.push(format!("ids={}", rendered.join(",")));
        }
        if let Some(components) = &self.components {
            parts.push(format!("components={}", components.join(",")));
        }
        if let Some(search) = &self.search {
            parts.push(format!("search={search}"));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

pub fn run_channels(args: &ResolvedArgs) -> Result<(), String> {
    print_query("channels", args)
}

pub fn run_commands(args: &ResolvedArgs) -> Result<(), String> {
    print_query("commands", args)
}

pub fn run_events(args: &ResolvedArgs) -> Result<(), String> {
    print_query("events", args)
}

fn print_query(kind: &str, args: &ResolvedArgs) -> Result<(), String> {
    let target = TargetEndpoint::from_args(args);
    let filters = FilterSet::from_args(args);
    debug!(kind, target = %target.ip_address, "building query");

    if args.bool_field("json") {
        let query = serde_json::json!({
            "query": kind,
            "target": target,
            "filters": filters,
        });
        let raw = serde_json::to_string_pretty(&query)
            .map_err(|err| format!("failed to serialize {kind} query: {err}"))?;
        println!("{raw}");
    } else {
        println!("{kind} query for {}:{}", target.ip_address, target.port);
        println!("  dictionary: {}", target.dictionary);
        println!("  filters: {}", filters.summary());
    }
    Ok(())
}

pub fn run_command_send(args: &ResolvedArgs) -> Result<(), String> {
    let target = TargetEndpoint::from_args(args);
    let command_name = args
        .text_field("command_name")
        .ok_or("resolved record is missing the command name")?;
    let arguments = args.text_list_field("arguments").unwrap_or(&[]);
    debug!(command = command_name, "building send request");

    println!(
        "send {command_name} to {}:{}",
        target.ip_address, target.port
    );
    println!("  dictionary: {}", target.dictionary);
    if !arguments.is_empty() {
        println!("  arguments: {}", arguments.join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use gds_cli_core::{HandlerId, Value};

    use super::*;

    fn channels_record() -> ResolvedArgs {
        let mut record = ResolvedArgs::new(Some(HandlerId::Channels));
        record.set("ip_address", Value::Text("127.0.0.1".into()));
        record.set("port", Value::Int(50050));
        record.set(
            "dictionary",
            Value::Text("dictionaries/TargetDictionary.xml".into()),
        );
        record.set("list", Value::Bool(false));
        record.set("follow", Value::Bool(true));
        record.set("ids", Value::IntList(vec![3, 8]));
        record.set("components", Value::None);
        record.set("search", Value::None);
        record.set("json", Value::Bool(false));
        record
    }

    #[test]
    fn test_target_endpoint_extraction() {
        let target = TargetEndpoint::from_args(&channels_record());
        assert_eq!(target.ip_address, "127.0.0.1");
        assert_eq!(target.port, 50050);
        assert_eq!(target.dictionary, "dictionaries/TargetDictionary.xml");
    }

    #[test]
    fn test_filter_set_extraction_treats_absent_as_none() {
        let filters = FilterSet::from_args(&channels_record());
        assert!(filters.follow);
        assert!(!filters.list);
        assert_eq!(filters.ids, Some(vec![3, 8]));
        assert_eq!(filters.components, None);
        assert_eq!(filters.search, None);
    }

    #[test]
    fn test_filter_summary_renders_only_set_filters() {
        let filters = FilterSet::from_args(&channels_record());
        assert_eq!(filters.summary(), "follow ids=3,8");

        let empty = FilterSet {
            list: false,
            follow: false,
            ids: None,
            components: None,
            search: None,
        };
        assert_eq!(empty.summary(), "none");
    }

    #[test]
    fn test_filter_set_serialization_skips_unset_filters() {
        let filters = FilterSet::from_args(&channels_record());
        let json = serde_json::to_value(&filters).unwrap();

        assert_eq!(json["ids"], serde_json::json!([3, 8]));
        assert_eq!(json.get("components"), None);
        assert_eq!(json.get("search"), None);
    }
}
