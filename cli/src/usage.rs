//! Grammar-derived usage summary for the bare invocation.

use gds_cli_core::{Arity, FlagSpec, Grammar};

/// Renders a short usage listing straight from the grammar, so the text
/// can never drift from what the parser accepts.
pub fn render(grammar: &Grammar) -> String {
    let mut out = String::new();
    out.push_str("usage: gds <subcommand> [flags]\n\nsubcommands:\n");
    for subcommand in &grammar.subcommands {
        out.push_str(&format!("  {}", subcommand.name));
        if let Some(positional) = &subcommand.positional {
            out.push_str(&format!(
                " <{}> [{}...]",
                positional.name_field, positional.rest_field
            ));
        }
        out.push('\n');
        for flag in &subcommand.flags {
            out.push_str(&format!("    {}\n", flag_summary(flag)));
        }
    }
    out.push_str("\nshared flags:\n");
    for flag in &grammar.shared_flags {
        out.push_str(&format!("  {}\n", flag_summary(flag)));
    }
    out
}

fn flag_summary(flag: &FlagSpec) -> String {
    let aliases = flag.aliases.join("|");
    let hint = flag.field.to_uppercase();
    match flag.arity {
        Arity::Zero => aliases,
        Arity::One => format!("{aliases} {hint}"),
        Arity::AtLeastOne => format!("{aliases} {hint}..."),
    }
}

#[cfg(test)]
mod tests {
    use gds_cli_parser::build_grammar;

    use super::*;

    #[test]
    fn test_usage_lists_every_subcommand() {
        let grammar = build_grammar();
        let rendered = render(&grammar);
        for name in grammar.subcommand_names() {
            assert!(rendered.contains(name), "usage is missing '{name}'");
        }
        assert!(rendered.contains("<command_name> [arguments...]"));
    }

    #[test]
    fn test_flag_summaries_show_arity() {
        let grammar = build_grammar();
        let rendered = render(&grammar);
        assert!(rendered.contains("-l|--list\n"));
        assert!(rendered.contains("-i|--ids IDS..."));
        assert!(rendered.contains("--port PORT"));
    }
}
