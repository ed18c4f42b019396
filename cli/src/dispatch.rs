//! Handler dispatch.
//!
//! The grammar carries only a [`HandlerId`] tag per subcommand; this table
//! is the single place a tag becomes a handler call. Keeping dispatch out
//! of the grammar keeps the grammar pure data and testable in isolation.

use gds_cli_core::{HandlerId, ResolvedArgs};

use crate::commands;

/// Runs the handler a parse resolved to.
pub fn run(handler: HandlerId, args: &ResolvedArgs) -> Result<(), String> {
    match handler {
        HandlerId::Channels => commands::run_channels(args),
        HandlerId::Commands => commands::run_commands(args),
        HandlerId::Events => commands::run_events(args),
        HandlerId::CommandSend => commands::run_command_send(args),
    }
}
