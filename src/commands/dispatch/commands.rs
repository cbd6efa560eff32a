//! Command implementations for all wayfinder commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use wayfinder_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::commands::dispatch::handlers;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Distances {
                start,
                strategy,
                graph,
            } => handlers::handle_distances(ctx, graph, start, *strategy),
            Commands::Route {
                start,
                end,
                strategy,
                graph,
            } => handlers::handle_route(ctx, graph, start, end, *strategy),
            Commands::Neighbors { node, graph } => handlers::handle_neighbors(ctx, graph, node),
            Commands::Generate {
                nodes,
                disconnected,
                output,
                generator,
            } => handlers::handle_generate(
                ctx,
                handlers::GenerateOptions {
                    nodes: *nodes,
                    disconnected: *disconnected,
                    output: output.as_deref(),
                    generator,
                },
            ),
        }
    }
}
