//! Handlers wiring config and graph loading into each command

use std::path::Path;

use crate::cli::{GeneratorArgs, GraphArgs};
use crate::commands;
use crate::commands::load::load_graph;
use wayfinder_core::error::Result;
use wayfinder_core::graph::Strategy;

use super::command::CommandContext;
use super::macros::trace_command;

pub(super) fn handle_distances(
    ctx: &CommandContext,
    args: &GraphArgs,
    start: &str,
    strategy: Option<Strategy>,
) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(args, &config)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let strategy = strategy.unwrap_or(config.strategy);
    commands::distances::execute(ctx.cli, &graph, start, strategy)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_route(
    ctx: &CommandContext,
    args: &GraphArgs,
    start: &str,
    end: &str,
    strategy: Option<Strategy>,
) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(args, &config)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    let strategy = strategy.unwrap_or(config.strategy);
    commands::route::execute(ctx.cli, &graph, start, end, strategy)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_neighbors(ctx: &CommandContext, args: &GraphArgs, node: &str) -> Result<()> {
    let config = ctx.config()?;
    let graph = load_graph(args, &config)?;
    trace_command!(ctx.cli, ctx.start, "load_graph");

    commands::neighbors::execute(ctx.cli, &graph, node)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) struct GenerateOptions<'a> {
    pub nodes: Option<usize>,
    pub disconnected: bool,
    pub output: Option<&'a Path>,
    pub generator: &'a GeneratorArgs,
}

pub(super) fn handle_generate(ctx: &CommandContext, opts: GenerateOptions<'_>) -> Result<()> {
    let config = ctx.config()?;

    let mut generator = opts.generator.apply(config.generator);
    if let Some(nodes) = opts.nodes {
        generator.nodes = nodes;
    }
    if opts.disconnected {
        generator.connected = false;
    }

    commands::generate::execute(ctx.cli, &generator, opts.output)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}
