//! Command implementations for all edgegraph commands

use crate::cli::{Commands, DistanceArgs, PairArgs, WalkArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{distance, show, steps, walk};
use edgegraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => execute_show(ctx),
            Commands::Walk(args) => execute_walk(ctx, args),
            Commands::Steps(args) => execute_steps(ctx, args),
            Commands::Distance(args) => execute_distance(ctx, args),
        }
    }
}

fn execute_show(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    show::execute(ctx.cli, &graph)
}

fn execute_walk(ctx: &CommandContext, args: &WalkArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    walk::execute(ctx.cli, &graph, &args.start, args.order)
}

fn execute_steps(ctx: &CommandContext, args: &PairArgs) -> Result<()> {
    let graph = ctx.load_graph()?;
    steps::execute(ctx.cli, &graph, &args.from, &args.to)
}

fn execute_distance(ctx: &CommandContext, args: &DistanceArgs) -> Result<()> {
    let mut graph = ctx.load_graph()?;
    distance::execute(ctx.cli, &mut graph, &args.pair.from, &args.pair.to, args.all_pairs)
}
