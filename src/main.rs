use std::process::exit;

use clap::{Args, Parser, Subcommand};
use miette::Result;

use crate::globals::VERBOSE;

mod commands;
mod console;
mod globals;

pub const STATEWATCH_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Subcommand)]
enum CLICommand {
    #[command(
        name = "simulate",
        about = "Run the randomised observer demonstration: a subject with two \
                 attached reactors repeatedly performs its business operation \
                 (drawing a random state below 10), the high-state reactor is \
                 detached, and one final round runs without it."
    )]
    Simulate(SimulateArgs),

    #[command(
        name = "walkthrough",
        about = "Run the deterministic boundary walkthrough: state 3 triggers \
                 only the low-state reactor (< 8), state 9 only the high-state \
                 one (> 4), and after detaching the high-state reactor, state 9 \
                 triggers no reaction at all."
    )]
    Walkthrough,
}

#[derive(Args)]
struct SimulateArgs {
    #[arg(
        long = "seed",
        help = "Seed for the state draws. With a fixed seed the whole \
                simulation is reproducible; without it, each run draws \
                different states."
    )]
    seed: Option<u64>,

    #[arg(
        long = "rounds",
        default_value_t = 2,
        help = "How many business rounds to run before the high-state reactor \
                is detached (one more round always runs after the detach)."
    )]
    rounds: usize,
}

#[derive(Parser)]
#[command(
    name = "statewatch",
    about = "A small demonstration of synchronous subject/observer state notification.",
    long_about = "statewatch demonstrates the observer pattern in its simplest \
                  form: a subject owns an integer state and an ordered list of \
                  observers, and synchronously notifies every observer each \
                  time that state changes. Two reactors with overlapping \
                  thresholds react independently to the same changes, which is \
                  what the two subcommands narrate on the console.",
    version
)]
struct CLIArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Increase the verbosity of output."
    )]
    verbose: bool,

    #[command(subcommand)]
    command: CLICommand,
}

/// Executes the requested CLI command.
fn run_requested_cli_command(args: CLIArgs) -> Result<()> {
    match args.command {
        CLICommand::Simulate(simulate_args) => {
            commands::cmd_simulate(simulate_args.seed, simulate_args.rounds)
        }
        CLICommand::Walkthrough => commands::cmd_walkthrough(),
    }
}

/// Entry function for `statewatch`.
///
/// Parses CLI arguments and runs the requested demonstration sequence.
fn main() {
    let args = CLIArgs::parse();
    VERBOSE.set(args.verbose);

    match run_requested_cli_command(args) {
        Ok(_) => exit(0),
        Err(error) => {
            eprintln!("{:?}", error);
            exit(1);
        }
    }
}
