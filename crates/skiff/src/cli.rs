use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a program and print its result.
    Run {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source
        /// instead of as the source file path.
        #[clap(long, short, action)]
        source: bool,
    },

    /// Parse and check a program without evaluating it.
    Check {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source
        /// instead of as the source file path.
        #[clap(long, short, action)]
        source: bool,
    },
}
