mod cli;
mod compilation;
mod diagnostics;

#[cfg(test)]
mod tests;

use clap::Parser as _;
use skiff_frontend::{CompileError, SyntaxError};
use skiff_interp::RuntimeError;

use crate::cli::{Cli, Command};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn main() {
    if let Err(err) = run() {
        diagnostics::emit_error(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { input, source } => {
            let text = load(input, source)?;
            let result = compilation::evaluate(text.trim_end())?;
            println!("{result}");
        }

        Command::Check { input, source } => {
            let text = load(input, source)?;
            compilation::check(text.trim_end())?;
        }
    }

    Ok(())
}

// Files conventionally end with a newline the grammar does not allow after
// the trailing expression; callers trim before handing the text over.
fn load(input: String, source: bool) -> Result<String, std::io::Error> {
    if source {
        Ok(input)
    } else {
        std::fs::read_to_string(input)
    }
}
