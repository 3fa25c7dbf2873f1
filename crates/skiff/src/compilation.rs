use skiff_frontend::{lex, lower, parse};
use skiff_interp::Interpreter;
use skiff_ir::ir::Program;
use skiff_ir::symbols::Symbols;

use crate::Error;

/// Runs the compile-time half of the pipeline: lex, parse, resolve.
pub fn check(source: &str) -> Result<(Program, Symbols), Error> {
    let tokens = lex(source)?;
    let module = parse(tokens)?;
    let (program, symbols) = lower(&module)?;
    Ok((program, symbols))
}

/// Compiles and evaluates a program to its single integer result.
pub fn evaluate(source: &str) -> Result<i64, Error> {
    let (program, _symbols) = check(source)?;
    let result = Interpreter::new(&program).run()?;
    Ok(result)
}
