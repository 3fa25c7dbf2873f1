//! Tree-walking evaluator for lowered skiff programs.
//!
//! Calls use an explicit frame stack rather than the mutable binding slots
//! of the surface language's reference semantics: every argument is
//! evaluated in the caller's frame before the callee frame is pushed, so a
//! recursive call that permutes its own parameters sees the values it
//! should. Recursion in the evaluated program is host-stack recursion with
//! no explicit bound; deeply recursive programs exhaust the host stack.


use skiff_ir::ir::{Expr, ExprKind, Program};
use skiff_ir::BinOp;

/// A failure only observable while evaluating a specific expression. The
/// message renders the offending expression and its 0-indexed line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("RUNTIME ERROR {expr}:{line}")]
    DivisionByZero { expr: String, line: u32 },

    #[error("RUNTIME ERROR {expr}:{line}")]
    ModuloByZero { expr: String, line: u32 },

    /// A parameter read outside any active call to its function. Lowered
    /// programs cannot reach this; it guards the evaluator's own
    /// invariant.
    #[error("RUNTIME ERROR {expr}:{line}")]
    UnboundParameter { expr: String, line: u32 },
}

pub type EvalResult<T> = Result<T, RuntimeError>;

pub struct Interpreter<'a> {
    program: &'a Program,

    /// One frame per active call, innermost last, indexed by `ParamId`.
    frames: Vec<Vec<i64>>,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            frames: vec![],
        }
    }

    /// Evaluates the program's top-level expression to a single integer.
    pub fn run(mut self) -> EvalResult<i64> {
        let body = &self.program.body;
        self.eval(body)
    }

    fn eval(&mut self, expr: &'a Expr) -> EvalResult<i64> {
        match &expr.kind {
            ExprKind::Constant(n) => Ok(*n),

            ExprKind::Param { id, .. } => self
                .frames
                .last()
                .and_then(|frame| frame.get(id.0).copied())
                .ok_or_else(|| RuntimeError::UnboundParameter {
                    expr: expr.to_string(),
                    line: expr.line,
                }),

            ExprKind::BinOp { op, lhs, rhs } => {
                // Both sides are always evaluated; no short-circuiting.
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                self.eval_bin_op(*op, lhs, rhs, expr)
            }

            // A two-way branch on exactly 1, not value matching: any other
            // condition value takes the else branch.
            ExprKind::If { cond, then, else_ } => {
                if self.eval(cond)? == 1 {
                    self.eval(then)
                } else {
                    self.eval(else_)
                }
            }

            ExprKind::Call { func, args, .. } => {
                // All arguments are evaluated against the caller's frame
                // before any binding happens.
                let mut frame = Vec::with_capacity(args.len());
                for arg in args {
                    frame.push(self.eval(arg)?);
                }

                let body = &self.program.func(*func).body;
                self.frames.push(frame);
                let result = self.eval(body);
                self.frames.pop();
                result
            }
        }
    }

    fn eval_bin_op(&self, op: BinOp, lhs: i64, rhs: i64, expr: &Expr) -> EvalResult<i64> {
        match op {
            BinOp::Add => Ok(lhs.wrapping_add(rhs)),
            BinOp::Sub => Ok(lhs.wrapping_sub(rhs)),
            BinOp::Mul => Ok(lhs.wrapping_mul(rhs)),

            BinOp::Div => {
                if rhs == 0 {
                    Err(RuntimeError::DivisionByZero {
                        expr: expr.to_string(),
                        line: expr.line,
                    })
                } else {
                    Ok(lhs.wrapping_div(rhs))
                }
            }

            BinOp::Mod => {
                if rhs == 0 {
                    Err(RuntimeError::ModuloByZero {
                        expr: expr.to_string(),
                        line: expr.line,
                    })
                } else {
                    Ok(lhs.wrapping_rem(rhs))
                }
            }

            // Integers double as booleans: exactly 1 for true, 0 for false.
            BinOp::Less => Ok((lhs < rhs) as i64),
            BinOp::Greater => Ok((lhs > rhs) as i64),
            BinOp::Equal => Ok((lhs == rhs) as i64),
        }
    }
}
