use std::fmt;

use crate::symbols::{FuncId, ParamId};
use crate::{BinOp, Node};

/// A fully resolved program: every parameter reference is an index into the
/// enclosing function's frame and every call site a function id whose arity
/// has already been checked.
#[derive(Node!)]
pub struct Program {
    pub funcs: Vec<FuncDef>,
    pub body: Expr,
}

impl Program {
    pub fn func(&self, id: FuncId) -> &FuncDef {
        &self.funcs[id.0]
    }
}

#[derive(Node!)]
pub struct FuncDef {
    pub name: String,
    pub arity: usize,
    pub body: Expr,
    pub line: u32,
}

#[derive(Node!)]
pub struct Expr {
    pub kind: ExprKind,
    pub line: u32,
}

impl Expr {
    pub fn new(kind: ExprKind, line: u32) -> Self {
        Self { kind, line }
    }
}

#[derive(Node!)]
pub enum ExprKind {
    Constant(i64),

    /// The name is carried for diagnostics only; evaluation goes through
    /// the index.
    Param { id: ParamId, name: String },

    BinOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    If {
        cond: Box<Expr>,
        then: Box<Expr>,
        else_: Box<Expr>,
    },

    /// As with `Param`, the callee name is kept for diagnostics.
    Call {
        func: FuncId,
        name: String,
        args: Vec<Expr>,
    },
}

/// Renders an expression back in surface syntax, for runtime diagnostics.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ExprKind::Constant(n) => write!(f, "{n}"),
            ExprKind::Param { name, .. } => f.write_str(name),
            ExprKind::BinOp { op, lhs, rhs } => write!(f, "{lhs}{op}{rhs}"),
            ExprKind::If { cond, then, else_ } => {
                write!(f, "[{cond}]?{{{then}}}:{{{else_}}}")
            }
            ExprKind::Call { name, args, .. } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
        }
    }
}
