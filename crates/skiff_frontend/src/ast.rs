//! The unresolved syntax tree produced by the parser. Names are plain
//! strings here; the lowerer resolves them against declared parameters and
//! registered function signatures.

use skiff_ir::BinOp;

use crate::Node;

#[derive(Node!)]
pub struct Module {
    pub funcs: Vec<FuncDecl>,
    pub body: Expr,
}

#[derive(Node!)]
pub struct FuncDecl {
    pub ident: Ident,
    pub params: Vec<Ident>,
    pub body: Expr,
}

#[derive(Node!)]
pub struct Ident {
    pub name: String,
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
    Integer(i64),

    /// A bare identifier; only ever a parameter reference.
    Var(Ident),

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

    Call { ident: Ident, args: Vec<Expr> },
}
