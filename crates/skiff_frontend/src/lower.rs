use std::collections::HashMap;

use skiff_ir::ir;
use skiff_ir::symbols::{FuncId, FunctionSymbol, ParamId, Symbols};

use crate::ast;
use crate::error::CompileError;

pub type LowerResult<T> = Result<T, CompileError>;

/// Resolves an AST into an evaluatable program: every function signature is
/// registered first, then bodies and the top-level expression are lowered
/// against the full signature table. Duplicate names, unknown names and
/// call arity are all rejected here, for forward and backward references
/// alike.
pub fn lower(module: &ast::Module) -> LowerResult<(ir::Program, Symbols)> {
    Lowerer::default().run(module)
}

#[derive(Default)]
struct Lowerer {
    symbols: Symbols,

    /// Parameters of the function currently being lowered; empty at the
    /// top level.
    params: HashMap<String, ParamEntry>,
}

#[derive(Clone, Copy)]
struct ParamEntry {
    id: ParamId,
    line: u32,
}

impl Lowerer {
    fn run(mut self, module: &ast::Module) -> LowerResult<(ir::Program, Symbols)> {
        self.declare_funcs(module)?;

        let mut funcs = Vec::with_capacity(module.funcs.len());
        for decl in &module.funcs {
            funcs.push(self.lower_func_decl(decl)?);
        }

        self.params.clear();
        let body = self.lower_expr(&module.body)?;

        Ok((ir::Program { funcs, body }, self.symbols))
    }

    fn declare_funcs(&mut self, module: &ast::Module) -> LowerResult<()> {
        for decl in &module.funcs {
            let symbol = FunctionSymbol {
                name: decl.ident.name.clone(),
                arity: decl.params.len(),
                line: decl.ident.line,
            };

            if self.symbols.declare(symbol).is_none() {
                // Report the first definition, as the original diagnostics do.
                let id = self.symbols.resolve(&decl.ident.name);
                let first = id.map(|id| &self.symbols[id]);
                let (name, line) = match first {
                    Some(sym) => (sym.name.clone(), sym.line),
                    None => (decl.ident.name.clone(), decl.ident.line),
                };
                return Err(CompileError::DuplicateFunction { name, line });
            }
        }
        Ok(())
    }

    fn lower_func_decl(&mut self, decl: &ast::FuncDecl) -> LowerResult<ir::FuncDef> {
        self.bind_params(&decl.params)?;
        let body = self.lower_expr(&decl.body)?;

        Ok(ir::FuncDef {
            name: decl.ident.name.clone(),
            arity: decl.params.len(),
            body,
            line: decl.ident.line,
        })
    }

    fn bind_params(&mut self, params: &[ast::Ident]) -> LowerResult<()> {
        self.params.clear();

        for (index, param) in params.iter().enumerate() {
            if let Some(first) = self.params.get(&param.name) {
                return Err(CompileError::DuplicateParameter {
                    name: param.name.clone(),
                    line: first.line,
                });
            }
            self.params.insert(
                param.name.clone(),
                ParamEntry {
                    id: ParamId(index),
                    line: param.line,
                },
            );
        }
        Ok(())
    }

    fn lower_expr(&mut self, expr: &ast::Expr) -> LowerResult<ir::Expr> {
        let kind = match &expr.kind {
            ast::ExprKind::Integer(n) => ir::ExprKind::Constant(*n),

            ast::ExprKind::Var(ident) => {
                let entry = self.params.get(&ident.name).ok_or_else(|| {
                    CompileError::ParameterNotFound {
                        name: ident.name.clone(),
                        line: ident.line,
                    }
                })?;

                ir::ExprKind::Param {
                    id: entry.id,
                    name: ident.name.clone(),
                }
            }

            ast::ExprKind::BinOp { op, lhs, rhs } => {
                let lhs = self.lower_expr(lhs)?;
                let rhs = self.lower_expr(rhs)?;
                ir::ExprKind::BinOp {
                    op: *op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                }
            }

            ast::ExprKind::If { cond, then, else_ } => {
                let cond = self.lower_expr(cond)?;
                let then = self.lower_expr(then)?;
                let else_ = self.lower_expr(else_)?;
                ir::ExprKind::If {
                    cond: Box::new(cond),
                    then: Box::new(then),
                    else_: Box::new(else_),
                }
            }

            ast::ExprKind::Call { ident, args } => {
                let func = self.resolve_call(ident, args.len())?;

                let mut lowered = Vec::with_capacity(args.len());
                for arg in args {
                    lowered.push(self.lower_expr(arg)?);
                }

                ir::ExprKind::Call {
                    func,
                    name: ident.name.clone(),
                    args: lowered,
                }
            }
        };

        Ok(ir::Expr::new(kind, expr.line))
    }

    fn resolve_call(&self, ident: &ast::Ident, argc: usize) -> LowerResult<FuncId> {
        let func = self
            .symbols
            .resolve(&ident.name)
            .ok_or_else(|| CompileError::FunctionNotFound {
                name: ident.name.clone(),
                line: ident.line,
            })?;

        if self.symbols[func].arity != argc {
            return Err(CompileError::ArityMismatch {
                name: ident.name.clone(),
                line: ident.line,
            });
        }

        Ok(func)
    }
}
