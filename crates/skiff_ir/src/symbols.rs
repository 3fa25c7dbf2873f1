use std::collections::HashMap;
use std::ops::Index;

use crate::{Node, NodeCopy};

/// Index of a function in declaration order.
#[derive(NodeCopy!)]
pub struct FuncId(pub usize);

/// Index of a parameter within its owning function's parameter list.
#[derive(NodeCopy!)]
pub struct ParamId(pub usize);

#[derive(Node!)]
pub struct FunctionSymbol {
    pub name: String,
    pub arity: usize,
    pub line: u32,
}

/// Every function signature in the program, registered before any body is
/// resolved so that calls in either direction are checked statically.
#[derive(Node!)]
#[derive(Default)]
pub struct Symbols {
    funcs: Vec<FunctionSymbol>,
    lookup: HashMap<String, FuncId>,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function signature. Returns `None` if the name is
    /// already taken; the existing symbol stays in place.
    pub fn declare(&mut self, symbol: FunctionSymbol) -> Option<FuncId> {
        if self.lookup.contains_key(&symbol.name) {
            return None;
        }

        let id = FuncId(self.funcs.len());
        self.lookup.insert(symbol.name.clone(), id);
        self.funcs.push(symbol);
        Some(id)
    }

    pub fn resolve(&self, name: &str) -> Option<FuncId> {
        self.lookup.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl Index<FuncId> for Symbols {
    type Output = FunctionSymbol;

    fn index(&self, id: FuncId) -> &Self::Output {
        &self.funcs[id.0]
    }
}
