/// Malformed input or a grammar violation, from the lexer or the parser.
/// Lines are 0-indexed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
pub enum SyntaxError {
    #[error("SYNTAX ERROR: unexpected character {ch:?}:{line}")]
    UnexpectedChar { ch: char, line: u32 },

    #[error("SYNTAX ERROR: integer literal out of range:{line}")]
    IntegerOverflow { line: u32 },

    #[error("SYNTAX ERROR: expected {expected}, found {found}:{line}")]
    Expected {
        expected: String,
        found: String,
        line: u32,
    },
}

/// A statically detectable semantic violation, found while lowering the
/// AST. The tags match the diagnostics of the surface language.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
pub enum CompileError {
    #[error("DUPLICATE FUNCTION NAME {name}:{line}")]
    DuplicateFunction { name: String, line: u32 },

    #[error("DUPLICATE PARAMETER NAME {name}:{line}")]
    DuplicateParameter { name: String, line: u32 },

    #[error("FUNCTION NOT FOUND {name}:{line}")]
    FunctionNotFound { name: String, line: u32 },

    #[error("PARAMETER NOT FOUND {name}:{line}")]
    ParameterNotFound { name: String, line: u32 },

    #[error("ARGUMENT NUMBER MISMATCH {name}:{line}")]
    ArityMismatch { name: String, line: u32 },
}
