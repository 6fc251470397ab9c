use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("{0}")]
    Arity(String),

    #[error("Unknown expression: {0}")]
    UnknownOperator(String),

    #[error("NOT_ARRAY")]
    NotArray,

    #[error("NOT_OBJECT")]
    NotObject,

    #[error("NOT_STRING")]
    NotString,

    #[error("DIVISION_BY_ZERO")]
    DivisionByZero,

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Transform deadline exceeded")]
    DeadlineExceeded,

    #[error("varname must be a string.")]
    VarnameMustBeString,

    #[error("Invalid varname.")]
    InvalidVarname,

    #[error("{0}")]
    Other(String),
}
