//! SQL AST, its rendering to text plus parameters, and dialect conventions.

pub mod ast;
pub mod convert;
pub mod dialect;
pub mod helpers;
pub mod string;
