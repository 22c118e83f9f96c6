//! The concrete IR syntax the transfer core dispatches on: instructions,
//! expressions, references, operators, and CFG node shapes.
//!
//! Unlike the domains in [`crate::domain`], these types are not behind
//! traits — the transfer rules in §4 of the specification are written as
//! pattern matches on exactly this shape, so a driver builds CFGs out of
//! these concrete enums rather than supplying its own.

pub mod expr;
pub mod inst;
pub mod node;
pub mod ops;
pub mod reference;

pub use expr::{Expr, Literal};
pub use inst::Instruction;
pub use node::{CallExpr, CallInst, Node};
pub use ops::{BinOp, ConvertOp, UnOp, VariadicOp};
pub use reference::RefExpr;
