//! The concrete interpreter (§6 "Concrete interpreter"), reused by C3 to
//! constant-fold fully concrete operands and by C6 to evaluate lexical SDOs
//! directly rather than through a call edge.

use crate::commons::FuncId;
use crate::ir::{BinOp, UnOp, VariadicOp};

pub trait ConcreteInterp {
    type Concrete: Clone;

    fn interp_unary(&self, op: UnOp, operand: &Self::Concrete) -> Option<Self::Concrete>;
    fn interp_binary(&self, op: BinOp, lhs: &Self::Concrete, rhs: &Self::Concrete) -> Option<Self::Concrete>;
    fn interp_variadic(&self, op: VariadicOp, operands: &[Self::Concrete]) -> Option<Self::Concrete>;

    /// `Interp.set_type_map`: the declared return type of a function, used
    /// by C8 to refine a fresh allocation's recorded type at the return
    /// edge.
    fn declared_return_type(&self, func: &FuncId) -> Option<String>;

    /// `Interp.interp(lex_ast, method)`: evaluate a syntax-directed
    /// operation on a concrete lexical AST directly, without a call edge.
    fn interp_lexical_sdo(&self, lex_ast: &Self::Concrete, method: &str) -> Self::Concrete;
}
