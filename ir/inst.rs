//! Straight-line instructions transferred by C5 (§4.3).

use super::expr::Expr;
use super::reference::RefExpr;

#[derive(Clone, Debug)]
pub enum Instruction {
    ExprStmt(Expr),
    Let(crate::commons::Id, Expr),
    Assign(RefExpr, Expr),
    Delete(RefExpr),
    Push {
        elem: Expr,
        list: Expr,
        front: bool,
    },
    RemoveElem {
        list: Expr,
        elem: Expr,
    },
    Return(Expr),
    /// Evaluated and discarded; the core performs no refinement from
    /// assertions (pruning happens only at branches, §4.3).
    Assert(Expr),
    Print(Expr),
    Nop,
}
