//! CFG node shapes (§6 "Node kinds") and the three call forms C6 dispatches
//! on (§4.7).

use crate::commons::{Id, NodeId};

use super::expr::Expr;
use super::inst::Instruction;

/// The callee-position syntax of a call instruction. The three forms share
/// a node kind (`Node::Call`) but are transferred by different rules in
/// C6.
#[derive(Clone, Debug)]
pub enum CallExpr {
    /// `ICall(fexpr, args)`: call every closure/continuation `fexpr`'s
    /// abstract value may denote.
    Closure { func: Expr, args: Vec<Expr> },
    /// `IMethodCall(base, method, args)`: look up `method` on `base`'s
    /// value, then call every closure found there with `base :: args`.
    Method {
        base: Expr,
        method: String,
        args: Vec<Expr>,
    },
    /// `ISdoCall(base, method, args)`: dispatch a syntax-directed
    /// operation named `method` on the AST `base` evaluates to.
    Sdo {
        base: Expr,
        method: String,
        args: Vec<Expr>,
    },
}

#[derive(Clone, Debug)]
pub struct CallInst {
    pub lhs: Id,
    pub call: CallExpr,
}

#[derive(Clone, Debug)]
pub enum Node {
    Block {
        insts: Vec<Instruction>,
        next: NodeId,
    },
    Call {
        call: CallInst,
        next: NodeId,
    },
    Branch {
        cond: Expr,
        then_branch: NodeId,
        else_branch: NodeId,
        /// Whether this branch is a loop head, i.e. `then_branch` is the
        /// loop body and `else_branch` leaves the loop (§4.1's "Successor
        /// view policy", §6's `Branch(..., is_loop, is_loop_pred)`).
        is_loop: bool,
    },
    /// A function's sole exit; the driver never transfers this node
    /// directly (every path out of a function goes through
    /// `Instruction::Return`, which submits to the return point instead of
    /// falling through to a successor), but the CFG builder still needs a
    /// sentinel to close off dangling edges.
    Exit,
}
