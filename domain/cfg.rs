//! The control-flow graph a driver owns and the transfer functions walk
//! (§3 "Control-flow graph", §4.8's loop-view policy, §6's "Locals
//! builder"). Nodes and edges are addressed by `(FuncId, NodeId)`; the
//! graph itself, and which edges are loop edges, is supplied by the
//! driver rather than built by this crate.

use crate::commons::{FuncId, Id, Map, NodeId};
use crate::ir::Node;

/// How a control-flow edge affects the current context view, per the
/// `loop_enter`/`loop_next`/`loop_exit` operations on [`super::View`]
/// (§4.1's "Successor view policy"). Computed by [`classify_edge`] from
/// node structure (`Node::Branch`'s `is_loop` flag and [`Cfg::is_loop_pred`])
/// rather than supplied wholesale by a driver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeKind {
    /// An ordinary edge within the same loop nesting.
    Straight,
    /// The first edge into a loop body from outside it.
    LoopEnter,
    /// A back edge from the end of a loop body to its head.
    LoopNext,
    /// An edge leaving a loop body to the code following the loop.
    LoopExit,
}

/// §4.1's "Successor view policy": given the edge `from -> to` within
/// `func`, decide how it affects the context view.
///
/// - If `to` is a loop-head branch (`Node::Branch { is_loop: true, .. }`):
///   `from` entering from outside the loop (`Cfg::is_loop_pred`) is
///   `LoopEnter`; any other edge into the head (the back edge) is
///   `LoopNext`.
/// - Else, if `from` is itself a loop head and `to` is its `else_branch`,
///   that's the loop's exit edge (`LoopExit`, §4.1's Branch dispatch rule).
/// - Otherwise the edge is `Straight`.
///
/// `Cfg::is_loop_pred` is the one fact this crate cannot derive from a
/// bare edge list on its own (it requires dominance/back-edge structure
/// computed by the CFG builder, out of scope per the specification's own
/// "deliberately out of scope" list); everything else about the policy is
/// implemented here, not delegated to the driver.
pub fn classify_edge<V, C: Cfg<V> + ?Sized>(
    cfg: &C,
    func: &FuncId,
    from: NodeId,
    to: NodeId,
) -> EdgeKind {
    if let Node::Branch { is_loop: true, .. } = cfg.node(func, to) {
        if cfg.is_loop_pred(func, from, to) {
            return EdgeKind::LoopEnter;
        }
        return EdgeKind::LoopNext;
    }
    if let Node::Branch { is_loop: true, else_branch, .. } = cfg.node(func, from) {
        if *else_branch == to {
            return EdgeKind::LoopExit;
        }
    }
    EdgeKind::Straight
}

/// `V` is the abstract value domain, needed only by [`Cfg::get_locals`]
/// (§6's "Locals builder": `get_locals(func, args, is_cont) -> map`,
/// which builds a callee's initial local environment from evaluated
/// argument values, not just parameter names).
pub trait Cfg<V> {
    /// The node at `(func, n)`. Panics if the pair is unknown to this
    /// graph — every control point the transfer functions construct is
    /// derived from a node already present in it.
    fn node(&self, func: &FuncId, n: NodeId) -> &Node;

    /// `func`'s entry node.
    fn entry(&self, func: &FuncId) -> NodeId;

    /// Whether `from` is `to`'s loop predecessor: the edge that enters
    /// `to` (a loop head) from outside the loop, as opposed to the back
    /// edge from the end of the loop body. Dominance/back-edge structure
    /// is computed by the CFG builder (§1's "deliberately out of scope"),
    /// so this is the one structural fact [`classify_edge`] still asks
    /// the driver for rather than deriving itself.
    fn is_loop_pred(&self, func: &FuncId, from: NodeId, to: NodeId) -> bool;

    /// Whether `func` is declared to return a completion record, used by
    /// C6/C8 to decide when a value crossing a call or return edge must
    /// be wrapped via `wrap_completion` (§3 invariant 5).
    fn is_return_comp(&self, func: &FuncId) -> bool;

    /// Whether `func` is a known function in this graph (closures and
    /// continuations carry a `FuncId` that must resolve here).
    fn lookup_function(&self, func: &FuncId) -> bool;

    /// Build `func`'s initial local environment from evaluated call
    /// arguments (§6). `is_cont` distinguishes a continuation resumption
    /// (whose parameter shape may differ from an ordinary call, e.g. a
    /// single resumption value) from an ordinary closure call.
    fn get_locals(&self, func: &FuncId, args: Vec<V>, is_cont: bool) -> Map<Id, V>;

    /// The *named* (non-temporary) locals declared anywhere in `func`'s
    /// body, used when capturing a continuation's environment (§4.4
    /// `ECont`): temporaries introduced by lowering are not resumable
    /// state and are deliberately excluded.
    fn named_locals(&self, func: &FuncId) -> Vec<Id>;
}
