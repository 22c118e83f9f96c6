//! The semantics store (§5): the fixed-point driver's map from control
//! points to abstract states, kept external to the transfer functions so
//! this crate never owns the worklist or the iteration order itself.
//!
//! §3 describes a `call_info(caller_np) -> caller_state` lookup; since a
//! caller's pre-call state is exactly what was already recorded at the
//! call's own node point when C7 visited it, that lookup is just
//! [`SemanticsStore::get`] on the call's control point — there is no
//! separate call-site table to maintain.

use std::fmt;

use crate::commons::{FuncId, NodeId};
use crate::domain::state::AbsState;
use crate::domain::view::View;

/// A point the analysis can be queried at (§3 "Control point"): either a
/// node within a function's body, or that function's return point.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ControlPoint<Vw> {
    Node(FuncId, NodeId, Vw),
    Return(FuncId, Vw),
}

impl<Vw: fmt::Display> fmt::Display for ControlPoint<Vw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPoint::Node(func, n, view) => write!(f, "{func}:{n}@{view}"),
            ControlPoint::Return(func, view) => write!(f, "{func}:ret@{view}"),
        }
    }
}

/// The store a fixed-point driver maintains and the transfer functions
/// read from and write to (§5). `S` is the abstract state domain; `Vw`
/// the context-view domain it's parameterized over.
pub trait SemanticsStore<S: AbsState<Vw>, Vw: View> {
    /// The state currently recorded at `cp`, or the state domain's bottom
    /// if `cp` has not been reached yet.
    fn get(&self, cp: &ControlPoint<Vw>) -> S;
    /// Join `state` into whatever is currently recorded at `cp`, returning
    /// whether the recorded state changed (so the driver knows whether to
    /// re-enqueue `cp`'s successors).
    fn update(&mut self, cp: &ControlPoint<Vw>, state: S) -> bool;

    /// The `(return value, state)` pairs submitted to `func`'s return
    /// point so far under `view` (§4.3 `do_return`).
    fn get_return(&self, func: &FuncId, view: &Vw) -> Vec<(S::Value, S)>;
    /// Record a `(return value, state)` pair reaching `func`'s return
    /// point under `view`.
    fn set_return(&mut self, func: &FuncId, view: &Vw, value: S::Value, state: S);

    /// Record that `callee`'s return point under `view` must propagate to
    /// `(caller_func, caller_node, caller_view)` (§4.2's captured
    /// continuation-style return edges).
    fn add_ret_edge(&mut self, callee: &FuncId, view: &Vw, caller: (FuncId, NodeId, Vw));
    /// Every `(caller_func, caller_node, caller_view)` recorded for
    /// `(callee, view)`.
    fn ret_edges(&self, callee: &FuncId, view: &Vw) -> Vec<(FuncId, NodeId, Vw)>;
}
