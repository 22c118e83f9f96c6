//! C7: per-node dispatch (§4.1). Reads the state recorded at a node
//! point, runs the instruction/call/branch transfer, and writes successor
//! states back into the store keyed by [`crate::domain::cfg::EdgeKind`]'s
//! view transformation.

use crate::commons::{FuncId, NodeId};
use crate::domain::cfg::{classify_edge, Cfg, EdgeKind};
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::{AbsValue, Flat};
use crate::domain::view::View;
use crate::error::Result;
use crate::ir::Node;
use crate::store::{ControlPoint, SemanticsStore};

use super::Transfer;

/// Transfer the node at `(func, n, view)`: read its recorded state,
/// dispatch by node kind, and write the resulting state(s) into the store
/// at each successor control point.
pub fn apply<S, Vw, I, C, St>(
    t: &mut Transfer<S, Vw, I, C, St>,
    func: &FuncId,
    n: NodeId,
    view: &Vw,
) -> Result<()>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    let _span = tracing::trace_span!("apply", func = %func, node = %n, view = ?view).entered();

    let cp = ControlPoint::Node(func.clone(), n, view.clone());
    let mut state = t.store.get(&cp);
    if state.is_bottom() {
        return Ok(());
    }

    let node = t.cfg.node(func, n).clone();

    match node {
        Node::Block { insts, next } => {
            t.transfer_block(&mut state, func, view, &insts)?;
            if !state.is_bottom() {
                propagate(t, func, n, next, view, state)?;
            }
        }

        Node::Call { call, next } => {
            let value = t.transfer_call(&mut state, func, n, view, &call)?;
            if value.is_bottom() {
                state = S::bottom();
            } else {
                state.define_local(&call.lhs, value);
            }
            if !state.is_bottom() {
                propagate(t, func, n, next, view, state)?;
            }
        }

        Node::Branch {
            cond,
            then_branch,
            else_branch,
            is_loop: _,
        } => {
            let cond_v = t.eval_expr(&mut state, func, view, &cond)?;
            let truth = cond_v.truthy();

            if matches!(truth, Flat::Elem(true) | Flat::Top) {
                let then_state = t.prune(&state, func, view, &cond, true)?;
                if !then_state.is_bottom() {
                    propagate(t, func, n, then_branch, view, then_state)?;
                }
            }
            if matches!(truth, Flat::Elem(false) | Flat::Top) {
                let else_state = t.prune(&state, func, view, &cond, false)?;
                if !else_state.is_bottom() {
                    propagate(t, func, n, else_branch, view, else_state)?;
                }
            }
        }

        // The driver never schedules `apply` on a function's Exit node
        // (every path out of a function submits to the return point
        // instead of falling through, §6); reachable only as a defensive
        // no-op if it ever is.
        Node::Exit => {}
    }

    Ok(())
}

fn propagate<S, Vw, I, C, St>(
    t: &mut Transfer<S, Vw, I, C, St>,
    func: &FuncId,
    from: NodeId,
    to: NodeId,
    view: &Vw,
    state: S,
) -> Result<()>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    let next_view = match classify_edge(t.cfg, func, from, to) {
        EdgeKind::Straight => view.clone(),
        EdgeKind::LoopEnter => view.loop_enter(to),
        EdgeKind::LoopNext => view.loop_next(),
        EdgeKind::LoopExit => view.loop_exit(),
    };
    let cp = ControlPoint::Node(func.clone(), to, next_view);
    t.store.update(&cp, state);
    Ok(())
}
