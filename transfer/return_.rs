//! C8: return transfer (§4.2). Fans a callee's return point out to every
//! caller continuation recorded against it, merging the callee's exit
//! state into each caller's state under the completion-wrapping rule.

use crate::commons::FuncId;
use crate::domain::cfg::{classify_edge, Cfg, EdgeKind};
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::error::Result;
use crate::ir::Node;
use crate::store::{ControlPoint, SemanticsStore};

use super::Transfer;

/// Transfer the return point `(func, view)`: merge every recorded
/// `(value, state)` pair into each caller continuation's state.
pub fn transfer_return<S, Vw, I, C, St>(
    t: &mut Transfer<S, Vw, I, C, St>,
    func: &FuncId,
    view: &Vw,
) -> Result<()>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    let _span = tracing::trace_span!("transfer_return", func = %func, view = ?view).entered();

    let callee_returns_comp = t.cfg.is_return_comp(func);
    let returns = t.store.get_return(func, view);
    let ret_edges = t.store.ret_edges(func, view);

    for (ret_value, ret_state) in &returns {
        let mut ret_state = ret_state.clone();
        if let Some(declared) = t.interp.declared_return_type(func) {
            if let Some(loc) = ret_value.loc() {
                ret_state.set_type(&loc, &declared);
            }
        }
        let final_value = if callee_returns_comp {
            ret_value.wrap_completion()
        } else {
            ret_value.clone()
        };

        for (caller_func, call_node, caller_view) in &ret_edges {
            // A caller's pre-call state was already recorded at its own
            // node point when C7 visited it (§3's `call_info(caller_np)`
            // is exactly that recorded state, not a separate table).
            let caller_cp = ControlPoint::Node(caller_func.clone(), *call_node, caller_view.clone());
            let caller_state = t.store.get(&caller_cp);

            let lhs = match t.cfg.node(caller_func, *call_node) {
                Node::Call { call, .. } => call.lhs.clone(),
                _ => continue,
            };

            let new_state = ret_state.do_return(&caller_state, (lhs, final_value.clone()));

            let Node::Call { next, .. } = t.cfg.node(caller_func, *call_node).clone() else {
                continue;
            };
            let next_view = match classify_edge(t.cfg, caller_func, *call_node, next) {
                EdgeKind::LoopEnter => caller_view.loop_enter(next),
                _ => caller_view.clone(),
            };
            let next_cp = ControlPoint::Node(caller_func.clone(), next, next_view);
            t.store.update(&next_cp, new_state);
        }
    }

    Ok(())
}
