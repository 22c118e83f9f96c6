//! C4: refine an abstract state along one side of a branch condition
//! (§4.6). The pruner walks the same `Expr` syntax the evaluator does, but
//! only for the handful of shapes that carry refinable information —
//! negation, `typeof` equality, and the short-circuit boolean connectives.

use crate::commons::FuncId;
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::error::Result;
use crate::ir::{BinOp, Expr, RefExpr, UnOp};
use crate::store::SemanticsStore;

use super::Transfer;

impl<'a, S, Vw, I, C, St> Transfer<'a, S, Vw, I, C, St>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    /// Refine `state` under the knowledge that `cond` evaluates to
    /// `positive` along this edge.
    pub fn prune(
        &mut self,
        state: &S,
        func: &FuncId,
        view: &Vw,
        cond: &Expr,
        positive: bool,
    ) -> Result<S> {
        match cond {
            Expr::Unary(UnOp::Not, inner) => self.prune(state, func, view, inner, !positive),

            Expr::Binary(BinOp::Eq, l, r) => {
                if let Some((rexpr, ty_expr)) = typeof_eq_shape(l, r) {
                    let mut s = state.clone();
                    let rv = self.resolve_ref(&mut s, func, view, rexpr)?;
                    let cur = s.resolve(&rv);
                    let ty_v = self.eval_expr(&mut s, func, view, ty_expr)?;
                    let narrowed = cur.prune_type(&ty_v, positive);
                    s.update(&rv, narrowed);
                    Ok(s)
                } else {
                    Ok(state.clone())
                }
            }

            Expr::Or(l, r) => {
                let l_s = self.prune(state, func, view, l, positive)?;
                let r_s = self.prune(state, func, view, r, positive)?;
                Ok(if positive { l_s.join(&r_s) } else { l_s.meet(&r_s) })
            }

            Expr::And(l, r) => {
                let l_s = self.prune(state, func, view, l, positive)?;
                let r_s = self.prune(state, func, view, r, positive)?;
                Ok(if positive { l_s.meet(&r_s) } else { l_s.join(&r_s) })
            }

            _ => Ok(state.clone()),
        }
    }
}

/// Recognizes `typeof(r) == tyExpr` in either operand order (§4.6).
fn typeof_eq_shape<'e>(l: &'e Expr, r: &'e Expr) -> Option<(&'e RefExpr, &'e Expr)> {
    if let Expr::TypeOf(inner) = l {
        if let Expr::Ref(rexpr) = inner.as_ref() {
            return Some((rexpr, r));
        }
    }
    if let Expr::TypeOf(inner) = r {
        if let Expr::Ref(rexpr) = inner.as_ref() {
            return Some((rexpr, l));
        }
    }
    None
}
