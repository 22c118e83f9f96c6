//! C1: turn a syntactic [`RefExpr`] into an abstract reference value.
//! Reading, writing, and testing existence is left to [`AbsState`]'s own
//! `resolve`/`update`/`delete`/`exists` — this module only builds the key
//! those operations take.

use crate::commons::FuncId;
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::{AbsState, RefValue};
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::error::Result;
use crate::ir::RefExpr;
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
    /// Resolve `r` against `state` into an [`RefValue`], evaluating any
    /// sub-expressions a property access's base/key carry (§4.1).
    pub fn resolve_ref(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        r: &RefExpr,
    ) -> Result<RefValue<S::Value>> {
        match r {
            RefExpr::Id(id) => Ok(RefValue::Id(id.clone())),
            RefExpr::Prop { base, key } => {
                let base_v = self.eval_expr(state, func, view, base)?;
                let key_v = self.eval_expr(state, func, view, key)?;
                Ok(RefValue::Prop(base_v, key_v))
            }
        }
    }
}
