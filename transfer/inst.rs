//! C5: straight-line instruction transfer (§4.3). Bottom absorption is a
//! single early-return check in [`Self::transfer_block`]: once the
//! threaded state reports `is_bottom`, every remaining instruction in the
//! block is skipped.

use crate::commons::FuncId;
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::error::Result;
use crate::ir::Instruction;
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
    pub fn transfer_block(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        insts: &[Instruction],
    ) -> Result<()> {
        for inst in insts {
            if state.is_bottom() {
                break;
            }
            self.transfer_inst(state, func, view, inst)?;
        }
        Ok(())
    }

    pub fn transfer_inst(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        inst: &Instruction,
    ) -> Result<()> {
        match inst {
            Instruction::ExprStmt(e) => {
                self.eval_expr(state, func, view, e)?;
            }
            Instruction::Let(id, e) => {
                let v = self.eval_expr(state, func, view, e)?;
                state.define_local(id, v);
            }
            Instruction::Assign(r, e) => {
                let rv = self.resolve_ref(state, func, view, r)?;
                let v = self.eval_expr(state, func, view, e)?;
                state.update(&rv, v);
            }
            Instruction::Delete(r) => {
                let rv = self.resolve_ref(state, func, view, r)?;
                state.delete(&rv);
            }
            Instruction::Push { elem, list, front } => {
                let elem_v = self.eval_expr(state, func, view, elem)?;
                let list_v = self.eval_expr(state, func, view, list)?;
                if *front {
                    state.prepend(&list_v, elem_v);
                } else {
                    state.append(&list_v, elem_v);
                }
            }
            Instruction::RemoveElem { list, elem } => {
                let list_v = self.eval_expr(state, func, view, list)?;
                let elem_v = self.eval_expr(state, func, view, elem)?;
                state.remove(&list_v, &elem_v);
            }
            Instruction::Return(e) => {
                let v = self.eval_expr(state, func, view, e)?;
                self.submit_return(state, func, view, v);
                *state = S::bottom();
            }
            Instruction::Assert(e) | Instruction::Print(e) => {
                self.eval_expr(state, func, view, e)?;
            }
            Instruction::Nop => {}
        }
        Ok(())
    }

    /// Package `(value, state_with_locals_cleared)` and submit it to the
    /// enclosing function's return point (§4.3). Shared by `return`
    /// instructions and `ReturnIfAbrupt`'s abrupt short-circuit (§4.4).
    pub fn submit_return(&mut self, state: &S, func: &FuncId, view: &Vw, value: S::Value) {
        let cleared = state.clear_locals();
        self.store.set_return(func, view, value, cleared);
    }
}
