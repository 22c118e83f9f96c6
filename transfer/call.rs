//! C6: call transfer (§4.7). Three call forms share a node kind but are
//! dispatched differently; all three register their effects with the
//! semantics store rather than returning a value directly, except the
//! SDO call's lexical branch, which can produce a value with no call edge
//! at all.
//!
//! Arguments are evaluated exactly once per call node and the resulting
//! values reused across every closure/continuation a call's function
//! value may denote — expressions like `Pop` are destructive, so
//! re-evaluating an argument for each candidate callee would silently
//! double its effect.

use crate::commons::{FuncId, Map, NodeId};
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::{AbsValue, Closure, Flat, Single};
use crate::domain::view::View;
use crate::error::{AnalysisError, Result};
use crate::ir::node::{CallExpr, CallInst};
use crate::ir::{Expr, Literal};
use crate::store::{ControlPoint, SemanticsStore};

use super::Transfer;

impl<'a, S, Vw, I, C, St> Transfer<'a, S, Vw, I, C, St>
where
    Vw: View,
    S: AbsState<Vw>,
    I: ConcreteInterp<Concrete = <S::Value as AbsValue<Vw>>::Concrete>,
    C: Cfg<S::Value>,
    St: SemanticsStore<S, Vw>,
{
    /// Transfer a call node, returning the value (if any) the call
    /// contributes directly — closures and continuations contribute
    /// nothing here (their results arrive later via C8's return fan-out,
    /// §4.2); only an SDO call's lexical branch produces a value inline.
    pub fn transfer_call(
        &mut self,
        state: &mut S,
        func: &FuncId,
        node: NodeId,
        view: &Vw,
        call: &CallInst,
    ) -> Result<S::Value> {
        match &call.call {
            CallExpr::Closure { func: fexpr, args } => {
                let fv = self.eval_expr(state, func, view, fexpr)?;
                let evaluated = self.eval_args(state, func, view, args)?;
                self.call_closures(state, func, node, view, &fv, &evaluated, None)?;
                self.call_continuations(state, func, view, &fv, &evaluated)?;
                Ok(S::Value::bottom())
            }

            CallExpr::Method { base, method, args } => {
                let base_v = self.eval_expr(state, func, view, base)?;
                let method_v = S::Value::alpha(<S::Value as AbsValue<Vw>>::Concrete::from(
                    Literal::Str(method.clone()),
                ));
                let fv = state.get_prop(&base_v, &method_v);
                let evaluated = self.eval_args(state, func, view, args)?;
                self.call_closures(state, func, node, view, &fv, &evaluated, Some(&base_v))?;
                Ok(S::Value::bottom())
            }

            CallExpr::Sdo { base, method, args } => {
                let base_v = self.eval_expr(state, func, view, base)?;
                let evaluated = self.eval_args(state, func, view, args)?;
                self.transfer_sdo_call(state, func, node, view, &base_v, method, &evaluated)
            }
        }
    }

    fn eval_args(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        args: &[Expr],
    ) -> Result<Vec<S::Value>> {
        let mut vs = Vec::with_capacity(args.len());
        for a in args {
            vs.push(self.eval_expr(state, func, view, a)?);
        }
        Ok(vs)
    }

    fn call_closures(
        &mut self,
        state: &mut S,
        func: &FuncId,
        node: NodeId,
        view: &Vw,
        fv: &S::Value,
        args: &[S::Value],
        prepend_base: Option<&S::Value>,
    ) -> Result<()> {
        let mut call_args = Vec::with_capacity(args.len() + 1);
        if let Some(base) = prepend_base {
            call_args.push(base.clone());
        }
        call_args.extend(args.iter().cloned());

        for clo in fv.get_clos() {
            if !self.cfg.lookup_function(&clo.func) {
                return Err(AnalysisError::malformed_ir(
                    func.clone(),
                    format!("call to unknown function {}", clo.func),
                ));
            }
            self.store.add_ret_edge(&clo.func, view, (func.clone(), node, view.clone()));

            let mut locals = self.cfg.get_locals(&clo.func, call_args.clone(), false);
            locals.extend(clo.captured.clone());
            let callee_state = state.copied(locals);
            let cp = ControlPoint::Node(clo.func.clone(), self.cfg.entry(&clo.func), view.clone());
            self.store.update(&cp, callee_state);
        }
        Ok(())
    }

    fn call_continuations(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        fv: &S::Value,
        args: &[S::Value],
    ) -> Result<()> {
        let caller_returns_comp = self.cfg.is_return_comp(func);
        let wrapped: Vec<S::Value> = args
            .iter()
            .map(|v| if caller_returns_comp { v.wrap_completion() } else { v.clone() })
            .collect();

        for cont in fv.get_cont() {
            if !self.cfg.lookup_function(&cont.func) {
                return Err(AnalysisError::malformed_ir(
                    func.clone(),
                    format!("resume of unknown function {}", cont.func),
                ));
            }
            let mut locals: Map<_, _> = self.cfg.get_locals(&cont.func, wrapped.clone(), true);
            locals.extend(cont.captured.clone());
            let cont_state = state.copied(locals);
            let cp = ControlPoint::Node(cont.func.clone(), cont.entry, cont.view.clone());
            self.store.update(&cp, cont_state);
        }
        Ok(())
    }

    fn transfer_sdo_call(
        &mut self,
        state: &mut S,
        func: &FuncId,
        node: NodeId,
        view: &Vw,
        base: &S::Value,
        method: &str,
        args: &[S::Value],
    ) -> Result<S::Value> {
        match base.get_single() {
            Flat::Bot => Ok(S::Value::bottom()),
            Flat::Elem(Single::Ast { lexical: true, ast: _ }) => Ok(base.get_lexical(method)),
            Flat::Elem(Single::Ast { lexical: false, ast }) => {
                let target = self.resolve_sdo(&ast, method)?;
                let fv = S::Value::from_closure(Closure {
                    func: target,
                    captured: Map::new(),
                });
                self.call_closures(state, func, node, view, &fv, args, Some(base))?;
                Ok(S::Value::bottom())
            }
            Flat::Elem(Single::Scalar(_)) | Flat::Elem(Single::Grammar(_)) => {
                Err(AnalysisError::invalid_sdo(method.to_string()))
            }
            Flat::Top => {
                let joined = base.get_lexical(method);
                for (ast_val, target) in base.get_sdo(method) {
                    let fv = S::Value::from_closure(Closure {
                        func: target,
                        captured: Map::new(),
                    });
                    self.call_closures(state, func, node, view, &fv, args, Some(&ast_val))?;
                }
                Ok(joined)
            }
        }
    }
}
