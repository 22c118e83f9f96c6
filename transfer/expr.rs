//! C2: evaluate an expression against a state, producing an abstract
//! value (§4.4). Total over the expression language — every arm returns
//! a value (possibly bottom), never a "no value" case.

use crate::commons::FuncId;
use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::{AbsValue, Closure, Continuation, Flat, Single};
use crate::domain::view::View;
use crate::error::{AnalysisError, Result};
use crate::ir::{BinOp, Expr, Literal, RefExpr};
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
    pub fn eval_expr(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        e: &Expr,
    ) -> Result<S::Value> {
        if state.is_bottom() {
            return Ok(S::Value::bottom());
        }

        match e {
            Expr::Lit(l) => Ok(S::Value::alpha(
                <S::Value as AbsValue<Vw>>::Concrete::from(l.clone()),
            )),

            Expr::Ref(r) => {
                let rv = self.resolve_ref(state, func, view, r)?;
                Ok(state.resolve(&rv))
            }

            Expr::Unary(op, operand) => {
                let v = self.eval_expr(state, func, view, operand)?;
                Ok(self.apply_unary(&v, *op))
            }

            Expr::Binary(op, l, r) => {
                if let Some(v) = self.eval_binary_eq_absent(state, func, view, *op, l, r)? {
                    return Ok(v);
                }
                let lv = self.eval_expr(state, func, view, l)?;
                let rv = self.eval_expr(state, func, view, r)?;
                Ok(self.apply_binary(state, &lv, &rv, *op))
            }

            Expr::Variadic(op, operands) => {
                let mut vs = Vec::with_capacity(operands.len());
                for o in operands {
                    vs.push(self.eval_expr(state, func, view, o)?);
                }
                Ok(self.apply_variadic(*op, &vs))
            }

            Expr::And(l, r) => self.eval_and(state, func, view, l, r),
            Expr::Or(l, r) => self.eval_or(state, func, view, l, r),

            Expr::Comp { ty, value, target } => {
                let ty_v = self.eval_expr(state, func, view, ty)?;
                let val_v = self.eval_expr(state, func, view, value)?;
                let tgt_v = self.eval_expr(state, func, view, target)?;
                Ok(S::Value::make_completion(&ty_v, &val_v, &tgt_v))
            }

            Expr::IsCompletion(inner) => {
                let v = self.eval_expr(state, func, view, inner)?;
                Ok(super::lift_bool::<Vw, S::Value>(v.is_completion()))
            }

            Expr::ReturnIfAbrupt { expr, check } => {
                let v = self.eval_expr(state, func, view, expr)?;
                if *check {
                    let abrupt = v.abrupt_completion();
                    self.submit_return(state, func, view, abrupt);
                }
                let unwrapped = v.unwrap_completion();
                if unwrapped.is_bottom() {
                    *state = S::bottom();
                }
                Ok(unwrapped)
            }

            Expr::Pop { list, front } => {
                let list_v = self.eval_expr(state, func, view, list)?;
                Ok(state.pop(&list_v, *front))
            }

            Expr::Parse { code, rule } => {
                let code_v = self.eval_expr(state, func, view, code)?;
                let rule_v = self.eval_expr(state, func, view, rule)?;
                Ok(code_v.parse(&rule_v))
            }

            Expr::GetChildren { kind, ast, site } => {
                self.eval_get_children(state, func, view, kind.as_deref(), ast, *site)
            }

            Expr::TypeOf(inner) => {
                let v = self.eval_expr(state, func, view, inner)?;
                Ok(state.type_of(&v))
            }

            Expr::TypeCheck { name, expr } => {
                let v = self.eval_expr(state, func, view, expr)?;
                Ok(v.type_check(name))
            }

            Expr::Convert { expr, cop, radix } => {
                let v = self.eval_expr(state, func, view, expr)?;
                let radix_v = match radix {
                    Some(r) => Some(self.eval_expr(state, func, view, r)?),
                    None => None,
                };
                Ok(v.convert(*cop, radix_v.as_ref()))
            }

            Expr::IsArrayIndex(inner) => {
                let v = self.eval_expr(state, func, view, inner)?;
                Ok(self.eval_is_array_index(&v))
            }

            Expr::SourceText(inner) => {
                let v = self.eval_expr(state, func, view, inner)?;
                Ok(v.source_text())
            }

            Expr::Clo { fname, captured } => {
                let mut cap = crate::commons::Map::new();
                for name in captured {
                    cap.insert(name.clone(), state.lookup_local(name));
                }
                Ok(S::Value::from_closure(Closure {
                    func: fname.clone(),
                    captured: cap,
                }))
            }

            Expr::Cont { fname } => {
                let entry = self.cfg.entry(fname);
                let mut cap = crate::commons::Map::new();
                for name in &self.cfg.named_locals(func) {
                    cap.insert(name.clone(), state.lookup_local(name));
                }
                // `ret_edges(func, view)` is already keyed by this exact
                // (func, view) pair, which is also the continuation's
                // return point (it resumes the same function under the
                // same view) — there is nothing left to copy.
                Ok(S::Value::from_continuation(Continuation {
                    func: fname.clone(),
                    entry,
                    view: view.clone(),
                    captured: cap,
                }))
            }

            Expr::AllocMap { site, ty, pairs } => {
                let mut vs = Vec::with_capacity(pairs.len());
                for (k, v) in pairs {
                    let kv = self.eval_expr(state, func, view, k)?;
                    let vv = self.eval_expr(state, func, view, v)?;
                    vs.push((kv, vv));
                }
                Ok(state.alloc_map(self.alloc_site(*site, view), ty.as_deref(), vs))
            }

            Expr::AllocList { site, elems } => {
                let mut vs = Vec::with_capacity(elems.len());
                for e in elems {
                    vs.push(self.eval_expr(state, func, view, e)?);
                }
                Ok(state.alloc_list(self.alloc_site(*site, view), vs))
            }

            Expr::AllocListConcat { site, lists } => {
                let mut vs = Vec::with_capacity(lists.len());
                for l in lists {
                    vs.push(self.eval_expr(state, func, view, l)?);
                }
                Ok(state.alloc_list_concat(self.alloc_site(*site, view), vs))
            }

            Expr::AllocSymbol { site, desc } => {
                let d = self.eval_expr(state, func, view, desc)?;
                Ok(state.alloc_symbol(self.alloc_site(*site, view), d))
            }

            Expr::Copy { site, obj } => {
                let o = self.eval_expr(state, func, view, obj)?;
                Ok(state.copy_obj(self.alloc_site(*site, view), &o))
            }

            Expr::Keys { site, obj, int_sorted } => {
                let o = self.eval_expr(state, func, view, obj)?;
                Ok(state.keys(self.alloc_site(*site, view), &o, *int_sorted))
            }

            Expr::Contains { list, elem, field } => {
                let list_v = self.eval_expr(state, func, view, list)?;
                let elem_v = self.eval_expr(state, func, view, elem)?;
                Ok(state.contains(&list_v, &elem_v, field.as_deref()))
            }

            Expr::Duplicate { site, obj } => {
                let o = self.eval_expr(state, func, view, obj)?;
                Ok(state.duplicated(&o, self.alloc_site(*site, view)))
            }
        }
    }

    fn alloc_site(&self, site: crate::commons::SiteId, view: &Vw) -> crate::domain::state::AllocSite<Vw> {
        crate::domain::state::AllocSite {
            site,
            view: view.clone(),
        }
    }

    /// `Eq(ref, absent)` (§4.4): `not exists(ref)`, tried before the
    /// ordinary binary-operator path since an absent field has no value to
    /// read.
    fn eval_binary_eq_absent(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        op: BinOp,
        l: &Expr,
        r: &Expr,
    ) -> Result<Option<S::Value>> {
        if op != BinOp::Eq {
            return Ok(None);
        }
        let ref_side = match (l, r) {
            (Expr::Ref(rexpr), Expr::Lit(Literal::Absent)) => Some(rexpr),
            (Expr::Lit(Literal::Absent), Expr::Ref(rexpr)) => Some(rexpr),
            _ => None,
        };
        match ref_side {
            Some(rexpr) => {
                let rv = self.resolve_ref(state, func, view, rexpr)?;
                let exists = state.exists(&rv);
                Ok(Some(super::lift_bool::<Vw, S::Value>(!exists)))
            }
            None => Ok(None),
        }
    }

    fn eval_and(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        l: &Expr,
        r: &Expr,
    ) -> Result<S::Value> {
        let lv = self.eval_expr(state, func, view, l)?;
        match lv.truthy() {
            Flat::Elem(false) => Ok(lv),
            Flat::Elem(true) => self.eval_expr(state, func, view, r),
            Flat::Bot => Ok(S::Value::bottom()),
            Flat::Top => {
                let rv = self.eval_expr(state, func, view, r)?;
                Ok(super::lift_bool::<Vw, S::Value>(false).join(&rv))
            }
        }
    }

    fn eval_or(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        l: &Expr,
        r: &Expr,
    ) -> Result<S::Value> {
        let lv = self.eval_expr(state, func, view, l)?;
        match lv.truthy() {
            Flat::Elem(true) => Ok(lv),
            Flat::Elem(false) => self.eval_expr(state, func, view, r),
            Flat::Bot => Ok(S::Value::bottom()),
            Flat::Top => {
                let rv = self.eval_expr(state, func, view, r)?;
                Ok(super::lift_bool::<Vw, S::Value>(true).join(&rv))
            }
        }
    }

    fn eval_get_children(
        &mut self,
        state: &mut S,
        func: &FuncId,
        view: &Vw,
        kind: Option<&Expr>,
        ast: &Expr,
        site: crate::commons::SiteId,
    ) -> Result<S::Value> {
        let ast_v = self.eval_expr(state, func, view, ast)?;
        let ast_single = ast_v.get_single();

        match kind {
            None => match ast_single {
                Flat::Bot => {
                    *state = S::bottom();
                    Ok(S::Value::bottom())
                }
                Flat::Top => Err(AnalysisError::exploded("EGetChildren")),
                Flat::Elem(Single::Ast { lexical: false, ast }) => {
                    let children: Vec<S::Value> = ast
                        .optional_children_flat()
                        .into_iter()
                        .map(|c| S::Value::from_ast(c, false))
                        .collect();
                    Ok(state.alloc_list(self.alloc_site(site, view), children))
                }
                _ => Err(AnalysisError::exploded("EGetChildren")),
            },
            Some(kind_e) => {
                let kind_v = self.eval_expr(state, func, view, kind_e)?;
                match (kind_v.get_single(), ast_single) {
                    (Flat::Bot, _) | (_, Flat::Bot) => {
                        *state = S::bottom();
                        Ok(S::Value::bottom())
                    }
                    (Flat::Top, _) | (_, Flat::Top) => Err(AnalysisError::exploded("EGetChildren")),
                    (Flat::Elem(Single::Grammar(name)), Flat::Elem(Single::Ast { ast, .. })) => {
                        let children: Vec<S::Value> = ast
                            .children_named(&name)
                            .into_iter()
                            .map(|c| S::Value::from_ast(c, false))
                            .collect();
                        Ok(state.alloc_list(self.alloc_site(site, view), children))
                    }
                    _ => Err(AnalysisError::exploded("EGetChildren")),
                }
            }
        }
    }

    fn eval_is_array_index(&self, v: &S::Value) -> S::Value {
        let s = match v.get_single() {
            Flat::Elem(Single::Scalar(c)) => c.as_str().map(str::to_owned),
            _ => None,
        };
        match s {
            Some(s) => {
                let is_index = match s.parse::<f64>() {
                    Ok(n) if n.is_finite() && n >= 0.0 && n < 2f64.powi(32) - 1.0 => {
                        let as_int = n as u32;
                        format_canonical(n) == s && as_int.to_string() == format_canonical(n)
                    }
                    _ => false,
                };
                super::lift_bool::<Vw, S::Value>(is_index)
            }
            None => super::bool_top::<Vw, S::Value>(),
        }
    }
}

fn format_canonical(n: f64) -> String {
    let i = n as i64;
    if i as f64 == n {
        i.to_string()
    } else {
        n.to_string()
    }
}
