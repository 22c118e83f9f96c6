//! C3: lift unary/binary/variadic operators over the flat value lattice
//! (§4.5). The rule shape is uniform across arities: constant-fold when
//! every operand is a concrete scalar, short-circuit on bottom, otherwise
//! delegate to the domain's own lattice operator.

use crate::domain::cfg::Cfg;
use crate::domain::interp::ConcreteInterp;
use crate::domain::state::AbsState;
use crate::domain::value::{AbsValue, Flat, Single};
use crate::domain::view::View;
use crate::ir::{BinOp, UnOp, VariadicOp};
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
    pub fn apply_unary(&self, v: &S::Value, op: UnOp) -> S::Value {
        if v.is_bottom() {
            return S::Value::bottom();
        }
        if let Flat::Elem(Single::Scalar(c)) = v.get_single() {
            if let Some(r) = self.interp.interp_unary(op, &c) {
                return S::Value::alpha(r);
            }
        }
        v.lattice_unary(op)
    }

    /// The equality special case (§4.5): two values that denote the
    /// *same* abstract location compare `true` only when that location is
    /// known to be a singleton; otherwise the comparison is genuinely
    /// unknown (`⊤`). Distinct locations compare `false`. Every other
    /// operator, and equality between non-location operands, falls
    /// through to the ordinary constant-fold-or-delegate rule.
    pub fn apply_binary(&self, state: &S, lhs: &S::Value, rhs: &S::Value, op: BinOp) -> S::Value {
        if lhs.is_bottom() || rhs.is_bottom() {
            return S::Value::bottom();
        }

        if matches!(op, BinOp::Eq | BinOp::Neq) {
            if let (Some(l), Some(r)) = (lhs.loc(), rhs.loc()) {
                let equal_locs = l == r;
                let result = if equal_locs {
                    if state.is_single(&l) {
                        Flat::Elem(true)
                    } else {
                        Flat::Top
                    }
                } else {
                    Flat::Elem(false)
                };
                let result = match result {
                    Flat::Elem(b) => Some(if op == BinOp::Neq { !b } else { b }),
                    _ => None,
                };
                return match result {
                    Some(b) => super::lift_bool::<Vw, S::Value>(b),
                    None => super::bool_top::<Vw, S::Value>(),
                };
            }
        }

        if let (Flat::Elem(Single::Scalar(lc)), Flat::Elem(Single::Scalar(rc))) =
            (lhs.get_single(), rhs.get_single())
        {
            if let Some(r) = self.interp.interp_binary(op, &lc, &rc) {
                return S::Value::alpha(r);
            }
        }

        lhs.lattice_binary(op, rhs)
    }

    pub fn apply_variadic(&self, op: VariadicOp, operands: &[S::Value]) -> S::Value {
        if operands.iter().any(|v| v.is_bottom()) {
            return S::Value::bottom();
        }

        let concretes: Option<Vec<_>> = operands
            .iter()
            .map(|v| match v.get_single() {
                Flat::Elem(Single::Scalar(c)) => Some(c),
                _ => None,
            })
            .collect();

        if let Some(concretes) = concretes {
            if let Some(r) = self.interp.interp_variadic(op, &concretes) {
                return S::Value::alpha(r);
            }
        }

        S::Value::lattice_variadic(op, operands)
    }
}
