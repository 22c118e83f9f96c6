//! Syntactic reference expressions (§3 "Abstract reference value", §4.1
//! C1). A `RefExpr` names something that *could* be read or written; it is
//! resolved against a state by [`crate::transfer::reference`] into a
//! domain-level `RefValue` before any read/write happens.

use std::fmt;

use crate::commons::Id;

use super::expr::Expr;

#[derive(Clone, Debug)]
pub enum RefExpr {
    /// A plain identifier: a local, parameter, or temporary.
    Id(Id),
    /// A property access `base[key]`. Both sides are full expressions
    /// because the base and key are themselves computed, not just named.
    Prop { base: Box<Expr>, key: Box<Expr> },
}

impl RefExpr {
    pub fn id(name: impl Into<Id>) -> Self {
        RefExpr::Id(name.into())
    }

    pub fn prop(base: Expr, key: Expr) -> Self {
        RefExpr::Prop {
            base: Box::new(base),
            key: Box::new(key),
        }
    }
}

impl fmt::Display for RefExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefExpr::Id(id) => write!(f, "{id}"),
            RefExpr::Prop { .. } => write!(f, "<prop>"),
        }
    }
}
