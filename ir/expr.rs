//! The expression language evaluated by C2 (§4.4).

use crate::commons::{FuncId, Id, SiteId};

use super::ops::{BinOp, ConvertOp, UnOp, VariadicOp};
use super::reference::RefExpr;

/// Literal forms; these lift directly into the simple-scalar corner of the
/// abstract value lattice (§3) via `AbsValue::alpha`.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Str(String),
    Num(f64),
    Math(i64),
    BigInt(i64),
    CodeUnit(u16),
    /// A named enum-like constant, e.g. `~normal~`.
    Const(String),
    Undefined,
    Null,
    Absent,
}

#[derive(Clone, Debug)]
pub enum Expr {
    Lit(Literal),

    /// Read a reference's current value.
    Ref(RefExpr),

    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Variadic(VariadicOp, Vec<Expr>),

    /// Short-circuiting `&&`; the right side is not evaluated when the left
    /// side concretely determines the result (§4.4, §8 S3).
    And(Box<Expr>, Box<Expr>),
    /// Short-circuiting `||`, dual to [`Expr::And`].
    Or(Box<Expr>, Box<Expr>),

    /// `EComp(ty, val, tgt)`: construct a completion record.
    Comp {
        ty: Box<Expr>,
        value: Box<Expr>,
        target: Box<Expr>,
    },
    IsCompletion(Box<Expr>),
    /// `ReturnIfAbrupt(e, check)`. When `check`, an abrupt completion is
    /// shortcut out of the enclosing function (§4.4); otherwise this is a
    /// plain unwrap.
    ReturnIfAbrupt { expr: Box<Expr>, check: bool },

    /// Destructive pop of the front or back element of a list.
    Pop { list: Box<Expr>, front: bool },

    Parse { code: Box<Expr>, rule: Box<Expr> },

    /// `GetChildren(kindOpt, ast)` (§4.4). Allocates the result list at
    /// `site`, like the other allocation-bearing forms below.
    GetChildren {
        kind: Option<Box<Expr>>,
        ast: Box<Expr>,
        site: SiteId,
    },

    TypeOf(Box<Expr>),
    TypeCheck { name: String, expr: Box<Expr> },
    Convert {
        expr: Box<Expr>,
        cop: ConvertOp,
        radix: Option<Box<Expr>>,
    },
    IsArrayIndex(Box<Expr>),
    SourceText(Box<Expr>),

    /// `EClo(fname, cap)`: capture the current bindings of `captured` and
    /// package with a reference to `fname`.
    Clo { fname: FuncId, captured: Vec<Id> },
    /// `ECont(fname)`: capture a resumable suspended computation.
    Cont { fname: FuncId },

    AllocMap {
        site: SiteId,
        ty: Option<String>,
        pairs: Vec<(Expr, Expr)>,
    },
    AllocList {
        site: SiteId,
        elems: Vec<Expr>,
    },
    AllocListConcat {
        site: SiteId,
        lists: Vec<Expr>,
    },
    AllocSymbol {
        site: SiteId,
        desc: Box<Expr>,
    },
    Copy {
        site: SiteId,
        obj: Box<Expr>,
    },
    Keys {
        site: SiteId,
        obj: Box<Expr>,
        int_sorted: bool,
    },

    /// `Contains(list, elem, field?)`: whether `list` holds `elem` (or,
    /// when `field` is set, a record whose `field` equals `elem`).
    Contains {
        list: Box<Expr>,
        elem: Box<Expr>,
        field: Option<String>,
    },
    /// `Duplicate(obj)`: a fresh, independent copy of `obj`'s heap object,
    /// allocated at `site`.
    Duplicate {
        site: SiteId,
        obj: Box<Expr>,
    },
}

impl Expr {
    pub fn lit(l: Literal) -> Self {
        Expr::Lit(l)
    }

    pub fn id(name: impl Into<Id>) -> Self {
        Expr::Ref(RefExpr::Id(name.into()))
    }
}
