//! The abstract value domain (§3 "Abstract value"). This module defines
//! only the trait and the small carrier types (`Flat`, `Single`,
//! `Closure`, `Continuation`) the transfer rules need to pattern-match on;
//! a concrete lattice implementation is supplied by a driver (or, for this
//! crate's own tests, by the reference domain under `tests/common`).

use std::fmt;
use std::hash::Hash;

use crate::commons::{FuncId, Id, Map, NodeId};
use crate::ir::{BinOp, ConvertOp, Literal, UnOp, VariadicOp};

use super::ast::Ast;
use super::concrete::ConcreteValue;
use super::view::View;

/// An element of a flat lattice: no information (`Bot`), exactly one
/// concrete value (`Elem`), or more than one possible value (`Top`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Flat<T> {
    Bot,
    Elem(T),
    Top,
}

impl<T> Flat<T> {
    pub fn is_bottom(&self) -> bool {
        matches!(self, Flat::Bot)
    }

    pub fn is_top(&self) -> bool {
        matches!(self, Flat::Top)
    }

    pub fn as_elem(&self) -> Option<&T> {
        match self {
            Flat::Elem(t) => Some(t),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flat<U> {
        match self {
            Flat::Bot => Flat::Bot,
            Flat::Elem(t) => Flat::Elem(f(t)),
            Flat::Top => Flat::Top,
        }
    }
}

/// The shape of a single concrete element, once `get_single` has
/// determined there is exactly one (§4.4's `GetChildren`, §4.7's SDO call
/// dispatch). Exhaustively matching this is how C2/C6/C9 implement the
/// "pairs of tagged variants" pattern the specification calls for (§9).
#[derive(Clone, Debug)]
pub enum Single<C, A> {
    Scalar(C),
    Grammar(String),
    Ast { lexical: bool, ast: A },
}

/// A closure value: `AClo(function, captured_locals)`.
#[derive(Clone, Debug)]
pub struct Closure<V> {
    pub func: FuncId,
    pub captured: Map<Id, V>,
}

/// A continuation value: `ACont(entry_node_point, captured_locals)`, plus
/// the caller return-edges copied in at creation time (§4.4 `ECont`) so a
/// later resumption's return can fan back out to the original callers.
#[derive(Clone, Debug)]
pub struct Continuation<V, Vw> {
    pub func: FuncId,
    pub entry: NodeId,
    pub view: Vw,
    pub captured: Map<Id, V>,
}

/// The abstract value domain. `Vw` is the context-view type this analysis
/// run is parameterized over (continuations carry a captured view).
pub trait AbsValue<Vw: View>: Clone + fmt::Debug + PartialEq {
    /// The concrete scalar domain, reused for constant folding (§4.5).
    /// Literals lift into this domain directly (§3 "simple scalars")
    /// before `alpha` abstracts them.
    type Concrete: ConcreteValue + From<Literal>;
    /// The concrete AST handle domain (§4.4, §4.8).
    type Ast: Ast;
    /// A heap allocation-site handle (§3 "Allocation site").
    type Loc: Clone + Eq + Ord + Hash + fmt::Debug + fmt::Display;

    fn bottom() -> Self;
    fn alpha(c: Self::Concrete) -> Self;
    fn from_ast(ast: Self::Ast, lexical: bool) -> Self;
    fn from_grammar(name: String) -> Self;

    fn get_single(&self) -> Flat<Single<Self::Concrete, Self::Ast>>;
    fn is_bottom(&self) -> bool;

    fn leq(&self, other: &Self) -> bool;
    fn join(&self, other: &Self) -> Self;
    fn meet(&self, other: &Self) -> Self;
    /// Set difference within the lattice (`-`), used by the pruner to
    /// remove a type from a union (§4.6 `prune_type`).
    fn minus(&self, other: &Self) -> Self;

    /// The two-valued truth lattice projection used for branch dispatch
    /// and short-circuit evaluation (§4.1, §4.4): `Elem(true)`/`Elem(false)`
    /// when concretely known, `Top` when either is reachable, `Bot` when
    /// neither is.
    fn truthy(&self) -> Flat<bool>;

    fn is_completion(&self) -> bool;
    fn wrap_completion(&self) -> Self;
    fn unwrap_completion(&self) -> Self;
    fn abrupt_completion(&self) -> Self;

    fn type_check(&self, name: &str) -> Self;
    /// Narrow `self` under the knowledge that `typeof self == ty` is
    /// `positive` (true) or its negation (false).
    fn prune_type(&self, ty: &Self, positive: bool) -> Self;

    fn parse(&self, rule: &Self) -> Self;
    fn source_text(&self) -> Self;

    /// `EComp(ty, val, tgt)`'s constructor (§4.4).
    fn make_completion(ty: &Self, value: &Self, target: &Self) -> Self;

    fn from_closure(clo: Closure<Self>) -> Self;
    fn from_continuation(cont: Continuation<Self, Vw>) -> Self;

    fn get_clos(&self) -> Vec<Closure<Self>>;
    fn get_cont(&self) -> Vec<Continuation<Self, Vw>>;
    /// The `Top` case of an SDO call (§4.7): every `(ast, function)` pair
    /// this value's possible ASTs could dispatch `method` to.
    fn get_sdo(&self, method: &str) -> Vec<(Self, FuncId)>;
    /// The join of the concrete interpreter's lexical-SDO result over
    /// every lexical AST this value may denote.
    fn get_lexical(&self, method: &str) -> Self;

    fn get_desc_value(&self) -> Self;
    fn loc(&self) -> Option<Self::Loc>;

    fn convert(&self, cop: ConvertOp, radix: Option<&Self>) -> Self;

    fn lattice_unary(&self, op: UnOp) -> Self;
    fn lattice_binary(&self, op: BinOp, rhs: &Self) -> Self;
    fn lattice_variadic(op: VariadicOp, operands: &[Self]) -> Self;
}
