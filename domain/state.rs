//! The abstract state domain (§3 "Abstract state"). Like [`super::value`],
//! this module is trait-only: the local environment, heap, and bottom
//! marker are opaque to the core beyond the operations listed here.

use std::fmt;

use crate::commons::{Id, Map, SiteId};

use super::value::AbsValue;
use super::view::View;

/// An allocation site: a syntactic origin paired with the view active at
/// allocation time (§3). Two allocations with equal `(site, view)` pairs
/// must always yield the same location (determinism invariant #3).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AllocSite<Vw> {
    pub site: SiteId,
    pub view: Vw,
}

impl<Vw: fmt::Display> fmt::Display for AllocSite<Vw> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.site, self.view)
    }
}

/// An abstract reference value (§3): either a plain identifier or a
/// property access over two abstract values. Not an l-value by itself —
/// resolved against a state by `AbsState::update`/`exists`/`delete`.
#[derive(Clone, Debug)]
pub enum RefValue<V> {
    Id(Id),
    Prop(V, V),
}

pub trait AbsState<Vw: View>: Clone + fmt::Debug {
    type Value: AbsValue<Vw, Loc = Self::Loc>;
    type Loc: Clone + Eq + Ord + fmt::Debug + fmt::Display + std::hash::Hash;

    fn bottom() -> Self;
    fn is_bottom(&self) -> bool;

    fn leq(&self, other: &Self) -> bool;
    fn join(&self, other: &Self) -> Self;
    fn meet(&self, other: &Self) -> Self;

    fn define_local(&mut self, name: &Id, v: Self::Value);
    fn lookup_local(&self, name: &Id) -> Self::Value;

    fn resolve(&self, r: &RefValue<Self::Value>) -> Self::Value;
    fn update(&mut self, r: &RefValue<Self::Value>, v: Self::Value);
    fn delete(&mut self, r: &RefValue<Self::Value>);
    fn exists(&self, r: &RefValue<Self::Value>) -> bool;

    /// `contains(list, elem, field?)`: does `list` (optionally projecting
    /// through `field` on each element, e.g. for a list of records) hold a
    /// value overlapping `elem`?
    fn contains(&self, list: &Self::Value, elem: &Self::Value, field: Option<&str>) -> Self::Value;

    fn prepend(&mut self, list: &Self::Value, v: Self::Value);
    fn append(&mut self, list: &Self::Value, v: Self::Value);
    fn remove(&mut self, list: &Self::Value, elem: &Self::Value);
    fn pop(&mut self, list: &Self::Value, front: bool) -> Self::Value;

    fn alloc_map(
        &mut self,
        site: AllocSite<Vw>,
        ty: Option<&str>,
        pairs: Vec<(Self::Value, Self::Value)>,
    ) -> Self::Value;
    fn alloc_list(&mut self, site: AllocSite<Vw>, elems: Vec<Self::Value>) -> Self::Value;
    fn alloc_list_concat(&mut self, site: AllocSite<Vw>, lists: Vec<Self::Value>) -> Self::Value;
    fn alloc_symbol(&mut self, site: AllocSite<Vw>, desc: Self::Value) -> Self::Value;
    fn copy_obj(&mut self, site: AllocSite<Vw>, obj: &Self::Value) -> Self::Value;
    fn keys(&mut self, site: AllocSite<Vw>, obj: &Self::Value, int_sorted: bool) -> Self::Value;

    fn set_type(&mut self, loc: &Self::Loc, ty: &str);
    fn is_single(&self, loc: &Self::Loc) -> bool;
    /// `type_of(state)`: the heap-aware type projection of a value (a
    /// location's type may have been narrowed by `set_type`, e.g. from a
    /// return-type refinement at C8).
    fn type_of(&self, v: &Self::Value) -> Self::Value;

    /// `get(base_value, key_value)`: read a property off an arbitrary
    /// (possibly non-reference) base value, used by method/SDO call
    /// dispatch (C6) where the base isn't resolved through a reference.
    fn get_prop(&self, base: &Self::Value, key: &Self::Value) -> Self::Value;

    /// `duplicated(state)`: a fresh, independent copy of a heap object at
    /// a new location (used by the surrounding system for spec-level
    /// "duplicate the object" abstract operations; exposed here because
    /// §3 lists it among the state's required operations).
    fn duplicated(&mut self, v: &Self::Value, site: AllocSite<Vw>) -> Self::Value;

    /// `copied(locals := …)`: a copy of this state with its local
    /// environment replaced.
    fn copied(&self, locals: Map<Id, Self::Value>) -> Self;

    /// Merge a callee's exit state into a caller's state under the
    /// assignment `lhs := value` (§4.2).
    fn do_return(&self, caller_state: &Self, lhs_value: (Id, Self::Value)) -> Self;

    /// A copy of this state with its local environment cleared, used when
    /// packaging the `(value, state)` pair submitted to a return point
    /// (§4.3 `do_return`).
    fn clear_locals(&self) -> Self;
}
