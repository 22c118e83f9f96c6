//! Small shared pieces used throughout the core: interned identifiers and the
//! map/set aliases the rest of the crate builds on.
//!
//! Identifiers are hash-consed so that cloning an [`Id`] or [`FuncId`] is
//! cheap and so that the maps keyed by them (locals, the function table,
//! per-node instruction tables) get pointer-cheap `Eq`/`Hash`. The driver
//! that builds a CFG for this core is free to mint as many of these as it
//! likes; interning keeps repeated names (the same local read a hundred
//! times in a function body) from paying string-comparison cost on every
//! lookup.

use std::fmt;

pub use std::collections::{BTreeMap as Map, BTreeSet as Set};

use hashconsing::{consign, HConsed, HashConsign};

consign! {
    /// Interning table for identifier text.
    let ID_FACTORY = consign(1_000) for String;
}

/// An interned name: a local variable, parameter, or temporary.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(HConsed<String>);

impl Id {
    pub fn new(name: impl Into<String>) -> Self {
        Id(ID_FACTORY.mk(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::new(s)
    }
}

/// An interned function name, keying the CFG's function table.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FuncId(HConsed<String>);

impl FuncId {
    pub fn new(name: impl Into<String>) -> Self {
        FuncId(ID_FACTORY.mk(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FuncId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for FuncId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FuncId({})", self.0)
    }
}

impl From<&str> for FuncId {
    fn from(s: &str) -> Self {
        FuncId::new(s)
    }
}

/// A node's index within its function's body. Not interned: these are dense
/// small integers minted by the CFG builder, not repeated text.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A syntactic allocation-site index, unique within a function.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SiteId(pub u32);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "site{}", self.0)
    }
}
