//! The abstract transfer function at the heart of a whole-program static
//! analyzer: given a driver's CFG, abstract domain, concrete interpreter,
//! and semantics store, this crate implements the per-node and per-return
//! transfer rules (§4) that a fixed-point worklist driver repeatedly
//! applies until the store stabilizes.
//!
//! This crate does not own the worklist, the iteration order, or the
//! concrete shape of values and states — those are supplied by a driver
//! through the traits in [`domain`] and [`store`]. What it owns is the IR
//! syntax in [`ir`] and the transfer rules in [`transfer`] written against
//! it.

pub mod commons;
pub mod domain;
pub mod error;
pub mod ir;
pub mod store;
pub mod transfer;

pub use error::{AnalysisError, Result};
pub use transfer::{apply, transfer_return, SdoCache, Transfer};
