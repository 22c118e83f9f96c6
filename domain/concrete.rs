//! The concrete scalar domain backing `AbsValue::Concrete`. A driver's
//! concrete interpreter operates on these directly; the core only needs
//! enough structure to extract a string or number when a rule specifically
//! calls for one (e.g. `IsArrayIndex`).

use std::fmt;

/// A concrete scalar value, reused for constant folding (§4.5) and for the
/// handful of rules that inspect a concrete string or number directly.
///
/// Default accessors return `None`; a driver's concrete value type only
/// needs to override the ones its own scalar kinds can satisfy.
pub trait ConcreteValue: Clone + fmt::Debug + PartialEq {
    fn as_bool(&self) -> Option<bool> {
        None
    }
    fn as_str(&self) -> Option<&str> {
        None
    }
    fn as_number(&self) -> Option<f64> {
        None
    }
}
