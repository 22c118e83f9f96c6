//! The transfer function core (§4): C1-C9, generic over whatever
//! abstract domain, CFG, concrete interpreter, and semantics store a
//! driver supplies.
//!
//! Bottom propagation is ordinary dataflow, not an error (§7 kind 1): a
//! state that has reached bottom is threaded through unchanged rather
//! than surfaced as `Err`. Only precision loss (`AnalysisError::Exploded`)
//! and malformed IR propagate via `?`.

pub mod call;
pub mod expr;
pub mod inst;
pub mod node;
pub mod operator;
pub mod prune;
pub mod reference;
pub mod return_;
pub mod sdo;

use std::marker::PhantomData;

use crate::domain::cfg::Cfg;
use crate::domain::state::AbsState;
use crate::domain::value::AbsValue;
use crate::domain::view::View;
use crate::ir::Literal;
use crate::store::SemanticsStore;

pub use node::apply;
pub use return_::transfer_return;
pub use sdo::SdoCache;

/// Bundles the three external collaborators (§6) the transfer rules need
/// on every call, mirroring the "interpreter struct carrying its fixed
/// collaborators" shape common to dataflow engines built this way: rather
/// than thread `cfg`/`interp`/`store` through every one of C1-C9's
/// signatures individually, they're borrowed once here and the `FuncId`/
/// view/state specific to a given step are passed as plain arguments.
pub struct Transfer<'a, S, Vw, I, C, St>
where
    Vw: View,
    S: AbsState<Vw>,
{
    pub cfg: &'a C,
    pub interp: &'a I,
    pub store: &'a mut St,
    pub sdo_cache: &'a SdoCache<<S::Value as AbsValue<Vw>>::Ast>,
    _marker: PhantomData<(S, Vw)>,
}

impl<'a, S, Vw, I, C, St> Transfer<'a, S, Vw, I, C, St>
where
    Vw: View,
    S: AbsState<Vw>,
{
    pub fn new(
        cfg: &'a C,
        interp: &'a I,
        store: &'a mut St,
        sdo_cache: &'a SdoCache<<S::Value as AbsValue<Vw>>::Ast>,
    ) -> Self {
        Transfer {
            cfg,
            interp,
            store,
            sdo_cache,
            _marker: PhantomData,
        }
    }
}

/// Lift a literal boolean into the abstract domain, used by the handful
/// of rules (`IsArrayIndex`, `Eq(ref, absent)`, `IsCompletion`) that
/// produce a boolean result directly rather than delegating to an
/// operator.
pub(crate) fn lift_bool<Vw, V>(b: bool) -> V
where
    Vw: View,
    V: AbsValue<Vw>,
{
    V::alpha(V::Concrete::from(Literal::Bool(b)))
}

/// The two-valued join of `true` and `false`, used where a rule cannot
/// determine a boolean result and must report "could be either" rather
/// than invent one.
pub(crate) fn bool_top<Vw, V>() -> V
where
    Vw: View,
    V: AbsValue<Vw>,
{
    lift_bool::<Vw, V>(true).join(&lift_bool::<Vw, V>(false))
}
