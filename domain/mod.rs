//! The abstract domain: the traits a driver implements to plug a concrete
//! analysis into the transfer functions in [`crate::transfer`].

pub mod ast;
pub mod cfg;
pub mod concrete;
pub mod interp;
pub mod state;
pub mod value;
pub mod view;

pub use ast::Ast;
pub use cfg::Cfg;
pub use concrete::ConcreteValue;
pub use interp::ConcreteInterp;
pub use state::{AbsState, AllocSite, RefValue};
pub use value::{AbsValue, Closure, Continuation, Flat, Single};
pub use view::View;
