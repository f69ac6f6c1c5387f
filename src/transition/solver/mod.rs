//! Solvers decode a [`Transition`](crate::Transition) graph into a [`Collapse`](crate::Collapse).

#[doc(hidden)]
pub mod methods;
#[doc(hidden)]
pub mod viterbi;


#[doc(inline)]
pub use methods::*;
#[doc(inline)]
pub use viterbi::*;
