//! A Hidden-Markov-Model (HMM) matching
//! transition module that allows for
//! matching raw data to an underlying
//! network.

pub mod candidate;
pub mod costing;
pub mod entity;
pub mod layer;
pub mod primitives;
pub mod routing;
pub mod solver;

// Re-Exports
#[doc(inline)]
pub use candidate::*;
#[doc(inline)]
pub use costing::*;
#[doc(inline)]
pub use primitives::*;
#[doc(inline)]
pub use routing::*;
#[doc(inline)]
pub use solver::*;

pub use entity::*;
pub use layer::*;
