//! Route distances between the candidates of consecutive layers.
//!
//! The solver asks a [`Router`] for a [`DistanceMatrix`] between every
//! candidate of one layer and every candidate of the next. The default
//! [`GraphRouter`] resolves these over the road [graph](crate::Graph),
//! but any implementation, such as a fixture within tests, may be supplied.

#[doc(hidden)]
pub mod definition;
#[doc(hidden)]
pub mod graph;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use definition::*;
#[doc(inline)]
pub use graph::*;
