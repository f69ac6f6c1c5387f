//! You may override individual costing strategies
//! in order to apply custom functionality to the
//! transition solver. See the [`Strategy`] trait.
//!
//! ## Structure
//! Strategies are joined onto the aggregate [`CostingStrategies`]
//! structure, which is then supplied to the [`Matcher`](crate::Matcher)
//! or the [`Transition`](crate::Transition) directly.
//!
//! ```rust
//! use snapline::transition::CostingStrategies;
//!
//! // Create default strategies
//! let costing = CostingStrategies::default();
//! ```
//!
//! ### Creating your own strategy / heuristic
//!
//! Implement [`Strategy`] for your structure, with the context of the heuristic
//! you wish to override. The higher-order traits, like [`TransitionStrategy`],
//! are auto-derived for all which implement [`Strategy<TransitionContext>`].
//!
//! ```rust
//! use snapline::transition::{Strategy, TransitionContext};
//!
//! struct PreferShortRoutes;
//!
//! impl<'a> Strategy<TransitionContext<'a>> for PreferShortRoutes {
//!     fn calculate(&self, context: TransitionContext<'a>) -> Option<f64> {
//!         Some((-context.lengths.route_length / 100.0).exp())
//!     }
//! }
//! ```
//!
//! ### Default Strategies:
//! - [`GaussianEmission`]: Emission probability
//! - [`ExponentialTransition`]: Transition probability

#[doc(hidden)]
pub mod default;
#[doc(hidden)]
pub mod emission;
#[doc(hidden)]
pub mod transition;
#[doc(hidden)]
pub mod util;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use default::*;
#[doc(inline)]
pub use emission::*;
#[doc(inline)]
pub use transition::*;
#[doc(inline)]
pub use util::*;
