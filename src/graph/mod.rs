//! The road network: segments, their quantized endpoints, and the
//! undirected graph and spatial index built over them.

#[doc(hidden)]
pub mod item;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod segment;
pub mod traits;


#[doc(inline)]
pub use item::*;
#[doc(inline)]
pub use node::*;
#[doc(inline)]
pub use segment::*;
#[doc(inline)]
pub use traits::*;
