//! Routing primitives shared by the routers.

pub mod dijkstra;
#[doc(inline)]
pub use dijkstra::*;

pub mod cache;
#[doc(inline)]
pub use cache::*;
