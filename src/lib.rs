#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod matcher;
pub mod transition;

#[doc(inline)]
pub use config::MatcherConfig;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use crate::geo::{LatLng, PlanarScale};
#[doc(inline)]
pub use graph::{Graph, NodeKey, RoadSegment, Scan, SegmentId};
#[doc(inline)]
pub use matcher::Matcher;
#[doc(inline)]
pub use transition::{Collapse, GraphRouter, Router, Transition};

pub type Result<T> = std::result::Result<T, Error>;
