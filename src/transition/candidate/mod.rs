//! Candidates are the positions an input point may be matched to,
//! one for every road segment within the search radius of the point.

pub mod collapse;
pub mod entry;

#[doc(inline)]
pub use collapse::*;
#[doc(inline)]
pub use entry::*;
