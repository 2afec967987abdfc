//! Arrangement of a working set into a shelf loop.
//!
//! An [`Arrangement`] owns the items, the active ordering strategy, the
//! ordered sequence it produced and the cyclic total affinity of that
//! sequence. Items can be repositioned by name at 1-based positions.
//!
//! Callers must serialize mutating calls per instance. If item attributes
//! change, build a new arrangement.

mod layout;

pub use layout::Arrangement;
