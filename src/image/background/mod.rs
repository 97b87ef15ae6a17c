//! Remove near-black background from images.
//!
//! Every pixel whose R, G and B channels all fall below a threshold is
//! replaced with fully transparent white; the result is saved as RGBA PNG.

mod predicate;
mod process;

pub use process::{DEFAULT_THRESHOLD, remove_near_black_background};
