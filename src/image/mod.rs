//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Near-black background removal (nobg)

pub mod background;
