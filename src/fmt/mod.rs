//! Pretty printing for Shotel programs
//!
//! Two notations are provided:
//!
//! - [`tree`]: `Display` for expressions in prefix tree notation, e.g.
//!   `PLUS(a, TIMES(13, 14))`, which spells out the shape the parser built.
//! - [`surface`]: `Display` for programs and definitions in the surface
//!   syntax, with the minimal parentheses needed to parse back the same tree.

pub mod surface;
pub mod tree;
