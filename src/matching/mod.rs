//! Text matching primitives shared by the source parsers and the reconciler.
//!
//! Everything in here is a pure function over strings:
//! - `normalize`: canonical form used for every comparison
//! - `lines`: raw document text to an ordered line sequence
//! - `category`: line-to-category matching with derived aliases
//! - `nominee`: free-text winner string to nominee resolution

pub mod category;
pub mod lines;
pub mod nominee;
pub mod normalize;

pub use category::CategoryIndex;
pub use lines::extract_lines;
pub use nominee::match_nominee;
pub use normalize::normalize;
