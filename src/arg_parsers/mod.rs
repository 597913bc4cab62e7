//! Parsers for command-line values that need more than `FromStr` on a primitive,
//! plugged into `clap` as value parsers.

mod geometry;
pub use geometry::*;
mod identifier;
pub use identifier::*;
