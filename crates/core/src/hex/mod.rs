//! This module holds the cube coordinate types and every operation that works
//! purely in hex space (no pixels involved).
//!
//! ## Coordinate System
//!
//! We use the [cube coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three components, `q`, `r` and `s`. **For every
//! coordinate, `q + r + s = 0`.** Hexagons are laid out in two dimensions, but
//! using three components constrained to that plane makes distance, rotation
//! and rounding formulas much simpler than any two-axis scheme.
//!
//! There are two flavors of coordinate:
//!
//! - [Hex] refers to a whole cell. All three components are integers, and only
//!   `q` and `r` are stored since `s` can always be derived.
//! - [FractionalHex] refers to any point on the plane, not just cell centers.
//!   These show up transiently, e.g. while interpolating between two cells or
//!   when converting a pixel position back into hex space. Use
//!   [FractionalHex::round] to get back to the cell that contains the point.
//!
//! The boundary between the two is always [FractionalHex::round].
//!
//! ## Directions
//!
//! Each cell has six neighbors, one per [HexDirection]. The direction with
//! index `0` points toward `+q, -s`, and each following index rotates one
//! sixth of a turn further. See [HexDirection] for the full table.

mod direction;
mod line;
mod unit;

pub use self::{direction::*, line::*, unit::*};
