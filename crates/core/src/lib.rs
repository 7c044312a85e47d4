//! Hexgrid is the coordinate math for hexagon tile grids: cube coordinates,
//! neighbors, distances, line drawing, and the mapping between hex space and
//! screen space. It holds no grid state and draws nothing; a game or renderer
//! calls into it whenever it needs to reason about cells or pixels.
//!
//! ```
//! use hexgrid::{Hex, Layout, Orientation, Point};
//!
//! let layout = Layout::new(
//!     Orientation::pointy(),
//!     Point::new(32.0, 32.0),
//!     Point::new(400.0, 300.0),
//! )?;
//! let start = Hex::new(0, 0);
//! let end = Hex::new(3, -1);
//! assert_eq!(start.distance_to(end), 3);
//!
//! for cell in start.line_to(end) {
//!     let corners = layout.polygon_corners(cell);
//!     // Draw the polygon however you like
//!     # assert_eq!(corners.len(), 6);
//! }
//!
//! // Figure out which cell a click landed in
//! let clicked = layout.hex_at(Point::new(410.0, 290.0))?;
//! assert_eq!(clicked, Hex::new(0, 0));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! See the [hex] module for a description of the coordinate system, and
//! [Layout] for how it maps to screen space.

pub mod hex;
mod layout;
mod util;

pub use crate::{
    hex::{FractionalHex, Hex, HexCoordinateValue, HexDirection, HexLine},
    layout::{Layout, LayoutConfig, Orientation, OrientationKind, Point},
};
