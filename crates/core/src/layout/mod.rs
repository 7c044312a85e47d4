//! This module maps hex coordinates onto a 2D screen and back.
//!
//! ## Screen Coordinates
//!
//! Screen coordinates are plain Cartesian `(x, y)` pairs, usually pixels. The
//! hex module doesn't care about them at all; they only matter when you need
//! to draw cells or figure out which cell the mouse is over. Whether `+y`
//! points up or down is up to the caller, the math is the same either way.
//!
//! A [Layout] pins down three things:
//!
//! - An [Orientation], which decides whether hexagons have a corner at the top
//!   (pointy) or an edge at the top (flat)
//! - A size, the distance from a hexagon's center to its corners along each
//!   axis
//! - An origin, the screen position of the center of cell `(0, 0, 0)`

mod config;
mod orientation;
mod unit;

pub use self::{config::*, orientation::*, unit::*};

use crate::hex::{FractionalHex, Hex, HexCoordinateValue};
use anyhow::{anyhow, bail};
use log::debug;
use nalgebra::Vector2;
use std::f64;
use validator::Validate;

/// The number of corners on a hexagon. Shocking, I know.
const CORNERS: usize = 6;

/// Converts between hex space and screen space. A layout is created once (from
/// an [Orientation], a size and an origin) and can then be used for any number
/// of conversions. Layouts are immutable; if you need different settings, just
/// make a new one, they're very cheap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    size: Point,
    origin: Point,
}

impl Layout {
    /// Create a new layout. Returns an error if either component of `size` is
    /// zero or non-finite, or if `origin` is non-finite. Those would make
    /// every pixel conversion produce garbage.
    pub fn new(
        orientation: Orientation,
        size: Point,
        origin: Point,
    ) -> anyhow::Result<Self> {
        if validate_size(&size).is_err() {
            bail!(
                "Invalid layout size {}; both components must be finite and \
                non-zero",
                size
            );
        }
        if validate_origin(&origin).is_err() {
            bail!(
                "Invalid layout origin {}; both components must be finite",
                origin
            );
        }
        Ok(Self {
            orientation,
            size,
            origin,
        })
    }

    /// Initialize a new layout from a config. Returns an error if the config
    /// is invalid.
    pub fn from_config(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        debug!("Initializing layout from {:?}", config);
        Self::new(config.orientation.orientation(), config.size, config.origin)
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Convert a point from hex space to screen space. Works for both whole
    /// cells (which land on the cell's center) and fractional points.
    pub fn hex_to_pixel(&self, hex: impl HexCoordinateValue) -> Point {
        let axial: Vector2<f64> = Vector2::new(hex.q().into(), hex.r().into());
        let unscaled = self.orientation.forward() * axial;
        Point::from(unscaled.component_mul(&Vector2::from(self.size)))
            + self.origin
    }

    /// Convert a point from screen space to hex space. **This does not round
    /// to a cell.** The output is the exact point in hex space, so you'll
    /// usually want to call [FractionalHex::try_round] on it, or just use
    /// [Self::hex_at].
    pub fn pixel_to_hex(&self, point: Point) -> FractionalHex {
        let normalized = Vector2::from(point - self.origin)
            .component_div(&Vector2::from(self.size));
        let axial = self.orientation.inverse() * normalized;
        FractionalHex::new_qr(axial.x, axial.y)
    }

    /// Get the cell that contains a screen position. Returns an error if the
    /// point is non-finite, or so far from the origin that the cell would be
    /// out of range. See [FractionalHex::try_round].
    pub fn hex_at(&self, point: Point) -> anyhow::Result<Hex> {
        self.pixel_to_hex(point).try_round()
    }

    /// Get the offset from a hexagon's center to one of its corners. Corners
    /// are numbered `[0, 6)`, each one a sixth of a turn past the last, and
    /// corner 0 sits at the orientation's start angle. Returns an error for any
    /// other corner index.
    pub fn hex_corner_offset(&self, corner: usize) -> anyhow::Result<Point> {
        if corner < CORNERS {
            Ok(self.corner_offset(corner))
        } else {
            Err(anyhow!(
                "Invalid corner index {}; must be in [0, {})",
                corner,
                CORNERS
            ))
        }
    }

    /// Get the 6 corners of a cell's hexagon in screen space, in corner order.
    /// This traces the outline of the hexagon, so the output can be handed
    /// straight to a polygon renderer.
    pub fn polygon_corners(&self, hex: Hex) -> [Point; CORNERS] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [center; CORNERS];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = center + self.corner_offset(i);
        }
        corners
    }

    /// Corner offset without the range check. Any index works here, it just
    /// wraps around.
    fn corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0 * f64::consts::PI
            * (corner as f64 + self.orientation.start_angle())
            / CORNERS as f64;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }
}
