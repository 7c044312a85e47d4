//! This sub-module contains the basic coordinate types for the hex system. See
//! the parent module documentation for more info on the coordinate system.

use crate::{
    hex::{HexDirection, HexLine},
    util::{unwrap, unwrap_or_bail},
};
use anyhow::{anyhow, bail};
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::ops;

/// Relative tolerance used when checking that a fractional coordinate sits on
/// the plane `q + r + s = 0`.
const PLANE_TOLERANCE: f64 = 1e-9;

/// A trait representing any three-component value in the hex coordinate
/// system. Both integral and fractional coordinates implement this, which lets
/// layout code convert either one into pixel space.
pub trait HexCoordinateValue: Copy {
    /// The primitive type of each component. Must be convertible to `f64` so
    /// it can be mathematically converted to screen space
    type Component: Into<f64>;

    /// The `q` component of the coordinate
    fn q(&self) -> Self::Component;

    /// The `r` component of the coordinate
    fn r(&self) -> Self::Component;

    /// The `s` component of the coordinate
    fn s(&self) -> Self::Component;
}

/// A single cell in a hex grid, in cube coordinates.
///
/// ## Implementation
///
/// Every valid cell falls on the plane `q + r + s = 0`, so this struct only
/// stores `q` and `r` and derives `s` as needed. That makes it impossible to
/// hold an invalid cell: the invariant holds by construction, and the only
/// constructor that takes all three components ([Hex::new_qrs]) validates
/// them.
///
/// ## Range
///
/// All three components must be within `±`[Hex::MAX_COMPONENT]. Inside that
/// range, `s` and the sum or difference of any two cells always fit in an
/// `i32`. Each constructor has a fallible version that returns an error for
/// out-of-range components, and each operator has a `checked_*` version that
/// returns `None`.
///
/// All arithmetic returns a new value. `+` and `-` work component-wise, `*`
/// scales by an integer and unary `-` mirrors the cell through the origin.
/// Like integer arithmetic, the operators panic if the result is out of range.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
#[serde(try_from = "UncheckedHex")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// The largest magnitude allowed for any one component
    pub const MAX_COMPONENT: i32 = i32::MAX / 2;

    /// Construct a new cell with the given q and r. Since q+r+s=0 for all
    /// cells, we can derive s from q & r.
    ///
    /// ## Panics
    ///
    /// Panics if any component is out of range. See [Self::try_new].
    pub const fn new(q: i32, r: i32) -> Self {
        assert!(
            Self::in_range(q as i64, r as i64),
            "Hex component out of range"
        );
        Self { q, r }
    }

    /// Construct a new cell with the given q and r. Returns an error if any
    /// of the three components is outside `±`[Self::MAX_COMPONENT].
    pub fn try_new(q: i32, r: i32) -> anyhow::Result<Self> {
        let hex = unwrap_or_bail!(
            Self::checked_new(q.into(), r.into()),
            "Invalid hex ({}, {}, {}); each component must be within ±{}",
            q,
            r,
            -i64::from(q) - i64::from(r),
            Self::MAX_COMPONENT
        );
        Ok(hex)
    }

    /// Construct a new cell from all three components. Returns an error if the
    /// components don't fall on the plane `q + r + s = 0`, or are out of range.
    pub fn new_qrs(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        // Widened so the sum can't wrap around to 0
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid hex ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Self::try_new(q, r)
        }
    }

    const fn in_range(q: i64, r: i64) -> bool {
        let max = Self::MAX_COMPONENT as i64;
        q.abs() <= max && r.abs() <= max && (q + r).abs() <= max
    }

    fn checked_new(q: i64, r: i64) -> Option<Self> {
        if Self::in_range(q, r) {
            // In range means both fit in an i32
            Some(Self {
                q: q as i32,
                r: r as i32,
            })
        } else {
            None
        }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Number of steps between this cell and the origin.
    pub fn length(self) -> u32 {
        axial_length(self.q.into(), self.r.into())
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the cells are equal,
    /// 1 if they are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: Hex) -> u32 {
        axial_length(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Component-wise sum, or `None` if the result is out of range
    pub fn checked_add(self, other: Hex) -> Option<Hex> {
        Self::checked_new(
            i64::from(self.q) + i64::from(other.q),
            i64::from(self.r) + i64::from(other.r),
        )
    }

    /// Component-wise difference, or `None` if the result is out of range
    pub fn checked_sub(self, other: Hex) -> Option<Hex> {
        Self::checked_new(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Scale each component by `factor`, or `None` if the result is out of
    /// range
    pub fn checked_mul(self, factor: i32) -> Option<Hex> {
        Self::checked_new(
            i64::from(self.q) * i64::from(factor),
            i64::from(self.r) * i64::from(factor),
        )
    }

    /// Get the unit vector for the direction with the given index. Returns an
    /// error if the index is not in `[0, 6)`.
    pub fn direction(index: usize) -> anyhow::Result<Hex> {
        Ok(HexDirection::from_index(index)?.to_vector())
    }

    /// Get the cell directly adjacent to this one in the given direction.
    /// Panics if this cell is on the edge of the range; use
    /// [Self::checked_add] with [HexDirection::to_vector] to avoid that.
    pub fn neighbor(self, direction: HexDirection) -> Hex {
        self + direction.to_vector()
    }

    /// Same as [Self::neighbor], but takes the direction as an index. Returns
    /// an error if the index is not in `[0, 6)`.
    pub fn neighbor_at(self, index: usize) -> anyhow::Result<Hex> {
        Ok(self + Self::direction(index)?)
    }

    /// Get an iterator of all the cells directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        HexDirection::ALL.iter().map(move |dir| self.neighbor(*dir))
    }

    /// Linearly interpolate between this cell and another. `t = 0` is this
    /// cell and `t = 1` is `other`. The output will generally not be a cell
    /// center, so it's fractional.
    pub fn lerp(self, other: Hex, t: f64) -> FractionalHex {
        FractionalHex::from(self).lerp(other.into(), t)
    }

    /// Draw a line of cells from this one to `other`. The line includes both
    /// endpoints, and will always contain `distance + 1` cells. See [HexLine].
    pub fn line_to(self, other: Hex) -> HexLine {
        HexLine::new(self, other)
    }
}

/// Number of steps from `(q, r)` to the origin. Takes wide components so that
/// differences between two cells can be passed in directly.
fn axial_length(q: i64, r: i64) -> u32 {
    let sum = q.abs() + r.abs() + (q + r).abs();
    // Two adjacent cells are always separated by two cube edges, hence the
    // halving. Two in-range cells are at most 2 * MAX_COMPONENT apart.
    (sum / 2) as u32
}

impl ops::Add for Hex {
    type Output = Hex;

    fn add(self, rhs: Hex) -> Hex {
        unwrap!(
            self.checked_add(rhs),
            "Hex {} + {} is out of range",
            self,
            rhs
        )
    }
}

impl ops::Sub for Hex {
    type Output = Hex;

    fn sub(self, rhs: Hex) -> Hex {
        unwrap!(
            self.checked_sub(rhs),
            "Hex {} - {} is out of range",
            self,
            rhs
        )
    }
}

impl ops::Mul<i32> for Hex {
    type Output = Hex;

    fn mul(self, rhs: i32) -> Hex {
        unwrap!(
            self.checked_mul(rhs),
            "Hex {} * {} is out of range",
            self,
            rhs
        )
    }
}

impl ops::Neg for Hex {
    type Output = Hex;

    fn neg(self) -> Hex {
        // The range is symmetric, so this can't leave it
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl HexCoordinateValue for Hex {
    type Component = i32;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        Hex::s(self)
    }
}

impl TryFrom<(i32, i32, i32)> for Hex {
    type Error = anyhow::Error;

    fn try_from((q, r, s): (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new_qrs(q, r, s)
    }
}

/// An unvalidated version of [Hex], only used as an intermediate value during
/// deserialization. Converting it back runs the range check.
#[derive(Deserialize)]
#[serde(rename = "Hex")]
struct UncheckedHex {
    q: i32,
    r: i32,
}

impl TryFrom<UncheckedHex> for Hex {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedHex) -> Result<Self, Self::Error> {
        Self::try_new(value.q, value.r)
    }
}

/// A point anywhere on the hex plane, not necessarily a cell center. All three
/// components are stored, and they always sum to (approximately) zero.
///
/// These values come out of interpolation and pixel conversion. Use
/// [FractionalHex::round] to find the cell a point falls in.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
#[serde(try_from = "UncheckedFractionalHex")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Construct a new point from q and r, deriving s.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Construct a new point from all three components. Returns an error if
    /// the components aren't on the plane `q + r + s = 0`, within a small
    /// tolerance relative to their magnitude.
    pub fn new(q: f64, r: f64, s: f64) -> anyhow::Result<Self> {
        let scale = 1f64.max(q.abs()).max(r.abs()).max(s.abs());
        let sum = q + r + s;
        // A NaN sum fails this check too
        if sum.abs() <= PLANE_TOLERANCE * scale {
            Ok(Self { q, r, s })
        } else {
            Err(anyhow!(
                "Invalid fractional hex ({}, {}, {}); must be on the plane \
                q+r+s=0",
                q,
                r,
                s
            ))
        }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Linearly interpolate between two points: `self + (other - self) * t`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        self + (other - self) * t
    }

    /// Find the cell that contains this point.
    ///
    /// Each component is rounded independently, which can knock the result off
    /// the plane. To fix that, the component that moved the most during
    /// rounding gets thrown out and recomputed from the other two, so the
    /// output always satisfies `q + r + s = 0` exactly. Half-way values round
    /// away from zero.
    ///
    /// Returns an error if any component is NaN or infinite, or if the cell
    /// would be outside the range of [Hex].
    pub fn try_round(self) -> anyhow::Result<Hex> {
        if !(self.q.is_finite() && self.r.is_finite() && self.s.is_finite()) {
            bail!("Cannot round non-finite hex {}", self);
        }

        let mut q = self.q.round();
        let mut r = self.r.round();
        let s = self.s.round();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        }
        // Otherwise s is the odd one out, and Hex derives it from q & r anyway

        // Check before casting, since float-to-int casts saturate
        let max = f64::from(Hex::MAX_COMPONENT);
        if q.abs() > max || r.abs() > max || (q + r).abs() > max {
            bail!(
                "Cannot round hex {}; each component must be within ±{}",
                self,
                Hex::MAX_COMPONENT
            );
        }
        Ok(Hex {
            q: q as i32,
            r: r as i32,
        })
    }

    /// Same as [Self::try_round], but panics instead of returning an error.
    /// Any point interpolated between two valid cells can be rounded safely.
    pub fn round(self) -> Hex {
        match self.try_round() {
            Ok(hex) => hex,
            Err(err) => panic!("{}", err),
        }
    }
}

impl HexCoordinateValue for FractionalHex {
    type Component = f64;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        self.s
    }
}

impl From<Hex> for FractionalHex {
    fn from(other: Hex) -> Self {
        Self {
            q: other.q().into(),
            r: other.r().into(),
            s: other.s().into(),
        }
    }
}

/// An unvalidated version of [FractionalHex], only used as an intermediate
/// value during deserialization. Converting it back runs the plane check.
#[derive(Deserialize)]
#[serde(rename = "FractionalHex")]
struct UncheckedFractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl TryFrom<UncheckedFractionalHex> for FractionalHex {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedFractionalHex) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}
