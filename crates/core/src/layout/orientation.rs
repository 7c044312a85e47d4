use anyhow::anyhow;
use nalgebra::Matrix2;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// `sqrt(3)`, spelled out since `f64::sqrt` isn't const
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The linear transform that maps axial `(q, r)` coordinates onto screen
/// space, plus its inverse and the angle of the first hexagon corner.
///
/// Most of the time you want one of the two presets, [Orientation::pointy] or
/// [Orientation::flat]. An orientation holds no reference to any layout, so
/// one value can be shared by as many layouts as you like.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    /// Hex-to-screen matrix, applied to the column vector `(q, r)`
    forward: Matrix2<f64>,
    /// Screen-to-hex matrix. Should always be the inverse of `forward`.
    inverse: Matrix2<f64>,
    /// Angle of corner 0, in sixths of a full turn
    start_angle: f64,
}

impl Orientation {
    /// Construct an orientation from all of its coefficients. Both matrices
    /// are given in row-major order. The inverse is taken as-is, so it's up to
    /// the caller to make sure it actually inverts `forward`. See
    /// [Self::from_forward] if you'd rather have it computed.
    pub fn new(forward: [f64; 4], inverse: [f64; 4], start_angle: f64) -> Self {
        Self {
            forward: to_matrix(forward),
            inverse: to_matrix(inverse),
            start_angle,
        }
    }

    /// Construct an orientation from just the forward matrix (row-major),
    /// deriving the inverse. Returns an error if the matrix isn't invertible.
    pub fn from_forward(
        forward: [f64; 4],
        start_angle: f64,
    ) -> anyhow::Result<Self> {
        let forward = to_matrix(forward);
        let inverse = forward.try_inverse().ok_or_else(|| {
            anyhow!("Orientation matrix {:?} is not invertible", forward)
        })?;
        Ok(Self {
            forward,
            inverse,
            start_angle,
        })
    }

    /// Hexagons with a vertex at the top. Rows of cells are horizontal.
    pub fn pointy() -> Self {
        Self::new(
            [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            0.5,
        )
    }

    /// Hexagons with an edge at the top. Columns of cells are vertical.
    pub fn flat() -> Self {
        Self::new(
            [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
            [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
            0.0,
        )
    }

    /// Look up a preset by name. See [OrientationKind] for accepted names.
    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        let kind: OrientationKind = name.parse().map_err(|_| {
            anyhow!(
                "Unknown orientation {:?}; expected one of: pointy, flat",
                name
            )
        })?;
        Ok(kind.orientation())
    }

    pub fn forward(&self) -> &Matrix2<f64> {
        &self.forward
    }

    pub fn inverse(&self) -> &Matrix2<f64> {
        &self.inverse
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
}

/// Build a 2x2 matrix from row-major coefficients
fn to_matrix([m11, m12, m21, m22]: [f64; 4]) -> Matrix2<f64> {
    Matrix2::new(m11, m12, m21, m22)
}

/// The named orientation presets. Parses from (and deserializes as) a string.
///
/// - `pointy` (also `pointy-top` or `point`)
/// - `flat` (also `flat-top`)
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrientationKind {
    #[strum(
        serialize = "pointy",
        serialize = "pointy-top",
        serialize = "point"
    )]
    #[serde(alias = "pointy-top", alias = "point")]
    Pointy,
    #[strum(serialize = "flat", serialize = "flat-top")]
    #[serde(alias = "flat-top")]
    Flat,
}

impl OrientationKind {
    /// Get the orientation that this preset refers to
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Pointy => Orientation::pointy(),
            Self::Flat => Orientation::flat(),
        }
    }
}

impl Default for OrientationKind {
    fn default() -> Self {
        Self::Pointy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_presets_are_inverses() {
        for kind in OrientationKind::iter() {
            let orientation = kind.orientation();
            let product = orientation.forward() * orientation.inverse();
            assert_approx_eq!(product[(0, 0)], 1.0);
            assert_approx_eq!(product[(0, 1)], 0.0);
            assert_approx_eq!(product[(1, 0)], 0.0);
            assert_approx_eq!(product[(1, 1)], 1.0);
        }
    }

    #[test]
    fn test_preset_coefficients() {
        let pointy = Orientation::pointy();
        assert_approx_eq!(pointy.forward()[(0, 0)], 3f64.sqrt());
        assert_approx_eq!(pointy.forward()[(0, 1)], 3f64.sqrt() / 2.0);
        assert_approx_eq!(pointy.inverse()[(0, 0)], 3f64.sqrt() / 3.0);
        assert_approx_eq!(pointy.start_angle(), 0.5);

        let flat = Orientation::flat();
        assert_approx_eq!(flat.forward()[(1, 0)], 3f64.sqrt() / 2.0);
        assert_approx_eq!(flat.forward()[(1, 1)], 3f64.sqrt());
        assert_approx_eq!(flat.inverse()[(1, 1)], 3f64.sqrt() / 3.0);
        assert_approx_eq!(flat.start_angle(), 0.0);
    }

    #[test]
    fn test_from_forward() {
        let pointy = Orientation::pointy();
        let derived = Orientation::from_forward(
            [3f64.sqrt(), 3f64.sqrt() / 2.0, 0.0, 1.5],
            0.5,
        )
        .unwrap();
        for i in 0..2 {
            for j in 0..2 {
                assert_approx_eq!(
                    derived.inverse()[(i, j)],
                    pointy.inverse()[(i, j)]
                );
            }
        }

        assert!(Orientation::from_forward([1.0, 2.0, 2.0, 4.0], 0.0).is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            Orientation::from_name("pointy").unwrap(),
            Orientation::pointy()
        );
        assert_eq!(
            Orientation::from_name("pointy-top").unwrap(),
            Orientation::pointy()
        );
        assert_eq!(
            Orientation::from_name("point").unwrap(),
            Orientation::pointy()
        );
        assert_eq!(
            Orientation::from_name("flat").unwrap(),
            Orientation::flat()
        );
        assert_eq!(
            Orientation::from_name("flat-top").unwrap(),
            Orientation::flat()
        );

        let err = Orientation::from_name("diagonal").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown orientation \"diagonal\"; expected one of: pointy, flat"
        );
    }
}
