use crate::{OrientationKind, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Serializable description of a [Layout](crate::Layout). This is the form a
/// layout takes in a config file; use
/// [Layout::from_config](crate::Layout::from_config) to turn it into
/// something you can do math with.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Which orientation preset to use
    pub orientation: OrientationKind,

    /// Scale factor for each screen axis. With a size of `(s, s)`, the
    /// distance from a hexagon's center to any of its corners is `s`. The two
    /// components can differ to squash or stretch the grid, and can be
    /// negative to flip an axis, but neither can be zero.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Screen position of the center of the cell `(0, 0, 0)`
    #[validate(custom = "validate_origin")]
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            size: Point::new(1.0, 1.0),
            origin: Point::new(0.0, 0.0),
        }
    }
}

/// Size has to be finite and non-zero on both axes, otherwise converting from
/// pixels back to hexes divides by zero
pub(super) fn validate_size(size: &Point) -> Result<(), ValidationError> {
    if size.is_finite() && size.x != 0.0 && size.y != 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("nonzero_finite"))
    }
}

pub(super) fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
