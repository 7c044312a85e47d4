use derive_more::{Add, Display, Div, From, Into, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// A 2D point in screen (pixel) space. See [crate::Layout] for how hex
/// coordinates map onto this space.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Are both components finite (not NaN or infinite)?
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<nalgebra::Vector2<f64>> for Point {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point> for nalgebra::Vector2<f64> {
    fn from(other: Point) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(0.5, 4.0);
        assert_eq!(a + b, Point::new(2.0, 2.0));
        assert_eq!(a - b, Point::new(1.0, -6.0));
        assert_eq!(a * 2.0, Point::new(3.0, -4.0));
        assert_eq!(b / 2.0, Point::new(0.25, 2.0));
        assert_eq!(Point::from((3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(0.0, -1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_vector_conversion() {
        let vector = nalgebra::Vector2::from(Point::new(1.5, -2.0));
        assert_eq!(vector, nalgebra::Vector2::new(1.5, -2.0));
        assert_eq!(Point::from(vector * 2.0), Point::new(3.0, -4.0));
    }
}
