//! Planar geometry: city coordinates and Euclidean distance.

/// A city on the plane.
///
/// Cities are identified by their index in the configured city list, so two
/// cities may share coordinates and still count as distinct tour stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        distance(*self, *other)
    }

    /// Returns `true` when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between two cities.
#[inline]
pub fn distance(a: City, b: City) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new(-7.5, 2.25);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_from_tuple() {
        let c: City = (100.0, 50.0).into();
        assert_eq!(c, City::new(100.0, 50.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(City::new(1.0, 2.0).is_finite());
        assert!(!City::new(f64::NAN, 2.0).is_finite());
        assert!(!City::new(1.0, f64::INFINITY).is_finite());
    }
}
