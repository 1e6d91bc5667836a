//! Square and inscribed circle.
//!
//! The square spans `[0, side] × [0, side]` and the circle is centered in it
//! with `radius = side / 2`. Membership uses the closed disk, so points on the
//! circle itself count as inside.

use crate::point::Point;

/// Circle-membership predicate for a square of the given side.
///
/// ```
/// use monte_carlo_pi::geometry::is_inside;
/// use monte_carlo_pi::point::Point;
///
/// assert!(is_inside(Point::new(180.0, 180.0), 360.0));
/// assert!(is_inside(Point::new(0.0, 180.0), 360.0)); // boundary
/// assert!(!is_inside(Point::new(0.0, 0.0), 360.0));
/// ```
pub fn is_inside(point: Point, side: f64) -> bool {
    let radius = side / 2.0;
    let dx = point.x - radius;
    let dy = point.y - radius;
    dx * dx + dy * dy <= radius * radius
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    side: f64,
}

impl Geometry {
    /// Creates the geometry for a square with the given side.
    ///
    /// # Panics
    ///
    /// Panics if `side` is not finite and positive.
    pub fn new(side: f64) -> Self {
        assert!(
            side.is_finite() && side > 0.0,
            "Side should be finite and positive, got {}",
            side
        );
        Self { side }
    }

    /// Non-panicking variant of [`Geometry::new`].
    pub fn try_new(side: f64) -> Option<Self> {
        if side.is_finite() && side > 0.0 {
            Some(Self { side })
        } else {
            None
        }
    }

    pub fn side(&self) -> f64 {
        self.side
    }
    pub fn radius(&self) -> f64 {
        self.side / 2.0
    }
    pub fn center(&self) -> Point {
        let r = self.radius();
        Point::new(r, r)
    }

    /// Whether the point lies in the closed square.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.side).contains(&point.x) && (0.0..=self.side).contains(&point.y)
    }

    /// Whether the point lies in the closed inscribed disk.
    pub fn is_inside(&self, point: Point) -> bool {
        is_inside(point, self.side)
    }
}
