//! Point generation and batch sampling.

use log::debug;

use crate::geometry::is_inside;
use crate::point::Point;
use crate::source::UniformSource;

/// Points produced by one [`generate_batch`] call, with the number of them
/// that fell inside the circle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    pub points: Vec<Point>,
    pub inside: usize,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Draws a point uniformly from the square `[0, side] × [0, side]`.
///
/// The `x` coordinate is drawn before `y`.
pub fn generate_point<S>(source: &mut S, side: f64) -> Point
where
    S: UniformSource + ?Sized,
{
    let x = source.next_unit() * side;
    let y = source.next_unit() * side;
    Point::new(x, y)
}

/// Draws `n` points and classifies each against the inscribed circle.
pub fn generate_batch<S>(source: &mut S, n: usize, side: f64) -> Batch
where
    S: UniformSource + ?Sized,
{
    debug!("generate_batch(n = {}, side = {})", n, side);

    let mut points = Vec::with_capacity(n);
    let mut inside = 0;
    for _ in 0..n {
        let point = generate_point(source, side);
        if is_inside(point, side) {
            inside += 1;
        }
        points.push(point);
    }

    debug!("generate_batch: {} of {} inside", inside, n);
    Batch { points, inside }
}
