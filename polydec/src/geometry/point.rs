/// Geometric primitive representing a point on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(pub i32, pub i32);

impl Point {
    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    /// Squared version of [`Point::distance_to`]
    pub fn sq_distance_to(&self, other: &Point) -> f64 {
        let dx = (self.0 - other.0) as f64;
        let dy = (self.1 - other.1) as f64;
        dx * dx + dy * dy
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point(p.0, p.1)
    }
}
