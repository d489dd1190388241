use crate::geometry::Point;
use crate::geometry::Rect;

/// Geometric primitive representing a simple polygon: <https://en.wikipedia.org/wiki/Simple_polygon>
///
/// Implicitly closed: the last vertex connects back to the first.
/// Unlike a freestanding polygon type, this one tolerates fewer than 3 vertices,
/// since a decimated ring can legitimately shrink down to a single vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct SPolygon {
    pub vertices: Vec<Point>,
}

impl SPolygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        assert!(!vertices.is_empty(), "polygon without vertices");
        SPolygon { vertices }
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(&self) -> f64 {
        let mut sigma = 0.0;
        for i in 0..self.vertices.len() {
            let j = (i + 1) % self.vertices.len();

            let Point(x_i, y_i) = self.vertices[i];
            let Point(x_j, y_j) = self.vertices[j];

            sigma += (x_i as f64) * (y_j as f64) - (x_j as f64) * (y_i as f64);
        }

        0.5 * sigma
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn bbox(&self) -> Rect {
        Rect::bounding(&self.vertices)
    }
}
