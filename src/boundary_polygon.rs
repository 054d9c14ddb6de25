use crate::{Location, Rectangle};

/// A single closed ring of vertices; the last vertex connects back to the
/// first. Self-intersections are not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPolygon {
    vertices: Vec<Location>,
    envelope: Rectangle,
}

impl BoundaryPolygon {
    pub fn new(vertices: Vec<Location>) -> Self {
        let envelope = Rectangle::of(&vertices);
        BoundaryPolygon { vertices, envelope }
    }

    pub fn vertices(&self) -> &[Location] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Rings with fewer than 3 vertices enclose nothing.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn envelope(&self) -> Rectangle {
        self.envelope
    }

    /// Iterate edges as `(vertex[i], vertex[i - 1])`, wrapping at 0.
    pub fn edges(&self) -> impl Iterator<Item = (Location, Location)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + n - 1) % n]))
    }
}

impl<IP: Into<Location>> From<Vec<IP>> for BoundaryPolygon {
    fn from(vertices: Vec<IP>) -> Self {
        BoundaryPolygon::new(vertices.into_iter().map(|ip| ip.into()).collect())
    }
}
