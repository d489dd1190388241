use slotmap::new_key_type;

use crate::geometry::Point;

new_key_type! {
    /// Stable handle to a [`Vertex`] in the ring's arena
    pub struct VertKey;
}

/// A single vertex of a [`DecompRing`](crate::decomp::DecompRing).
///
/// Vertices are created once at construction and never leave the arena, they only
/// transition between *live* (linked into the ring) and *removed* (parked on the
/// undo stack). While live, `prev` and `next` point at the neighboring live
/// vertices. While removed, both handles are frozen at the values they had at
/// removal time; restoration re-establishes exactly these links, which is why
/// they must not be touched in the meantime.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub point: Point,
    /// Extra path length incurred by routing through this vertex instead of
    /// connecting its neighbors directly. Near zero: nearly collinear, a good
    /// removal candidate.
    pub importance: f64,
    pub prev: VertKey,
    pub next: VertKey,
}
