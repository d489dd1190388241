//! `polydec` maintains a closed polygon as a ring of scored vertices and
//! supports reversible decimation: the least visually important vertices are
//! removed one by one to reach a target fraction of the original vertex count,
//! and can be restored later in exact reverse order.

/// The decomposable ring: vertex arena, undo stack and the decimation algorithm
pub mod decomp;

/// Error types exposed by this library
pub mod errors;

/// Geometric primitives produced and consumed by the ring
pub mod geometry;

/// Reading coordinate sequences from text input
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
