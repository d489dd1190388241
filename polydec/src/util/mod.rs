/// Checks used to verify the coherence of the ring structure
pub mod assertions;
