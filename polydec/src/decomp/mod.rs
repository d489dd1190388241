mod ring;
mod vertex;

#[doc(inline)]
pub use ring::DecompRing;
#[doc(inline)]
pub use vertex::VertKey;
#[doc(inline)]
pub use vertex::Vertex;
