pub mod geometry;
pub mod item;
pub mod placement;
pub mod scene;

pub use geometry::{Bounds, Position};
pub use item::{ItemId, Visual};
pub use placement::RandomPlacement;
pub use scene::Canvas;
