//! 3D globe integration seam: scene configuration and engine traits.

mod engine;
mod scene;

pub use engine::{GlobeEngine, GlobeView};
pub use scene::{Scene, TerrainProvider, DEFAULT_TERRAIN_URL};
