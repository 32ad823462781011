//! Scene data shared with the 3D engine.

/// Default terrain tile endpoint configured on a freshly created globe view.
pub const DEFAULT_TERRAIN_URL: &str = "//assets.agi.com/stk-terrain/world";

/// Source of terrain tiles for the 3D scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainProvider {
    url: String,
}

impl TerrainProvider {
    /// Provider streaming terrain from a remote tile service.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The slice of 3D scene state the controls configure.
///
/// Rendering the scene is entirely the engine's business; the controls only
/// point it at a terrain source.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Terrain source, `None` until configured (engine renders an
    /// ellipsoid-only globe without one).
    pub terrain_provider: Option<TerrainProvider>,
}
