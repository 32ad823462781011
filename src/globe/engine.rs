//! Seam to the external 3D globe renderer.
//!
//! The crate never renders a globe itself. The hosting application injects a
//! [`GlobeEngine`]; the globe toggle asks it once, lazily, for a
//! [`GlobeView`] synchronized with the 2D map, and from then on only flips
//! that view's enabled state.

use crate::globe::Scene;
use crate::view::MapView;

/// A 3D view synchronized with a 2D map view.
///
/// Created at most once per toggle lifetime and never destroyed while the
/// toggle lives; repeated activations reuse it via [`set_enabled`].
///
/// [`set_enabled`]: GlobeView::set_enabled
pub trait GlobeView {
    /// The scene this view renders, for configuration.
    fn scene_mut(&mut self) -> &mut Scene;

    /// Shows or hides the 3D view. Disabling must hand control back to the
    /// 2D map without tearing the 3D state down.
    fn set_enabled(&mut self, enabled: bool);
}

/// Factory for globe views, implemented by the 3D engine integration.
pub trait GlobeEngine {
    /// Creates a 3D view bound to `map`, initially disabled.
    fn create_view(&self, map: &MapView) -> Box<dyn GlobeView>;
}
