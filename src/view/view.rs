//! The 2D view state the controls observe and mutate.
//!
//! A [`View`] models the part of a map view the controls care about: a
//! center in map units, a resolution in map units per pixel, an
//! extent-fitting operation, and one-shot change notifications for the two
//! properties. Both properties start undefined; the hosting application may
//! determine them asynchronously after startup, which is exactly the window
//! the one-shot notifications cover.

use crate::view::events::{OnceSignal, SubscriptionId};
use geo_types::{Coord, Rect};

/// Default resolution ceiling of the zoom ladder, in map units per pixel.
///
/// Matches the conventional web-mercator level-0 resolution for 256px tiles.
pub const DEFAULT_MAX_RESOLUTION: f64 = 156_543.033_928_04;

/// Options for [`View::fit`].
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    /// When true, the fitted resolution snaps to the view's zoom ladder;
    /// when false, any resolution that covers the extent is allowed.
    pub constrain_resolution: bool,
}

/// 2D map view state: optional center and resolution, plus change signals.
pub struct View {
    center: Option<Coord<f64>>,
    resolution: Option<f64>,
    max_resolution: f64,
    center_changed: OnceSignal<Coord<f64>>,
    resolution_changed: OnceSignal<f64>,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: None,
            resolution: None,
            max_resolution: DEFAULT_MAX_RESOLUTION,
            center_changed: OnceSignal::new(),
            resolution_changed: OnceSignal::new(),
        }
    }
}

impl View {
    /// A view with undefined center and resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// A view with a custom zoom-ladder ceiling.
    pub fn with_max_resolution(max_resolution: f64) -> Self {
        Self {
            max_resolution,
            ..Self::default()
        }
    }

    pub fn center(&self) -> Option<Coord<f64>> {
        self.center
    }

    pub fn resolution(&self) -> Option<f64> {
        self.resolution
    }

    /// Sets the center and fires pending center-change subscriptions.
    pub fn set_center(&mut self, center: Coord<f64>) {
        self.center = Some(center);
        self.center_changed.emit(center);
    }

    /// Sets the resolution and fires pending resolution-change subscriptions.
    pub fn set_resolution(&mut self, resolution: f64) {
        self.resolution = Some(resolution);
        self.resolution_changed.emit(resolution);
    }

    /// Registers a handler for the next center change only.
    ///
    /// The handler runs on the `set_center` call stack and receives the new
    /// center; it must not re-borrow the view.
    pub fn once_center_changed(
        &mut self,
        handler: impl FnOnce(Coord<f64>) + 'static,
    ) -> SubscriptionId {
        self.center_changed.subscribe_once(handler)
    }

    /// Registers a handler for the next resolution change only.
    pub fn once_resolution_changed(
        &mut self,
        handler: impl FnOnce(f64) + 'static,
    ) -> SubscriptionId {
        self.resolution_changed.subscribe_once(handler)
    }

    /// Cancels a pending center-change subscription.
    pub fn cancel_center_changed(&mut self, id: SubscriptionId) -> bool {
        self.center_changed.cancel(id)
    }

    /// Cancels a pending resolution-change subscription.
    pub fn cancel_resolution_changed(&mut self, id: SubscriptionId) -> bool {
        self.resolution_changed.cancel(id)
    }

    /// Centers the view on `extent` and picks the smallest resolution that
    /// shows all of it in a `viewport_size` (width, height) pixel viewport.
    ///
    /// A degenerate viewport leaves the view untouched.
    pub fn fit(&mut self, extent: Rect<f64>, viewport_size: (u32, u32), options: FitOptions) {
        let (width, height) = viewport_size;
        if width == 0 || height == 0 {
            log::warn!("ignoring fit to a degenerate {}x{} viewport", width, height);
            return;
        }

        let mut resolution = f64::max(
            extent.width() / f64::from(width),
            extent.height() / f64::from(height),
        );
        if options.constrain_resolution {
            resolution = self.constrained_resolution(resolution);
        }

        self.set_center(extent.center());
        self.set_resolution(resolution);
    }

    /// Snaps a resolution to the nearest step of the power-of-two zoom
    /// ladder below `max_resolution`.
    fn constrained_resolution(&self, resolution: f64) -> f64 {
        let steps = (self.max_resolution / resolution).log2().round().max(0.0);
        self.max_resolution / 2f64.powf(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_starts_undefined() {
        let view = View::new();
        assert_eq!(view.center(), None);
        assert_eq!(view.resolution(), None);
    }

    #[test]
    fn test_set_center_fires_once_subscription() {
        let mut view = View::new();
        let seen = Rc::new(Cell::new(None));

        let slot = Rc::clone(&seen);
        view.once_center_changed(move |center| slot.set(Some(center)));

        view.set_center(coord! { x: 3.0, y: 4.0 });
        assert_eq!(seen.get(), Some(coord! { x: 3.0, y: 4.0 }));

        // Second change: the subscription is gone
        view.set_center(coord! { x: 9.0, y: 9.0 });
        assert_eq!(seen.get(), Some(coord! { x: 3.0, y: 4.0 }));
    }

    #[test]
    fn test_fit_unconstrained_uses_exact_covering_resolution() {
        let mut view = View::new();
        let extent = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 100.0, y: 100.0 });

        view.fit(
            extent,
            (200, 100),
            FitOptions {
                constrain_resolution: false,
            },
        );

        // Height is the limiting dimension: 100 units over 100 px
        assert_eq!(view.resolution(), Some(1.0));
        assert_eq!(view.center(), Some(coord! { x: 50.0, y: 50.0 }));
    }

    #[test]
    fn test_fit_constrained_snaps_to_zoom_ladder() {
        let mut view = View::with_max_resolution(1024.0);
        let extent = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10_000.0, y: 10_000.0 });

        view.fit(
            extent,
            (100, 100),
            FitOptions {
                constrain_resolution: true,
            },
        );

        // Exact covering resolution is 100.0; nearest ladder step under a
        // 1024 ceiling is 1024 / 2^3 = 128
        assert_eq!(view.resolution(), Some(128.0));
    }

    #[test]
    fn test_fit_degenerate_viewport_is_noop() {
        let mut view = View::new();
        let extent = Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 10.0, y: 10.0 });

        view.fit(
            extent,
            (0, 100),
            FitOptions {
                constrain_resolution: false,
            },
        );

        assert_eq!(view.center(), None);
        assert_eq!(view.resolution(), None);
    }

    #[test]
    fn test_cancelled_subscription_does_not_fire() {
        let mut view = View::new();
        let fired = Rc::new(Cell::new(false));

        let slot = Rc::clone(&fired);
        let id = view.once_resolution_changed(move |_| slot.set(true));
        assert!(view.cancel_resolution_changed(id));

        view.set_resolution(5.0);
        assert!(!fired.get());
    }
}
