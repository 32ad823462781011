//! Button toggling the map between 2D and a synchronized 3D globe.
//!
//! The 3D view is constructed lazily on first activation and reused (via
//! enable/disable) for every toggle after that. While the globe is up, every
//! other interactive tool is suspended through the injected
//! [`ToolCoordinator`], since 3D navigation gestures conflict with 2D
//! drawing and measuring tools.

use crate::error::ControlError;
use crate::globe::{GlobeEngine, GlobeView, TerrainProvider, DEFAULT_TERRAIN_URL};
use crate::i18n::{MessageId, Messages};
use crate::tools::ToolCoordinator;
use crate::ui::{control_button, ControlStyle};
use crate::view::{MapView, MapViewHandle};
use eframe::egui;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Configuration for a [`GlobeToggle`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobeToggleOptions {
    /// Button appearance.
    pub style: ControlStyle,
    /// Terrain tile endpoint configured on the globe scene at first
    /// activation.
    pub terrain_url: String,
}

impl Default for GlobeToggleOptions {
    fn default() -> Self {
        Self {
            style: ControlStyle::default(),
            terrain_url: DEFAULT_TERRAIN_URL.to_string(),
        }
    }
}

/// Icon button switching the map view into a 3D globe view and back.
pub struct GlobeToggle {
    map: MapViewHandle,
    tools: Rc<RefCell<dyn ToolCoordinator>>,
    messages: Rc<Messages>,
    engine: Option<Rc<dyn GlobeEngine>>,
    options: GlobeToggleOptions,
    /// Lazily created 3D view; never destroyed once built.
    globe: Option<Box<dyn GlobeView>>,
    globe_active: bool,
}

impl GlobeToggle {
    /// Binds a toggle to a map view.
    ///
    /// `engine` may be `None` when the 3D integration is not loaded; the
    /// toggle then fails with [`ControlError::DependencyUnavailable`] on
    /// first activation instead of at construction, matching hosts that
    /// load the engine after the UI is up.
    pub fn new(
        map: &MapView,
        tools: Rc<RefCell<dyn ToolCoordinator>>,
        messages: Rc<Messages>,
        engine: Option<Rc<dyn GlobeEngine>>,
        options: GlobeToggleOptions,
    ) -> Self {
        Self {
            map: map.handle(),
            tools,
            messages,
            engine,
            options,
            globe: None,
            globe_active: false,
        }
    }

    /// Whether the 3D globe view is currently active.
    pub fn is_globe_active(&self) -> bool {
        self.globe_active
    }

    /// Tooltip for the current state: activating the globe offers the
    /// globe, an active globe offers the way back to the map.
    pub fn tooltip(&self) -> &str {
        if self.globe_active {
            self.messages.format(MessageId::GlobeMapText)
        } else {
            self.messages.format(MessageId::GlobeGlobeText)
        }
    }

    /// Switches between 2D map and 3D globe.
    ///
    /// The first switch to the globe constructs the 3D view and points its
    /// scene at the configured terrain endpoint; later switches reuse it.
    pub fn toggle(&mut self) -> Result<(), ControlError> {
        let map = self.map.upgrade()?;

        if self.globe_active {
            if let Some(globe) = self.globe.as_mut() {
                globe.set_enabled(false);
            }
            self.tools.borrow_mut().enable_all_tools();
            self.globe_active = false;
            log::info!("switched back to map (2D) view");
        } else {
            if self.globe.is_none() {
                let engine = self
                    .engine
                    .as_ref()
                    .ok_or(ControlError::DependencyUnavailable)?;
                let mut globe = engine.create_view(&map);
                globe.scene_mut().terrain_provider =
                    Some(TerrainProvider::from_url(&self.options.terrain_url));
                self.globe = Some(globe);
                log::debug!(
                    "created globe view with terrain from {}",
                    self.options.terrain_url
                );
            }
            // The view exists at this point in every path
            if let Some(globe) = self.globe.as_mut() {
                globe.set_enabled(true);
            }
            self.tools.borrow_mut().disable_all_tools();
            self.globe_active = true;
            log::info!("switched to globe (3D) view");
        }
        Ok(())
    }

    /// Renders the button. The icon never changes with state; only the
    /// tooltip does.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let tooltip = self.tooltip().to_string();
        let response = control_button(
            ui,
            &self.options.style,
            egui_phosphor::regular::GLOBE,
            &tooltip,
        );
        if response.clicked() {
            if let Err(err) = self.toggle() {
                log::warn!("globe toggle failed: {err}");
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::Scene;
    use crate::tools::ToolRegistry;
    use crate::view::View;
    use std::cell::Cell;

    /// Coordinator recording every call for assertion.
    #[derive(Default)]
    struct RecordingCoordinator {
        calls: Vec<&'static str>,
    }

    impl ToolCoordinator for RecordingCoordinator {
        fn disable_all_tools(&mut self) {
            self.calls.push("disable");
        }

        fn enable_all_tools(&mut self) {
            self.calls.push("enable");
        }
    }

    struct FakeGlobeView {
        scene: Scene,
        enabled: Rc<Cell<bool>>,
    }

    impl GlobeView for FakeGlobeView {
        fn scene_mut(&mut self) -> &mut Scene {
            &mut self.scene
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.enabled.set(enabled);
        }
    }

    /// Engine counting constructions and exposing the view's enabled flag.
    struct CountingEngine {
        constructions: Rc<Cell<u32>>,
        enabled: Rc<Cell<bool>>,
    }

    impl GlobeEngine for CountingEngine {
        fn create_view(&self, _map: &MapView) -> Box<dyn GlobeView> {
            self.constructions.set(self.constructions.get() + 1);
            Box::new(FakeGlobeView {
                scene: Scene::default(),
                enabled: Rc::clone(&self.enabled),
            })
        }
    }

    struct Fixture {
        map: MapView,
        toggle: GlobeToggle,
        coordinator: Rc<RefCell<RecordingCoordinator>>,
        constructions: Rc<Cell<u32>>,
        globe_enabled: Rc<Cell<bool>>,
    }

    fn fixture() -> Fixture {
        let map = MapView::new(View::new());
        let coordinator = Rc::new(RefCell::new(RecordingCoordinator::default()));
        let constructions = Rc::new(Cell::new(0));
        let globe_enabled = Rc::new(Cell::new(false));
        let engine = Rc::new(CountingEngine {
            constructions: Rc::clone(&constructions),
            enabled: Rc::clone(&globe_enabled),
        });

        let toggle = GlobeToggle::new(
            &map,
            coordinator.clone(),
            Rc::new(Messages::new()),
            Some(engine),
            GlobeToggleOptions::default(),
        );

        Fixture {
            map,
            toggle,
            coordinator,
            constructions,
            globe_enabled,
        }
    }

    #[test]
    fn test_starts_in_map_mode_with_globe_tooltip() {
        let fx = fixture();
        assert!(!fx.toggle.is_globe_active());
        assert_eq!(fx.toggle.tooltip(), "Switch to globe (3D)");
        assert_eq!(fx.constructions.get(), 0);
    }

    #[test]
    fn test_first_activation_builds_globe_and_suspends_tools() {
        let mut fx = fixture();
        fx.toggle.toggle().unwrap();

        assert!(fx.toggle.is_globe_active());
        assert_eq!(fx.constructions.get(), 1);
        assert!(fx.globe_enabled.get());
        assert_eq!(fx.coordinator.borrow().calls, vec!["disable"]);
        assert_eq!(fx.toggle.tooltip(), "Switch to map (2D)");
    }

    #[test]
    fn test_second_activation_reuses_globe_and_resumes_tools() {
        let mut fx = fixture();
        fx.toggle.toggle().unwrap();
        fx.toggle.toggle().unwrap();

        assert!(!fx.toggle.is_globe_active());
        assert_eq!(fx.constructions.get(), 1);
        assert!(!fx.globe_enabled.get());
        assert_eq!(fx.coordinator.borrow().calls, vec!["disable", "enable"]);
        assert_eq!(fx.toggle.tooltip(), "Switch to globe (3D)");
    }

    #[test]
    fn test_repeated_toggling_alternates_and_never_reconstructs() {
        let mut fx = fixture();
        for round in 0..5 {
            fx.toggle.toggle().unwrap();
            assert_eq!(fx.toggle.is_globe_active(), round % 2 == 0);
        }
        assert_eq!(fx.constructions.get(), 1);
    }

    #[test]
    fn test_globe_view_gets_configured_terrain() {
        struct TerrainProbe {
            seen: Rc<RefCell<Option<String>>>,
        }

        struct ProbeView {
            scene: Scene,
            seen: Rc<RefCell<Option<String>>>,
        }

        impl GlobeView for ProbeView {
            fn scene_mut(&mut self) -> &mut Scene {
                &mut self.scene
            }

            fn set_enabled(&mut self, _enabled: bool) {
                // Terrain is configured before the first enable
                *self.seen.borrow_mut() = self
                    .scene
                    .terrain_provider
                    .as_ref()
                    .map(|p| p.url().to_string());
            }
        }

        impl GlobeEngine for TerrainProbe {
            fn create_view(&self, _map: &MapView) -> Box<dyn GlobeView> {
                Box::new(ProbeView {
                    scene: Scene::default(),
                    seen: Rc::clone(&self.seen),
                })
            }
        }

        let map = MapView::new(View::new());
        let seen = Rc::new(RefCell::new(None));
        let mut toggle = GlobeToggle::new(
            &map,
            Rc::new(RefCell::new(ToolRegistry::new())),
            Rc::new(Messages::new()),
            Some(Rc::new(TerrainProbe {
                seen: Rc::clone(&seen),
            })),
            GlobeToggleOptions::default(),
        );

        toggle.toggle().unwrap();
        assert_eq!(seen.borrow().as_deref(), Some(DEFAULT_TERRAIN_URL));
    }

    #[test]
    fn test_missing_engine_fails_and_leaves_map_mode() {
        let map = MapView::new(View::new());
        let coordinator = Rc::new(RefCell::new(RecordingCoordinator::default()));
        let mut toggle = GlobeToggle::new(
            &map,
            coordinator.clone(),
            Rc::new(Messages::new()),
            None,
            GlobeToggleOptions::default(),
        );

        assert_eq!(
            toggle.toggle().unwrap_err(),
            ControlError::DependencyUnavailable
        );
        assert!(!toggle.is_globe_active());
        assert!(coordinator.borrow().calls.is_empty());
    }

    #[test]
    fn test_dropped_map_fails_with_invalid_reference() {
        let mut fx = fixture();
        drop(fx.map);
        assert_eq!(fx.toggle.toggle().unwrap_err(), ControlError::InvalidReference);
    }
}
