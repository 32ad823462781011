//! Demo application composing the controls next to an interactive map view.
//!
//! The canvas draws no basemap, just a crosshair and view readouts, but it
//! pans and zooms by mutating the shared [`View`], so the controls operate
//! against a live view exactly as they would in a real map application. A
//! right panel mirrors the tool registry the globe toggle suspends.

use crate::globe::{GlobeEngine, GlobeView, Scene};
use crate::i18n::Messages;
use crate::tools::ToolRegistry;
use crate::ui::{ChangeGate, GlobeToggle, GlobeToggleOptions, HomeButton};
use crate::view::{MapView, View};
use eframe::egui::{self, Color32, RichText, Sense, Stroke, Vec2};
use geo_types::{coord, Coord};
use std::cell::RefCell;
use std::rc::Rc;

/// Demo start view: central Europe at a mid zoom.
const INITIAL_CENTER: Coord<f64> = Coord {
    x: 1_100_000.0,
    y: 6_000_000.0,
};
const INITIAL_RESOLUTION: f64 = 2445.98;

/// Globe engine stand-in for the demo: tracks scene and enabled state and
/// logs transitions where a real engine would start rendering.
struct DemoGlobeEngine;

struct DemoGlobeView {
    scene: Scene,
    enabled: bool,
}

impl GlobeView for DemoGlobeView {
    fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        log::info!(
            "demo globe view {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }
}

impl GlobeEngine for DemoGlobeEngine {
    fn create_view(&self, _map: &MapView) -> Box<dyn GlobeView> {
        log::info!("demo globe engine: creating globe view");
        Box::new(DemoGlobeView {
            scene: Scene::default(),
            enabled: false,
        })
    }
}

/// Observable state snapshot used to skip repaint requests while idle.
type ViewSnapshot = (Option<(f64, f64)>, Option<f64>, bool);

pub struct WorkbenchApp {
    map: MapView,
    tool_registry: Rc<RefCell<ToolRegistry>>,
    globe_toggle: GlobeToggle,
    home_button: HomeButton,
    repaint_gate: ChangeGate<ViewSnapshot>,
    /// Frames rendered so far; the view is initialized on the second frame
    /// to exercise the asynchronous initial-extent capture.
    frames: u64,
}

impl WorkbenchApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let map = MapView::new(View::new());
        let messages = Rc::new(Messages::new());

        let mut registry = ToolRegistry::new();
        registry.register("measure");
        registry.register("draw");
        registry.register("select");
        let tool_registry = Rc::new(RefCell::new(registry));

        let globe_toggle = GlobeToggle::new(
            &map,
            tool_registry.clone(),
            Rc::clone(&messages),
            Some(Rc::new(DemoGlobeEngine)),
            GlobeToggleOptions::default(),
        );

        // No explicit extent: the button captures the initial view once the
        // deferred init below defines it
        let home_button = HomeButton::new(&map, None, messages, Default::default());

        Self {
            map,
            tool_registry,
            globe_toggle,
            home_button,
            repaint_gate: ChangeGate::new(),
            frames: 0,
        }
    }

    fn render_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new("Map Controls Workbench")
                            .strong()
                            .size(16.0)
                            .color(Color32::WHITE),
                    );
                    ui.separator();
                    let mode = if self.globe_toggle.is_globe_active() {
                        "3D globe"
                    } else {
                        "2D map"
                    };
                    ui.label(RichText::new(mode).size(13.0).color(Color32::GRAY));
                });
            });
    }

    fn render_tool_panel(&self, ctx: &egui::Context) {
        egui::SidePanel::right("tool_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Tools");
                ui.separator();

                let mut registry = self.tool_registry.borrow_mut();
                for tool in registry.tools_mut() {
                    ui.add_enabled_ui(!self.globe_toggle.is_globe_active(), |ui| {
                        ui.checkbox(&mut tool.enabled, tool.name.clone());
                    });
                }

                if self.globe_toggle.is_globe_active() {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Tools are suspended while the globe is active")
                            .small()
                            .color(Color32::GRAY),
                    );
                }
            });
    }

    fn render_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let available_size = ui.available_size();
            let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
            let rect = response.rect;

            self.map
                .set_size(rect.width().max(0.0) as u32, rect.height().max(0.0) as u32);

            painter.rect_filled(rect, 0.0, Color32::from_rgb(20, 20, 35));

            // Crosshair marking the view center
            let center = rect.center();
            let stroke = Stroke::new(1.0, Color32::from_rgb(90, 90, 120));
            painter.line_segment(
                [center - Vec2::new(12.0, 0.0), center + Vec2::new(12.0, 0.0)],
                stroke,
            );
            painter.line_segment(
                [center - Vec2::new(0.0, 12.0), center + Vec2::new(0.0, 12.0)],
                stroke,
            );

            self.draw_overlay_info(ui, &rect);
            self.render_map_controls(ui, &rect);
            self.handle_canvas_interaction(&response);
        });
    }

    fn draw_overlay_info(&self, ui: &mut egui::Ui, rect: &egui::Rect) {
        let overlay_rect = egui::Rect::from_min_size(
            rect.left_top() + Vec2::new(10.0, 10.0),
            Vec2::new(240.0, 60.0),
        );

        let view = self.map.view();
        let center_text = match view.center() {
            Some(c) => format!("Center: {:.0}, {:.0}", c.x, c.y),
            None => "Center: undefined".to_string(),
        };
        let resolution_text = match view.resolution() {
            Some(r) => format!("Resolution: {r:.2} m/px"),
            None => "Resolution: undefined".to_string(),
        };
        drop(view);

        ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
            ui.vertical(|ui| {
                for text in [center_text, resolution_text] {
                    ui.label(
                        RichText::new(text)
                            .monospace()
                            .size(12.0)
                            .color(Color32::from_rgb(200, 200, 220)),
                    );
                }
                if self.globe_toggle.is_globe_active() {
                    ui.label(
                        RichText::new("3D globe active (external engine)")
                            .size(12.0)
                            .color(Color32::from_rgb(140, 200, 140)),
                    );
                }
            });
        });
    }

    /// The two controls float over the canvas corner, the way a map library
    /// mounts overlay controls.
    fn render_map_controls(&mut self, ui: &mut egui::Ui, rect: &egui::Rect) {
        let controls_rect = egui::Rect::from_min_size(
            rect.right_top() + Vec2::new(-80.0, 10.0),
            Vec2::new(70.0, 34.0),
        );
        ui.scope_builder(egui::UiBuilder::new().max_rect(controls_rect), |ui| {
            ui.horizontal(|ui| {
                self.globe_toggle.ui(ui);
                self.home_button.ui(ui);
            });
        });
    }

    fn handle_canvas_interaction(&mut self, response: &egui::Response) {
        // Dragging pans by moving the center against the drag, scaled by the
        // current resolution (map units per pixel)
        if response.dragged() {
            let delta = response.drag_delta();
            let mut view = self.map.view_mut();
            if let (Some(center), Some(resolution)) = (view.center(), view.resolution()) {
                view.set_center(coord! {
                    x: center.x - f64::from(delta.x) * resolution,
                    y: center.y + f64::from(delta.y) * resolution,
                });
            }
        }

        // Scrolling zooms by scaling the resolution
        if response.hovered() {
            let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
            if scroll_delta.y != 0.0 {
                let factor = 1.0 - f64::from(scroll_delta.y) * 0.001;
                let mut view = self.map.view_mut();
                if let Some(resolution) = view.resolution() {
                    view.set_resolution((resolution * factor).clamp(0.01, 500_000.0));
                }
            }
        }
    }

    fn snapshot(&self) -> ViewSnapshot {
        let view = self.map.view();
        (
            view.center().map(|c| (c.x, c.y)),
            view.resolution(),
            self.globe_toggle.is_globe_active(),
        )
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deferred init: the view's center/resolution become known only
        // after the first frame, like a map whose initial extent is
        // determined asynchronously
        if self.frames == 1 {
            let mut view = self.map.view_mut();
            view.set_center(INITIAL_CENTER);
            view.set_resolution(INITIAL_RESOLUTION);
            log::info!("map view initialized");
        }
        self.frames = self.frames.saturating_add(1);

        self.render_top_bar(ctx);
        self.render_tool_panel(ctx);
        self.render_canvas(ctx);

        // One extra frame per observable change, so deferred mutations
        // (captures, toggles) settle even without input events
        if self.repaint_gate.changed(self.snapshot()) {
            ctx.request_repaint();
        }
    }
}
