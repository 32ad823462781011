//! Button restoring the map to its initial extent.
//!
//! With an explicit extent the button always fits that rectangle. Without
//! one it captures the view's center and resolution at construction time:
//! synchronously when they are already known, otherwise through one-shot
//! change subscriptions, since the view's own initialization may still be in
//! flight. Until both values are known, pressing the button does nothing.

use crate::error::ControlError;
use crate::i18n::{MessageId, Messages};
use crate::ui::{control_button, ControlStyle};
use crate::view::{FitOptions, MapView, MapViewHandle};
use eframe::egui;
use geo_types::{Coord, Rect};
use std::cell::Cell;
use std::rc::Rc;

/// Icon button zooming the map back to its initial extent.
pub struct HomeButton {
    map: MapViewHandle,
    /// Caller-supplied extent; takes precedence over the captured view.
    extent: Option<Rect<f64>>,
    messages: Rc<Messages>,
    style: ControlStyle,
    captured_center: Rc<Cell<Option<Coord<f64>>>>,
    captured_resolution: Rc<Cell<Option<f64>>>,
}

impl HomeButton {
    /// Binds a home button to a map view.
    ///
    /// Without an explicit `extent`, the view's current center and
    /// resolution are captured now; whichever of the two is still undefined
    /// is filled in by a self-deregistering subscription when the view first
    /// reports it.
    pub fn new(
        map: &MapView,
        extent: Option<Rect<f64>>,
        messages: Rc<Messages>,
        style: ControlStyle,
    ) -> Self {
        let captured_center = Rc::new(Cell::new(None));
        let captured_resolution = Rc::new(Cell::new(None));

        if extent.is_none() {
            let mut view = map.view_mut();

            match view.center() {
                Some(center) => captured_center.set(Some(center)),
                None => {
                    let slot = Rc::clone(&captured_center);
                    view.once_center_changed(move |center| {
                        log::debug!("captured initial center ({}, {})", center.x, center.y);
                        slot.set(Some(center));
                    });
                }
            }

            match view.resolution() {
                Some(resolution) => captured_resolution.set(Some(resolution)),
                None => {
                    let slot = Rc::clone(&captured_resolution);
                    view.once_resolution_changed(move |resolution| {
                        log::debug!("captured initial resolution {resolution}");
                        slot.set(Some(resolution));
                    });
                }
            }
        }

        Self {
            map: map.handle(),
            extent,
            messages,
            style,
            captured_center,
            captured_resolution,
        }
    }

    /// Restores the initial extent.
    ///
    /// Explicit extent: fit it to the current viewport size, unconstrained
    /// by the zoom ladder. Captured extent: restore center and resolution
    /// once both are known. Neither: a defined no-op.
    pub fn go_home(&self) -> Result<(), ControlError> {
        let map = self.map.upgrade()?;

        if let Some(extent) = self.extent {
            let size = map.size();
            map.view_mut().fit(
                extent,
                size,
                FitOptions {
                    constrain_resolution: false,
                },
            );
        } else if let (Some(center), Some(resolution)) =
            (self.captured_center.get(), self.captured_resolution.get())
        {
            let mut view = map.view_mut();
            view.set_center(center);
            view.set_resolution(resolution);
        } else {
            log::debug!("initial extent not yet captured; ignoring home activation");
        }
        Ok(())
    }

    /// Renders the button.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let response = control_button(
            ui,
            &self.style,
            egui_phosphor::regular::ARROWS_OUT,
            self.messages.format(MessageId::HomeButtonTitle),
        );
        if response.clicked() {
            if let Err(err) = self.go_home() {
                log::warn!("home button failed: {err}");
            }
        }
        response
    }
}
