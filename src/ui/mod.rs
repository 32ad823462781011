//! UI controls and shared rendering helpers.

mod globe_toggle;
mod home_button;
mod style;

pub use globe_toggle::{GlobeToggle, GlobeToggleOptions};
pub use home_button::HomeButton;
pub use style::ControlStyle;

use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

/// Renders a square icon button in the shared control style, with a tooltip.
fn control_button(
    ui: &mut egui::Ui,
    style: &ControlStyle,
    icon: &str,
    tooltip: &str,
) -> egui::Response {
    let button = egui::Button::new(
        RichText::new(icon)
            .size(style.icon_size())
            .color(Color32::WHITE),
    )
    .fill(style.background_color())
    .corner_radius(CornerRadius::same(style.corner_radius))
    .min_size(Vec2::splat(style.size));

    ui.add(button).on_hover_text(tooltip)
}

/// Equality check gating redraw work.
///
/// Feed it a snapshot of the observable state each frame; it reports whether
/// the snapshot differs from the previous one, so callers can skip repaint
/// requests (or other per-change work) while nothing changed.
#[derive(Debug, Default)]
pub struct ChangeGate<T: PartialEq> {
    last: Option<T>,
}

impl<T: PartialEq> ChangeGate<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Returns true (and remembers `next`) when the snapshot changed.
    pub fn changed(&mut self, next: T) -> bool {
        if self.last.as_ref() == Some(&next) {
            return false;
        }
        self.last = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_gate_reports_first_snapshot() {
        let mut gate = ChangeGate::new();
        assert!(gate.changed(1));
    }

    #[test]
    fn test_change_gate_suppresses_equal_snapshots() {
        let mut gate = ChangeGate::new();
        assert!(gate.changed((1, "a")));
        assert!(!gate.changed((1, "a")));
        assert!(gate.changed((2, "a")));
        assert!(!gate.changed((2, "a")));
    }
}
