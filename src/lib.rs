#![warn(clippy::all)]

//! Presentational controls for egui map applications.
//!
//! Two independent leaf controls that an application mounts next to a map
//! view:
//!
//! - [`ui::GlobeToggle`] switches the 2D map into a synchronized 3D globe
//!   view (rendered by an injected [`globe::GlobeEngine`]) and back, lazily
//!   constructing the 3D view on first activation and suspending other
//!   interactive tools through a [`tools::ToolCoordinator`] while the globe
//!   is up.
//! - [`ui::HomeButton`] restores the view to a captured or explicitly
//!   supplied initial extent.
//!
//! The [`view`] module provides the shared view model the controls operate
//! on, including the one-shot change notifications that make the home
//! button's initial-extent capture tolerant of asynchronous view
//! initialization.

pub mod app;
pub mod error;
pub mod globe;
pub mod i18n;
pub mod tools;
pub mod ui;
pub mod view;

pub use error::ControlError;
pub use ui::{ControlStyle, GlobeToggle, GlobeToggleOptions, HomeButton};
pub use view::{MapView, View};
