//! Map view model: view state, shared handles, and one-shot notifications.

mod events;
mod map_view;
#[allow(clippy::module_inception)]
mod view;

pub use events::{OnceSignal, SubscriptionId};
pub use map_view::{MapView, MapViewHandle};
pub use view::{FitOptions, View, DEFAULT_MAX_RESOLUTION};
