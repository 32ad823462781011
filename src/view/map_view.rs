//! Shared handle around a map's view and viewport size.
//!
//! A [`MapView`] is owned by the hosting application; controls hold a
//! non-owning [`MapViewHandle`] and upgrade it per activation. Everything is
//! single-threaded (`Rc`/`RefCell`), consistent with a UI event loop.

use crate::error::ControlError;
use crate::view::View;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

struct MapViewInner {
    view: View,
    /// Viewport size in pixels (width, height), kept current by the host.
    size: (u32, u32),
}

/// Owning, cloneable handle to a map view.
#[derive(Clone)]
pub struct MapView {
    inner: Rc<RefCell<MapViewInner>>,
}

impl std::fmt::Debug for MapView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapView").finish_non_exhaustive()
    }
}

impl MapView {
    pub fn new(view: View) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MapViewInner { view, size: (0, 0) })),
        }
    }

    /// Current viewport size in pixels (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.inner.borrow().size
    }

    /// Updates the viewport size; called by the host whenever it changes.
    pub fn set_size(&self, width: u32, height: u32) {
        self.inner.borrow_mut().size = (width, height);
    }

    /// Shared read access to the view.
    pub fn view(&self) -> Ref<'_, View> {
        Ref::map(self.inner.borrow(), |inner| &inner.view)
    }

    /// Exclusive access to the view for mutation or subscription.
    pub fn view_mut(&self) -> RefMut<'_, View> {
        RefMut::map(self.inner.borrow_mut(), |inner| &mut inner.view)
    }

    /// A non-owning handle for controls to keep.
    pub fn handle(&self) -> MapViewHandle {
        MapViewHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// Non-owning reference to a [`MapView`].
#[derive(Clone)]
pub struct MapViewHandle {
    inner: Weak<RefCell<MapViewInner>>,
}

impl MapViewHandle {
    /// Reacquires the map view, failing if the host has dropped it.
    pub fn upgrade(&self) -> Result<MapView, ControlError> {
        self.inner
            .upgrade()
            .map(|inner| MapView { inner })
            .ok_or(ControlError::InvalidReference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_size_roundtrip() {
        let map = MapView::new(View::new());
        assert_eq!(map.size(), (0, 0));
        map.set_size(800, 600);
        assert_eq!(map.size(), (800, 600));
    }

    #[test]
    fn test_clones_share_the_same_view() {
        let map = MapView::new(View::new());
        let alias = map.clone();

        alias.view_mut().set_center(coord! { x: 1.0, y: 2.0 });
        assert_eq!(map.view().center(), Some(coord! { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn test_handle_upgrade_while_alive() {
        let map = MapView::new(View::new());
        let handle = map.handle();
        assert!(handle.upgrade().is_ok());
    }

    #[test]
    fn test_handle_upgrade_after_drop_fails() {
        let handle = {
            let map = MapView::new(View::new());
            map.handle()
        };
        assert_eq!(handle.upgrade().unwrap_err(), ControlError::InvalidReference);
    }
}
