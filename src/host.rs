//! Collaborators the crate drives but does not implement.
//!
//! A [`Host`] owns the actual boxes (DOM nodes, native widgets, test fakes)
//! and knows how to measure and restyle them. A [`ResizeSource`] delivers
//! the display surface's resize signal. A [`Preloader`] defers attachment
//! until an element's natural size is known.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::geometry::{Rect, Size};

/// Visibility applied together with a computed [`Rect`].
///
/// Elements start hidden so they never flash at their unsized dimensions;
/// every recomputation shows them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Laid out but not painted.
    #[default]
    Hidden,
    /// Painted.
    Visible,
}

/// Measurement and styling backend.
pub trait Host {
    /// Reference to an element or viewport box.
    type Handle: Clone + fmt::Debug;

    /// Current outer size of `target`, margins included.
    fn read_size(&self, target: &Self::Handle) -> Size;

    /// Set width, height, top, left, and visibility of `element` in one
    /// observable update.
    fn apply(&mut self, element: &Self::Handle, rect: Rect, visibility: Visibility);

    /// Per-element selector naming the ancestor to use as viewport, if the
    /// element carries one (e.g. a `data-viewport` attribute).
    fn viewport_hint(&self, element: &Self::Handle) -> Option<String>;

    /// Nearest ancestor of `element`, starting from its parent, matching
    /// `selector`.
    fn closest_ancestor(&self, element: &Self::Handle, selector: &str) -> Option<Self::Handle>;

    /// The full display surface (the window).
    fn display_surface(&self) -> Self::Handle;
}

/// Source of display-surface resize signals.
pub trait ResizeSource {
    /// Run `listener` once per resize event from now on.
    fn subscribe(&mut self, listener: Box<dyn FnMut()>);
}

/// Defers work until an element's natural size is available.
pub trait Preloader<T> {
    /// Whether `element` must be waited on (images not yet decoded).
    fn needs_preload(&self, element: &T) -> bool;

    /// Invoke `ready` exactly once, after `element`'s natural size is known.
    fn when_ready(&mut self, element: &T, ready: Box<dyn FnOnce()>);
}

/// Preloader for hosts whose elements always have a known size.
#[derive(Copy, Clone, Debug, Default)]
pub struct Immediate;

impl<T> Preloader<T> for Immediate {
    fn needs_preload(&self, _element: &T) -> bool {
        false
    }

    fn when_ready(&mut self, _element: &T, ready: Box<dyn FnOnce()>) {
        ready();
    }
}
