//! One element kept sized against one viewport.

use crate::config::Config;
use crate::engine::Engine;
use crate::geometry::{Rect, Size};
use crate::host::{Host, Visibility};

/// Construction error from [`Binding::try_new`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum BindingError {
    /// The element measured zero or non-finite on an axis, so its aspect
    /// ratio is unusable.
    #[error("element has degenerate original size {width}x{height}")]
    DegenerateOriginal {
        /// Measured width.
        width: f64,
        /// Measured height.
        height: f64,
    },
}

/// An element, its viewport, and the strategies sizing one to the other.
///
/// The element's size is read once, at construction, and kept as the
/// original for the binding's whole life.
#[derive(Debug)]
pub struct Binding<H: Host> {
    element: H::Handle,
    viewport: H::Handle,
    config: Config,
    engine: Engine,
    last: Rect,
}

impl<H: Host> Binding<H> {
    /// Measure `element`, select strategies, and apply the first rectangle.
    ///
    /// A zero-height element is accepted: its infinite ratio flows through
    /// the formulas and produces degenerate, but deterministic, output.
    pub fn new(host: &mut H, element: H::Handle, viewport: H::Handle, config: Config) -> Self {
        let original = host.read_size(&element);
        if !original.is_proper() {
            log::warn!(
                target: "fullsize::binding",
                "{element:?} measured {}x{}; aspect ratio is {}",
                original.width,
                original.height,
                original.ratio()
            );
        }
        Self::with_original(host, element, viewport, config, original)
    }

    /// Like [`new`](Self::new), but reject elements whose measured size
    /// has a zero or non-finite dimension.
    pub fn try_new(
        host: &mut H,
        element: H::Handle,
        viewport: H::Handle,
        config: Config,
    ) -> Result<Self, BindingError> {
        let original = host.read_size(&element);
        if !original.is_proper() {
            return Err(BindingError::DegenerateOriginal {
                width: original.width,
                height: original.height,
            });
        }
        Ok(Self::with_original(host, element, viewport, config, original))
    }

    fn with_original(
        host: &mut H,
        element: H::Handle,
        viewport: H::Handle,
        config: Config,
        original: Size,
    ) -> Self {
        let mut binding = Self {
            element,
            viewport,
            config,
            engine: Engine::new(&config, original),
            last: Rect::default(),
        };
        binding.recompute(host);
        binding
    }

    /// Measure the viewport, compute the rectangle, and apply it, marking
    /// the element visible.
    pub fn recompute(&mut self, host: &mut H) -> Rect {
        let viewport = host.read_size(&self.viewport);
        let rect = self.engine.compute(viewport);
        log::trace!(
            target: "fullsize::binding",
            "{:?} in {}x{} -> {rect:?}",
            self.element,
            viewport.width,
            viewport.height
        );
        host.apply(&self.element, rect, Visibility::Visible);
        self.last = rect;
        rect
    }

    /// The element being sized.
    pub fn element(&self) -> &H::Handle {
        &self.element
    }

    /// The box it is sized against.
    pub fn viewport(&self) -> &H::Handle {
        &self.viewport
    }

    /// Configuration captured at construction.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Element size captured at construction.
    pub fn original_size(&self) -> Size {
        self.engine.original()
    }

    /// Aspect ratio of [`original_size`](Self::original_size).
    pub fn original_ratio(&self) -> f64 {
        self.engine.original_ratio()
    }

    /// Most recently applied rectangle.
    pub fn last_rect(&self) -> Rect {
        self.last
    }
}
