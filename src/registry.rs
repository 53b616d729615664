//! Active bindings and the resize subscription that drives them.
//!
//! A [`Registry`] is an explicit, cheaply cloneable handle. Whoever composes
//! the application creates one with its [`Host`] and [`ResizeSource`]; there
//! is no process-wide state. All clones share the same bindings.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use fullsize::{Config, Host, Immediate, Rect, Registry, ResizeSource, Size, Visibility};
//!
//! struct Page {
//!     window: Size,
//! }
//!
//! impl Host for Page {
//!     type Handle = &'static str;
//!     fn read_size(&self, target: &&'static str) -> Size {
//!         if *target == "window" { self.window } else { Size::new(160.0, 90.0) }
//!     }
//!     fn apply(&mut self, _: &&'static str, _: Rect, _: Visibility) {}
//!     fn viewport_hint(&self, _: &&'static str) -> Option<String> { None }
//!     fn closest_ancestor(&self, _: &&'static str, _: &str) -> Option<&'static str> { None }
//!     fn display_surface(&self) -> &'static str { "window" }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Window(Rc<RefCell<Vec<Box<dyn FnMut()>>>>);
//!
//! impl ResizeSource for Window {
//!     fn subscribe(&mut self, listener: Box<dyn FnMut()>) {
//!         self.0.borrow_mut().push(listener);
//!     }
//! }
//!
//! let window = Window::default();
//! let registry = Registry::new(Page { window: Size::new(800.0, 200.0) }, window.clone());
//! registry.attach("hero", None, Config::new(), &mut Immediate);
//! assert_eq!(registry.last_rect(0), Some(Rect::new(800.0, 450.0, -125.0, 0.0)));
//!
//! registry.with_host(|page| page.window = Size::new(160.0, 900.0));
//! for listener in window.0.borrow_mut().iter_mut() {
//!     listener();
//! }
//! assert_eq!(registry.last_rect(0), Some(Rect::new(1600.0, 900.0, 0.0, -720.0)));
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::binding::{Binding, BindingError};
use crate::config::Config;
use crate::geometry::Rect;
use crate::host::{Host, Preloader, ResizeSource};

/// Outcome of [`Registry::attach`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attached {
    /// Bound immediately, at this registration index.
    Bound(usize),
    /// Waiting on the preloader; binds when it signals readiness.
    Deferred,
}

struct State<H: Host> {
    host: H,
    bindings: Vec<Binding<H>>,
}

impl<H: Host> State<H> {
    fn recompute_all(&mut self) {
        let Self { host, bindings } = self;
        for binding in bindings.iter_mut() {
            binding.recompute(host);
        }
    }
}

/// Ordered, append-only set of [`Binding`]s sharing one resize listener.
pub struct Registry<H: Host, S: ResizeSource> {
    state: Rc<RefCell<State<H>>>,
    source: Rc<RefCell<Subscription<S>>>,
}

struct Subscription<S> {
    source: S,
    listening: bool,
}

impl<H: Host, S: ResizeSource> Clone for Registry<H, S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            source: Rc::clone(&self.source),
        }
    }
}

impl<H, S> Registry<H, S>
where
    H: Host + 'static,
    H::Handle: 'static,
    S: ResizeSource + 'static,
{
    /// Create an empty registry. Nothing subscribes to `source` until the
    /// first binding is registered.
    pub fn new(host: H, source: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                host,
                bindings: Vec::new(),
            })),
            source: Rc::new(RefCell::new(Subscription {
                source,
                listening: false,
            })),
        }
    }

    /// Append `binding` and return its index.
    ///
    /// The first registration subscribes a single listener to the resize
    /// source; later registrations reuse it.
    pub fn register(&self, binding: Binding<H>) -> usize {
        let index = {
            let mut state = self.state.borrow_mut();
            state.bindings.push(binding);
            state.bindings.len() - 1
        };
        self.ensure_listening();
        index
    }

    /// Construct a binding against the owned host and register it.
    pub fn bind(&self, element: H::Handle, viewport: H::Handle, config: Config) -> usize {
        let binding = {
            let mut state = self.state.borrow_mut();
            Binding::new(&mut state.host, element, viewport, config)
        };
        self.register(binding)
    }

    /// Like [`bind`](Self::bind), rejecting elements with a degenerate
    /// original size.
    pub fn try_bind(
        &self,
        element: H::Handle,
        viewport: H::Handle,
        config: Config,
    ) -> Result<usize, BindingError> {
        let binding = {
            let mut state = self.state.borrow_mut();
            Binding::try_new(&mut state.host, element, viewport, config)?
        };
        Ok(self.register(binding))
    }

    /// Pick the box `element` is sized against.
    ///
    /// An element-level hint wins over `explicit`. When the hint matches no
    /// ancestor, or neither is given, the display surface is used.
    pub fn resolve_viewport(&self, element: &H::Handle, explicit: Option<H::Handle>) -> H::Handle {
        let state = self.state.borrow();
        let host = &state.host;
        let resolved = match host.viewport_hint(element) {
            Some(selector) => host.closest_ancestor(element, &selector).or_else(|| {
                log::debug!(
                    target: "fullsize::registry",
                    "{element:?}: no ancestor matches {selector:?}"
                );
                None
            }),
            None => explicit,
        };
        resolved.unwrap_or_else(|| host.display_surface())
    }

    /// Resolve the viewport, wait for `preloader` if the element needs it,
    /// then bind.
    pub fn attach<P>(
        &self,
        element: H::Handle,
        viewport: Option<H::Handle>,
        config: Config,
        preloader: &mut P,
    ) -> Attached
    where
        P: Preloader<H::Handle> + ?Sized,
    {
        let viewport = self.resolve_viewport(&element, viewport);
        if !preloader.needs_preload(&element) {
            return Attached::Bound(self.bind(element, viewport, config));
        }

        log::debug!(target: "fullsize::registry", "{element:?}: waiting for natural size");
        let registry = self.clone();
        let target = element.clone();
        preloader.when_ready(
            &element,
            Box::new(move || {
                registry.bind(target, viewport, config);
            }),
        );
        Attached::Deferred
    }

    /// Recompute every binding in registration order.
    pub fn recompute_all(&self) {
        self.state.borrow_mut().recompute_all();
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.state.borrow().bindings.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the resize listener has been subscribed.
    pub fn is_listening(&self) -> bool {
        self.source.borrow().listening
    }

    /// Rectangle last applied by the binding at `index`.
    pub fn last_rect(&self, index: usize) -> Option<Rect> {
        self.state.borrow().bindings.get(index).map(Binding::last_rect)
    }

    /// Run `f` with mutable access to the host.
    pub fn with_host<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        f(&mut self.state.borrow_mut().host)
    }

    fn ensure_listening(&self) {
        let mut subscription = self.source.borrow_mut();
        if subscription.listening {
            return;
        }
        subscription.listening = true;

        let state: Weak<RefCell<State<H>>> = Rc::downgrade(&self.state);
        subscription.source.subscribe(Box::new(move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            let Ok(mut state) = state.try_borrow_mut() else {
                log::warn!(target: "fullsize::registry", "resize during recompute ignored");
                return;
            };
            log::debug!(
                target: "fullsize::registry",
                "resize: recomputing {} bindings",
                state.bindings.len()
            );
            state.recompute_all();
        }));
        log::debug!(target: "fullsize::registry", "subscribed to resize source");
    }
}
