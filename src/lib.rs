//! Full-size element geometry: fill, align, and preserve aspect ratio against
//! a resizing viewport.
//!
//! The math is pure and allocation-free; `no_std` compatible. Binding
//! elements to a host and reacting to resize signals needs `alloc`.
//!
//! # Modules
//!
//! - [`geometry`] — `Size`, `Rect`, aspect ratios
//! - [`align`] — Vertical and horizontal anchoring
//! - [`proportion`] — Target size from viewport size (cover, stretch, single-axis)
//! - [`engine`] — Sizing plus anchoring into one `Rect`
//! - [`config`] — Typed per-element configuration
//! - [`host`] — Measurement, styling, resize, and preload collaborators
//! - [`binding`] — One element sized against one viewport
//! - [`registry`] — All bindings plus the shared resize subscription
//! - [`options`] — String options parsing into `Config`

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod align;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod proportion;

#[cfg(feature = "alloc")]
pub mod binding;
#[cfg(feature = "alloc")]
pub mod host;
#[cfg(feature = "alloc")]
pub mod options;
#[cfg(feature = "alloc")]
pub mod registry;

// Re-exports: core types
pub use align::{Axis, HAlign, UnknownKeyword, VAlign};
pub use config::Config;
pub use engine::Engine;
pub use geometry::{Rect, Size};
pub use proportion::{Leading, Resizer};

#[cfg(feature = "alloc")]
pub use binding::{Binding, BindingError};
#[cfg(feature = "alloc")]
pub use host::{Host, Immediate, Preloader, ResizeSource, Visibility};
#[cfg(feature = "alloc")]
pub use registry::{Attached, Registry};
