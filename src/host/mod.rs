//! Host capabilities consumed by the navigation controllers
//!
//! The host is whatever owns the rendered page: the terminal front-end, the
//! headless simulator, or a fake document in tests. Controllers never reach for
//! ambient globals; everything they observe or mutate comes through here.
//!
//! - [`Document`] - scroll position, viewport, element bounds, body style
//! - [`FrameQueue`] - animation-frame scheduling with cancellable handles
//! - [`Listeners`] - event subscriptions the host dispatches into
//! - [`IntersectionObserver`] - visibility ratios against a narrowed root

mod document;
mod frames;
mod intersection;
mod listeners;

pub use document::{Bounds, Document, HitBox, Point, ScrollBehavior, Viewport};
pub use frames::{FrameHandle, FrameQueue, FrameScheduler};
pub use intersection::{IntersectionEntry, IntersectionObserver, ObserverOptions, RootMargin};
pub use listeners::{EventKind, HostEvent, ListenerId, Listeners};
