//! # Pointers, Listeners, and Clocks
//!
//! `rangeline-core` holds the small runtime the slider engine sits on. Nothing
//! here knows about ranges or handles; it is the headless stand-in for the
//! pieces a browser or windowing toolkit would normally provide.
//!
//! - `PointerEvent`: a page-positioned pointer sample.
//! - `PointerDispatcher`: the global (document-level) listener registry.
//! - `Dispose` / `Subscription`: cleanup that runs exactly once.
//! - `Signal<T>`: observable state owned by a host.
//! - `AnimatedValue<T>`: tweened values driven by an injected `Clock`.
//!
//! ## Global listeners
//!
//! Drags must keep receiving moves after the cursor leaves the element that
//! was grabbed, so listeners are registered on the dispatcher instead of on
//! an element. Every registration hands back a `Subscription`:
//!
//! ```rust
//! use rangeline_core::*;
//!
//! let dispatcher = PointerDispatcher::new();
//! let sub = dispatcher.subscribe(|pe: &PointerEvent| {
//!     log::trace!("pointer at {:?}", pe.position);
//! });
//! assert_eq!(dispatcher.listener_count(), 1);
//!
//! dispatcher.dispatch(&PointerEvent::moved(Vec2 { x: 10.0, y: 0.0 }));
//! drop(sub); // unsubscribes
//! assert_eq!(dispatcher.listener_count(), 0);
//! ```
//!
//! ## Signals
//!
//! ```rust
//! use rangeline_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Clocks
//!
//! Animations never read a global clock. Whoever owns an animated value
//! passes an `Rc<dyn Clock>`; tests use `TestClock` and advance it by hand.

pub mod animation;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod input;
pub mod signal;
pub mod tests;

pub use animation::*;
pub use dispatch::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use signal::*;
