//! # Rangeline
//!
//! A headless dual-handle range slider. The host lays out a track, two
//! handles and the band between them; rangeline turns raw pointer movement
//! into ordered, step-rounded domain ranges and tells the host where to put
//! everything.
//!
//! The pieces, leaf first:
//!
//! - [`CoordinateMapper`] converts between domain values, `[0, 1]` positions
//!   and page pixels. It never clamps.
//! - [`ValueRounder`] snaps values to `min + k * step`.
//! - [`DragController`] is the grab / move / release state machine. It owns
//!   the transient range while a drag runs and enforces ordering and bounds.
//! - [`RangeTrack`] ties the above to a [`PointerDispatcher`] and to the
//!   owner's value, and produces a [`TrackVisual`] each render.
//! - [`tick_strip`] and [`format`] build the ruler under the track.
//!
//! The owner's value is never written by the slider. Changes arrive through
//! the `on_change` callback, already rounded and ordered, whenever a move
//! during a drag changes the rounded range.
//!
//! [`PointerDispatcher`]: rangeline_core::PointerDispatcher

pub mod config;
pub mod drag;
pub mod format;
pub mod mapper;
pub mod range;
pub mod rounder;
pub mod settle;
pub mod ticks;
pub mod track;

pub use config::*;
pub use drag::*;
pub use mapper::{CoordinateMapper, TrackGeometry};
pub use range::*;
pub use rounder::*;
pub use settle::*;
pub use ticks::*;
pub use track::*;
