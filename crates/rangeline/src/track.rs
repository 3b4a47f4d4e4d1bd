//! # Range track
//!
//! `RangeTrack` is the composition root of one slider. It owns the measured
//! geometry, the drag controller and the settle transition, and it is the
//! only thing that talks to the global `PointerDispatcher`.
//!
//! The owner keeps the selected range. Each render it hands the current value
//! to `set_selected` and reads `visual()` back:
//!
//! ```rust
//! use rangeline::*;
//! use rangeline_core::*;
//!
//! let dispatcher = PointerDispatcher::new();
//! let selected = signal(SelectedRange::new(600.0, 3000.0));
//!
//! let config = SliderConfig::new(600.0, 3000.0)?.with_step(100.0)?;
//! let track = RangeTrack::new(config, selected.get(), dispatcher.clone(), {
//!     let selected = selected.clone();
//!     move |range| selected.set(range)
//! });
//! track.mount(TrackMeasurement::new(Rect::new(0.0, 0.0, 480.0, 8.0)));
//!
//! // Grab the start handle and drag it 110 px to the right.
//! track.grab_start_handle(&PointerEvent::down(Vec2::new(0.0, 4.0)));
//! dispatcher.dispatch(&PointerEvent::moved(Vec2::new(110.0, 4.0)));
//! dispatcher.dispatch(&PointerEvent::up(Vec2::new(110.0, 4.0)));
//!
//! assert_eq!(selected.get(), SelectedRange::new(1100.0, 3000.0));
//! assert_eq!(dispatcher.listener_count(), 0);
//! # Ok::<(), rangeline_core::ConfigError>(())
//! ```
//!
//! While a drag runs, `visual()` follows the raw cursor and ignores the
//! owner's value; the owner still hears about every move that changes the
//! rounded range. After release the display settles onto the owner's value.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rangeline_core::{
    Clock, PointerDispatcher, PointerEvent, PointerId, Rect, Subscription, SystemClock, Vec2,
};
use smallvec::SmallVec;

use crate::mapper::normalize_range;
use crate::{
    CoordinateMapper, DragController, DragOutcome, GrabbedTarget, InteractionMode,
    NormalizedRange, SelectedRange, SettleTransition, SliderConfig, TrackGeometry, ValueRounder,
};

/// Layout results the host reports after each layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMeasurement {
    /// Page-space rect of the track element.
    pub track: Rect,
    /// Rendered width of one handle; handles are centred on their value.
    pub handle_width: f32,
}

impl TrackMeasurement {
    pub fn new(track: Rect) -> Self {
        Self {
            track,
            handle_width: 0.0,
        }
    }

    pub fn with_handle_width(mut self, width: f32) -> Self {
        self.handle_width = width.max(0.0);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleVisual {
    pub normalized: f64,
    /// Track-relative x of the handle's value.
    pub center_px: f64,
    /// Track-relative x of the handle element's left edge.
    pub left_px: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandVisual {
    pub normalized: NormalizedRange,
    pub left_px: f64,
    pub width_px: f64,
}

/// Everything a host needs to position the handles and the band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackVisual {
    pub start_handle: HandleVisual,
    pub end_handle: HandleVisual,
    pub band: BandVisual,
    pub mode: InteractionMode,
    pub grabbed: GrabbedTarget,
    /// A settle transition is running; hosts may attach transition styling.
    pub settling: bool,
}

type ChangeCallback = Rc<dyn Fn(SelectedRange)>;

struct TrackState {
    config: SliderConfig,
    rounder: ValueRounder,
    measurement: Option<TrackMeasurement>,
    mapper: Option<CoordinateMapper>,
    /// Owner's value, ordered and clamped into the domain.
    external: SelectedRange,
    /// Owner's value as last supplied, before clamping.
    last_input: SelectedRange,
    controller: DragController,
    pointer: Option<PointerId>,
    settle: Option<SettleTransition>,
    /// What the owner holds as of the running drag: its value at grab time,
    /// then each range handed to `on_change`.
    reported: Option<SelectedRange>,
    /// Global move and release listeners of the running drag.
    listeners: SmallVec<[Subscription; 2]>,
}

impl TrackState {
    fn apply_measurement(&mut self, m: TrackMeasurement) {
        let geometry = TrackGeometry::from_rect(m.track);
        self.measurement = Some(m);
        self.mapper = geometry
            .is_measured()
            .then(|| CoordinateMapper::new(*self.config.domain(), geometry));
    }

    fn accept_external(&mut self, range: SelectedRange) {
        let domain = *self.config.domain();
        let clamped = domain.clamp_range(range);
        if clamped != range && range != self.last_input {
            log::warn!(
                "selected range {range:?} is not an ordered range within [{}, {}]; using {clamped:?}",
                domain.min(),
                domain.max()
            );
        }
        self.last_input = range;
        self.external = clamped;
        if let Some(settle) = self.settle.as_mut() {
            settle.retarget(normalize_range(&domain, clamped));
        }
    }

    /// Ends the running drag and hands back its listeners for the caller to
    /// drop once no borrow of the state is held.
    fn finish_drag(&mut self, clock: &Rc<dyn Clock>) -> SmallVec<[Subscription; 2]> {
        let listeners = std::mem::take(&mut self.listeners);
        self.pointer = None;
        self.reported = None;

        if let Some(release) = self.controller.release() {
            let domain = *self.config.domain();
            let from = normalize_range(&domain, release.transient);
            let to = normalize_range(&domain, self.external);
            self.settle = match self.config.settle() {
                Some(spec) if from != to => {
                    Some(SettleTransition::start(from, to, *spec, clock.clone()))
                }
                _ => None,
            };
        }
        listeners
    }

    fn displayed(&self) -> NormalizedRange {
        let domain = self.config.domain();
        if let Some(transient) = self.controller.transient() {
            return normalize_range(domain, transient);
        }
        match &self.settle {
            Some(settle) => settle.current(),
            None => normalize_range(domain, self.external),
        }
    }
}

struct Shared {
    state: RefCell<TrackState>,
    on_change: ChangeCallback,
    clock: Rc<dyn Clock>,
}

impl Shared {
    fn pointer_moved(&self, pe: &PointerEvent) {
        let report = {
            let mut st = self.state.borrow_mut();
            if st.pointer != Some(pe.id) {
                return;
            }
            let Some(mapper) = st.mapper else {
                return;
            };
            let rounder = st.rounder;
            let outcome = st
                .controller
                .move_to(f64::from(pe.position.x), &mapper, &rounder);
            match outcome {
                // Sub-step moves update the display but not the owner.
                DragOutcome::Moved { reported, .. } if st.reported != Some(reported) => {
                    st.reported = Some(reported);
                    Some(reported)
                }
                _ => None,
            }
        };

        // The owner may call back into the track from here.
        if let Some(range) = report {
            (self.on_change)(range);
        }
    }

    fn pointer_released(&self, pe: &PointerEvent) {
        let listeners = {
            let mut st = self.state.borrow_mut();
            if st.pointer != Some(pe.id) {
                return;
            }
            st.finish_drag(&self.clock)
        };
        drop(listeners);
    }
}

pub struct RangeTrack {
    shared: Rc<Shared>,
    dispatcher: PointerDispatcher,
}

impl RangeTrack {
    pub fn new(
        config: SliderConfig,
        selected: SelectedRange,
        dispatcher: PointerDispatcher,
        on_change: impl Fn(SelectedRange) + 'static,
    ) -> Self {
        Self::with_clock(
            config,
            selected,
            dispatcher,
            on_change,
            Rc::new(SystemClock),
        )
    }

    pub fn with_clock(
        config: SliderConfig,
        selected: SelectedRange,
        dispatcher: PointerDispatcher,
        on_change: impl Fn(SelectedRange) + 'static,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let mut state = TrackState {
            config,
            rounder: config.rounder(),
            measurement: None,
            mapper: None,
            external: selected,
            // Never equal to any input, so a bad initial value is reported.
            last_input: SelectedRange::new(f64::NAN, f64::NAN),
            controller: DragController::new(),
            pointer: None,
            settle: None,
            reported: None,
            listeners: SmallVec::new(),
        };
        state.accept_external(selected);

        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                on_change: Rc::new(on_change),
                clock,
            }),
            dispatcher,
        }
    }

    /// First measurement after layout. Grabs are no-ops until this runs.
    pub fn mount(&self, measurement: TrackMeasurement) {
        log::debug!("track mounted at {:?}", measurement.track);
        self.shared.state.borrow_mut().apply_measurement(measurement);
    }

    /// Re-measure after a viewport change. A running drag keeps its range.
    pub fn resize(&self, measurement: TrackMeasurement) {
        let mut st = self.shared.state.borrow_mut();
        log::debug!(
            "track resized to {:?} ({:?})",
            measurement.track,
            st.controller.mode()
        );
        st.apply_measurement(measurement);
    }

    /// The owner's current value; call on every render.
    pub fn set_selected(&self, range: SelectedRange) {
        self.shared.state.borrow_mut().accept_external(range);
    }

    pub fn grab_start_handle(&self, pe: &PointerEvent) -> bool {
        self.grab(GrabbedTarget::StartHandle, pe)
    }

    pub fn grab_end_handle(&self, pe: &PointerEvent) -> bool {
        self.grab(GrabbedTarget::EndHandle, pe)
    }

    pub fn grab_band(&self, pe: &PointerEvent) -> bool {
        self.grab(GrabbedTarget::Band, pe)
    }

    /// Hit-tests `pe` against the handles and the band, then grabs the hit.
    pub fn pointer_down(&self, pe: &PointerEvent) -> bool {
        match self.hit_test(pe.position) {
            GrabbedTarget::None => false,
            target => self.grab(target, pe),
        }
    }

    pub fn grab(&self, target: GrabbedTarget, pe: &PointerEvent) -> bool {
        {
            let mut st = self.shared.state.borrow_mut();
            let selected = st.external;
            let mapper = st.mapper;
            if !st
                .controller
                .grab(target, f64::from(pe.position.x), selected, mapper.as_ref())
            {
                return false;
            }
            st.pointer = Some(pe.id);
            st.reported = Some(selected);
            st.settle = None;
        }

        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let on_move = self.dispatcher.subscribe({
            let weak = weak.clone();
            move |pe: &PointerEvent| {
                if pe.is_move()
                    && let Some(shared) = weak.upgrade()
                {
                    shared.pointer_moved(pe);
                }
            }
        });
        let on_release = self.dispatcher.subscribe(move |pe: &PointerEvent| {
            if pe.is_release()
                && let Some(shared) = weak.upgrade()
            {
                shared.pointer_released(pe);
            }
        });

        let mut st = self.shared.state.borrow_mut();
        st.listeners.push(on_move);
        st.listeners.push(on_release);
        true
    }

    /// Which element sits under `position`. Handles win over the band; when
    /// both handles are hit the nearer one wins, ties going to the start.
    ///
    /// Only points on the track count, with half a handle width of slack
    /// around it for handles that overhang the track.
    pub fn hit_test(&self, position: Vec2) -> GrabbedTarget {
        let st = self.shared.state.borrow();
        let (Some(mapper), Some(m)) = (st.mapper, st.measurement) else {
            return GrabbedTarget::None;
        };
        if !m.track.inflate(m.handle_width / 2.0).contains(position) {
            return GrabbedTarget::None;
        }
        let x = f64::from(position.x);
        let half = f64::from(m.handle_width) / 2.0;
        let shown = st.displayed();
        let start_x = mapper.normalized_to_pixel(shown.start);
        let end_x = mapper.normalized_to_pixel(shown.end);

        let d_start = (x - start_x).abs();
        let d_end = (x - end_x).abs();
        if d_start <= half || d_end <= half {
            return if d_start <= d_end {
                GrabbedTarget::StartHandle
            } else {
                GrabbedTarget::EndHandle
            };
        }
        if x >= start_x && x <= end_x {
            return GrabbedTarget::Band;
        }
        GrabbedTarget::None
    }

    /// Advances the settle transition. Returns true while another frame is
    /// needed.
    pub fn tick(&self) -> bool {
        let mut st = self.shared.state.borrow_mut();
        let Some(settle) = st.settle.as_mut() else {
            return false;
        };
        if settle.tick() {
            return true;
        }
        st.settle = None;
        false
    }

    pub fn visual(&self) -> TrackVisual {
        let st = self.shared.state.borrow();
        let shown = st.displayed();
        let width = st
            .mapper
            .map(|m| m.geometry().pixel_width)
            .unwrap_or(0.0);
        let half = st
            .measurement
            .map(|m| f64::from(m.handle_width) / 2.0)
            .unwrap_or(0.0);

        let handle = |normalized: f64| {
            let center_px = normalized * width;
            HandleVisual {
                normalized,
                center_px,
                left_px: center_px - half,
            }
        };

        TrackVisual {
            start_handle: handle(shown.start),
            end_handle: handle(shown.end),
            band: BandVisual {
                normalized: shown,
                left_px: shown.start * width,
                width_px: shown.len() * width,
            },
            mode: st.controller.mode(),
            grabbed: st.controller.grabbed(),
            settling: st.settle.as_ref().is_some_and(|s| s.is_running()),
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.shared.state.borrow().controller.mode()
    }

    pub fn grabbed(&self) -> GrabbedTarget {
        self.shared.state.borrow().controller.grabbed()
    }

    /// The locally tracked range of a running drag, in domain units.
    pub fn transient(&self) -> Option<SelectedRange> {
        self.shared.state.borrow().controller.transient()
    }

    /// The owner's value as the track uses it (ordered, clamped).
    pub fn selected(&self) -> SelectedRange {
        self.shared.state.borrow().external
    }

    pub fn is_measured(&self) -> bool {
        self.shared.state.borrow().mapper.is_some()
    }

    pub fn config(&self) -> SliderConfig {
        self.shared.state.borrow().config
    }

    pub fn dispatcher(&self) -> &PointerDispatcher {
        &self.dispatcher
    }
}

impl Drop for RangeTrack {
    fn drop(&mut self) {
        let listeners = {
            let mut st = self.shared.state.borrow_mut();
            if st.controller.mode() == InteractionMode::Dragging {
                log::debug!("track unmounted mid-drag; releasing {:?}", st.controller.grabbed());
                st.controller.release();
            }
            st.pointer = None;
            st.reported = None;
            std::mem::take(&mut st.listeners)
        };
        drop(listeners);
    }
}

impl std::fmt::Debug for RangeTrack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.shared.state.borrow();
        f.debug_struct("RangeTrack")
            .field("config", &st.config)
            .field("selected", &st.external)
            .field("mode", &st.controller.mode())
            .field("grabbed", &st.controller.grabbed())
            .field("settle", &st.settle)
            .finish()
    }
}
