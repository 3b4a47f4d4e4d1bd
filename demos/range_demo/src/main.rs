//! Drives a handful of sliders with scripted pointer input and prints what a
//! host would render: the tick ruler, every reported range, and how many
//! frames each release takes to settle.
//!
//! Run with `RUST_LOG=rangeline=debug` to watch the drag state machine.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use rangeline::{RangeTrack, SelectedRange, SliderConfig, TrackMeasurement, format};
use rangeline_core::{
    PointerDispatcher, PointerEvent, PointerId, PointerKind, Rect, Signal, TestClock, Vec2,
    signal,
};
use serde::Deserialize;
use web_time::Duration;

const PRESETS: &str = include_str!("../assets/presets.json");
const FRAME: Duration = Duration::from_millis(16);
const TRACK: Rect = Rect {
    x: 40.0,
    y: 200.0,
    w: 480.0,
    h: 8.0,
};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Labels {
    Time,
    Dollars,
}

impl Labels {
    fn format(self, value: f64) -> String {
        match self {
            Labels::Time => format::time_of_day(value),
            Labels::Dollars => format::prefixed("$")(value),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Preset {
    name: String,
    labels: Labels,
    selected: [f64; 2],
    config: SliderConfig,
}

const MOUSE: (PointerId, PointerKind) = (PointerId(1), PointerKind::Mouse);
const FINGER: (PointerId, PointerKind) = (PointerId(7), PointerKind::Touch);

/// What the host keeps per slider: the owned value and the widget.
struct Slider {
    preset: Preset,
    dispatcher: PointerDispatcher,
    clock: Rc<TestClock>,
    selected: Signal<SelectedRange>,
    track: RangeTrack,
}

impl Slider {
    fn new(preset: Preset) -> Self {
        let dispatcher = PointerDispatcher::new();
        let clock = Rc::new(TestClock::new());
        let [start, end] = preset.selected;
        let selected = signal(SelectedRange::new(start, end));

        let track = RangeTrack::with_clock(
            preset.config,
            selected.get(),
            dispatcher.clone(),
            {
                let selected = selected.clone();
                move |range| selected.set(range)
            },
            clock.clone(),
        );
        track.mount(TrackMeasurement::new(TRACK).with_handle_width(16.0));

        Self {
            preset,
            dispatcher,
            clock,
            selected,
            track,
        }
    }

    fn render(&self) {
        self.track.set_selected(self.selected.get());
    }

    fn handle_x(&self, end: bool) -> f32 {
        let v = self.track.visual();
        let handle = if end { v.end_handle } else { v.start_handle };
        TRACK.x + handle.center_px as f32
    }

    /// Presses at `from`, moves through `path`, releases at the last point.
    fn drag(&self, (id, kind): (PointerId, PointerKind), from: f32, path: &[f32]) -> Result<()> {
        let at = |x: f32| Vec2::new(x, TRACK.center_y());
        let down = PointerEvent::down(at(from)).with_id(id).with_kind(kind);
        if !self.track.pointer_down(&down) {
            anyhow::bail!("nothing to grab at x={from} on {:?}", self.preset.name);
        }
        log::info!("{}: grabbed {:?}", self.preset.name, self.track.grabbed());
        self.render();

        for &x in path {
            self.dispatcher
                .dispatch(&PointerEvent::moved(at(x)).with_id(id).with_kind(kind));
            self.render();
        }
        let last = path.last().copied().unwrap_or(from);
        self.dispatcher
            .dispatch(&PointerEvent::up(at(last)).with_id(id).with_kind(kind));
        self.render();

        let mut frames = 0;
        while self.track.tick() {
            self.clock.advance(FRAME);
            frames += 1;
        }
        log::info!("{}: settled in {frames} frames", self.preset.name);
        Ok(())
    }

    fn label(&self, range: SelectedRange) -> String {
        let labels = self.preset.labels;
        format!("{} - {}", labels.format(range.start), labels.format(range.end))
    }

    fn ruler(&self) -> String {
        self.preset
            .config
            .ticks(|v| self.preset.labels.format(v))
            .iter()
            .map(|t| t.label.clone().unwrap_or_else(|| "|".into()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self) -> Result<()> {
        println!("{}", self.preset.name);
        println!("  ruler:    {}", self.ruler());
        println!("  start:    {}", self.label(self.track.selected()));

        let reports = Rc::new(RefCell::new(Vec::new()));
        let sub = self.selected.subscribe({
            let reports = reports.clone();
            move |range: &SelectedRange| reports.borrow_mut().push(*range)
        });

        let step_px = TRACK.w / 8.0;
        let start = self.handle_x(false);
        let result = self
            .drag(MOUSE, start, &[start + step_px, start + 2.0 * step_px])
            .and_then(|()| {
                // Past the start handle: the handles trade places.
                let end = self.handle_x(true);
                self.drag(FINGER, end, &[end - 3.0 * step_px, TRACK.x - 50.0])
            })
            .and_then(|()| {
                let band = (self.handle_x(false) + self.handle_x(true)) / 2.0;
                self.drag(MOUSE, band, &[band + 1_000.0])
            });
        self.selected.unsubscribe(sub);
        result?;

        for range in reports.borrow().iter() {
            println!("  reported: {}", self.label(*range));
        }
        println!("  final:    {}", self.label(self.selected.get()));
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let presets: Vec<Preset> =
        serde_json::from_str(PRESETS).context("parsing slider presets")?;
    for preset in presets {
        Slider::new(preset).run()?;
        println!();
    }
    Ok(())
}
