//! The drag state machine.
//!
//! ```text
//! Idle --grab(target)--> Dragging { target, cursor_shift, transient } --release--> Idle
//! ```
//!
//! While dragging, the displayed range comes from the transient copy held
//! here; the owner only hears about it through rounded change reports. The
//! transient range is always ordered. When a handle is dragged past the other
//! one the endpoints trade roles and the grabbed target follows the handle
//! under the cursor, so the range never jumps.

use crate::{CoordinateMapper, SelectedRange, ValueRounder};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrabbedTarget {
    #[default]
    None,
    StartHandle,
    EndHandle,
    Band,
}

impl GrabbedTarget {
    pub fn is_handle(self) -> bool {
        matches!(self, GrabbedTarget::StartHandle | GrabbedTarget::EndHandle)
    }

    fn crossed(self) -> Self {
        match self {
            GrabbedTarget::StartHandle => GrabbedTarget::EndHandle,
            GrabbedTarget::EndHandle => GrabbedTarget::StartHandle,
            other => other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub target: GrabbedTarget,
    /// Page-x distance from the grabbed element's anchor to the cursor at grab
    /// time. Handles anchor at their value, the band at its left edge.
    pub cursor_shift: f64,
    pub transient: SelectedRange,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// No drag in progress.
    Ignored,
    /// The move produced the range already shown.
    Unchanged,
    Moved {
        transient: SelectedRange,
        reported: SelectedRange,
        crossed: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// The element the user was physically moving when the pointer came up.
    pub target: GrabbedTarget,
    pub transient: SelectedRange,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        if self.session.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    pub fn grabbed(&self) -> GrabbedTarget {
        self.session.map(|s| s.target).unwrap_or_default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn transient(&self) -> Option<SelectedRange> {
        self.session.map(|s| s.transient)
    }

    /// Starts a drag seeded from `selected`. Returns false (and stays idle)
    /// when the track is unmeasured, the target is `None`, or a drag is
    /// already running.
    pub fn grab(
        &mut self,
        target: GrabbedTarget,
        cursor_x: f64,
        selected: SelectedRange,
        mapper: Option<&CoordinateMapper>,
    ) -> bool {
        if self.session.is_some() || target == GrabbedTarget::None {
            return false;
        }
        let Some(mapper) = mapper.filter(|m| m.geometry().is_measured()) else {
            log::debug!("grab of {target:?} ignored: track not measured yet");
            return false;
        };

        let transient = selected.ordered();
        let anchor = match target {
            GrabbedTarget::EndHandle => mapper.value_to_pixel(transient.end),
            _ => mapper.value_to_pixel(transient.start),
        };

        self.session = Some(DragSession {
            target,
            cursor_shift: cursor_x - anchor,
            transient,
        });
        log::debug!("grabbed {target:?} at x={cursor_x} (shift {})", cursor_x - anchor);
        true
    }

    pub fn move_to(
        &mut self,
        cursor_x: f64,
        mapper: &CoordinateMapper,
        rounder: &ValueRounder,
    ) -> DragOutcome {
        let Some(session) = self.session.as_mut() else {
            return DragOutcome::Ignored;
        };

        let current = session.transient;
        let domain = mapper.domain();
        let position = mapper.pixel_to_normalized(cursor_x - session.cursor_shift);

        let mut crossed = false;
        let next = match session.target {
            GrabbedTarget::StartHandle | GrabbedTarget::EndHandle => {
                let value = domain.clamp(mapper.to_domain(position.clamp(0.0, 1.0)));
                let fixed = if session.target == GrabbedTarget::StartHandle {
                    crossed = value > current.end;
                    current.end
                } else {
                    crossed = value < current.start;
                    current.start
                };
                if crossed {
                    session.target = session.target.crossed();
                }
                SelectedRange {
                    start: value.min(fixed),
                    end: value.max(fixed),
                }
            }
            GrabbedTarget::Band => {
                let len = current.len();
                let upper = (domain.max() - len).max(domain.min());
                let start = mapper.to_domain(position).clamp(domain.min(), upper);
                SelectedRange {
                    start,
                    end: start + len,
                }
            }
            GrabbedTarget::None => return DragOutcome::Ignored,
        };

        if next == current {
            return DragOutcome::Unchanged;
        }

        session.transient = next;
        if crossed {
            log::debug!("handles crossed; now dragging {:?}", session.target);
        }
        log::trace!("drag {:?} -> {next:?}", session.target);

        DragOutcome::Moved {
            transient: next,
            reported: rounder.round_range(next),
            crossed,
        }
    }

    pub fn release(&mut self) -> Option<Release> {
        let session = self.session.take()?;
        log::debug!(
            "released {:?} at {:?}",
            session.target,
            session.transient
        );
        Some(Release {
            target: session.target,
            transient: session.transient,
        })
    }
}
