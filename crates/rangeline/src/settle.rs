use std::rc::Rc;

use rangeline_core::{AnimatedValue, AnimationSpec, Clock};

use crate::NormalizedRange;

/// Eases the displayed range from where the drag left it to the rounded
/// value the owner holds.
pub struct SettleTransition {
    anim: AnimatedValue<NormalizedRange>,
}

impl SettleTransition {
    pub fn start(
        from: NormalizedRange,
        to: NormalizedRange,
        spec: AnimationSpec,
        clock: Rc<dyn Clock>,
    ) -> Self {
        let mut anim = AnimatedValue::new(from, spec, clock);
        anim.set_target(to);
        Self { anim }
    }

    /// The owner changed its value mid-transition.
    pub fn retarget(&mut self, to: NormalizedRange) {
        if *self.anim.target() != to {
            self.anim.retarget(to);
        }
    }

    /// Advances the transition. Returns false once it has landed.
    pub fn tick(&mut self) -> bool {
        self.anim.update()
    }

    pub fn current(&self) -> NormalizedRange {
        *self.anim.get()
    }

    pub fn target(&self) -> NormalizedRange {
        *self.anim.target()
    }

    pub fn is_running(&self) -> bool {
        self.anim.is_animating()
    }
}

impl std::fmt::Debug for SettleTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettleTransition")
            .field("current", self.anim.get())
            .field("target", self.anim.target())
            .field("running", &self.anim.is_animating())
            .finish()
    }
}
