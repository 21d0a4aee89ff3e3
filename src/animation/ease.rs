use crate::foundation::core::DotSet;

/// Slack added to the speed when deciding whether a dot has arrived, so that rounding in
/// the unit vector cannot leave a sub-epsilon remainder for an extra frame.
pub const ARRIVAL_EPSILON: f64 = 1e-9;

/// Result of one [`step_toward`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No motion: the sets differ in length, are empty, or the speed is zero.
    Skipped,
    /// Every dot was advanced or snapped.
    Advanced {
        /// Dots still short of their goal after this step.
        moving: usize,
        /// Dots sitting on their goal after this step.
        arrived: usize,
    },
}

impl StepOutcome {
    /// Return `true` when the step ran and every dot is on its goal.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Advanced { moving: 0, .. })
    }
}

/// Move every `live` dot up to `speed` units straight toward its counterpart in `goal`.
///
/// Dots within `speed` of their goal snap onto it, so a dot starting `d0` away arrives
/// after `ceil(d0 / speed)` steps and never overshoots.
pub fn step_toward(live: &mut DotSet, goal: &DotSet, speed: u32) -> StepOutcome {
    if live.is_empty() || live.len() != goal.len() || speed == 0 {
        return StepOutcome::Skipped;
    }

    let speed = f64::from(speed);
    let mut moving = 0usize;
    for (p, g) in live.as_mut_slice().iter_mut().zip(goal.iter()) {
        let d = p.distance(*g);
        if d <= speed + ARRIVAL_EPSILON {
            *p = *g;
        } else {
            *p += (*g - *p) * (speed / d);
            moving += 1;
        }
    }

    let arrived = live.len() - moving;
    tracing::trace!(moving, arrived, "dots stepped");
    StepOutcome::Advanced { moving, arrived }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
