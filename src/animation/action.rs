use crate::{animation::interp::Interpolation, foundation::core::Point};

/// Move the bound widget to `target` over `duration` seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MoveTo {
    /// Destination in parent space.
    pub target: Point,
    /// Duration in seconds; zero or negative completes immediately.
    pub duration: f64,
    /// Progress curve; `None` plays linearly.
    pub curve: Option<Interpolation>,
}

impl MoveTo {
    fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let p = (elapsed / self.duration).clamp(0.0, 1.0);
        self.curve.map_or(p, |c| c.apply(p))
    }
}

/// Primitive timed action.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Positional move.
    MoveTo(MoveTo),
}

impl Action {
    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            Self::MoveTo(m) => m.duration,
        }
    }
}

/// Actions played one after another, keyed by action tag in a built scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ActionSequence {
    actions: Vec<Action>,
}

impl ActionSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Actions in play order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the sequence has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Sum of all action durations, counting negative ones as zero.
    pub fn total_duration(&self) -> f64 {
        self.actions.iter().map(|a| a.duration().max(0.0)).sum()
    }

    /// Position after playing the sequence for `elapsed` seconds from `start`.
    ///
    /// Each move begins where the previous one ended. Past the end the last target holds.
    pub fn sample(&self, start: Point, elapsed: f64) -> Point {
        let mut pos = start;
        let mut remaining = elapsed.max(0.0);
        for action in &self.actions {
            match action {
                Action::MoveTo(m) => {
                    let duration = m.duration.max(0.0);
                    if remaining >= duration {
                        pos = m.target;
                        remaining -= duration;
                        continue;
                    }
                    return pos.lerp(m.target, m.progress(remaining));
                }
            }
        }
        pos
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/action.rs"]
mod tests;
