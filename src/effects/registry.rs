use rand::Rng;

use crate::effects::library::EffectKind;
use crate::foundation::core::{DotSet, Viewport};

/// Number of entries in the effect registry.
pub fn len() -> usize {
    EffectKind::ALL.len()
}

/// Index of the currently selected effect.
///
/// Stepping saturates at both ends of the registry; nothing wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectCursor {
    index: usize,
}

impl EffectCursor {
    /// Cursor pointing at `index`.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Current index. May point past the registry after an explicit [`Self::set`].
    pub fn index(self) -> usize {
        self.index
    }

    /// Effect under the cursor, if the index is in range.
    pub fn current(self) -> Option<EffectKind> {
        EffectKind::from_index(self.index)
    }

    /// Point the cursor at `index`.
    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    /// Move one entry back, staying at 0.
    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Move one entry forward, staying at the last index.
    pub fn next(&mut self) {
        if self.index + 1 < len() {
            self.index += 1;
        }
    }

    /// Jump to a uniformly random index.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.index = rng.random_range(0..len());
    }
}

/// Clear `target`, then fill it with the output of effect `index` over `source`.
///
/// Returns the effect that ran, or `None` (leaving `target` empty) for an index outside
/// the registry.
#[tracing::instrument(
    level = "debug",
    skip(source, viewport, rng, target),
    fields(source_len = source.len())
)]
pub fn apply_into<R: Rng>(
    index: usize,
    source: &DotSet,
    viewport: &Viewport,
    rng: &mut R,
    target: &mut DotSet,
) -> Option<EffectKind> {
    target.clear();
    let Some(kind) = EffectKind::from_index(index) else {
        tracing::debug!(index, "no effect at index");
        return None;
    };
    *target = kind.apply(source, viewport, rng);
    tracing::debug!(effect = kind.name(), target_len = target.len(), "effect applied");
    Some(kind)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
