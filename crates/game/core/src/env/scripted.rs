//! Scripted rolls for deterministic replays and tests.

use std::collections::VecDeque;

use super::rng::RollSource;

/// [`RollSource`] that replays a fixed list of values.
///
/// `percent` returns the next value as-is. `between` takes the next value as
/// the damage itself, clamped into `[min, max]`, so scripts can name the exact
/// damage they want. When the script runs dry the last value repeats.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    queue: VecDeque<f32>,
    last: f32,
    consumed: usize,
}

impl ScriptedRolls {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            last: 0.0,
            consumed: 0,
        }
    }

    /// Every roll returns `value`.
    pub fn constant(value: f32) -> Self {
        Self {
            queue: VecDeque::new(),
            last: value,
            consumed: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn next(&mut self) -> f32 {
        if let Some(value) = self.queue.pop_front() {
            self.last = value;
        }
        self.consumed += 1;
        self.last
    }
}

impl RollSource for ScriptedRolls {
    fn percent(&mut self) -> f32 {
        self.next()
    }

    fn between(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.next().clamp(min, max)
    }
}
