/// Monotonic id attached to each compression request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Hands out generations and tells whether a completion is still wanted.
///
/// Only the most recently issued generation is current; anything older is a
/// stale result to be dropped.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: Generation,
}

impl RequestTracker {
    pub fn next(&mut self) -> Generation {
        self.latest = Generation(self.latest.0 + 1);
        self.latest
    }

    pub fn latest(&self) -> Generation {
        self.latest
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.latest
    }
}
