use crate::constants::REVEAL_THRESHOLD;

/// One-shot visibility bookkeeping for page sections.
///
/// A section is revealed the first time at least `threshold` of it is on
/// screen and stays revealed; later observations never hide it again.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f32,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self::with_threshold(sections, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(sections: usize, threshold: f32) -> Self {
        Self {
            threshold,
            revealed: vec![false; sections],
        }
    }

    /// Record an intersection report. Returns `true` only on the
    /// transition to revealed; out-of-range sections are ignored.
    pub fn observe(&mut self, section: usize, visible_ratio: f32) -> bool {
        let Some(slot) = self.revealed.get_mut(section) else {
            return false;
        };
        if *slot || visible_ratio < self.threshold {
            return false;
        }
        *slot = true;
        true
    }

    /// Mark a section revealed without an observation (e.g. the hero).
    pub fn force(&mut self, section: usize) {
        if let Some(slot) = self.revealed.get_mut(section) {
            *slot = true;
        }
    }

    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}
