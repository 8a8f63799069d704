//! Quadratic probe sequences.

/// Iterator over the slots visited when probing from a home slot.
///
/// The `j`-th slot is `(home + j * j) % capacity`. At most `capacity + 1` slots are yielded; with a
/// non-prime capacity the sequence may revisit slots without ever reaching others, so the bound is
/// what guarantees termination.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    capacity: usize,
    slot: usize,
    step: usize,
}

impl ProbeSequence {
    /// Returns the probe sequence starting at `home` in a table with `capacity` slots.
    pub fn new(home: usize, capacity: usize) -> Self {
        assert!(capacity > 0, "probe sequence requires a non-empty table");
        ProbeSequence {
            capacity,
            slot: home % capacity,
            step: 0,
        }
    }

    /// Returns the probe sequence for `key` in a table with `capacity` slots.
    pub fn for_key(key: &str, capacity: usize) -> Self {
        Self::new(crate::hash::home_slot(key, capacity), capacity)
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step > self.capacity {
            return None;
        }
        let slot = self.slot;
        // (j + 1)^2 - j^2 = 2j + 1, which keeps every intermediate below 3 * capacity
        self.slot = (self.slot + (2 * self.step + 1) % self.capacity) % self.capacity;
        self.step += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.capacity + 1).saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl std::iter::FusedIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_closed_form() {
        for capacity in [1, 2, 7, 15, 31, 191] {
            for home in 0..capacity {
                let expected: Vec<usize> = (0..=capacity)
                    .map(|j| (home + j * j) % capacity)
                    .collect();
                let probed: Vec<usize> = ProbeSequence::new(home, capacity).collect();
                assert_eq!(probed, expected, "capacity {capacity}, home {home}");
            }
        }
    }

    #[test]
    fn bounded_length() {
        let mut seq = ProbeSequence::new(3, 7);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.by_ref().count(), 8);
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn composite_capacity_misses_slots() {
        let visited: std::collections::BTreeSet<usize> = ProbeSequence::new(0, 15).collect();
        assert_eq!(Vec::from_iter(visited), [0, 1, 4, 6, 9, 10]);
    }
}
