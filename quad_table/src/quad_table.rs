//! [QuadTable] is a hash table mapping each string key to the sequence of values inserted for it.
use crate::{hash, load_factor::LoadFactor, probe::ProbeSequence, util::impl_iterator};
use std::{fmt, iter::Flatten, slice};

/// Error returned when a probe sequence ends without reaching either the key or a free slot.
///
/// This can only happen for capacities where quadratic probing does not cover every slot. The
/// growth rule keeps tables at most half full, so in practice this indicates a broken invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("probe sequence for key {key:?} exhausted in a table with {capacity} slots")]
pub struct ProbeExhausted {
    /// The key that could not be placed.
    pub key: String,
    /// Capacity of the table that was probed.
    pub capacity: usize,
}

#[derive(Clone, Debug)]
struct Entry {
    key: Box<str>,
    values: Vec<usize>,
}

/// A hash table with string keys where every key accumulates a sequence of `usize` values.
///
/// Lookups and insertions walk the quadratic probe sequence of the key's home slot. After an
/// insertion leaves more than half of the slots occupied, the table is rebuilt with `2 * capacity +
/// 1` slots. Entries are never removed.
#[derive(Clone)]
pub struct QuadTable {
    slots: Vec<Option<Entry>>,
    len: usize,
}

impl QuadTable {
    /// Returns an empty table with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "a QuadTable needs at least one slot");
        QuadTable {
            slots: vec![None; capacity],
            len: 0,
        }
    }
    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }
    /// Returns `true` if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    /// Returns the current number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
    /// Returns the exact ratio of occupied slots to total slots.
    pub fn load_factor(&self) -> LoadFactor {
        LoadFactor::new(self.len, self.capacity())
    }
    /// Returns the home slot of `key` for the current capacity.
    pub fn hash_index(&self, key: &str) -> usize {
        hash::home_slot(key, self.capacity())
    }

    /// Returns the first slot on the probe sequence of `key` that is either vacant or holds `key`.
    fn find_slot(&self, key: &str) -> Option<usize> {
        ProbeSequence::for_key(key, self.capacity()).find(|&slot| match &self.slots[slot] {
            None => true,
            Some(entry) => *entry.key == *key,
        })
    }

    /// Returns the slot holding `key`, if present.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.find_slot(key)
            .filter(|&slot| self.slots[slot].is_some())
    }
    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }
    /// Returns the values inserted for `key` in insertion order, if present.
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        let slot = self.index_of(key)?;
        self.slots[slot].as_ref().map(|entry| &entry.values[..])
    }
    /// Returns the key and values stored in the slot with the given index, if it is occupied.
    pub fn get_slot(&self, index: usize) -> Option<(&str, &[usize])> {
        self.slots
            .get(index)?
            .as_ref()
            .map(|entry| (&*entry.key, &entry.values[..]))
    }

    /// Appends `value` to the values of `key`, adding the key if necessary.
    ///
    /// # Panics
    ///
    /// Panics if the probe sequence is exhausted, see [`try_insert`](Self::try_insert).
    pub fn insert(&mut self, key: &str, value: usize) {
        if let Err(err) = self.try_insert(key, value) {
            panic!("{err}");
        }
    }

    /// Appends `value` to the values of `key`, adding the key if necessary.
    ///
    /// Returns an error if no free slot could be found for a new key. In that case the table is
    /// left unchanged. If the key was added but growing the table afterwards failed, the key stays
    /// present and the table keeps its old capacity. The table is then more than half full until a
    /// later insertion grows it successfully.
    pub fn try_insert(&mut self, key: &str, value: usize) -> Result<(), ProbeExhausted> {
        let Some(slot) = self.find_slot(key) else {
            return Err(ProbeExhausted {
                key: key.to_owned(),
                capacity: self.capacity(),
            });
        };

        let slot = &mut self.slots[slot];
        if let Some(entry) = slot {
            entry.values.push(value);
            return Ok(());
        }
        *slot = Some(Entry {
            key: key.into(),
            values: vec![value],
        });
        self.len += 1;

        if self.load_factor().exceeds_half() {
            self.resize(self.capacity() * 2 + 1)?;
        }
        Ok(())
    }

    /// Moves every entry into a new slot array with `new_capacity` slots.
    ///
    /// Entries are placed in the order of their current slots. All target slots are determined
    /// before anything is moved, so a failure leaves the table untouched.
    fn resize(&mut self, new_capacity: usize) -> Result<(), ProbeExhausted> {
        let old_capacity = self.capacity();
        let mut taken = vec![false; new_capacity];
        let mut targets = Vec::with_capacity(self.len);

        for entry in self.slots.iter().flatten() {
            // keys are unique, so the first vacant slot is where probing would stop
            let target = ProbeSequence::for_key(&entry.key, new_capacity)
                .find(|&slot| !taken[slot])
                .ok_or_else(|| ProbeExhausted {
                    key: entry.key.to_string(),
                    capacity: new_capacity,
                })?;
            taken[target] = true;
            targets.push(target);
        }

        let mut slots = vec![None; new_capacity];
        for (entry, target) in std::mem::take(&mut self.slots)
            .into_iter()
            .flatten()
            .zip(targets)
        {
            slots[target] = Some(entry);
        }

        log::debug!(
            "resized table with {} keys from {} to {} slots",
            self.len,
            old_capacity,
            new_capacity
        );
        self.slots = slots;
        Ok(())
    }

    /// Returns an iterator over all keys in slot order.
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self.slots.iter().flatten(),
            remaining: self.len,
        }
    }
    /// Returns an iterator over all keys and their values in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.slots.iter().flatten(),
            remaining: self.len,
        }
    }

    #[cfg(test)]
    pub(crate) fn check(&self) {
        assert_eq!(self.slots.iter().flatten().count(), self.len);
        assert!(!self.load_factor().exceeds_half());
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some(entry) = entry {
                assert!(!entry.values.is_empty());
                assert_eq!(self.index_of(&entry.key), Some(slot), "{:?}", entry.key);
            }
        }
    }
}

impl fmt::Debug for QuadTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over the keys of a [`QuadTable`].
///
/// This struct is created by the [`keys`](`QuadTable::keys`) method on [`QuadTable`].
pub struct Keys<'a> {
    inner: Flatten<slice::Iter<'a, Option<Entry>>>,
    remaining: usize,
}
impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;
    impl_iterator!(|entry| &*entry.key);
}
impl ExactSizeIterator for Keys<'_> {}

/// An iterator over the keys and values of a [`QuadTable`].
///
/// This struct is created by the [`iter`](`QuadTable::iter`) method on [`QuadTable`].
pub struct Iter<'a> {
    inner: Flatten<slice::Iter<'a, Option<Entry>>>,
    remaining: usize,
}
impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [usize]);
    impl_iterator!(|entry| (&*entry.key, &entry.values[..]));
}
impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a QuadTable {
    type Item = (&'a str, &'a [usize]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
