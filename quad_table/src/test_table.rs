#![allow(missing_docs)]
use crate::QuadTable;
use indexmap::IndexMap;
use rand::prelude::*;

struct CheckedTable {
    dut: QuadTable,
    ref_map: IndexMap<String, Vec<usize>>,
}

impl CheckedTable {
    fn new(capacity: usize) -> Self {
        CheckedTable {
            dut: QuadTable::new(capacity),
            ref_map: IndexMap::new(),
        }
    }
    fn len(&self) -> usize {
        self.ref_map.len()
    }
    fn insert(&mut self, key: String, value: usize) {
        let old_capacity = self.dut.capacity();
        self.dut.insert(&key, value);
        self.ref_map.entry(key).or_default().push(value);
        assert_eq!(self.dut.len(), self.ref_map.len());
        if self.dut.capacity() != old_capacity {
            assert_eq!(self.dut.capacity(), old_capacity * 2 + 1);
        }
    }
    fn get(&self, key: &str) -> Option<&[usize]> {
        let ref_result = self.ref_map.get(key).map(|values| &values[..]);
        let dut_result = self.dut.get(key);
        assert_eq!(ref_result, dut_result);
        assert_eq!(self.dut.contains_key(key), ref_result.is_some());
        if let Some(index) = self.dut.index_of(key) {
            assert_eq!(self.dut.get_slot(index), Some((key, dut_result.unwrap())));
        } else {
            assert!(ref_result.is_none());
        }
        ref_result
    }
    fn check(&self) {
        self.dut.check();
        assert_eq!(self.dut.len(), self.ref_map.len());
        let mut dut_keys = Vec::from_iter(self.dut.keys());
        let slot_order = Vec::from_iter(dut_keys.iter().map(|key| self.dut.index_of(key)));
        assert!(slot_order.windows(2).all(|pair| pair[0] < pair[1]));
        dut_keys.sort_unstable();
        let mut ref_keys = Vec::from_iter(self.ref_map.keys().map(|key| &key[..]));
        ref_keys.sort_unstable();
        assert_eq!(dut_keys, ref_keys);
        for (key, values) in self.dut.iter() {
            assert_eq!(Some(values), self.ref_map.get(key).map(|values| &values[..]));
        }
    }
    /// NB: `random_likelihood` is **not** a probability, see the stable map tests.
    fn present_or_random_key<R: Rng>(
        &self,
        random_likelihood: f64,
        rng: &mut R,
        mut rand_k: impl FnMut(&mut R) -> String,
    ) -> String {
        if self.len() == 0 || rng.gen_range(0.0..1.0 + random_likelihood) >= 1.0 {
            rand_k(rng)
        } else {
            self.ref_map.keys().choose(rng).unwrap().clone()
        }
    }
}

macro_rules! weighted_choose {
    ($rng:expr, $($name:ident: $weight:expr => $body:expr),+) => {
        {
            enum Branches { $( $name,  )* }
            let weights = [$((Branches::$name, $weight)),+];
            match weights.choose_weighted($rng, |x| x.1).unwrap().0 {
                $(Branches::$name => $body),*
            }
        }
    };
}

fn test_suite<R: Rng + SeedableRng>(
    initial_capacity: usize,
    seed: u64,
    mut rand_k: impl FnMut(&mut R) -> String,
) {
    let mut table = CheckedTable::new(initial_capacity);
    let mut rng = R::seed_from_u64(seed);
    let mut value = 0;
    let verbosity = 0;
    for _ in 0..3000 {
        weighted_choose! {&mut rng,
            Insert: 2.0 => {
                let k = table.present_or_random_key(2.0, &mut rng, &mut rand_k);
                value += 1;
                if verbosity > 0 {
                    println!("inserting {k:?}: {value}");
                }
                table.insert(k, value);
            },
            Get: 1.0 => {
                let k = table.present_or_random_key(1.0, &mut rng, &mut rand_k);
                let result = table.get(&k);
                if verbosity > 0 {
                    println!("getting {k:?} -> {result:?}");
                }
            },
            Check: 0.05 => {
                table.check();
            }
        };
    }
    table.check();
    println!(
        "{} keys, capacity {}",
        table.dut.len(),
        table.dut.capacity()
    );
}

fn random_word(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(1..12);
    String::from_iter((0..len).map(|_| rng.gen_range('a'..='z')))
}

#[test]
fn test_suite_words() {
    for (capacity, seed) in [(2, 1), (5, 2), (191, 3)] {
        test_suite::<rand_pcg::Pcg64>(capacity, seed, |rng| random_word(rng));
    }
}

#[test]
fn test_suite_shared_prefixes() {
    // every key has one of a few 8 character prefixes, so keys pile up on four home slots
    const PREFIXES: [&str; 4] = ["concorda", "abcdefgh", "zzzzzzzz", "Horner's"];
    test_suite::<rand_pcg::Pcg64>(191, 4, |rng| {
        let mut key = PREFIXES.choose(rng).unwrap().to_string();
        key.push(rng.gen_range('a'..='z'));
        key
    });
}

#[test]
fn test_suite_unicode() {
    test_suite::<rand_pcg::Pcg64>(5, 5, |rng| {
        let len = rng.gen_range(0..10);
        String::from_iter((0..len).map(|_| rng.gen::<char>()))
    });
}
