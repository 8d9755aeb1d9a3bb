//! Sentence store
//!
//! Holds the corpus ordered by id and exposes only the lookups the modes
//! need: by id, by inclusive id range, and uniform sampling.

use crate::error::{DrillError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// One target/translation pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// Positive id, assigned in read order
    pub id: u32,
    /// Sentence in the language being learned
    pub target: String,
    /// Sentence in the learner's language
    pub translation: String,
}

/// Immutable, id-ordered collection of sentences
#[derive(Clone, Debug, Default)]
pub struct SentenceStore {
    sentences: BTreeMap<u32, Sentence>,
}

impl SentenceStore {
    /// Build a store from `(target, translation)` pairs, numbering them 1, 2, 3, …
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let sentences = pairs
            .into_iter()
            .zip(1u32..)
            .map(|((target, translation), id)| {
                (
                    id,
                    Sentence {
                        id,
                        target: target.into(),
                        translation: translation.into(),
                    },
                )
            })
            .collect();

        SentenceStore { sentences }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All sentences, ascending by id
    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.values()
    }

    /// Look up one sentence by id
    pub fn get(&self, id: u32) -> Result<&Sentence> {
        self.sentences
            .get(&id)
            .ok_or(DrillError::SentenceNotFound(id))
    }

    /// Sentences with id inside `range` (both ends included), ascending
    pub fn range(&self, range: RangeInclusive<u32>) -> Vec<&Sentence> {
        if range.start() > range.end() {
            return Vec::new();
        }
        self.sentences.range(range).map(|(_, s)| s).collect()
    }

    /// Uniformly sample a sentence by drawing an id in `1..=len`.
    ///
    /// Relies on ids being dense from 1, which holds for every store built
    /// through `from_pairs`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Sentence> {
        if self.sentences.is_empty() {
            return Err(DrillError::SentenceNotFound(1));
        }
        let id = rng.gen_range(1..=self.sentences.len() as u32);
        self.get(id)
    }

    /// Uniformly sample among the sentences present in `range`
    pub fn sample_in<R: Rng + ?Sized>(
        &self,
        range: RangeInclusive<u32>,
        rng: &mut R,
    ) -> Result<&Sentence> {
        let start = *range.start();
        self.range(range)
            .choose(rng)
            .copied()
            .ok_or(DrillError::SentenceNotFound(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn numbered(count: u32) -> SentenceStore {
        SentenceStore::from_pairs(
            (1..=count).map(|i| (format!("target {}", i), format!("translation {}", i))),
        )
    }

    #[test]
    fn test_ids_are_assigned_in_order() {
        let store = SentenceStore::from_pairs(vec![("a", "b"), ("c", "d")]);
        let ids: Vec<u32> = store.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get(2).unwrap().target, "c");
    }

    #[test]
    fn test_get_missing_id() {
        let store = numbered(80);
        match store.get(9999) {
            Err(DrillError::SentenceNotFound(id)) => assert_eq!(id, 9999),
            other => panic!("expected SentenceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_range_is_inclusive_and_ascending() {
        let store = numbered(10);
        let ids: Vec<u32> = store.range(3..=5).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn test_range_clips_to_store() {
        let store = numbered(4);
        let ids: Vec<u32> = store.range(3..=40).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4]);
        assert!(store.range(7..=9).is_empty());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = store.range(3..=1);
        assert!(reversed.is_empty());
    }

    #[test]
    fn test_sample_is_uniform_and_in_bounds() {
        let store = numbered(5);
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 5];

        for _ in 0..10_000 {
            let id = store.sample(&mut rng).unwrap().id;
            assert!((1..=5).contains(&id));
            counts[(id - 1) as usize] += 1;
        }

        // each bucket expects 2000
        for count in counts {
            assert!(count > 1700 && count < 2300, "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_sample_empty_store() {
        let store = SentenceStore::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            store.sample(&mut rng),
            Err(DrillError::SentenceNotFound(1))
        ));
    }

    #[test]
    fn test_sample_in_range() {
        let store = numbered(20);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let id = store.sample_in(5..=8, &mut rng).unwrap().id;
            assert!((5..=8).contains(&id));
        }
        assert!(matches!(
            store.sample_in(30..=40, &mut rng),
            Err(DrillError::SentenceNotFound(30))
        ));
    }
}
