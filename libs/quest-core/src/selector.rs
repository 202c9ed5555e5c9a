//! Review batch selection.
//!
//! Due words come first in a fixed priority order; when there are not
//! enough of them the batch is topped up with a random sample of words
//! that are not yet due.

use crate::types::Word;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Ordering;

/// Select up to `count` words to review on `today`.
pub fn select_batch<'a, R>(words: &'a [Word], count: usize, today: NaiveDate, rng: &mut R) -> Vec<&'a Word>
where
    R: Rng + ?Sized,
{
    select_batch_indices(words, count, today, rng)
        .into_iter()
        .map(|idx| &words[idx])
        .collect()
}

/// Like [`select_batch`], but returns positions into `words` so the caller
/// can grade the selected records in place.
pub fn select_batch_indices<R>(words: &[Word], count: usize, today: NaiveDate, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let (mut due, mut not_due): (Vec<usize>, Vec<usize>) =
        (0..words.len()).partition(|&idx| words[idx].is_due(today));

    // Stable sort: insertion order breaks any remaining ties.
    due.sort_by(|&a, &b| review_priority(&words[a], &words[b]));

    if due.len() >= count {
        due.truncate(count);
        return due;
    }

    not_due.shuffle(rng);
    let remaining = count - due.len();
    due.extend(not_due.into_iter().take(remaining));
    due
}

/// Lower box first, then more misses, then fewer successes.
fn review_priority(a: &Word, b: &Word) -> Ordering {
    a.box_level
        .cmp(&b.box_level)
        .then_with(|| b.incorrect_count.cmp(&a.incorrect_count))
        .then_with(|| a.correct_count.cmp(&b.correct_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::add_days;
    use crate::types::BoxLevel;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    fn word(term: &str, level: u8, wrong: u32, right: u32, due_offset: i64) -> Word {
        let mut w = Word::new(term, term.to_uppercase(), today());
        w.box_level = BoxLevel::new(level);
        w.incorrect_count = wrong;
        w.correct_count = right;
        w.due_date = Some(add_days(today(), due_offset));
        w
    }

    fn terms(batch: &[&Word]) -> Vec<String> {
        batch.iter().map(|w| w.term.clone()).collect()
    }

    #[test]
    fn due_words_sorted_by_priority() {
        let words = vec![
            word("a", 2, 0, 0, 0),
            word("b", 0, 1, 5, -1),
            word("c", 0, 3, 2, -3),
            word("d", 0, 1, 1, 0),
            word("e", 1, 0, 0, -2),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let batch = select_batch(&words, 5, today(), &mut rng);
        assert_eq!(terms(&batch), vec!["c", "d", "b", "e", "a"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let words = vec![word("x", 1, 0, 0, 0), word("y", 1, 0, 0, 0), word("z", 1, 0, 0, 0)];
        let mut rng = StdRng::seed_from_u64(1);
        let batch = select_batch(&words, 3, today(), &mut rng);
        assert_eq!(terms(&batch), vec!["x", "y", "z"]);
    }

    #[test]
    fn truncates_to_count_when_enough_due() {
        let words = vec![
            word("a", 3, 0, 0, 0),
            word("b", 1, 0, 0, 0),
            word("c", 0, 0, 0, 0),
            word("later", 0, 9, 0, 5),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let batch = select_batch(&words, 2, today(), &mut rng);
        assert_eq!(terms(&batch), vec!["c", "b"]);
    }

    #[test]
    fn fills_with_not_due_words_after_due_prefix() {
        let words = vec![
            word("soon1", 2, 0, 0, 2),
            word("due", 1, 0, 0, 0),
            word("soon2", 3, 0, 0, 4),
            word("soon3", 3, 0, 0, 6),
        ];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = select_batch(&words, 3, today(), &mut rng);
            assert_eq!(batch.len(), 3);
            assert_eq!(batch[0].term, "due");
            assert!(batch[1..].iter().all(|w| !w.is_due(today())));
            assert_ne!(batch[1].term, batch[2].term);
        }
    }

    #[test]
    fn returns_everything_when_fewer_words_than_count() {
        let words = vec![word("a", 1, 0, 0, 3), word("b", 1, 0, 0, 0)];
        let mut rng = StdRng::seed_from_u64(11);
        let batch = select_batch(&words, 10, today(), &mut rng);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].term, "b");
    }

    #[test]
    fn missing_due_date_counts_as_due() {
        let mut fresh = word("fresh", 3, 0, 0, 9);
        fresh.due_date = None;
        let words = vec![word("later", 0, 0, 0, 9), fresh];
        let mut rng = StdRng::seed_from_u64(5);
        let batch = select_batch(&words, 1, today(), &mut rng);
        assert_eq!(terms(&batch), vec!["fresh"]);
    }

    #[test]
    fn batch_size_is_min_of_count_and_total() {
        let words: Vec<Word> = (0..8)
            .map(|i| word(&format!("w{i}"), (i % 4) as u8, i as u32 % 3, 0, i as i64 - 4))
            .collect();
        let mut rng = StdRng::seed_from_u64(42);
        for count in 0..12 {
            let batch = select_batch(&words, count, today(), &mut rng);
            assert_eq!(batch.len(), count.min(words.len()));
        }
    }

    #[test]
    fn due_prefix_is_ordered_by_box_then_misses() {
        let words: Vec<Word> = (0..12)
            .map(|i| word(&format!("w{i}"), (i * 7 % 4) as u8, (i * 5 % 3) as u32, i as u32, -(i as i64)))
            .collect();
        let mut rng = StdRng::seed_from_u64(9);
        let batch = select_batch(&words, 12, today(), &mut rng);
        for pair in batch.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.box_level <= b.box_level);
            if a.box_level == b.box_level {
                assert!(a.incorrect_count >= b.incorrect_count);
            }
        }
    }

    #[test]
    fn empty_input_gives_empty_batch() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_batch_indices(&[], 3, today(), &mut rng).is_empty());
    }
}
