//! Word indices of reviews.

use std::collections::HashSet;
use std::hash::Hash;

use crate::mapping::WordIndexMapping;

/// Set of distinct word indices of a review.
pub type WordIndexSet<I> = HashSet<I>;

/// Split a review into tokens.
///
/// Tokens are separated by a single space character. Other whitespace
/// is part of a token, and consecutive spaces yield empty tokens. An
/// empty review has no tokens.
pub fn review_tokens(review: &str) -> impl Iterator<Item = &str> {
    (!review.is_empty())
        .then(|| review.split(' '))
        .into_iter()
        .flatten()
}

/// Get the indices of the words in a review.
///
/// Each token of the review that is in the mapping contributes its
/// index. Tokens that are not in the mapping are skipped. Every index
/// is in the result at most once, regardless of how many tokens map
/// to it.
pub fn word_indices<M>(mapping: &M, review: &str) -> WordIndexSet<M::Index>
where
    M: WordIndexMapping + ?Sized,
    M::Index: Eq + Hash,
{
    review_tokens(review)
        .filter_map(|token| mapping.word_index(token))
        .collect()
}

/// Get the word indices of every review in a sequence.
///
/// The sets are returned in the order of the reviews.
pub fn reviews_word_indices<M, I>(mapping: &M, reviews: I) -> Vec<WordIndexSet<M::Index>>
where
    M: WordIndexMapping + ?Sized,
    M::Index: Eq + Hash,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    reviews
        .into_iter()
        .map(|review| word_indices(mapping, review.as_ref()))
        .collect()
}

/// Extension trait for computing word indices.
pub trait WordIndices {
    /// Return the indices of the words of a string.
    fn word_indices<M>(&self, mapping: &M) -> WordIndexSet<M::Index>
    where
        M: WordIndexMapping + ?Sized,
        M::Index: Eq + Hash;
}

impl WordIndices for str {
    fn word_indices<M>(&self, mapping: &M) -> WordIndexSet<M::Index>
    where
        M: WordIndexMapping + ?Sized,
        M::Index: Eq + Hash,
    {
        word_indices(mapping, self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap, HashSet};
    use std::hash::Hash;

    use maplit::{btreemap, hashmap, hashset};

    use super::{review_tokens, reviews_word_indices, word_indices, WordIndices};
    use crate::mapping::WordIndexMapping;

    fn animals() -> HashMap<&'static str, usize> {
        hashmap! {
            "cat" => 0,
            "dog" => 1,
            "kitten" => 0,
        }
    }

    // Every index must come from a token of the review.
    fn check_has_tokens<M>(mapping: &M, review: &str, indices: &HashSet<M::Index>)
    where
        M: WordIndexMapping,
        M::Index: Eq + Hash,
    {
        for idx in indices {
            assert!(
                review_tokens(review).any(|token| mapping.word_index(token).as_ref() == Some(idx)),
                "index without matching token in '{}'",
                review
            );
        }
    }

    #[test]
    fn tokens_split_on_single_space() {
        assert_eq!(
            review_tokens("a  b\tc").collect::<Vec<_>>(),
            vec!["a", "", "b\tc"]
        );
        assert_eq!(review_tokens(" ").collect::<Vec<_>>(), vec!["", ""]);
        assert_eq!(review_tokens("").count(), 0);
    }

    #[test]
    fn empty_review_has_no_indices() {
        assert!(word_indices(&animals(), "").is_empty());

        let with_empty_word: HashMap<&str, usize> = hashmap! { "" => 5 };
        assert!(word_indices(&with_empty_word, "").is_empty());
    }

    #[test]
    fn empty_mapping_has_no_indices() {
        let mapping: HashMap<String, usize> = HashMap::new();
        assert!(word_indices(&mapping, "cat dog").is_empty());
    }

    #[test]
    fn unknown_words_are_skipped() {
        assert!(word_indices(&animals(), "the bird sings").is_empty());
        assert_eq!(word_indices(&animals(), "the dog barks"), hashset! {1});
    }

    #[test]
    fn words_sharing_an_index_collapse() {
        let mapping: HashMap<&str, usize> = hashmap! { "a" => 1, "b" => 1 };
        assert_eq!(word_indices(&mapping, "a b"), hashset! {1});
        assert_eq!(word_indices(&animals(), "cat kitten"), hashset! {0});
    }

    #[test]
    fn repeated_words_do_not_duplicate() {
        let mapping: HashMap<&str, usize> = hashmap! { "cat" => 0, "dog" => 1 };
        let indices = word_indices(&mapping, "cat dog cat");
        assert_eq!(indices, hashset! {0, 1});
        check_has_tokens(&mapping, "cat dog cat", &indices);
    }

    #[test]
    fn double_space_matches_empty_word() {
        let mapping: HashMap<&str, usize> = hashmap! { "" => 5 };
        assert_eq!(word_indices(&mapping, "a  b"), hashset! {5});
        assert!(word_indices(&mapping, "a b").is_empty());
    }

    #[test]
    fn matching_is_exact() {
        assert!(word_indices(&animals(), "Cat dog. cat\n").is_empty());
        assert_eq!(word_indices(&animals(), "cat\ndog cat"), hashset! {0});
    }

    #[test]
    fn btree_map_with_small_indices() {
        let mapping: BTreeMap<String, u16> = btreemap! {
            "good".to_owned() => 7,
            "bad".to_owned() => 9,
        };
        assert_eq!("good good bad".word_indices(&mapping), hashset! {7, 9});
    }

    #[test]
    fn word_indices_of_reviews() {
        let reviews = vec!["cat", "", "dog kitten bird"];
        assert_eq!(
            reviews_word_indices(&animals(), &reviews),
            vec![hashset! {0}, hashset! {}, hashset! {0, 1}]
        );
    }

    #[test]
    fn results_are_subsets_of_mapping_values() {
        let mapping = animals();
        let values: HashSet<usize> = mapping.values().copied().collect();
        for review in &["cat dog", "kitten  kitten", "dog", "horse cat"] {
            let indices = word_indices(&mapping, review);
            assert!(indices.is_subset(&values));
            check_has_tokens(&mapping, review, &indices);
        }
    }
}
