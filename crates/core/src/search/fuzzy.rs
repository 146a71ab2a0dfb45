//! Fuzzy Matching
//!
//! Typo-tolerant, weighted multi-field ranking. Each field is scored by the fewest edits needed
//! to find the pattern anywhere in it (`errors / pattern length`, location ignored); fields that
//! score under the threshold contribute `score^(weight * norm)` to a product, so lower is better
//! and short fields count for more than long ones.

use std::cmp::Ordering;

use smallvec::{SmallVec, smallvec};

use crate::offers::Offer;

/// Patterns are matched in chunks of at most this many characters.
pub const MAX_PATTERN_CHARS: usize = 32;

/// Score floor for any non-identical match.
const MIN_MATCH_SCORE: f64 = 0.001;

/// Searchable offer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// `offerName`
    OfferName,

    /// `merchantName`
    MerchantName,

    /// `id`
    Id,
}

impl SearchKey {
    fn value(self, offer: &Offer) -> &str {
        match self {
            Self::OfferName => &offer.offer_name,
            Self::MerchantName => &offer.merchant_name,
            Self::Id => offer.id.as_str(),
        }
    }
}

/// Fuzzy search options.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyOptions {
    /// Fields and their relative weights
    pub keys: SmallVec<[(SearchKey, f64); 3]>,

    /// Highest per-field score that still counts as a match, in `[0, 1]`
    pub threshold: f64,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            keys: SmallVec::from_buf([
                (SearchKey::OfferName, 0.5),
                (SearchKey::MerchantName, 0.3),
                (SearchKey::Id, 0.2),
            ]),
            threshold: 0.3,
        }
    }
}

/// A ranked fuzzy hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit<'a> {
    /// Matched offer
    pub offer: &'a Offer,

    /// Combined score; `0` is a perfect match
    pub score: f64,

    /// Position in the searched slice
    pub index: usize,
}

/// Rank `offers` against `query`, best first. Offers with no matching field are dropped.
pub fn fuzzy_search<'a>(
    offers: &'a [Offer],
    query: &str,
    options: &FuzzyOptions,
) -> Vec<FuzzyHit<'a>> {
    let pattern: Vec<char> = query.to_lowercase().chars().collect();

    if pattern.is_empty() {
        return Vec::new();
    }

    let total_weight: f64 = options.keys.iter().map(|(_, weight)| weight).sum();

    let mut hits: Vec<FuzzyHit<'a>> = offers
        .iter()
        .enumerate()
        .filter_map(|(index, offer)| {
            score_offer(offer, &pattern, options, total_weight)
                .map(|score| FuzzyHit { offer, score, index })
        })
        .collect();

    hits.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    hits
}

fn score_offer(
    offer: &Offer,
    pattern: &[char],
    options: &FuzzyOptions,
    total_weight: f64,
) -> Option<f64> {
    let mut matched = false;
    let mut total = 1.0_f64;

    for &(key, weight) in &options.keys {
        let value = key.value(offer);

        if value.trim().is_empty() {
            continue;
        }

        let Some(score) = score_field(value, pattern, options.threshold) else {
            continue;
        };

        let weight = if total_weight > 0.0 {
            weight / total_weight
        } else {
            1.0
        };

        let base = if score > 0.0 { score } else { f64::EPSILON };

        total *= base.powf(weight * field_norm(value));
        matched = true;
    }

    matched.then_some(total)
}

/// Score one field; `None` when the pattern is not found within the threshold.
fn score_field(value: &str, pattern: &[char], threshold: f64) -> Option<f64> {
    let text: Vec<char> = value.to_lowercase().chars().collect();

    if text == pattern {
        return Some(0.0);
    }

    let chunks = pattern_chunks(pattern);
    let mut any_match = false;
    let mut total = 0.0;

    for chunk in &chunks {
        let score = chunk_score(&text, chunk);

        if score <= threshold {
            any_match = true;
            total += score.max(MIN_MATCH_SCORE);
        } else {
            total += 1.0;
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "chunk counts are tiny, well within f64 precision"
    )]
    let chunk_count = chunks.len() as f64;

    any_match.then(|| total / chunk_count)
}

/// Split a pattern into 32-character chunks. A shorter remainder is replaced by the last 32
/// characters, overlapping the previous chunk.
fn pattern_chunks(pattern: &[char]) -> SmallVec<[&[char]; 2]> {
    if pattern.len() <= MAX_PATTERN_CHARS {
        return smallvec![pattern];
    }

    let mut chunks: SmallVec<[&[char]; 2]> = pattern.chunks_exact(MAX_PATTERN_CHARS).collect();

    if pattern.len() % MAX_PATTERN_CHARS != 0 {
        chunks.extend(pattern.get(pattern.len().saturating_sub(MAX_PATTERN_CHARS)..));
    }

    chunks
}

fn chunk_score(text: &[char], chunk: &[char]) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "pattern chunks are at most 32 characters"
    )]
    let score = best_substring_errors(text, chunk) as f64 / chunk.len() as f64;

    score
}

/// Fewest edits turning `pattern` into some substring of `text` (Sellers' algorithm).
pub(crate) fn best_substring_errors(text: &[char], pattern: &[char]) -> usize {
    // column[i] holds the cost of matching pattern[..i] ending at the current text position;
    // row zero stays at zero so a match may start anywhere.
    let mut column: SmallVec<[usize; 33]> = (0..=pattern.len()).collect();
    let mut best = pattern.len();

    for &ch in text {
        let mut diagonal = 0;
        let mut left = 0;

        for (cell, &expected) in column.iter_mut().skip(1).zip(pattern) {
            let above = *cell;
            let value = (diagonal + usize::from(expected != ch))
                .min(above + 1)
                .min(left + 1);

            *cell = value;
            diagonal = above;
            left = value;
        }

        best = best.min(left);
    }

    best
}

/// Field-length norm: `1 / sqrt(token count)`, rounded to three decimals.
fn field_norm(value: &str) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "token counts of offer fields are small"
    )]
    let tokens = value.split(' ').filter(|token| !token.is_empty()).count().max(1) as f64;

    (1000.0 / tokens.sqrt()).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use crate::offers::Offer;

    use super::*;

    fn chars(value: &str) -> Vec<char> {
        value.chars().collect()
    }

    fn offers() -> Vec<Offer> {
        vec![
            Offer::draft("cvs-01", "20% off vitamins", "m-cvs", "CVS Pharmacy", "percent_off"),
            Offer::draft(
                "yar-01",
                "Free month of parking",
                "m-yardi",
                "Yardi",
                "free_with_purchase",
            ),
            Offer::draft("dea-01", "BOGO large pizza", "m-deacon", "Deacon's Pizza", "bogo"),
            Offer::draft(
                "dea-02",
                "Pizza night cashback",
                "m-deacon",
                "Deacon's Pizza",
                "cashback",
            ),
        ]
    }

    #[test]
    fn substring_errors_allow_match_anywhere() {
        assert_eq!(best_substring_errors(&chars("deacon's pizza"), &chars("pizza")), 0);
        assert_eq!(best_substring_errors(&chars("deacon's pizza"), &chars("piza")), 1);
        assert_eq!(best_substring_errors(&chars("deacon's pizza"), &chars("pizzq")), 1);
        assert_eq!(best_substring_errors(&chars("abc"), &chars("xyz")), 3);
    }

    #[test]
    fn norm_rounds_to_three_decimals() {
        assert!((field_norm("cvs") - 1.0).abs() < f64::EPSILON);
        assert!((field_norm("deacon's pizza") - 0.707).abs() < f64::EPSILON);
        assert!((field_norm("  spaced   out  ") - 0.707).abs() < f64::EPSILON);
    }

    #[test]
    fn identical_field_scores_zero() {
        let identical = score_field("Yardi", &chars("yardi"), 0.3);
        let contained = score_field("Yardi Breeze", &chars("yardi"), 0.3);

        assert!(identical.is_some_and(|score| score.abs() < f64::EPSILON));
        assert!(contained.is_some_and(|score| (score - MIN_MATCH_SCORE).abs() < f64::EPSILON));
    }

    #[test]
    fn typo_within_threshold_still_matches() {
        let offers = offers();
        let hits = fuzzy_search(&offers, "Deakon", &FuzzyOptions::default());

        let ids: Vec<&str> = hits.iter().map(|hit| hit.offer.id.as_str()).collect();

        assert_eq!(ids, ["dea-01", "dea-02"]);
    }

    #[test]
    fn unrelated_query_finds_nothing() {
        let offers = offers();

        assert!(fuzzy_search(&offers, "zzzzqqq", &FuzzyOptions::default()).is_empty());
        assert!(fuzzy_search(&offers, "", &FuzzyOptions::default()).is_empty());
    }

    #[test]
    fn ranking_is_ascending_and_ties_keep_input_order() {
        let offers = offers();
        let hits = fuzzy_search(&offers, "pizza", &FuzzyOptions::default());

        let ids: Vec<&str> = hits.iter().map(|hit| hit.offer.id.as_str()).collect();

        // Both pizza offers match on name and merchant with identical scores.
        assert_eq!(ids, ["dea-01", "dea-02"]);
        assert!(hits.windows(2).all(|pair| match pair {
            [a, b] => a.score <= b.score,
            _ => true,
        }));
    }

    #[test]
    fn remainder_chunk_overlaps_previous_chunk() {
        let pattern = chars(&"ab".repeat(20));
        let chunks = pattern_chunks(&pattern);

        assert_eq!(chunks.len(), 2);
        assert!(chunks.iter().all(|chunk| chunk.len() == MAX_PATTERN_CHARS));
        assert_eq!(chunks.get(1).copied(), pattern.get(8..));
        assert_eq!(pattern_chunks(&chars("pizza")).len(), 1);
    }

    #[test]
    fn long_patterns_are_chunked() {
        let mut offers = offers();
        offers.push(Offer::draft(
            "dea-03",
            "Buy one get one free large pizza every Friday night",
            "m-deacon",
            "Deacon's Pizza",
            "bogo",
        ));

        let query = "buy one get one free large pizza every friday";
        let hits = fuzzy_search(&offers, query, &FuzzyOptions::default());

        let ids: Vec<&str> = hits.iter().map(|hit| hit.offer.id.as_str()).collect();

        assert_eq!(ids, ["dea-03"]);
        assert!(hits.iter().all(|hit| hit.score > 0.0));
    }

    #[test]
    fn long_nonsense_query_finds_nothing() {
        let offers = offers();
        let query = format!("{}e", "q".repeat(MAX_PATTERN_CHARS));

        assert!(fuzzy_search(&offers, &query, &FuzzyOptions::default()).is_empty());
    }
}
