//! Text Search
//!
//! The free-text half of the offer list filter: a fuzzy ranking over the joined query, unioned
//! with keyword expansion over the individual terms.

use rustc_hash::FxHashSet;

use crate::{
    offers::Offer,
    search::{
        fuzzy::{FuzzyOptions, fuzzy_search},
        keywords::keyword_search,
    },
};

pub mod fuzzy;
pub mod keywords;

/// Run the text stage with the default fuzzy options.
///
/// Returns every offer, in input order, when the terms hold no text.
pub fn search_offers<'a>(offers: &'a [Offer], terms: &[String]) -> Vec<&'a Offer> {
    search_offers_with(offers, terms, &FuzzyOptions::default())
}

/// Run the text stage: fuzzy hits by relevance, then keyword-only hits in input order.
pub fn search_offers_with<'a>(
    offers: &'a [Offer],
    terms: &[String],
    options: &FuzzyOptions,
) -> Vec<&'a Offer> {
    let query = terms.join(" ");

    if query.trim().is_empty() {
        return offers.iter().collect();
    }

    let fuzzy = fuzzy_search(offers, &query, options);
    let keyword = keyword_search(offers, terms);

    let mut seen: FxHashSet<&str> = FxHashSet::default();

    fuzzy
        .into_iter()
        .map(|hit| hit.offer)
        .chain(keyword)
        .filter(|offer| seen.insert(offer.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::offers::Offer;

    use super::*;

    fn offers() -> Vec<Offer> {
        vec![
            Offer::draft("cvs-01", "Buy one vitamin get one", "m-cvs", "CVS Pharmacy", "bogo"),
            Offer::draft("yar-01", "Free first month", "m-yardi", "Yardi", "free_with_purchase"),
            Offer::draft("dea-01", "Free garlic knots", "m-deacon", "Deacon's Pizza", "bogo"),
        ]
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let offers = offers();
        let results = search_offers(&offers, &["   ".to_string()]);

        assert_eq!(results.len(), offers.len());
        assert!(results.iter().zip(&offers).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn fuzzy_hits_come_before_keyword_only_hits() {
        let offers = offers();
        let results = search_offers(&offers, &["free".to_string()]);

        let ids: Vec<&str> = results.iter().map(|offer| offer.id.as_str()).collect();

        // Both "Free ..." names match textually; the BOGO vitamin offer only joins through
        // the "free" concept, so it trails.
        assert_eq!(ids, ["yar-01", "dea-01", "cvs-01"]);
    }

    #[test]
    fn union_is_deduplicated() {
        let offers = offers();
        let results = search_offers(&offers, &["Yardi".to_string()]);

        let ids: Vec<&str> = results.iter().map(|offer| offer.id.as_str()).collect();

        assert_eq!(ids, ["yar-01"]);
    }
}
