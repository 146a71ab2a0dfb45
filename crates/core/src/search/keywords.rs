//! Keyword Expansion
//!
//! Plain substring matching per search term, widened by a small concept table so that a query
//! like "cashback" or "free" also finds offers whose type means that, whatever they are called.

use crate::offers::Offer;

struct Concept {
    keywords: &'static [&'static str],
    offer_types: &'static [&'static str],
}

const CONCEPTS: [Concept; 5] = [
    Concept {
        keywords: &["discount", "discounts", "sale", "savings", "save", "off", "deal", "deals"],
        offer_types: &["percent_off", "percentage_savings", "dollars_off", "price_point"],
    },
    Concept {
        keywords: &["free", "bogo", "bundle", "bundles", "combo", "gift"],
        offer_types: &["bogo", "free_with_purchase", "spend_and_get"],
    },
    Concept {
        keywords: &["cash", "cashback", "cash back", "rebate", "money back"],
        offer_types: &["cashback"],
    },
    Concept {
        keywords: &["points", "loyalty", "reward", "rewards"],
        offer_types: &["loyalty_points"],
    },
    Concept {
        keywords: &["click", "clicks", "online", "web", "link"],
        offer_types: &["clickthrough"],
    },
];

/// Offers matching at least one term, in input order.
pub fn keyword_search<'a>(offers: &'a [Offer], terms: &[String]) -> Vec<&'a Offer> {
    let terms: Vec<String> = terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() {
        return Vec::new();
    }

    offers
        .iter()
        .filter(|offer| terms.iter().any(|term| term_matches(offer, term)))
        .collect()
}

fn term_matches(offer: &Offer, term: &str) -> bool {
    let fields = [
        offer.offer_name.as_str(),
        offer.merchant_name.as_str(),
        offer.id.as_str(),
        offer.offer_type.as_str(),
        offer.offer_status.as_str(),
        offer
            .redemption_type
            .as_ref()
            .map_or("", |redemption_type| redemption_type.as_str()),
    ];

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(term))
        || CONCEPTS.iter().any(|concept| {
            concept.keywords.contains(&term)
                && concept.offer_types.contains(&offer.offer_type.as_str())
        })
}
