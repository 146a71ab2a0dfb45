//! Offer Records
//!
//! Request bodies sent to the offers API.

use jiff::civil::Date;
use offerdesk::offers::{
    Offer, OfferStatus,
    kinds::{OfferType, RedemptionType},
};
use serde::Serialize;

/// Body of `POST /offers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub offer_name: String,
    pub merchant_id: String,
    pub merchant_name: String,
    pub offer_type: OfferType,
    pub offer_status: OfferStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_type: Option<RedemptionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl NewOffer {
    /// A draft copy of `offer`, named `"<name> (Copy)"`; the API assigns the id.
    pub fn copy_of(offer: &Offer) -> Self {
        Self {
            offer_name: format!("{} (Copy)", offer.offer_name),
            merchant_id: offer.merchant_id.clone(),
            merchant_name: offer.merchant_name.clone(),
            offer_type: offer.offer_type.clone(),
            offer_status: OfferStatus::Draft,
            redemption_type: offer.redemption_type.clone(),
            start_date: offer.start_date,
            end_date: offer.end_date,
        }
    }
}

/// Body of `PUT /offers/{id}`; only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<OfferType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_status: Option<OfferStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_type: Option<RedemptionType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl OfferUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: OfferStatus) -> Self {
        Self {
            offer_status: Some(status),
            ..Self::default()
        }
    }
}

/// Export document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,

    /// YAML offer book
    Yaml,
}

impl ExportFormat {
    /// The `format` query parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_update_only_sends_status() -> TestResult {
        let body = serde_json::to_value(OfferUpdate::status(OfferStatus::Published))?;

        assert_eq!(body, json!({ "offerStatus": "published" }));

        Ok(())
    }

    #[test]
    fn copy_is_a_renamed_draft() {
        let offer = Offer::draft("o-1", "Pizza Friday", "m-3", "Deacon's Pizza", "bogo")
            .with_status(OfferStatus::Published)
            .with_redemptions(80);

        let copy = NewOffer::copy_of(&offer);

        assert_eq!(copy.offer_name, "Pizza Friday (Copy)");
        assert_eq!(copy.offer_status, OfferStatus::Draft);
        assert_eq!(copy.merchant_id, "m-3");
    }
}
