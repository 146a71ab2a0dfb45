use std::io;

use offerdesk::prelude::{Changed, FilterError, FixtureError, OfferId, RenderError, StoreError};
use offerdesk_app::{context::AppInitError, domain::offers::OffersServiceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("invalid filter")]
    Filter(#[from] FilterError),

    #[error("offer action failed")]
    Store(#[from] StoreError),

    #[error("offer book error")]
    Fixture(#[from] FixtureError),

    #[error("offers API error")]
    Service(#[from] OffersServiceError),

    #[error("offers API failed after updating {}", joined(.changed))]
    PartiallyApplied {
        changed: Changed,
        #[source]
        source: OffersServiceError,
    },

    #[error("failed to initialise")]
    Init(#[from] AppInitError),

    #[error("failed to render offers")]
    Render(#[from] RenderError),

    #[error("failed to serialise offers as JSON")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialise offers as YAML")]
    Yaml(#[from] serde_norway::Error),

    #[error("failed to write output")]
    Io(#[from] io::Error),

    #[error("offer not found: {0}")]
    NotFound(OfferId),
}

fn joined(ids: &Changed) -> String {
    ids.iter()
        .map(OfferId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
