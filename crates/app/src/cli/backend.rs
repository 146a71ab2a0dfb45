use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use offerdesk::prelude::{Action, Changed, Offer, OfferBook, OfferId, OfferStore};
use offerdesk_app::{
    config::{ApiConfig, SourceConfig},
    context::AppContext,
};
use tracing::{debug, warn};

use crate::cli::errors::CommandError;

/// Where commands read and change offers.
pub(crate) enum Backend {
    /// A YAML offer book; `path` is `None` for the bundled demo book.
    Local {
        path: Option<PathBuf>,
        store: OfferStore,
    },

    /// The offers REST API.
    Remote(AppContext),
}

impl Backend {
    pub(crate) fn from_config(
        source: &SourceConfig,
        api: &ApiConfig,
    ) -> Result<Self, CommandError> {
        if source.remote {
            debug!(url = api.url.as_deref().unwrap_or_default(), "using offers API");

            return Ok(Self::Remote(AppContext::from_api_config(api)?));
        }

        let book = match &source.book {
            Some(path) => {
                debug!(path = %path.display(), "loading offer book");

                OfferBook::load(path)?
            }
            None => OfferBook::demo()?,
        };

        Self::local(source.book.clone(), book)
    }

    pub(crate) fn local(path: Option<PathBuf>, book: OfferBook) -> Result<Self, CommandError> {
        Ok(Self::Local {
            path,
            store: OfferStore::new(book.into_offers())?,
        })
    }

    /// Every offer, in list order.
    pub(crate) async fn offers(&self) -> Result<Cow<'_, [Offer]>, CommandError> {
        match self {
            Self::Local { store, .. } => Ok(Cow::Borrowed(store.offers())),
            Self::Remote(context) => Ok(Cow::Owned(context.offers.list_offers().await?)),
        }
    }

    pub(crate) async fn offer(&self, id: &OfferId) -> Result<Offer, CommandError> {
        match self {
            Self::Local { store, .. } => store
                .get(id)
                .cloned()
                .ok_or_else(|| CommandError::NotFound(id.clone())),
            Self::Remote(context) => Ok(context.offers.get_offer(id.clone()).await?),
        }
    }
}

/// Apply an action to a local book and write the book back.
pub(crate) fn dispatch(
    path: Option<&Path>,
    store: &mut OfferStore,
    action: Action,
) -> Result<Changed, CommandError> {
    let changed = store.dispatch(action)?;

    if changed.is_empty() {
        return Ok(changed);
    }

    match path {
        Some(path) => {
            OfferBook::new(store.offers().to_vec())?.save(path)?;

            debug!(path = %path.display(), "offer book saved");
        }
        None => warn!("the bundled demo book is read-only; pass --book to keep changes"),
    }

    Ok(changed)
}
