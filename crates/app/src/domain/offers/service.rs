//! Offers service.

use async_trait::async_trait;
use mockall::automock;
use offerdesk::offers::{Offer, OfferId};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{
    config::ApiConfig,
    domain::offers::{
        envelope::Envelope,
        errors::OffersServiceError,
        records::{ExportFormat, NewOffer, OfferUpdate},
    },
};

/// Offers REST API client.
#[derive(Debug, Clone)]
pub struct HttpOffersService {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpOffersService {
    /// Build a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or invalid, or the HTTP client cannot be
    /// built.
    pub fn new(config: &ApiConfig) -> Result<Self, OffersServiceError> {
        let base_url = config
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(OffersServiceError::MissingUrl)?;

        let base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() {
            return Err(OffersServiceError::UnsupportedUrl(base_url));
        }

        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Resolve `segments` below the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, OffersServiceError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| OffersServiceError::UnsupportedUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    fn offer_url(&self, offer: &OfferId) -> Result<Url, OffersServiceError> {
        self.url(&["offers", offer.as_str()])
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "offers API request");

        let request = self.http.request(method, url);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn read_envelope<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<Envelope<T>, OffersServiceError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::NOT_FOUND {
        return Err(OffersServiceError::NotFound);
    }

    match serde_json::from_str::<Envelope<T>>(&body) {
        Ok(envelope) if status.is_success() || !envelope.is_success() => Ok(envelope),
        Ok(_) => Err(OffersServiceError::UnexpectedStatus(status.as_u16())),
        Err(source) if status.is_success() => Err(source.into()),
        Err(_) => {
            warn!(status = status.as_u16(), "offers API error without envelope");

            Err(OffersServiceError::UnexpectedStatus(status.as_u16()))
        }
    }
}

async fn read_data<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, OffersServiceError> {
    read_envelope(request).await?.into_data()
}

async fn read_text(response: Response) -> Result<String, OffersServiceError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(OffersServiceError::NotFound);
    }

    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope<Value>>(&body) {
        envelope.check()?;
    }

    Err(OffersServiceError::UnexpectedStatus(status.as_u16()))
}

#[async_trait]
impl OffersService for HttpOffersService {
    async fn list_offers(&self) -> Result<Vec<Offer>, OffersServiceError> {
        read_data(self.request(Method::GET, self.url(&["offers"])?)).await
    }

    async fn get_offer(&self, offer: OfferId) -> Result<Offer, OffersServiceError> {
        read_data(self.request(Method::GET, self.offer_url(&offer)?)).await
    }

    async fn create_offer(&self, offer: NewOffer) -> Result<Offer, OffersServiceError> {
        read_data(self.request(Method::POST, self.url(&["offers"])?).json(&offer)).await
    }

    async fn update_offer(
        &self,
        offer: OfferId,
        update: OfferUpdate,
    ) -> Result<Offer, OffersServiceError> {
        read_data(
            self.request(Method::PUT, self.offer_url(&offer)?)
                .json(&update),
        )
        .await
    }

    async fn delete_offer(&self, offer: OfferId) -> Result<(), OffersServiceError> {
        let request = self.request(Method::DELETE, self.offer_url(&offer)?);

        read_envelope::<Value>(request).await?.check()
    }

    async fn export_offers(&self, format: ExportFormat) -> Result<String, OffersServiceError> {
        let mut url = self.url(&["offers", "export"])?;
        url.query_pairs_mut().append_pair("format", format.as_str());

        let response = self.request(Method::GET, url).send().await?;

        read_text(response).await
    }
}

#[automock]
#[async_trait]
pub trait OffersService: Send + Sync {
    /// Retrieves all offers.
    async fn list_offers(&self) -> Result<Vec<Offer>, OffersServiceError>;

    /// Retrieve a single offer.
    async fn get_offer(&self, offer: OfferId) -> Result<Offer, OffersServiceError>;

    /// Creates a new offer; the API assigns its id.
    async fn create_offer(&self, offer: NewOffer) -> Result<Offer, OffersServiceError>;

    /// Applies a partial update to an offer.
    async fn update_offer(
        &self,
        offer: OfferId,
        update: OfferUpdate,
    ) -> Result<Offer, OffersServiceError>;

    /// Deletes an offer.
    async fn delete_offer(&self, offer: OfferId) -> Result<(), OffersServiceError>;

    /// Downloads every offer as a JSON or YAML document.
    async fn export_offers(&self, format: ExportFormat) -> Result<String, OffersServiceError>;
}
