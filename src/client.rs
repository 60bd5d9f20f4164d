//! Client construction, request building, and dispatch.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::error::{KvkError, Result};
use crate::params::SearchParams;
use crate::validation::{
    is_valid_aantal, is_valid_address_pair, is_valid_kvk_nummer, is_valid_pagina,
    is_valid_vestigingsnummer,
};

/// Production host of the KVK API.
pub const DEFAULT_BASE_URL: &str = "https://api.kvk.nl/api/v1";

/// CA chain for the registry's PKIoverheid Private server certificate.
/// The public host does not chain to the common root stores, so the chain
/// ships with the crate.
const BUNDLED_TRUST_ANCHOR: &[u8] = include_bytes!("../certs/private_g1_chain.pem");

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the KVK business registry.
///
/// Holds only immutable configuration and a pooled transport, so one
/// instance can serve concurrent lookups from multiple call sites without
/// locking. Cloning is cheap and shares the connection pool.
///
/// Every lookup exists in two forms: the async operation itself, and a
/// synchronous `*_request` constructor that validates the inputs and
/// returns the fully built [`reqwest::Request`] without dispatching it.
#[derive(Debug, Clone)]
pub struct KvkClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl KvkClient {
    /// Client for the production host with the bundled trust anchor and
    /// default timeout.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS transport cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start configuring a client.
    pub fn builder(api_key: impl Into<String>) -> KvkClientBuilder {
        KvkClientBuilder::new(api_key)
    }

    /// Search for companies and establishments by number, name, or address.
    ///
    /// Returns the registry's result page as raw JSON. Paging beyond the
    /// first page is the caller's concern: issue another call with a higher
    /// [`pagina`](SearchParams::pagina).
    pub async fn zoeken(&self, params: &SearchParams) -> Result<Value> {
        let request = self.zoeken_request(params)?;
        self.dispatch(request).await
    }

    /// Validate search filters and build the `/zoeken` request without
    /// dispatching it.
    pub fn zoeken_request(&self, params: &SearchParams) -> Result<reqwest::Request> {
        if let Some(kvk_nummer) = &params.kvk_nummer {
            if !is_valid_kvk_nummer(kvk_nummer) {
                return Err(KvkError::InvalidKvkNummer(kvk_nummer.clone()));
            }
        }
        if let Some(vestigingsnummer) = &params.vestigingsnummer {
            if !is_valid_vestigingsnummer(vestigingsnummer) {
                return Err(KvkError::InvalidVestigingsnummer(vestigingsnummer.clone()));
            }
        }
        if !is_valid_address_pair(params.postcode.as_deref(), params.huisnummer.as_deref()) {
            return Err(KvkError::UnpairedPostcodeHuisnummer);
        }
        if !is_valid_pagina(params.pagina) {
            return Err(KvkError::PaginaOutOfRange(params.pagina));
        }
        if !is_valid_aantal(params.aantal) {
            return Err(KvkError::AantalOutOfRange(params.aantal));
        }
        Ok(self.get("/zoeken").query(params).build()?)
    }

    /// Fetch the basic profile of a legal entity.
    pub async fn basisprofiel(&self, kvk_nummer: &str, geo_data: Option<bool>) -> Result<Value> {
        let request = self.basisprofiel_request(kvk_nummer, geo_data)?;
        self.dispatch(request).await
    }

    /// Build the basic-profile request without dispatching it.
    pub fn basisprofiel_request(
        &self,
        kvk_nummer: &str,
        geo_data: Option<bool>,
    ) -> Result<reqwest::Request> {
        require_kvk_nummer(kvk_nummer)?;
        self.geo_request(&format!("/basisprofiel/{kvk_nummer}"), geo_data)
    }

    /// Fetch the owner of a legal entity.
    pub async fn basisprofiel_eigenaar(
        &self,
        kvk_nummer: &str,
        geo_data: Option<bool>,
    ) -> Result<Value> {
        let request = self.basisprofiel_eigenaar_request(kvk_nummer, geo_data)?;
        self.dispatch(request).await
    }

    /// Build the owner request without dispatching it.
    pub fn basisprofiel_eigenaar_request(
        &self,
        kvk_nummer: &str,
        geo_data: Option<bool>,
    ) -> Result<reqwest::Request> {
        require_kvk_nummer(kvk_nummer)?;
        self.geo_request(&format!("/basisprofiel/{kvk_nummer}/eigenaar"), geo_data)
    }

    /// Fetch the main establishment of a legal entity.
    pub async fn basisprofiel_hoofdvestiging(
        &self,
        kvk_nummer: &str,
        geo_data: Option<bool>,
    ) -> Result<Value> {
        let request = self.basisprofiel_hoofdvestiging_request(kvk_nummer, geo_data)?;
        self.dispatch(request).await
    }

    /// Build the main-establishment request without dispatching it.
    pub fn basisprofiel_hoofdvestiging_request(
        &self,
        kvk_nummer: &str,
        geo_data: Option<bool>,
    ) -> Result<reqwest::Request> {
        require_kvk_nummer(kvk_nummer)?;
        self.geo_request(
            &format!("/basisprofiel/{kvk_nummer}/hoofdvestiging"),
            geo_data,
        )
    }

    /// Fetch the establishment list of a legal entity.
    pub async fn basisprofiel_vestigingen(&self, kvk_nummer: &str) -> Result<Value> {
        let request = self.basisprofiel_vestigingen_request(kvk_nummer)?;
        self.dispatch(request).await
    }

    /// Build the establishment-list request without dispatching it.
    pub fn basisprofiel_vestigingen_request(&self, kvk_nummer: &str) -> Result<reqwest::Request> {
        require_kvk_nummer(kvk_nummer)?;
        Ok(self.get(&format!("/basisprofiel/{kvk_nummer}")).build()?)
    }

    /// Fetch the profile of a single establishment.
    pub async fn vestigingsprofiel(
        &self,
        vestigingsnummer: &str,
        geo_data: Option<bool>,
    ) -> Result<Value> {
        let request = self.vestigingsprofiel_request(vestigingsnummer, geo_data)?;
        self.dispatch(request).await
    }

    /// Build the establishment-profile request without dispatching it.
    pub fn vestigingsprofiel_request(
        &self,
        vestigingsnummer: &str,
        geo_data: Option<bool>,
    ) -> Result<reqwest::Request> {
        if !is_valid_vestigingsnummer(vestigingsnummer) {
            return Err(KvkError::InvalidVestigingsnummer(vestigingsnummer.to_owned()));
        }
        self.geo_request(
            &format!("/vestigingsprofielen/{vestigingsnummer}"),
            geo_data,
        )
    }

    /// Fetch all registered names (naamgevingen) of a legal entity.
    pub async fn naamgeving(&self, kvk_nummer: &str) -> Result<Value> {
        let request = self.naamgeving_request(kvk_nummer)?;
        self.dispatch(request).await
    }

    /// Build the naming request without dispatching it.
    pub fn naamgeving_request(&self, kvk_nummer: &str) -> Result<reqwest::Request> {
        require_kvk_nummer(kvk_nummer)?;
        Ok(self
            .get(&format!("/naamgevingen/kvkNummer/{kvk_nummer}"))
            .build()?)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json")
            .header("apikey", &self.api_key)
    }

    fn geo_request(&self, path: &str, geo_data: Option<bool>) -> Result<reqwest::Request> {
        let mut request = self.get(path);
        if let Some(geo_data) = geo_data {
            request = request.query(&[("geoData", geo_data)]);
        }
        Ok(request.build()?)
    }

    /// Issue the request and decode the body. The registry's response shape
    /// is returned verbatim; HTTP error statuses surface as transport errors.
    async fn dispatch(&self, request: reqwest::Request) -> Result<Value> {
        tracing::debug!(url = %request.url(), "kvk lookup");
        let response = self.http.execute(request).await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Configures and builds a [`KvkClient`].
///
/// All settings have working defaults; only the API key is required.
#[derive(Debug)]
pub struct KvkClientBuilder {
    api_key: String,
    base_url: String,
    trust_anchor: Option<Vec<u8>>,
    http: Option<reqwest::Client>,
    timeout: Duration,
}

impl KvkClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            trust_anchor: None,
            http: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different host, e.g. the registry's test
    /// environment. A trailing slash is tolerated.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the bundled CA chain with caller-supplied PEM material.
    pub fn trust_anchor(mut self, pem: impl Into<Vec<u8>>) -> Self {
        self.trust_anchor = Some(pem.into());
        self
    }

    /// Use a pre-built transport instead of constructing one. Trust-anchor
    /// and timeout settings are ignored when this is set.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Request timeout for the built-in transport (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the configuration into an immutable client.
    ///
    /// # Errors
    ///
    /// [`KvkError::InvalidBaseUrl`] if the base URL does not parse,
    /// [`KvkError::TrustAnchor`] if the PEM material yields no certificate,
    /// [`KvkError::Transport`] if the TLS transport cannot be constructed.
    pub fn build(self) -> Result<KvkClient> {
        let base_url = self.base_url.trim_end_matches('/').to_owned();
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(KvkError::InvalidBaseUrl(base_url));
        }
        let http = match self.http {
            Some(http) => http,
            None => {
                let pem = self
                    .trust_anchor
                    .as_deref()
                    .unwrap_or(BUNDLED_TRUST_ANCHOR);
                build_transport(pem, self.timeout)?
            }
        };
        Ok(KvkClient {
            api_key: self.api_key,
            base_url,
            http,
        })
    }
}

fn require_kvk_nummer(kvk_nummer: &str) -> Result<()> {
    if !is_valid_kvk_nummer(kvk_nummer) {
        return Err(KvkError::InvalidKvkNummer(kvk_nummer.to_owned()));
    }
    Ok(())
}

/// Transport with the registry's CA chain pinned: built-in roots are
/// dropped so only the supplied anchor can vouch for the host.
///
/// The registry's frontends historically required legacy TLS renegotiation;
/// rustls never renegotiates mid-connection, so no toggle is needed here.
fn build_transport(pem: &[u8], timeout: Duration) -> Result<reqwest::Client> {
    let certs = reqwest::Certificate::from_pem_bundle(pem)
        .map_err(|e| KvkError::TrustAnchor(e.to_string()))?;
    if certs.is_empty() {
        return Err(KvkError::TrustAnchor(
            "no certificates found in PEM material".into(),
        ));
    }
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .tls_built_in_root_certs(false)
        .timeout(timeout);
    for cert in certs {
        builder = builder.add_root_certificate(cert);
    }
    builder.build().map_err(KvkError::Transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> KvkClient {
        KvkClient::new("test-key").unwrap()
    }

    #[test]
    fn default_base_url_is_https() {
        assert!(DEFAULT_BASE_URL.starts_with("https://"));
    }

    #[test]
    fn bundled_trust_anchor_parses() {
        let certs = reqwest::Certificate::from_pem_bundle(BUNDLED_TRUST_ANCHOR).unwrap();
        assert!(!certs.is_empty());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = KvkClient::builder("k")
            .base_url("https://example.test/api/")
            .build()
            .unwrap();
        let request = client.naamgeving_request("12345678").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://example.test/api/naamgevingen/kvkNummer/12345678"
        );
    }

    #[test]
    fn headers_carry_accept_and_api_key() {
        let request = client().basisprofiel_request("12345678", None).unwrap();
        assert_eq!(request.headers()["accept"], "application/json");
        assert_eq!(request.headers()["apikey"], "test-key");
    }

    #[test]
    fn requests_are_get() {
        let request = client().naamgeving_request("12345678").unwrap();
        assert_eq!(request.method(), &reqwest::Method::GET);
    }
}
