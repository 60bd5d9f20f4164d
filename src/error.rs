use thiserror::Error;

/// Convenience alias for fallible client operations.
pub type Result<T> = std::result::Result<T, KvkError>;

/// Errors raised by the KVK client.
///
/// Validation variants are raised synchronously, before a request object
/// exists; correcting the input makes the call succeed. Transport variants
/// wrap the underlying failure unmodified. The client performs no retries
/// and no interpretation of registry error bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KvkError {
    /// A kvkNummer that is not exactly 8 ASCII digits.
    #[error("invalid kvkNummer '{0}': expected exactly 8 digits")]
    InvalidKvkNummer(String),

    /// A vestigingsnummer that is not exactly 12 ASCII digits.
    #[error("invalid vestigingsnummer '{0}': expected exactly 12 digits")]
    InvalidVestigingsnummer(String),

    /// The registry rejects postcode or huisnummer on its own.
    #[error("postcode and huisnummer may only be used in combination")]
    UnpairedPostcodeHuisnummer,

    /// Page number outside the range the registry accepts.
    #[error("pagina {0} out of range: minimum 1, maximum 1000")]
    PaginaOutOfRange(u32),

    /// Page size outside the range the registry accepts.
    #[error("aantal {0} out of range: minimum 1, maximum 100")]
    AantalOutOfRange(u32),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The trust-anchor material did not yield any usable certificate.
    #[error("invalid trust anchor: {0}")]
    TrustAnchor(String),

    /// Connection, TLS, or HTTP-status failure from the transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
