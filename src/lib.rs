//! # kvk-api
//!
//! Typed async client for the Dutch KVK (Kamer van Koophandel) business
//! registry API: company and establishment lookup by number, name, and
//! address.
//!
//! Identifier formats are checked before a request is built, so a malformed
//! kvkNummer never costs a network round-trip. The TLS channel is pinned to
//! the registry's PKIoverheid Private CA chain, shipped with the crate and
//! overridable at construction. Responses come back as raw
//! [`serde_json::Value`]s; modeling the registry's response schema is left
//! to the caller, as is paging beyond the first result page.
//!
//! ## Quick start
//!
//! ```no_run
//! use kvk_api::{KvkClient, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> kvk_api::Result<()> {
//!     let client = KvkClient::new("your-api-key")?;
//!
//!     let hits = client
//!         .zoeken(&SearchParams {
//!             handelsnaam: Some("Croissanterie".into()),
//!             plaats: Some("Amsterdam".into()),
//!             ..SearchParams::default()
//!         })
//!         .await?;
//!     println!("{hits:#}");
//!
//!     let profiel = client.basisprofiel("68750110", Some(true)).await?;
//!     println!("{profiel:#}");
//!     Ok(())
//! }
//! ```
//!
//! ## Operations
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`KvkClient::zoeken`] | `/zoeken` |
//! | [`KvkClient::basisprofiel`] | `/basisprofiel/{kvkNummer}` |
//! | [`KvkClient::basisprofiel_eigenaar`] | `/basisprofiel/{kvkNummer}/eigenaar` |
//! | [`KvkClient::basisprofiel_hoofdvestiging`] | `/basisprofiel/{kvkNummer}/hoofdvestiging` |
//! | [`KvkClient::basisprofiel_vestigingen`] | `/basisprofiel/{kvkNummer}` |
//! | [`KvkClient::vestigingsprofiel`] | `/vestigingsprofielen/{vestigingsnummer}` |
//! | [`KvkClient::naamgeving`] | `/naamgevingen/kvkNummer/{kvkNummer}` |
//!
//! Each operation also has a synchronous `*_request` twin that validates
//! and builds the [`reqwest::Request`] without dispatching it.

mod client;
mod error;
mod params;
mod validation;

pub use client::{DEFAULT_BASE_URL, KvkClient, KvkClientBuilder};
pub use error::{KvkError, Result};
pub use params::{ResultaatType, SearchParams};
pub use validation::{
    is_valid_aantal, is_valid_address_pair, is_valid_kvk_nummer, is_valid_pagina,
    is_valid_vestigingsnummer,
};
