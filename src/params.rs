//! Search filters for the `/zoeken` endpoint.

use serde::Serialize;

/// Restricts search results to one registration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultaatType {
    /// The main establishment of an entity.
    Hoofdvestiging,
    /// A secondary establishment.
    Nevenvestiging,
    /// The legal entity itself, without an establishment.
    Rechtspersoon,
}

/// Filters for [`zoeken`](crate::KvkClient::zoeken).
///
/// Every field maps to exactly one query parameter, carrying the wire name
/// the registry expects. `None` fields are dropped from the query entirely,
/// never sent as empty strings. `pagina` and `aantal` are always sent; the
/// defaults match the registry's own (page 1, 15 results per page).
///
/// ```
/// use kvk_api::SearchParams;
///
/// let params = SearchParams {
///     handelsnaam: Some("Croissanterie".into()),
///     plaats: Some("Amsterdam".into()),
///     ..SearchParams::default()
/// };
/// assert_eq!(params.pagina, 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SearchParams {
    /// Entity number, exactly 8 digits when present.
    #[serde(rename = "kvkNummer", skip_serializing_if = "Option::is_none")]
    pub kvk_nummer: Option<String>,

    /// Legal-entity tax identifier (RSIN).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsin: Option<String>,

    /// Establishment number, exactly 12 digits when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vestigingsnummer: Option<String>,

    /// Trade name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handelsnaam: Option<String>,

    /// Street name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub straatnaam: Option<String>,

    /// City or town.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaats: Option<String>,

    /// Postal code; only valid together with [`huisnummer`](Self::huisnummer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// House number; only valid together with [`postcode`](Self::postcode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huisnummer: Option<String>,

    /// House number suffix ("a", "bis", ...).
    #[serde(
        rename = "huisnummerToevoeging",
        skip_serializing_if = "Option::is_none"
    )]
    pub huisnummer_toevoeging: Option<String>,

    /// Restrict results to one registration type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resultaat_type: Option<ResultaatType>,

    /// Also return registrations that have since been deactivated.
    #[serde(
        rename = "InclusiefInactieveRegistraties",
        skip_serializing_if = "Option::is_none"
    )]
    pub inclusief_inactieve_registraties: Option<bool>,

    /// Page number, 1 through 1000.
    pub pagina: u32,

    /// Results per page, 1 through 100.
    pub aantal: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            kvk_nummer: None,
            rsin: None,
            vestigingsnummer: None,
            handelsnaam: None,
            straatnaam: None,
            plaats: None,
            postcode: None,
            huisnummer: None,
            huisnummer_toevoeging: None,
            resultaat_type: None,
            inclusief_inactieve_registraties: None,
            pagina: 1,
            aantal: 15,
        }
    }
}
