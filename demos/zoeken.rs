//! Request-construction walkthrough. Pass a real API key as the first
//! argument to also run the search against the live registry.

use kvk_api::{KvkClient, KvkError, ResultaatType, SearchParams};

#[tokio::main]
async fn main() -> Result<(), KvkError> {
    let api_key = std::env::args().nth(1);
    let client = KvkClient::new(api_key.clone().unwrap_or_else(|| "demo-key".into()))?;

    println!("=== Built requests ===\n");

    let params = SearchParams {
        handelsnaam: Some("Croissanterie".into()),
        plaats: Some("Amsterdam".into()),
        resultaat_type: Some(ResultaatType::Hoofdvestiging),
        ..SearchParams::default()
    };
    println!("  zoeken            => {}", client.zoeken_request(&params)?.url());
    println!(
        "  basisprofiel      => {}",
        client.basisprofiel_request("68750110", Some(true))?.url()
    );
    println!(
        "  vestigingsprofiel => {}",
        client.vestigingsprofiel_request("000038509504", None)?.url()
    );
    println!("  naamgeving        => {}", client.naamgeving_request("68750110")?.url());

    println!("\n=== Rejected before any network I/O ===\n");

    let rejected = [
        SearchParams {
            kvk_nummer: Some("1234567".into()),
            ..SearchParams::default()
        },
        SearchParams {
            postcode: Some("1014BA".into()),
            ..SearchParams::default()
        },
        SearchParams {
            pagina: 0,
            ..SearchParams::default()
        },
        SearchParams {
            aantal: 250,
            ..SearchParams::default()
        },
    ];
    for bad in &rejected {
        if let Err(e) = client.zoeken_request(bad) {
            println!("  {e}");
        }
    }

    if api_key.is_some() {
        println!("\n=== Live lookup ===\n");
        let hits = client.zoeken(&params).await?;
        println!("{hits:#}");
    }

    Ok(())
}
