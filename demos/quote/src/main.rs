//! Quote API Example
//!
//! Demonstrates binding response bodies and headers with latch.

// Example-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use latch::prelude::*;

// ============================================================================
// Data Types
// ============================================================================

/// A quote as served by the quote API.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub id: u64,
    pub author: String,
    pub text: String,
}

/// What a single quote lookup produces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuoteLookup {
    pub quote: Quote,
    pub etag: String,
}

// ============================================================================
// API calls
// ============================================================================

/// Fetch the quote of the day as plain text.
pub async fn quote_of_the_day<T: Transport>(client: &Client<T>) -> Result<String> {
    let mut text = String::new();
    client
        .get("qotd")
        .accept("text/plain")
        .into_text(&mut text)
        .run()
        .await?;
    Ok(text)
}

/// Fetch one quote with its `ETag`.
pub async fn quote<T: Transport>(client: &Client<T>, id: u64) -> Result<QuoteLookup> {
    let mut lookup = QuoteLookup::default();
    client
        .get(format!("quotes/{id}"))
        .into_json(&mut lookup.quote)
        .header_into("ETag", &mut lookup.etag)
        .run()
        .await?;
    Ok(lookup)
}

/// Delete a quote, the API answers `204 No Content`.
pub async fn delete_quote<T: Transport>(client: &Client<T>, id: u64) -> Result<()> {
    client
        .delete(format!("quotes/{id}"))
        .expected_status(204)
        .run()
        .await
}

#[tokio::main]
async fn main() -> latch::Result<()> {
    let transport = HyperTransport::builder().with_logging().build();
    let client = Client::with_transport(transport, "https://quotes.example.com/api")?
        .accept("application/json");

    println!("Quote client created!");
    println!("Base URL: {}", client.base_url());

    // Needs a running quote API
    match quote(&client, 1).await {
        Ok(lookup) => println!("{} ({}): {}", lookup.quote.author, lookup.etag, lookup.quote.text),
        Err(err) => println!("lookup failed: {err}"),
    }

    Ok(())
}

// ============================================================================
// Tests using wiremock
// ============================================================================

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer) -> Client {
        Client::new(format!("{}/api", server.uri()))
            .expect("client")
            .accept("application/json")
    }

    #[tokio::test]
    async fn test_quote_of_the_day() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/qotd"))
            .and(header("Accept", "text/plain"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("Simplicity is prerequisite.\n", "text/plain"),
            )
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let_assert!(Ok(text) = quote_of_the_day(&client).await);
        check!(text == "Simplicity is prerequisite.");
    }

    #[tokio::test]
    async fn test_quote() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quotes/7"))
            .and(header("Accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ETag", "\"v3\"")
                    .set_body_raw(
                        r#"{"id":7,"author":"Dijkstra","text":"Simplicity is prerequisite."}"#,
                        "application/json; charset=utf-8",
                    ),
            )
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let_assert!(Ok(lookup) = quote(&client, 7).await);
        check!(lookup.quote.id == 7);
        check!(lookup.quote.author == "Dijkstra");
        check!(lookup.etag == "\"v3\"");
    }

    #[tokio::test]
    async fn test_quote_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/quotes/99"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        let_assert!(Err(err) = quote(&client, 99).await);
        check!(err.status() == Some(404));
    }

    #[tokio::test]
    async fn test_delete_quote() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/quotes/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server);
        check!(delete_quote(&client, 7).await.is_ok());
    }
}
