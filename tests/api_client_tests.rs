//! HTTP boundary tests against a minimal in-process stub server.
//!
//! The stub answers exactly one connection with a canned response, which is
//! enough to exercise status mapping, `detail` extraction and response
//! decoding without a live backend.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use carteira::api::models::OperationPayload;
use carteira::api::ApiClient;
use carteira::config::ClientConfig;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Binds an ephemeral port and serves one canned HTTP response.
async fn stub_server(status_line: &'static str, content_type: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 16 * 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                content_type,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{}", addr)
}

fn client_for(base_url: String) -> ApiClient {
    let config = ClientConfig {
        api_url: base_url,
        ..ClientConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

fn payload() -> OperationPayload {
    OperationPayload {
        asset_id: 1,
        movement_type: "buy".parse().unwrap(),
        quantity: 100,
        price: Decimal::new(3000, 2),
        trade_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        market: Some("VISTA".to_string()),
        institution: None,
    }
}

#[tokio::test]
async fn backend_detail_is_surfaced_verbatim() {
    let base = stub_server(
        "404 Not Found",
        "application/json",
        r#"{"detail": "Ativo não encontrado"}"#,
    )
    .await;
    let client = client_for(base);

    let err = client.get_asset(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Ativo não encontrado");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_status() {
    let base = stub_server("500 Internal Server Error", "text/plain", "boom").await;
    let client = client_for(base);

    let err = client.list_assets().await.unwrap_err();
    assert_eq!(err.to_string(), "request failed with HTTP 500");
}

#[tokio::test]
async fn supersede_returns_both_identities() {
    let base = stub_server(
        "200 OK",
        "application/json",
        r#"{"status": "updated", "message": "Operação 12 cancelada e substituída", "old_id": 12, "new_id": 27}"#,
    )
    .await;
    let client = client_for(base);

    let outcome = client.supersede_operation(12, &payload()).await.unwrap();
    assert_eq!(outcome.old_id, 12);
    assert_eq!(outcome.new_id, 27);
    assert_ne!(outcome.old_id, outcome.new_id);
}

#[tokio::test]
async fn batch_quotes_preserve_null_entries() {
    let base = stub_server(
        "200 OK",
        "application/json",
        r#"{
            "PETR4": {
                "ticker": "PETR4", "price": 38.1, "change": 0.4,
                "change_percent": 1.06, "volume": 1000000,
                "open": 37.8, "high": 38.4, "low": 37.5,
                "previous_close": 37.7,
                "updated_at": "2026-02-01T18:00:00", "source": "yfinance"
            },
            "SEMPRECO11": null
        }"#,
    )
    .await;
    let client = client_for(base);

    let quotes = client
        .batch_quotes(&["PETR4".to_string(), "SEMPRECO11".to_string()])
        .await
        .unwrap();
    assert_eq!(quotes.len(), 2);
    assert!(quotes["PETR4"].is_some());
    assert!(quotes["SEMPRECO11"].is_none());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let base = stub_server("200 OK", "application/json", r#"{"not": "an asset"}"#).await;
    let client = client_for(base);

    let err = client.get_asset(1).await.unwrap_err();
    assert!(err.to_string().contains("invalid response body"));
}

#[tokio::test]
async fn client_side_validation_never_hits_the_network() {
    // no server bound at this address; validation must fail first
    let client = client_for("http://127.0.0.1:9".to_string());

    let mut bad = payload();
    bad.quantity = 0;
    let err = client.create_operation(&bad).await.unwrap_err();
    assert!(err.to_string().contains("quantity must be a positive integer"));
}
