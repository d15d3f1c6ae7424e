//! End-to-end tests for the message pipeline (validation → lookup → format →
//! map), driven through `handle_text` with mock geolocation and map servers.

use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use ipgeo_bot::{handle_text, BotState, GeoClient, MapClient, Reply};

const MAP_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-map-tile";

/// Starts a mock HTTP server and returns its base URL.
async fn start_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Server failed to start");
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://{}", addr)
}

/// Builds a `BotState` against a mock geo server (and a mock map server that
/// serves `MAP_BYTES`).
async fn state_with_geo(geo_router: Router) -> BotState {
    let geo_base = start_server(geo_router).await;
    let map_router = Router::new().route("/v1", get(|| async { MAP_BYTES.to_vec() }));
    let map_base = start_server(map_router).await;

    let http = reqwest::Client::new();
    BotState {
        geo: GeoClient::new(http.clone(), format!("{geo_base}/json"), "ru"),
        map: MapClient::new(
            http,
            format!("{map_base}/v1"),
            Some("test-key".to_string()),
            Duration::from_secs(5),
        ),
    }
}

#[tokio::test]
async fn test_full_pipeline_text_then_photo() {
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(|Path(ip): Path<String>| async move {
            format!(
                r#"{{"status":"success","query":"{ip}","country":"США","lat":37.4,"lon":-122.1}}"#
            )
        }),
    );
    let state = state_with_geo(geo_router).await;

    let reply = handle_text(&state, "8.8.8.8").await;

    // Coordinates present: exactly one text reply with one photo after it
    match reply {
        Reply::TextWithPhoto { text, png } => {
            assert!(text.contains("IP: 8.8.8.8"));
            assert!(text.contains("Локация: США"));
            assert!(text.contains("Координаты: 37.4, -122.1"));
            assert_eq!(png, MAP_BYTES);
        }
        Reply::Text(text) => panic!("Expected text+photo, got text only: {text}"),
    }
}

#[tokio::test]
async fn test_answer_without_coordinates_is_text_only() {
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(|Path(ip): Path<String>| async move {
            format!(r#"{{"status":"success","query":"{ip}","country":"США"}}"#)
        }),
    );
    let state = state_with_geo(geo_router).await;

    let reply = handle_text(&state, "8.8.8.8").await;
    match reply {
        Reply::Text(text) => {
            assert!(text.contains("IP: 8.8.8.8"));
            assert!(!text.contains("Координаты"));
        }
        Reply::TextWithPhoto { .. } => panic!("No coordinates means no photo"),
    }
}

#[tokio::test]
async fn test_provider_fail_status_is_text_only_error_line() {
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(|| async { r#"{"status":"fail","message":"private range","query":"10.0.0.1"}"# }),
    );
    let state = state_with_geo(geo_router).await;

    let reply = handle_text(&state, "10.0.0.1").await;
    match reply {
        Reply::Text(text) => {
            assert_eq!(text, "Запрос к ip-api не удался: private range");
        }
        Reply::TextWithPhoto { .. } => panic!("Failed lookup must not attach a photo"),
    }
}

#[tokio::test]
async fn test_provider_http_error_is_reported_to_user() {
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let state = state_with_geo(geo_router).await;

    let reply = handle_text(&state, "8.8.8.8").await;
    let text = reply.text();
    assert!(text.starts_with("Произошла ошибка при запросе к ip-api:"));
    // The provider's status and body are embedded for the user
    assert!(text.contains("500"));
    assert!(text.contains("boom"));
}

#[tokio::test]
async fn test_invalid_ip_makes_no_downstream_call() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    // Count provider hits to prove validation short-circuits
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in_handler = Arc::clone(&hits);
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(move || {
            let hits = Arc::clone(&hits_in_handler);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                r#"{"status":"success","query":"0.0.0.0"}"#
            }
        }),
    );
    let state = state_with_geo(geo_router).await;

    let reply = handle_text(&state, "256.1.1.1").await;
    assert!(reply.text().contains("IPv4"));
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no downstream call expected");
}

#[tokio::test]
async fn test_map_failure_still_yields_photo_via_placeholder() {
    // Geo answers with coordinates, but the map server is replaced with an
    // unreachable endpoint: the reply must still carry a photo (placeholder)
    let geo_router = Router::new().route(
        "/json/{ip}",
        get(|Path(ip): Path<String>| async move {
            format!(r#"{{"status":"success","query":"{ip}","lat":55.7558,"lon":37.6173}}"#)
        }),
    );
    let geo_base = start_server(geo_router).await;

    let http = reqwest::Client::new();
    let state = BotState {
        geo: GeoClient::new(http.clone(), format!("{geo_base}/json"), "ru"),
        map: MapClient::new(
            http,
            "http://127.0.0.1:1/v1".to_string(),
            Some("test-key".to_string()),
            Duration::from_secs(1),
        ),
    };

    let reply = handle_text(&state, "8.8.8.8").await;
    match reply {
        Reply::TextWithPhoto { png, .. } => {
            assert!(!png.is_empty());
            assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
        }
        Reply::Text(text) => panic!("Expected placeholder photo, got text only: {text}"),
    }
}
