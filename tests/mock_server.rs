// tests/mock_server.rs
//
// End-to-end coverage against a mock NexAd server: the built auction request
// is actually POSTed, the response body interpreted, and the win/pixel side
// effects observed on the wire.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing_subscriber::EnvFilter;

use rust_hb_adapter::{
    AdapterConfig, AuctionContext, BidAdapter, BidRequest, HttpTelemetrySink, InterpretedBid,
    ServerBidEntry, StaticEnvironment, Tracker,
};

#[derive(Debug)]
enum ServerEvent {
    Auction {
        bearer: String,
        accept_language: String,
        body: Value,
    },
    Win {
        bearer: String,
        body: Value,
    },
    Pixel {
        tag: String,
    },
}

#[derive(Clone)]
struct MockState {
    events: UnboundedSender<ServerEvent>,
}

fn bearer_of(headers: &HeaderMap) -> String {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string()
}

async fn handle_auction(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Vec<ServerBidEntry>> {
    let bearer = bearer_of(&headers);
    let request_id = body["id"].as_str().unwrap_or_default().to_string();
    state
        .events
        .send(ServerEvent::Auction {
            bearer: bearer.clone(),
            accept_language: headers
                .get("accept-language")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string(),
            body,
        })
        .unwrap();

    let entry = |n: u32, cpm: f64| ServerBidEntry {
        id: format!("srv-{}", n),
        impid: format!("imp-{}", n),
        request_id: request_id.clone(),
        cpm,
        currency: "USD".to_string(),
        width: 300,
        height: 250,
        ad: format!("<div>creative {}</div>", n),
        ttl: 300,
        creative_id: format!("cr-{}", n),
        net_revenue: true,
        trackers: vec![Tracker {
            kind: 0,
            url: format!("https://tk.nexad.io/imp?b={}", n),
        }],
        media_type: None,
        adomain: vec!["advertiser.example".to_string()],
        user_id: bearer.clone(),
    };
    Json(vec![entry(1, 2.5), entry(2, 0.75)])
}

async fn handle_win(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) {
    state
        .events
        .send(ServerEvent::Win {
            bearer: bearer_of(&headers),
            body,
        })
        .unwrap();
}

async fn handle_pixel(State(state): State<MockState>, Path(tag): Path<String>) -> &'static str {
    state.events.send(ServerEvent::Pixel { tag }).unwrap();
    "ok"
}

async fn start_mock_server() -> (SocketAddr, UnboundedReceiver<ServerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new()
        .route("/pb/req", post(handle_auction))
        .route("/pb/imp", post(handle_win))
        .route("/px/{tag}", get(handle_pixel))
        .with_state(MockState { events: tx });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rx)
}

fn adapter_for(addr: SocketAddr) -> BidAdapter {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let config = AdapterConfig {
        endpoint_base: format!("http://{}", addr),
        ..AdapterConfig::default()
    };
    let probe = StaticEnvironment {
        screen: Some((1920, 1080)),
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) Firefox/124.0".to_string(),
        languages: vec!["en-US".to_string()],
        ..StaticEnvironment::default()
    };
    BidAdapter::new(
        Arc::new(config),
        Arc::new(probe),
        Arc::new(HttpTelemetrySink::new()),
    )
}

async fn next_event(rx: &mut UnboundedReceiver<ServerEvent>) -> ServerEvent {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("mock server event within 2s")
        .expect("event channel open")
}

#[tokio::test]
async fn auction_round_trip() {
    let (addr, mut events) = start_mock_server().await;
    let adapter = adapter_for(addr);

    let request_id = uuid::Uuid::new_v4().to_string();
    let request = BidRequest::banner(&request_id, "plc-42");
    assert!(adapter.is_request_valid(Some(&request)));

    let built = adapter.build_request(&request, &AuctionContext::default());

    // Replay the descriptor the way the host transport would.
    let client = reqwest::Client::new();
    let mut outbound = client.post(&built.url).body(built.body.clone());
    for (name, value) in &built.headers {
        outbound = outbound.header(*name, value);
    }
    let response_body = outbound.send().await.unwrap().bytes().await.unwrap();

    let bids = adapter.interpret_response(&response_body);
    assert_eq!(bids.len(), 2);
    assert!(bids.iter().all(|bid| bid.request_id == request_id));
    assert_eq!(bids[0].cpm, 2.5);
    assert_eq!(bids[1].cpm, 0.75);
    assert_eq!(
        bids[0].meta.advertiser_domains,
        vec!["advertiser.example".to_string()]
    );

    match next_event(&mut events).await {
        ServerEvent::Auction {
            bearer,
            accept_language,
            body,
        } => {
            assert_eq!(bearer.len(), 32);
            // the server echoes the bearer as each bid's userId
            assert!(bids.iter().all(|bid| bid.user_id == bearer));
            assert!(!accept_language.is_empty());
            assert_eq!(body["placements"], serde_json::json!(["plc-42"]));
            assert_eq!(body["at"], 2);
        }
        other => panic!("expected auction event, got {:?}", other),
    }
}

#[tokio::test]
async fn win_notification_and_single_impression_pixel() {
    let (addr, mut events) = start_mock_server().await;
    let adapter = adapter_for(addr);

    let bid = InterpretedBid {
        request_id: "req-1".to_string(),
        cpm: 2.5,
        currency: "USD".to_string(),
        width: 300,
        height: 250,
        ad: "<div/>".to_string(),
        ttl: 300,
        creative_id: "cr-1".to_string(),
        net_revenue: true,
        media_type: None,
        meta: Default::default(),
        id: "srv-1".to_string(),
        impid: "imp-1".to_string(),
        user_id: "feedfacefeedfacefeedfacefeedface".to_string(),
        trackers: vec![
            Tracker {
                kind: 0,
                url: format!("http://{}/px/win", addr),
            },
            Tracker {
                kind: 1,
                url: format!("http://{}/px/click", addr),
            },
        ],
    };

    adapter.on_bid_won(Some(&bid)).await;
    adapter.on_bid_won(None).await; // must not produce any traffic

    match next_event(&mut events).await {
        ServerEvent::Win { bearer, body } => {
            assert_eq!(bearer, bid.user_id);
            assert_eq!(
                body,
                serde_json::json!({ "id": "srv-1", "impid": "imp-1", "t": 2.5 })
            );
        }
        other => panic!("expected win event, got {:?}", other),
    }
    match next_event(&mut events).await {
        ServerEvent::Pixel { tag } => assert_eq!(tag, "win"),
        other => panic!("expected pixel event, got {:?}", other),
    }

    // no further traffic: the click tracker and the None call stay silent
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(events.try_recv().is_err());
}
