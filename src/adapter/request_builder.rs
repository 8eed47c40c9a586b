// src/adapter/request_builder.rs

use serde::Serialize;
use tracing::warn;

use crate::config::ConfigProvider;
use crate::env::probe::{resolve_device, DeviceDescriptor, EnvironmentProbe};
use crate::env::user_id::generate_user_id;
use crate::model::request::{AuctionContext, BidRequest};

/// Path of the auction endpoint, appended to the configured base.
pub const AUCTION_PATH: &str = "/pb/req";

/// Fixed auction-type constant: 2 = second-price.
pub const AUCTION_TYPE_SECOND_PRICE: u8 = 2;

/// Fixed locale preference sent with every auction request.
pub const ACCEPT_LANGUAGE: &str = "en;q=1.0, *;q=0.5";

/// One outbound HTTP request descriptor. Produced once per [`BidRequest`]
/// and consumed exactly once by the host's transport; no network call is
/// made here. Cookies/credentials are never attached.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: &'static str,
    pub url: String,
    /// Serialized JSON auction payload.
    pub body: String,
    pub headers: Vec<(&'static str, String)>,
    /// Back-reference to the originating [`BidRequest`] id.
    pub request_id: String,
}

#[derive(Serialize)]
struct AuctionPayload<'a> {
    id: &'a str,
    tmax: u64,
    placements: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<u8>,
    at: u8,
    device: DeviceDescriptor,
    user: UserPayload<'a>,
}

#[derive(Serialize)]
struct UserPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    coppa: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gdpr: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usp: Option<&'a str>,
}

/// Validity predicate handed to the host registry. Duplicates the host's own
/// pre-filter: a request must carry `params.placementId` and declare a
/// banner media type. Failures log a warning and report `false`; they never
/// block other requests in the batch.
pub fn is_request_valid(request: Option<&BidRequest>) -> bool {
    let Some(request) = request else {
        warn!("bid request rejected: no request");
        return false;
    };
    match request.params.placement_id.as_deref() {
        None | Some("") => {
            warn!("bid request {} rejected: missing placementId", request.id);
            return false;
        }
        Some(_) => {}
    }
    if request.media_types.banner.is_none() {
        warn!("bid request {} rejected: no banner media type", request.id);
        return false;
    }
    true
}

/// Builds the auction request descriptor for one slot. Assumes the request
/// already passed [`is_request_valid`]; rejects nothing itself and performs
/// no I/O.
pub fn build(
    request: &BidRequest,
    ctx: &AuctionContext,
    config: &dyn ConfigProvider,
    probe: &dyn EnvironmentProbe,
) -> OutboundRequest {
    let placement_id = request.params.placement_id.as_deref().unwrap_or_default();

    let gdpr = ctx.gdpr.as_ref().filter(|consent| consent.gdpr_applies);
    let usp = ctx.us_privacy.as_deref().filter(|usp| !usp.is_empty());

    let payload = AuctionPayload {
        id: &request.id,
        tmax: ctx.timeout_ms,
        placements: vec![placement_id],
        test: (config.debug() || ctx.debug).then_some(1),
        at: AUCTION_TYPE_SECOND_PRICE,
        device: resolve_device(config.device_override(), probe),
        user: UserPayload {
            coppa: config.coppa().then_some(1),
            gdpr: gdpr.map(|_| 1),
            consent: gdpr.map(|consent| consent.consent_string.as_str()),
            usp,
        },
    };

    let body =
        serde_json::to_string(&payload).expect("auction payload is always serializable");

    OutboundRequest {
        method: "POST",
        url: format!("{}{}", config.endpoint_base(), AUCTION_PATH),
        body,
        headers: vec![
            ("Content-Type", "application/json".to_string()),
            ("Accept-Language", ACCEPT_LANGUAGE.to_string()),
            (
                "Authorization",
                format!("Bearer {}", generate_user_id(probe)),
            ),
        ],
        request_id: request.id.clone(),
    }
}
