// src/model/request.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media type of a placement or creative.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
    Native,
    Video,
}

/// Banner media-type declaration: list of (w, h) sizes the slot accepts.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BannerMediaType {
    #[serde(default)]
    pub sizes: Vec<(u32, u32)>,
}

/// Native media-type declaration. The adapter does not interpret the asset
/// request; it only checks for the declaration's presence.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NativeMediaType {
    #[serde(default)]
    pub assets: Value,
}

/// Media types declared on one slot. A valid request for this adapter must
/// declare at least `banner`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MediaTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerMediaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<NativeMediaType>,
}

/// Bidder-specific parameters attached to one slot by the publisher setup.
/// `placement_id` is the only parameter this adapter reads; everything else
/// is carried opaquely.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BidderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_id: Option<String>,
    #[serde(flatten)]
    pub rest: HashMap<String, Value>,
}

/// One advertising slot to bid on, as handed over by the auction host.
/// Immutable while this adapter processes it.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    pub id: String,
    pub params: BidderParams,
    #[serde(default)]
    pub media_types: MediaTypes,
}

/// GDPR consent signal as forwarded by the host's consent module.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GdprConsent {
    pub gdpr_applies: bool,
    #[serde(default)]
    pub consent_string: String,
}

/// Per-auction shared data. Read-only input for the request builder.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuctionContext {
    /// Timeout budget in milliseconds, forwarded as `tmax`. The host enforces
    /// it; this adapter only echoes it.
    pub timeout_ms: u64,
    #[serde(default)]
    pub debug: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdpr: Option<GdprConsent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_privacy: Option<String>,
}

impl Default for AuctionContext {
    fn default() -> Self {
        Self {
            timeout_ms: 250,
            debug: false,
            gdpr: None,
            us_privacy: None,
        }
    }
}

impl BidRequest {
    /// Smallest request the adapter considers valid; used by hosts and tests.
    pub fn banner(id: &str, placement_id: &str) -> Self {
        Self {
            id: id.to_string(),
            params: BidderParams {
                placement_id: Some(placement_id.to_string()),
                rest: HashMap::new(),
            },
            media_types: MediaTypes {
                banner: Some(BannerMediaType::default()),
                native: None,
            },
        }
    }
}
