// src/model/bid.rs

use serde::{Deserialize, Serialize};

use crate::model::request::MediaType;

/// Tracker type code for client-side impression pixels. Other codes are
/// reserved for future tracker kinds and ignored by the notifier.
pub const TRACKER_TYPE_IMPRESSION: u8 = 0;

/// One event beacon attached to a server bid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tracker {
    #[serde(rename = "type")]
    pub kind: u8,
    pub url: String,
}

/// One bid as reported by the NexAd server. Sparse entries are tolerated:
/// every optional wire field falls back to its default instead of failing
/// the whole batch.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServerBidEntry {
    /// Server-side bid id, echoed back in the win notification.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub impid: String,
    /// Echo of the originating BidRequest id. The server is trusted to
    /// return the id it was sent.
    pub request_id: String,
    pub cpm: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Ad markup (HTML, or a JSON native payload).
    #[serde(default)]
    pub ad: String,
    #[serde(default)]
    pub ttl: u64,
    #[serde(default)]
    pub creative_id: String,
    #[serde(default)]
    pub net_revenue: bool,
    #[serde(default)]
    pub trackers: Vec<Tracker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub adomain: Vec<String>,
    /// Bearer identity echoed from the auction request; keys the win
    /// notification.
    #[serde(default)]
    pub user_id: String,
}

/// Advertiser metadata nested on the host-facing bid.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidMeta {
    pub advertiser_domains: Vec<String>,
}

/// The host-facing bid: a direct rename/reshape of [`ServerBidEntry`], with
/// advertiser domains nested under `meta`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InterpretedBid {
    pub request_id: String,
    pub cpm: f64,
    pub currency: String,
    pub width: u32,
    pub height: u32,
    pub ad: String,
    pub ttl: u64,
    pub creative_id: String,
    pub net_revenue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    pub meta: BidMeta,
    // Carried for the win notifier, not read by the auction itself.
    pub id: String,
    pub impid: String,
    pub user_id: String,
    #[serde(default)]
    pub trackers: Vec<Tracker>,
}

impl From<ServerBidEntry> for InterpretedBid {
    fn from(entry: ServerBidEntry) -> Self {
        Self {
            request_id: entry.request_id,
            cpm: entry.cpm,
            currency: entry.currency,
            width: entry.width,
            height: entry.height,
            ad: entry.ad,
            ttl: entry.ttl,
            creative_id: entry.creative_id,
            net_revenue: entry.net_revenue,
            media_type: entry.media_type,
            meta: BidMeta {
                advertiser_domains: entry.adomain,
            },
            id: entry.id,
            impid: entry.impid,
            user_id: entry.user_id,
            trackers: entry.trackers,
        }
    }
}
