// src/adapter/notify.rs

use futures::future::join_all;
use serde_json::json;

use crate::config::ConfigProvider;
use crate::model::bid::{InterpretedBid, TRACKER_TYPE_IMPRESSION};
use crate::telemetry::TelemetrySink;

/// Path of the win-notification endpoint, appended to the configured base.
pub const WIN_PATH: &str = "/pb/imp";

/// Fires the billing notification and impression pixels for a winning bid.
/// Best-effort telemetry: nothing is awaited for status, no error surfaces.
/// `None` is a no-op so the host can call this unconditionally.
pub async fn on_bid_won(
    bid: Option<&InterpretedBid>,
    config: &dyn ConfigProvider,
    sink: &dyn TelemetrySink,
) {
    let Some(bid) = bid else {
        return;
    };

    let notification = json!({
        "id": bid.id,
        "impid": bid.impid,
        "t": bid.cpm,
    });
    sink.post_json(
        &format!("{}{}", config.endpoint_base(), WIN_PATH),
        notification,
        &bid.user_id,
    )
    .await;

    let pixels = bid
        .trackers
        .iter()
        .filter(|tracker| tracker.kind == TRACKER_TYPE_IMPRESSION)
        .map(|tracker| sink.fire_pixel(&tracker.url));
    join_all(pixels).await;
}
