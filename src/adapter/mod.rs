// src/adapter/mod.rs

pub mod notify;
pub mod request_builder;
pub mod response;

use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::env::probe::EnvironmentProbe;
use crate::model::bid::InterpretedBid;
use crate::model::request::{AuctionContext, BidRequest};
use crate::telemetry::TelemetrySink;

pub use request_builder::OutboundRequest;

/// The operation table the host drives. Stateless: every capability is
/// injected once at construction and each call is an independent
/// transformation, so one instance serves any number of concurrent auctions
/// without locking.
pub struct BidAdapter {
    config: Arc<dyn ConfigProvider>,
    probe: Arc<dyn EnvironmentProbe>,
    sink: Arc<dyn TelemetrySink>,
}

impl BidAdapter {
    pub fn new(
        config: Arc<dyn ConfigProvider>,
        probe: Arc<dyn EnvironmentProbe>,
        sink: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            config,
            probe,
            sink,
        }
    }

    /// See [`request_builder::is_request_valid`].
    pub fn is_request_valid(&self, request: Option<&BidRequest>) -> bool {
        request_builder::is_request_valid(request)
    }

    /// See [`request_builder::build`].
    pub fn build_request(&self, request: &BidRequest, ctx: &AuctionContext) -> OutboundRequest {
        request_builder::build(request, ctx, self.config.as_ref(), self.probe.as_ref())
    }

    /// See [`response::interpret`].
    pub fn interpret_response(&self, body: &[u8]) -> Vec<InterpretedBid> {
        response::interpret(body)
    }

    /// See [`notify::on_bid_won`].
    pub async fn on_bid_won(&self, bid: Option<&InterpretedBid>) {
        notify::on_bid_won(bid, self.config.as_ref(), self.sink.as_ref()).await;
    }
}
