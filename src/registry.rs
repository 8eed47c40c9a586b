// src/registry.rs

use std::sync::Arc;

use crate::adapter::BidAdapter;
use crate::model::request::MediaType;

/// Bidder code this adapter registers under.
pub const BIDDER_CODE: &str = "nexad";

/// Media types the adapter bids on.
pub const SUPPORTED_MEDIA_TYPES: [MediaType; 2] = [MediaType::Banner, MediaType::Native];

/// Everything the host's bidder registry needs: the code, the supported
/// media types and the operation table.
#[derive(Clone)]
pub struct BidderRegistration {
    pub code: &'static str,
    pub supported_media_types: Vec<MediaType>,
    pub adapter: Arc<BidAdapter>,
}

/// The host-side registry contract this adapter consumes. The host owns the
/// implementation; the adapter only hands its registration over.
pub trait HostBidderRegistry {
    fn register(&mut self, registration: BidderRegistration);
}

/// Hands the adapter's operation table to the host's bidder registry.
pub fn register(registry: &mut dyn HostBidderRegistry, adapter: Arc<BidAdapter>) {
    registry.register(BidderRegistration {
        code: BIDDER_CODE,
        supported_media_types: SUPPORTED_MEDIA_TYPES.to_vec(),
        adapter,
    });
}
