// src/lib.rs

//! Header-bidding adapter for the NexAd exchange.
//!
//! A pair of one-shot, stateless transformations driven by the auction
//! host: build the outbound auction request for one slot, interpret the
//! server's JSON response back into host bids, plus fire-and-forget win
//! telemetry. The host owns transport, timeouts and auction mechanics; this
//! crate only produces request descriptors and consumes response bodies.

pub mod adapter;
pub mod config;
pub mod env;
pub mod model;
pub mod registry;
pub mod telemetry;

pub use adapter::{BidAdapter, OutboundRequest};
pub use config::{AdapterConfig, ConfigProvider};
pub use env::probe::{DeviceDescriptor, EnvironmentProbe, StaticEnvironment};
pub use model::bid::{BidMeta, InterpretedBid, ServerBidEntry, Tracker};
pub use model::request::{AuctionContext, BidRequest, GdprConsent, MediaType};
pub use registry::{register, BidderRegistration, HostBidderRegistry};
pub use telemetry::{HttpTelemetrySink, TelemetrySink};
