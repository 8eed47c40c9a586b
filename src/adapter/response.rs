// src/adapter/response.rs

use tracing::warn;

use crate::model::bid::{InterpretedBid, ServerBidEntry};

/// Maps a raw auction response body onto host-facing bids.
///
/// The wire format is a JSON array of server bid entries. An absent, empty
/// or malformed body is a valid "no bid" outcome and yields an empty list;
/// nothing here is an error to the host. Output order matches input order,
/// with no filtering or deduplication.
pub fn interpret(body: &[u8]) -> Vec<InterpretedBid> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }

    // simd-json parses in place, so work on an owned copy of the body.
    let mut buf = body.to_vec();
    match simd_json::serde::from_slice::<Vec<ServerBidEntry>>(&mut buf) {
        Ok(entries) => entries.into_iter().map(InterpretedBid::from).collect(),
        Err(err) => {
            warn!("unparseable auction response treated as no bid: {}", err);
            Vec::new()
        }
    }
}
