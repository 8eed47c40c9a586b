// src/env/user_id.rs

use crate::env::probe::EnvironmentProbe;

/// Derives the bearer pseudo-identity for the current environment: the md5
/// digest of the user-agent string, rendered as 32 lowercase hex characters.
///
/// This is an ephemeral, privacy-weak identity. Nothing is persisted, so the
/// value is recomputed per call and only stable as long as the environment
/// keeps reporting the same user agent. Two environments with an identical
/// user agent collide; that matches the server-side contract.
pub fn generate_user_id(probe: &dyn EnvironmentProbe) -> String {
    format!("{:x}", md5::compute(probe.user_agent().as_bytes()))
}
