// src/config/mod.rs

use crate::env::probe::DeviceDescriptor;

/// Default NexAd endpoint base. Auction requests go to `<base>/pb/req`,
/// win notifications to `<base>/pb/imp`.
pub const DEFAULT_ENDPOINT: &str = "https://hb.nexad.io";

/// Configuration read by the request builder and device resolver. Passed in
/// explicitly at call time; the adapter never reads ambient global state.
pub trait ConfigProvider: Send + Sync {
    fn endpoint_base(&self) -> &str;
    /// When true the auction payload carries `test: 1`.
    fn debug(&self) -> bool;
    /// When true the auction payload carries `user.coppa: 1`.
    fn coppa(&self) -> bool;
    /// Host-provided device override; resolver fills only its unset fields.
    fn device_override(&self) -> Option<DeviceDescriptor>;
}

/// Plain-struct provider covering every host that configures the adapter
/// once at startup.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub endpoint_base: String,
    pub debug: bool,
    pub coppa: bool,
    pub device_override: Option<DeviceDescriptor>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            endpoint_base: DEFAULT_ENDPOINT.to_string(),
            debug: false,
            coppa: false,
            device_override: None,
        }
    }
}

impl ConfigProvider for AdapterConfig {
    fn endpoint_base(&self) -> &str {
        &self.endpoint_base
    }

    fn debug(&self) -> bool {
        self.debug
    }

    fn coppa(&self) -> bool {
        self.coppa
    }

    fn device_override(&self) -> Option<DeviceDescriptor> {
        self.device_override.clone()
    }
}
