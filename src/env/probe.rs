// src/env/probe.rs

use serde::{Deserialize, Serialize};

/// Language used when the environment reports no locale preference at all.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Read access to the ambient environment (display, user agent, locale,
/// do-not-track). Injected so hosts can wire real platform probes and tests
/// can supply deterministic fixtures.
pub trait EnvironmentProbe: Send + Sync {
    fn screen_size(&self) -> Option<(u32, u32)>;
    fn user_agent(&self) -> String;
    /// Ordered locale preference list, most preferred first.
    fn languages(&self) -> Vec<String>;
    /// Single fallback locale, consulted when the preference list is empty.
    fn language(&self) -> Option<String>;
    fn do_not_track(&self) -> bool;
}

/// Device descriptor attached to the auction payload. Unset fields are
/// omitted from the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DeviceDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ua: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnt: Option<u8>,
}

/// Derives the device descriptor for one auction request. Starts from the
/// host-provided override (if any) and fills only the fields it left unset;
/// an override value is never replaced. Pure function of the probe, no
/// failure path.
pub fn resolve_device(
    device_override: Option<DeviceDescriptor>,
    probe: &dyn EnvironmentProbe,
) -> DeviceDescriptor {
    let mut device = device_override.unwrap_or_default();

    if device.w.is_none() || device.h.is_none() {
        if let Some((w, h)) = probe.screen_size() {
            device.w.get_or_insert(w);
            device.h.get_or_insert(h);
        }
    }
    if device.ua.is_none() {
        device.ua = Some(probe.user_agent());
    }
    if device.language.is_none() {
        device.language = Some(
            probe
                .languages()
                .into_iter()
                .next()
                .or_else(|| probe.language())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        );
    }
    if device.dnt.is_none() {
        device.dnt = Some(u8::from(probe.do_not_track()));
    }

    device
}

/// Fixed-value probe for hosts outside a browser-like environment and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    pub screen: Option<(u32, u32)>,
    pub user_agent: String,
    pub languages: Vec<String>,
    pub language: Option<String>,
    pub do_not_track: bool,
}

impl EnvironmentProbe for StaticEnvironment {
    fn screen_size(&self) -> Option<(u32, u32)> {
        self.screen
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn do_not_track(&self) -> bool {
        self.do_not_track
    }
}
