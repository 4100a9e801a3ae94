//! Client configuration: API base path and notice/scroll timings.
//!
//! The defaults match the Django deployment this front end ships with. The
//! API base may be overridden per page through a `<meta>` tag so the bundle
//! can be served behind a path prefix without a rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 3_000;
pub const DEFAULT_NOTICE_TICK_MS: u32 = 250;
pub const DEFAULT_ROUTE_SCROLL_DELAY_MS: u32 = 100;

/// Name of the `<meta>` tag that overrides [`ClinicConfig::api_base`].
pub const API_BASE_META: &str = "petclinic-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicConfig {
    /// Path prefix for every REST call, without a trailing slash.
    pub api_base: String,
    /// How long a notice stays visible.
    pub notice_ttl_ms: u32,
    /// Period of the single timer that expires notices.
    pub notice_tick_ms: u32,
    /// Delay before scrolling to the section named by the route.
    pub route_scroll_delay_ms: u32,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            notice_tick_ms: DEFAULT_NOTICE_TICK_MS,
            route_scroll_delay_ms: DEFAULT_ROUTE_SCROLL_DELAY_MS,
        }
    }
}

impl ClinicConfig {
    /// Build config from the current document.
    ///
    /// Only the API base is page-configurable; timings always use defaults.
    pub fn from_document() -> Self {
        let override_base = crate::util::browser::meta_content(API_BASE_META);
        Self::default().with_api_base(override_base.as_deref())
    }

    /// Replace the API base when `raw` holds a usable value.
    #[must_use]
    pub fn with_api_base(mut self, raw: Option<&str>) -> Self {
        if let Some(base) = raw.map(normalize_api_base).filter(|b| !b.is_empty()) {
            self.api_base = base;
        }
        self
    }
}

fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
