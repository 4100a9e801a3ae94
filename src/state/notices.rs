//! Transient notification queue.
//!
//! DESIGN
//! ======
//! Notices live in one append-only list with absolute expiry timestamps.
//! A single periodic tick prunes everything that has expired, so there is no
//! per-notice timer and concurrent notices stack in insertion order.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Severity of a notice; drives its color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS modifier class for the banner.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
    /// Milliseconds since the Unix epoch after which the notice is dropped.
    pub expires_at_ms: f64,
}

impl Notice {
    #[must_use]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// Ordered list of live notices.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticeQueue {
    ttl_ms: f64,
    next_id: u64,
    items: Vec<Notice>,
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_NOTICE_TTL_MS)
    }
}

impl NoticeQueue {
    #[must_use]
    pub fn new(ttl_ms: u32) -> Self {
        Self { ttl_ms: f64::from(ttl_ms), next_id: 1, items: Vec::new() }
    }

    /// Append a notice expiring `ttl` after `now_ms`. Returns its id.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>, now_ms: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, text: text.into(), expires_at_ms: now_ms + self.ttl_ms });
        id
    }

    /// Drop every expired notice. Returns how many were removed.
    pub fn tick(&mut self, now_ms: f64) -> usize {
        let before = self.items.len();
        self.items.retain(|notice| !notice.is_expired(now_ms));
        before - self.items.len()
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
