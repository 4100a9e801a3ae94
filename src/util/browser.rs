//! Thin wrappers over the browser APIs the clinic page touches.
//!
//! Every function is a no-op or a deterministic fallback without the `csr`
//! feature, so state and dispatch logic that calls them stays testable on
//! the host.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        #[allow(clippy::cast_precision_loss)]
        let ms = chrono::Utc::now().timestamp_millis() as f64;
        ms
    }
}

/// Show a blocking `confirm()` dialog. Returns `false` when the user
/// declines or no browser is present.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Lock or restore page scrolling behind a modal.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let overflow = if locked { "hidden" } else { "auto" };
            let _ = body.style().set_property("overflow", overflow);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// `content` attribute of `<meta name="{name}">`, if present.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
        None
    }
}

/// The viewer's preferred locale tag (e.g. `en-US`).
pub fn locale() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.navigator().language()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
