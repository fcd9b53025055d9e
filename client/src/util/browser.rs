//! Thin wrappers over browser APIs used by the catalog page.
//!
//! Every helper is a safe no-op (or a conservative default) outside the
//! `hydrate` build so SSR and native tests stay deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Read the `content` attribute of `<meta name="{name}">`.
pub fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Show a blocking confirmation dialog. Returns `false` when no browser is
/// present or the dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Extract the element id from an in-page anchor `href` such as `#products`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll the element with the given id to the top of the viewport.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        {
            scroll_into_view(&el);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll an element to the top of the viewport.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(el: &web_sys::Element) {
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
