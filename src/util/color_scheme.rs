//! Color scheme preference and toggle.
//!
//! The preference persists in `localStorage` next to the session keys and
//! is applied as a `.dark` class on the `<html>` element. Falls back to the
//! system `prefers-color-scheme` when nothing is stored. Requires a browser
//! environment; host-side reads report light mode.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use crate::util::storage;

/// `localStorage` key for the color scheme preference.
pub const SCHEME_STORAGE_KEY: &str = "colorScheme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Read the preferred scheme: the stored choice when present, otherwise the
/// system preference.
pub fn prefers_dark() -> bool {
    if let Some(stored) = storage::read(SCHEME_STORAGE_KEY) {
        return stored == DARK;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if dark {
                let _ = class_list.add_1(DARK);
            } else {
                let _ = class_list.remove_1(DARK);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the scheme, apply it, and persist the choice. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write(SCHEME_STORAGE_KEY, if next { DARK } else { LIGHT });
    next
}
