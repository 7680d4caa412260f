//! Dark mode class toggling.
//!
//! Applies or removes the `.dark` class on the `<html>` element so CSS can
//! theme the whole document. The preference is deliberately not persisted;
//! each session starts in light mode.

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, sync the document class, and return the new value.
#[must_use]
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
