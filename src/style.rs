// CSS value formatting for the DOM surface. Kept free of `web_sys` so it can
// be tested on the host.

use crate::constants::STAR_CLASS;
use starwave_core::StarSize;

#[inline]
pub fn percent(v: f64) -> String {
    format!("{v}%")
}

#[inline]
pub fn px(v: f64) -> String {
    format!("{v}px")
}

#[inline]
pub fn seconds(v: f64) -> String {
    format!("{v}s")
}

/// Full class attribute for a star element.
pub fn star_class_name(size: StarSize) -> String {
    match size.class_name() {
        Some(modifier) => format!("{STAR_CLASS} {modifier}"),
        None => STAR_CLASS.to_string(),
    }
}
