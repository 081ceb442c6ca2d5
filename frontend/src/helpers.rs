//! Small display utilities shared across screens.
//!
//! - **User feedback**: temporary toast notifications injected into the DOM,
//!   used to confirm actions (save, delete, refund) or report failures.
//! - **Formatting**: currency amounts with digit grouping and ISO dates in
//!   day/month/year order.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to the body and removes it again after
/// a few seconds. Content is set as text, never as markup, so backend error
/// strings can be passed through unescaped.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.85)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "inherit").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Formats an amount as New Zealand dollars, e.g. `1234.5` -> `"$1,234.50"`.
pub fn format_nzd(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    format!("{sign}${dollars}.{:02}", cents % 100)
}

/// Renders the date part of an ISO-8601 timestamp as `DD/MM/YYYY`. Anything
/// that does not start with a `YYYY-MM-DD` prefix is passed through.
pub fn format_date(iso: &str) -> String {
    let date = iso.get(..10).unwrap_or(iso);
    let parts: Vec<&str> = date.splitn(3, '-').collect();
    match parts.as_slice() {
        [year, month, day] if year.len() == 4 && month.len() == 2 && day.len() == 2 => {
            format!("{day}/{month}/{year}")
        }
        _ => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_grouping() {
        assert_eq!(format_nzd(0.0), "$0.00");
        assert_eq!(format_nzd(5.0), "$5.00");
        assert_eq!(format_nzd(1234.5), "$1,234.50");
        assert_eq!(format_nzd(28.75), "$28.75");
        assert_eq!(format_nzd(-12.3), "-$12.30");
    }

    #[test]
    fn formats_iso_timestamps_as_dd_mm_yyyy() {
        assert_eq!(format_date("2026-08-01T10:15:00Z"), "01/08/2026");
        assert_eq!(format_date("2026-08-01"), "01/08/2026");
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date(""), "");
    }
}
