//! Price extraction from fare result pages.
//!
//! The results page lists flights in containers carrying the
//! [`RESULT_CONTAINER`] class. Sponsored entries contain a [`SPONSORED`]
//! marker and are skipped. The price sits in the first element with the
//! [`PRICE_TEXT`] class inside the first regular container.

use scraper::{Html, Selector};

/// Class on each result item container.
pub const RESULT_CONTAINER: &str = "Fxw9-result-item-container";

/// Marker present inside sponsored result items.
pub const SPONSORED: &str = "JW4C";

/// Class on the element holding the displayed price.
pub const PRICE_TEXT: &str = "f8F1-price-text";

/// Extract the cheapest price from a results page.
///
/// The page is parsed as HTML. A result container is a `div` whose `class`
/// attribute contains [`RESULT_CONTAINER`]; it counts as sponsored when any
/// `div` below it has a class containing [`SPONSORED`]. The price is the
/// digits of the full text of the first [`PRICE_TEXT`] element inside the
/// first regular container.
///
/// Returns `None` when there is no regular result, when the first regular
/// result has no price element, or when its text holds no digits.
///
/// # Examples
///
/// ```
/// use flight_scout::fares::extract_cheapest_price;
///
/// let html = r#"<div class="Fxw9-result-item-container"><div class="f8F1-price-text">1.234 TL</div></div>"#;
/// assert_eq!(extract_cheapest_price(html), Some(1234));
/// assert_eq!(extract_cheapest_price("<html></html>"), None);
/// ```
pub fn extract_cheapest_price(html: &str) -> Option<u32> {
    let containers = selector(&format!(r#"div[class*="{RESULT_CONTAINER}"]"#))?;
    let sponsored = selector(&format!(r#"div[class*="{SPONSORED}"]"#))?;
    let price = selector(&format!(".{PRICE_TEXT}"))?;

    let document = Html::parse_document(html);
    let container = document
        .select(&containers)
        .find(|c| c.select(&sponsored).next().is_none())?;
    let element = container.select(&price).next()?;

    let digits: String = element
        .text()
        .flat_map(str::chars)
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(inner: &str) -> String {
        format!(r#"<div class="abc {RESULT_CONTAINER}">{inner}</div>"#)
    }

    fn price(text: &str) -> String {
        format!(r#"<div class="{PRICE_TEXT} x">{text}</div>"#)
    }

    #[test]
    fn extracts_digits_from_formatted_price() {
        let html = container(&price("2.499 TL"));
        assert_eq!(extract_cheapest_price(&html), Some(2499));
    }

    #[test]
    fn skips_sponsored_results() {
        let html = format!(
            "{}{}",
            container(&format!(r#"<div class="{SPONSORED}">Ad</div>{}"#, price("99 TL"))),
            container(&price("1.850 TL")),
        );
        assert_eq!(extract_cheapest_price(&html), Some(1850));
    }

    #[test]
    fn only_first_regular_result_counts() {
        // First regular container has no price; later ones are not consulted.
        let html = format!("{}{}", container("<span>sold out</span>"), container(&price("500")));
        assert_eq!(extract_cheapest_price(&html), None);
    }

    #[test]
    fn no_results_is_none() {
        assert_eq!(extract_cheapest_price("<html><body></body></html>"), None);
    }

    #[test]
    fn all_sponsored_is_none() {
        let html = container(&format!(r#"<div class="{SPONSORED}"></div>{}"#, price("10")));
        assert_eq!(extract_cheapest_price(&html), None);
    }

    #[test]
    fn price_without_digits_is_none() {
        let html = container(&price("Fiyat yok"));
        assert_eq!(extract_cheapest_price(&html), None);
    }

    #[test]
    fn price_overflowing_u32_is_none() {
        let html = container(&price("99999999999"));
        assert_eq!(extract_cheapest_price(&html), None);
    }

    #[test]
    fn truncated_price_element_is_none() {
        let html = format!(r#"<div class="{RESULT_CONTAINER}"><div class="{PRICE_TEXT}"#);
        assert_eq!(extract_cheapest_price(&html), None);
    }

    #[test]
    fn class_name_in_stylesheet_is_not_a_result() {
        let html = format!(
            "<html><head><style>.{RESULT_CONTAINER} {{ display: flex; }}</style>\
             <script>var c = \"{RESULT_CONTAINER}\";</script></head><body>{}</body></html>",
            container(&price("1.850 TL")),
        );
        assert_eq!(extract_cheapest_price(&html), Some(1850));
    }

    #[test]
    fn nested_price_markup_is_read_in_full() {
        let html = container(&price("<span>1.</span><span>850</span> <b>TL</b>"));
        assert_eq!(extract_cheapest_price(&html), Some(1850));
    }

    #[test]
    fn sponsored_marker_outside_container_is_ignored() {
        let html = format!(
            r#"{}<aside><div class="{SPONSORED}-banner">Ad</div></aside>{}"#,
            container(&price("1.850 TL")),
            container(&price("2.000 TL")),
        );
        assert_eq!(extract_cheapest_price(&html), Some(1850));
    }

    #[test]
    fn nested_sponsored_marker_skips_container() {
        let html = format!(
            "{}{}",
            container(&format!(
                r#"<div><div class="x {SPONSORED}-tag">Ad</div></div>{}"#,
                price("99 TL")
            )),
            container(&price("1.850 TL")),
        );
        assert_eq!(extract_cheapest_price(&html), Some(1850));
    }
}
