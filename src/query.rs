//! Structural query evaluation over a parsed HTML tree.
//!
//! Every extraction in this crate goes through these helpers, which
//! normalize a CSS query to one of two shapes: "single" (`Option`) or
//! "many" (`Vec`). A malformed selector is caught here, logged, and mapped
//! to the fallback value (`None` / empty vec) so that schema drift in the
//! source page degrades one field instead of aborting the whole extraction.

use scraper::{ElementRef, Selector};

/// Parse a CSS selector, degrading to `None` on failure.
///
/// The selectors used by the extractor are fixed strings, so a parse
/// failure indicates a bug or schema drift; it is logged and absorbed.
fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!(selector = css, error = %e, "Selector failed to parse");
            None
        }
    }
}

/// Find the first descendant element matching a selector.
///
/// # Arguments
/// * `scope` - Element to search under
/// * `css` - CSS selector
///
/// # Returns
/// First matching element, or `None` on zero matches or selector failure
///
/// # Examples
/// ```
/// use scraper::Html;
/// use patent_scraper::query::select_one;
///
/// let doc = Html::parse_document("<div><span itemprop='Code'>A01B</span></div>");
/// let root = doc.root_element();
///
/// assert!(select_one(root, "span[itemprop='Code']").is_some());
/// assert!(select_one(root, "span[itemprop='missing']").is_none());
/// ```
pub fn select_one<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    scope.select(&selector).next()
}

/// Find all descendant elements matching a selector, in document order.
///
/// # Arguments
/// * `scope` - Element to search under
/// * `css` - CSS selector
///
/// # Returns
/// Matching elements, or an empty vec on zero matches or selector failure
pub fn select_many<'a>(scope: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match parse_selector(css) {
        Some(selector) => scope.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// Get the first direct text node of an element, untrimmed.
///
/// This is the "text of the matched element" shape: text belonging to the
/// element itself, not text of nested elements.
pub fn own_text(element: ElementRef<'_>) -> Option<String> {
    element
        .children()
        .find_map(|child| child.value().as_text().map(|t| t.text.to_string()))
}

/// Select the first matching element and return its own text, untrimmed.
///
/// # Returns
/// `None` on zero matches, selector failure, or a match without text
pub fn text_one(scope: ElementRef<'_>, css: &str) -> Option<String> {
    select_one(scope, css).and_then(own_text)
}

/// Select the first matching element and return one of its attributes.
///
/// # Returns
/// `None` on zero matches, selector failure, or a missing attribute
pub fn attr_one(scope: ElementRef<'_>, css: &str, attr: &str) -> Option<String> {
    select_one(scope, css).and_then(|el| el.value().attr(attr).map(str::to_string))
}

/// Select all matching elements and return the given attribute of each.
///
/// Elements without the attribute are skipped.
pub fn attr_many(scope: ElementRef<'_>, css: &str, attr: &str) -> Vec<String> {
    select_many(scope, css)
        .into_iter()
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}
