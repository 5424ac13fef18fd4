//! Page Module
//!
//! A page is the server-rendered HTML document the utilities operate on.
//! `PageMeta` is the one capability the request helper needs from it, so the
//! same helper works against a parsed document on native targets and against
//! the live `web_sys::Document` in the browser.

use scraper::{ElementRef, Html, Selector};

use crate::shared::error::ClientError;

/// Read access to `<meta name=... content=...>` values of a page
pub trait PageMeta {
    /// Content attribute of the first `<meta>` whose `name` matches.
    ///
    /// `None` when no such element exists or it has no `content` attribute.
    fn meta_content(&self, name: &str) -> Option<String>;
}

/// A server-rendered HTML document parsed with `scraper`
#[derive(Debug, Clone)]
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    /// Parse a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ClientError> {
        let selector = parse_selector(selector)?;
        Ok(self.document.select(&selector).collect())
    }
}

impl PageMeta for HtmlPage {
    fn meta_content(&self, name: &str) -> Option<String> {
        let selector = Selector::parse("meta").ok()?;
        self.document
            .select(&selector)
            .find(|meta| meta.value().attr("name") == Some(name))
            .and_then(|meta| meta.value().attr("content"))
            .map(str::to_string)
    }
}

impl<P: PageMeta + ?Sized> PageMeta for &P {
    fn meta_content(&self, name: &str) -> Option<String> {
        (**self).meta_content(name)
    }
}

/// Parse a CSS selector, mapping the borrowed parse error into `ClientError`
pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ClientError> {
    Selector::parse(selector)
        .map_err(|e| ClientError::invalid_selector(selector, e.to_string()))
}

/// Text content of an element, concatenated the way the DOM's `textContent` is
pub(crate) fn text_content(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
