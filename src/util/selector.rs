//! Element lookup that never throws.
//!
//! `querySelector` raises a `SyntaxError` for malformed selectors. Every
//! lookup in this crate goes through [`safe_query`]/[`safe_query_all`], which
//! log the failure and hand back `None` or an empty list instead.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::error::PortfolioError;

/// Something that can resolve CSS selectors: a document or an element.
pub trait QueryRoot {
    type Element;

    /// Resolve the first match.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidSelector`] when the selector does not parse.
    fn try_query(&self, selector: &str) -> Result<Option<Self::Element>, PortfolioError>;

    /// Resolve every match in document order.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidSelector`] when the selector does not parse.
    fn try_query_all(&self, selector: &str) -> Result<Vec<Self::Element>, PortfolioError>;
}

/// First element matching `selector` under `root`, or `None` on any failure.
pub fn safe_query<R: QueryRoot + ?Sized>(root: &R, selector: &str) -> Option<R::Element> {
    match root.try_query(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// Every element matching `selector` under `root`, or empty on any failure.
pub fn safe_query_all<R: QueryRoot + ?Sized>(root: &R, selector: &str) -> Vec<R::Element> {
    match root.try_query_all(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("{e}");
            Vec::new()
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, NodeList};

    use super::QueryRoot;
    use crate::error::PortfolioError;

    fn invalid(selector: &str, err: &wasm_bindgen::JsValue) -> PortfolioError {
        PortfolioError::InvalidSelector {
            selector: selector.to_owned(),
            reason: PortfolioError::describe_js(err),
        }
    }

    fn collect(list: &NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .flat_map(JsCast::dyn_into::<Element>)
            .collect()
    }

    impl QueryRoot for Document {
        type Element = Element;

        fn try_query(&self, selector: &str) -> Result<Option<Element>, PortfolioError> {
            self.query_selector(selector).map_err(|e| invalid(selector, &e))
        }

        fn try_query_all(&self, selector: &str) -> Result<Vec<Element>, PortfolioError> {
            self.query_selector_all(selector)
                .map(|list| collect(&list))
                .map_err(|e| invalid(selector, &e))
        }
    }

    impl QueryRoot for Element {
        type Element = Element;

        fn try_query(&self, selector: &str) -> Result<Option<Element>, PortfolioError> {
            self.query_selector(selector).map_err(|e| invalid(selector, &e))
        }

        fn try_query_all(&self, selector: &str) -> Result<Vec<Element>, PortfolioError> {
            self.query_selector_all(selector)
                .map(|list| collect(&list))
                .map_err(|e| invalid(selector, &e))
        }
    }
}

/// The current window's document, if there is one.
#[cfg(feature = "hydrate")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// [`safe_query`] against the whole document.
#[cfg(feature = "hydrate")]
pub fn query(selector: &str) -> Option<web_sys::Element> {
    document().and_then(|doc| safe_query(&doc, selector))
}

/// [`safe_query_all`] against the whole document.
#[cfg(feature = "hydrate")]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    document().map_or_else(Vec::new, |doc| safe_query_all(&doc, selector))
}
