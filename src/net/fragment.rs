//! Header/footer fragment loading.
//!
//! Client-side (hydrate): fetched with `gloo-net` and injected with
//! `innerHTML`. The markup is same-origin and trusted, so it is inserted
//! verbatim.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses and transport failures are logged and leave the
//! placeholder untouched. There is no retry and no fallback content. The
//! dependent navigation step only runs when both fragments loaded.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

use std::future::Future;

use crate::error::PortfolioError;
use crate::state::nav::BasePath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fragment {
    Header,
    Footer,
}

impl Fragment {
    pub const ALL: [Self; 2] = [Self::Header, Self::Footer];

    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Footer => "footer",
        }
    }

    /// Element whose content is replaced by the fragment.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Header => "#header-placeholder",
            Self::Footer => "#footer-placeholder",
        }
    }

    pub fn url(self, base: BasePath) -> String {
        format!("{}components/{}.html", base.prefix(), self.name())
    }
}

/// Where fragment markup comes from.
pub trait FragmentSource {
    /// Fetch the markup for `fragment` from `url`.
    fn fetch(&self, fragment: Fragment, url: &str) -> impl Future<Output = Result<String, PortfolioError>>;
}

/// Where fragment markup goes.
pub trait FragmentSink {
    /// Replace the placeholder content for `fragment` with `html`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::MissingPlaceholder`] when the target element is absent.
    fn inject(&self, fragment: Fragment, html: &str) -> Result<(), PortfolioError>;
}

/// Outcome of the load phase.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub header: Result<(), PortfolioError>,
    pub footer: Result<(), PortfolioError>,
}

impl LoadReport {
    /// Both fragments fetched successfully.
    pub fn is_complete(&self) -> bool {
        self.header.is_ok() && self.footer.is_ok()
    }

    pub fn failures(&self) -> Vec<&PortfolioError> {
        [&self.header, &self.footer]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
            .collect()
    }
}

/// Fetch and inject one fragment.
///
/// A missing placeholder is only a warning: the fetch itself succeeded.
///
/// # Errors
///
/// Returns the fetch error after logging it.
pub async fn load_fragment<S, K>(source: &S, sink: &K, base: BasePath, fragment: Fragment) -> Result<(), PortfolioError>
where
    S: FragmentSource,
    K: FragmentSink,
{
    let url = fragment.url(base);
    let html = match source.fetch(fragment, &url).await {
        Ok(html) => html,
        Err(e) => {
            log::error!("{e}");
            return Err(e);
        }
    };
    match sink.inject(fragment, &html) {
        Ok(()) => log::debug!("loaded {} from {url}", fragment.name()),
        Err(e) => log::warn!("{e}"),
    }
    Ok(())
}

/// Load header and footer concurrently.
pub async fn load_all<S, K>(source: &S, sink: &K, base: BasePath) -> LoadReport
where
    S: FragmentSource,
    K: FragmentSink,
{
    let (header, footer) = futures::join!(
        load_fragment(source, sink, base, Fragment::Header),
        load_fragment(source, sink, base, Fragment::Footer),
    );
    LoadReport { header, footer }
}

/// Load phase followed by the dependent step.
///
/// `on_loaded` runs exactly once when both fragments loaded and not at all
/// otherwise.
pub async fn load_then<S, K, F>(source: &S, sink: &K, base: BasePath, on_loaded: F) -> LoadReport
where
    S: FragmentSource,
    K: FragmentSink,
    F: FnOnce(),
{
    let report = load_all(source, sink, base).await;
    if report.is_complete() {
        on_loaded();
    } else {
        log::error!("error loading components: {} fragment(s) failed", report.failures().len());
    }
    report
}

/// `gloo-net` backed source for same-origin fragments.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSource;

#[cfg(feature = "hydrate")]
impl FragmentSource for HttpSource {
    async fn fetch(&self, fragment: Fragment, url: &str) -> Result<String, PortfolioError> {
        let transport = |e: gloo_net::Error| PortfolioError::FragmentTransport {
            fragment: fragment.name().to_owned(),
            reason: e.to_string(),
        };
        let resp = gloo_net::http::Request::get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(PortfolioError::FragmentStatus {
                fragment: fragment.name().to_owned(),
                status,
                status_text: resp.status_text(),
            });
        }
        resp.text().await.map_err(transport)
    }
}

/// Writes fragments into the live document's placeholders.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSink;

#[cfg(feature = "hydrate")]
impl FragmentSink for DocumentSink {
    fn inject(&self, fragment: Fragment, html: &str) -> Result<(), PortfolioError> {
        let target = crate::util::selector::query(fragment.placeholder()).ok_or_else(|| {
            PortfolioError::MissingPlaceholder {
                selector: fragment.placeholder().to_owned(),
            }
        })?;
        target.set_inner_html(html);
        Ok(())
    }
}
