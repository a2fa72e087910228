//! Page-wide capture of uncaught script errors and promise rejections.
//!
//! Reports are only logged. [`report`] is the single place a telemetry sink
//! would attach.

#[cfg(test)]
#[path = "error_hook_test.rs"]
mod error_hook_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// `window` `error` event.
    Script,
    /// `window` `unhandledrejection` event.
    UnhandledRejection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorReport {
    pub fn script(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Script,
            message: message.into(),
        }
    }

    pub fn rejection(reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::UnhandledRejection,
            message: reason.into(),
        }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = if self.message.is_empty() {
            "<no details>"
        } else {
            self.message.as_str()
        };
        match self.kind {
            ErrorKind::Script => write!(f, "portfolio script error: {message}"),
            ErrorKind::UnhandledRejection => write!(f, "unhandled promise rejection: {message}"),
        }
    }
}

/// Record an uncaught error. No recovery, no user-facing notice.
pub fn report(report: &ErrorReport) {
    log::error!("{report}");
}

/// Attach the `error` and `unhandledrejection` listeners to `window`.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::error::PortfolioError;

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|event: web_sys::ErrorEvent| {
            let error = event.error();
            let message = if error.is_undefined() || error.is_null() {
                event.message()
            } else {
                PortfolioError::describe_js(&error)
            };
            report(&ErrorReport::script(message));
        });
        if let Err(e) = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref()) {
            log::warn!("could not install error listener: {}", PortfolioError::describe_js(&e));
        }
        on_error.forget();

        let on_rejection =
            Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(|event: web_sys::PromiseRejectionEvent| {
                report(&ErrorReport::rejection(PortfolioError::describe_js(&event.reason())));
            });
        if let Err(e) =
            window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
        {
            log::warn!("could not install rejection listener: {}", PortfolioError::describe_js(&e));
        }
        on_rejection.forget();
    }
}
