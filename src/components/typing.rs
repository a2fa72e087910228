//! Hero subtitle typing effect.
//!
//! The subtitle's static text is swapped for a live `#typing-text` span and
//! a blinking `.cursor` span, then retyped one character per tick. The
//! sequence cannot be cancelled; if the subtitle is detached mid-way the
//! remaining writes land on the detached node.

use std::rc::Rc;

use crate::app::AppContext;

pub const SUBTITLE: &str = ".hero-subtitle";
pub const TYPING_TEXT_ID: &str = "typing-text";
pub const CURSOR_CLASS: &str = "cursor";
pub const CURSOR_GLYPH: &str = "|";

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn setup(ctx: &Rc<AppContext>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::error::PortfolioError;
        use crate::state::typing::{TypingCursor, step_delay};
        use crate::util::selector::{document, query};

        let (Some(subtitle), Some(doc)) = (query(SUBTITLE), document()) else {
            log::debug!("typing effect skipped: no {SUBTITLE}");
            return;
        };
        let original = subtitle.text_content().unwrap_or_default();

        let build = || -> Result<(web_sys::Element, web_sys::Element), wasm_bindgen::JsValue> {
            let text = doc.create_element("span")?;
            text.set_id(TYPING_TEXT_ID);
            text.set_attribute("aria-live", "polite")?;
            let cursor = doc.create_element("span")?;
            cursor.set_class_name(CURSOR_CLASS);
            cursor.set_text_content(Some(CURSOR_GLYPH));
            cursor.set_attribute("aria-hidden", "true")?;
            Ok((text, cursor))
        };
        let (text, cursor) = match build() {
            Ok(parts) => parts,
            Err(e) => {
                log::warn!("typing effect skipped: {}", PortfolioError::describe_js(&e));
                return;
            }
        };

        subtitle.set_text_content(None);
        if let Err(e) = subtitle.append_with_node_2(&text, &cursor) {
            log::warn!("typing effect skipped: {}", PortfolioError::describe_js(&e));
            return;
        }

        let config = ctx.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mut typing = TypingCursor::new(&original);
            typing.start();
            let mut step = 0;
            loop {
                gloo_timers::future::sleep(step_delay(&config, step)).await;
                let Some(ch) = typing.advance() else {
                    break;
                };
                let mut shown = text.text_content().unwrap_or_default();
                shown.push(ch);
                text.set_text_content(Some(&shown));
                step += 1;
            }
            log::debug!("typing finished after {step} character(s)");
        });
    }
}
