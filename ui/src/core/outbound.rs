//! Outbound chat links.
//!
//! Buy and contact buttons do not open anything themselves: they build an
//! [`OutboundIntent`] and hand it to [`launch`], which runs whatever
//! launcher the platform shell registered at startup. Opening is
//! fire-and-forget; a failure is logged and returned so the view can show
//! a notice, nothing is retried.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use tracing::{debug, warn};

use super::format::format_price;
use crate::content::Tier;

pub const CHAT_URL: &str = "https://t.me/voidgriefinfo";
pub const CHAT_HANDLE: &str = "@voidgriefinfo";

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OutboundError {
    #[error("popup blocked while opening {url}")]
    Blocked { url: String },

    #[error("cannot open links here: {reason}")]
    Unavailable { reason: String },
}

/// An external navigation the page wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundIntent {
    pub target: String,
    /// Pre-filled chat message, sent as the `text` query parameter.
    pub payload: Option<String>,
}

impl OutboundIntent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn url(&self) -> String {
        match &self.payload {
            Some(text) => format!(
                "{}?text={}",
                self.target,
                utf8_percent_encode(text, URI_COMPONENT)
            ),
            None => self.target.clone(),
        }
    }
}

pub fn purchase_message(tier: &Tier) -> String {
    format!(
        "Привет! Хочу купить привилегию {} за {}",
        tier.name,
        format_price(tier.price)
    )
}

pub fn purchase_intent(tier: &Tier) -> OutboundIntent {
    OutboundIntent::new(CHAT_URL).with_payload(purchase_message(tier))
}

pub fn contact_intent() -> OutboundIntent {
    OutboundIntent::new(CHAT_URL)
}

/// Executes an intent in a new browsing context.
pub type Launcher = fn(&OutboundIntent) -> Result<(), OutboundError>;

static LAUNCHER: OnceCell<Launcher> = OnceCell::new();

/// Install the shell's launcher. Only the first registration wins.
pub fn register_launcher(launcher: Launcher) {
    let _ = LAUNCHER.set(launcher);
}

/// Run `intent` through the registered launcher (or [`open_in_new_tab`]).
pub fn launch(intent: &OutboundIntent) -> Result<(), OutboundError> {
    let launcher = LAUNCHER.get().copied().unwrap_or(open_in_new_tab);
    debug!(target_url = %intent.target, has_payload = intent.payload.is_some(), "launching outbound intent");
    launcher(intent).inspect_err(|err| warn!(error = %err, "outbound link not opened"))
}

/// `window.open(url, "_blank")` in the browser; a `None` window means the
/// popup was blocked.
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(intent: &OutboundIntent) -> Result<(), OutboundError> {
    let url = intent.url();
    let window = web_sys::window().ok_or_else(|| OutboundError::Unavailable {
        reason: "window unavailable".into(),
    })?;
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(OutboundError::Blocked { url }),
        Err(err) => Err(OutboundError::Unavailable {
            reason: format!("{err:?}"),
        }),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(intent: &OutboundIntent) -> Result<(), OutboundError> {
    open_via_eval(intent)
}

/// Ask the hosting webview to run `window.open`. The result is not awaited.
pub fn open_via_eval(intent: &OutboundIntent) -> Result<(), OutboundError> {
    let script = window_open_script(&intent.url())?;
    let _ = document::eval(&script);
    Ok(())
}

fn window_open_script(url: &str) -> Result<String, OutboundError> {
    let literal = serde_json::to_string(url).map_err(|err| OutboundError::Unavailable {
        reason: err.to_string(),
    })?;
    Ok(format!("window.open({literal}, \"_blank\");"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::donate::find_tier;

    #[test]
    fn purchase_message_embeds_name_and_price() {
        let god = find_tier("GOD").unwrap();
        let message = purchase_message(god);
        assert!(message.contains("GOD"));
        assert!(message.contains("4444"));
        assert_eq!(message, "Привет! Хочу купить привилегию GOD за 4444 ₽");
    }

    #[test]
    fn purchase_url_is_encoded_chat_link() {
        let god = find_tier("GOD").unwrap();
        let url = purchase_intent(god).url();
        assert!(url.starts_with("https://t.me/voidgriefinfo?text="));
        assert!(url.contains("GOD"));
        assert!(url.contains("4444"));
        assert!(url.contains("%20"));
        assert!(!url.contains(' '));
        assert!(url.ends_with("4444%20%E2%82%BD"));
    }

    #[test]
    fn encoding_matches_uri_component_rules() {
        let intent = OutboundIntent::new("https://t.me/x").with_payload("a-b_c.d!e~f*g'h(i)j &=?/#Привет");
        assert_eq!(
            intent.url(),
            "https://t.me/x?text=a-b_c.d!e~f*g'h(i)j%20%26%3D%3F%2F%23%D0%9F%D1%80%D0%B8%D0%B2%D0%B5%D1%82"
        );
    }

    #[test]
    fn contact_intent_is_bare_link() {
        let intent = contact_intent();
        assert_eq!(intent.payload, None);
        assert_eq!(intent.url(), CHAT_URL);
    }

    #[test]
    fn eval_script_quotes_url() {
        let script = window_open_script("https://t.me/x?text=\"hi\"").unwrap();
        assert_eq!(
            script,
            r#"window.open("https://t.me/x?text=\"hi\"", "_blank");"#
        );
    }
}
