//! Platform detection helpers.

use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
            Self::Desktop
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Unknown => "unknown",
        }
    }
}

/// Reports whether the host prefers a dark color scheme.
pub type SchemeHint = fn() -> bool;

static SCHEME_HINT: OnceCell<SchemeHint> = OnceCell::new();

/// Install the shell's color-scheme query. Only the first registration wins.
pub fn register_scheme_hint(hint: SchemeHint) {
    let _ = SCHEME_HINT.set(hint);
}

/// Ambient color-scheme hint: the registered query if a shell installed
/// one, otherwise the built-in query for this target.
pub fn prefers_dark_scheme() -> bool {
    query_scheme(SCHEME_HINT.get().copied())
}

fn query_scheme(registered: Option<SchemeHint>) -> bool {
    registered.map_or_else(builtin_prefers_dark, |hint| hint())
}

#[cfg(target_arch = "wasm32")]
fn builtin_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Native shells have no built-in query; without a registered hint the
/// preference is unknown and resolves to light.
#[cfg(not(target_arch = "wasm32"))]
fn builtin_prefers_dark() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_build_is_not_web() {
        assert_ne!(Platform::current(), Platform::Web);
    }

    #[test]
    fn registered_hint_takes_precedence() {
        assert!(query_scheme(Some(|| true)));
        assert!(!query_scheme(Some(|| false)));
    }

    #[test]
    fn registered_hint_drives_prefers_dark_scheme() {
        register_scheme_hint(|| true);
        assert!(prefers_dark_scheme());
    }
}
