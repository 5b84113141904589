//! CSRF Credentials
//!
//! Mutating requests carry the backend's anti-forgery token. Where the token
//! comes from is decided by the injected provider.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

/// Header the backend checks
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Cookie the backend sets
pub const CSRF_COOKIE: &str = "csrftoken";

/// Source of the anti-forgery token
pub trait CsrfTokenProvider {
    fn csrf_token(&self) -> Option<String>;
}

/// Reads the token from `document.cookie` on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieCsrfProvider;

impl CsrfTokenProvider for CookieCsrfProvider {
    fn csrf_token(&self) -> Option<String> {
        let cookies = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?
            .cookie()
            .ok()?;
        cookie_value(&cookies, CSRF_COOKIE)
    }
}

/// Fixed token
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticCsrfToken(pub Option<String>);

#[cfg(test)]
impl CsrfTokenProvider for StaticCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Percent-decoded value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_cookie_among_others() {
        let cookies = "sessionid=abc; csrftoken=T0k3n; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("T0k3n"));
    }

    #[test]
    fn test_name_must_match_exactly() {
        let cookies = "xcsrftoken=wrong; csrftokenx=also-wrong";
        assert_eq!(cookie_value(cookies, "csrftoken"), None);
    }

    #[test]
    fn test_value_is_percent_decoded() {
        let cookies = "csrftoken=a%2Bb%3Dc";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("a+b=c"));
    }

    #[test]
    fn test_missing_cookie() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("sessionid=abc", "csrftoken"), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(cookie_value("csrftoken=first; csrftoken=second", "csrftoken").as_deref(), Some("first"));
    }
}
