//! Cookie Management Infrastructure
//!
//! Parsing of inbound `Cookie` headers into a [`CookieJar`] and construction
//! of outbound `Set-Cookie` values.

use axum::http::{HeaderMap, HeaderValue, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }

    /// Build a [`SetCookie`] carrying both the raw pair and the header line
    pub fn set_cookie(&self, value: &str) -> SetCookie {
        SetCookie {
            name: self.name.clone(),
            value: value.to_string(),
            header: self.build_set_cookie(value),
        }
    }
}

/// A cookie to be written back to the client
///
/// `name`/`value` let the pair be applied to an in-flight request;
/// `header` is the complete `Set-Cookie` line for the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub header: String,
}

impl SetCookie {
    pub fn header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.header).ok()
    }
}

/// Ordered set of request cookies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    pairs: Vec<(String, String)>,
}

impl CookieJar {
    /// Parse every `Cookie` header of a request
    ///
    /// Malformed fragments (no `=`) are skipped. For duplicated names the
    /// first occurrence wins on lookup.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let pairs = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|raw| raw.split(';'))
            .filter_map(|cookie| {
                let (key, value) = cookie.trim().split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.trim().to_string()))
            })
            .collect();

        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Insert or replace a cookie
    pub fn set(&mut self, name: &str, value: &str) {
        self.pairs.retain(|(key, _)| key != name);
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a single `Cookie` request header value
    pub fn to_header_value(&self) -> Option<HeaderValue> {
        if self.pairs.is_empty() {
            return None;
        }
        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("; ");
        HeaderValue::from_str(&joined).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            name: "sb-access-token".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: Some(3600),
        };

        let cookie = config.build_set_cookie("value123");
        assert!(cookie.starts_with("sb-access-token=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_set_cookie_keeps_pair_and_header() {
        let config = CookieConfig {
            secure: false,
            ..CookieConfig::default()
        };
        let set = config.set_cookie("abc");
        assert_eq!(set.name, "session");
        assert_eq!(set.value, "abc");
        assert!(!set.header.contains("Secure"));
        assert!(set.header_value().is_some());
    }

    #[test]
    fn test_jar_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; sb-access-token=abc123; other=xyz"),
        );

        let jar = CookieJar::from_headers(&headers);
        assert_eq!(jar.get("sb-access-token"), Some("abc123"));
        assert_eq!(jar.get("foo"), Some("bar"));
        assert_eq!(jar.get("missing"), None);
    }

    #[test]
    fn test_jar_reads_multiple_headers_and_skips_garbage() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1; junk; =2"));
        headers.append(header::COOKIE, HeaderValue::from_static("b=2"));

        let jar = CookieJar::from_headers(&headers);
        assert_eq!(jar.get("a"), Some("1"));
        assert_eq!(jar.get("b"), Some("2"));
        assert_eq!(jar.get("junk"), None);
    }

    #[test]
    fn test_jar_set_replaces_and_renders() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("a=1; token=old"));

        let mut jar = CookieJar::from_headers(&headers);
        jar.set("token", "new");

        assert_eq!(jar.get("token"), Some("new"));
        assert_eq!(
            jar.to_header_value().unwrap(),
            HeaderValue::from_static("a=1; token=new")
        );
    }

    #[test]
    fn test_empty_jar_renders_nothing() {
        let jar = CookieJar::from_headers(&HeaderMap::new());
        assert!(jar.is_empty());
        assert!(jar.to_header_value().is_none());
    }
}
