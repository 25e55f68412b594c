use url::Url;

use crate::{self as anyvalue, matcher, Value};

/// Returns a [`Matcher`](crate::Matcher) that accepts absolute `http` and
/// `https` URIs. Strings which are not URIs at all are rejected.
///
/// ### Example
/// ```
/// # use anyvalue::{assert_that, refute_that, matchers::any_http_uri};
/// assert_that!("http://example.com", any_http_uri());
/// assert_that!("https://example.com/a?b=c#d", any_http_uri());
///
/// refute_that!("not a uri", any_http_uri());
/// refute_that!("ftp://x", any_http_uri());
/// refute_that!(80, any_http_uri());
/// ```
#[matcher(expected = ("{} HTTP URI", switch("is an", "is not an")), name = AnyHttpUri)]
pub fn any_http_uri(value: &Value) -> bool {
    let s = match value.as_str() {
        Some(s) => s,
        None => return false,
    };

    match Url::parse(s) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(error) => {
            tracing::trace!(candidate = s, %error, "not a URI");

            false
        }
    }
}
