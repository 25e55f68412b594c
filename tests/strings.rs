use anyvalue::matchers::{any_date_string, any_datetime_string, any_http_uri, any_time_string};
use anyvalue::{Matcher, Value};
use test_case::test_case;

#[test_case("2024-01-01T10:00:00Z" => true ; "rfc 3339")]
#[test_case("Mon, 1 Jan 2024 10:00:00 +0000" => true ; "rfc 2822")]
#[test_case("2024-01-01 10:00:00 +0100" => true ; "ruby time to_s")]
#[test_case("2024-01-01 10:00:00 UTC" => true ; "utc suffix")]
#[test_case("2024-01-01 10:00" => true ; "naive date time")]
#[test_case("2024-01-01" => true ; "date only")]
#[test_case("10:30:15" => true ; "time of day")]
#[test_case("  10:30  " => true ; "surrounding whitespace")]
#[test_case("25:00" => false ; "out of range hour")]
#[test_case("" => false ; "empty")]
#[test_case("soon" => false ; "words")]
fn time_strings(input: &str) -> bool {
    any_time_string().equals(&input.into()).unwrap()
}

#[test_case("2024-02-29" => true ; "leap day")]
#[test_case("2024/02/29" => true ; "slashes")]
#[test_case("29 Feb 2024" => true ; "day month year")]
#[test_case("February 29, 2024" => true ; "long month")]
#[test_case("2024-01-01T10:00:00Z" => true ; "date time")]
#[test_case("2023-02-29" => false ; "invalid leap day")]
#[test_case("10:30" => false ; "time of day")]
fn date_strings(input: &str) -> bool {
    any_date_string().equals(&input.into()).unwrap()
}

#[test_case("2024-01-01T10:00:00.123+02:00" => true ; "fractional seconds")]
#[test_case("2024-01-01" => true ; "date only")]
#[test_case("10:30" => true ; "time of day")]
#[test_case("2024-13-01T10:00:00Z" => false ; "month out of range")]
fn date_time_strings(input: &str) -> bool {
    any_datetime_string().equals(&input.into()).unwrap()
}

#[test_case("http://example.com" => true ; "http")]
#[test_case("https://example.com:8443/a/b?c=d#e" => true ; "https with everything")]
#[test_case("HTTP://EXAMPLE.COM" => true ; "uppercase scheme")]
#[test_case("ftp://x" => false ; "wrong scheme")]
#[test_case("mailto:someone@example.com" => false ; "mailto")]
#[test_case("not a uri" => false ; "not a uri")]
#[test_case("/relative/path" => false ; "relative")]
#[test_case("http://" => false ; "missing host")]
fn http_uris(input: &str) -> bool {
    any_http_uri().equals(&input.into()).unwrap()
}

#[test]
fn non_strings_are_never_parsed() {
    let candidates = [Value::from(20240101), Value::Nil, Value::from(vec!["2024-01-01"])];

    for candidate in &candidates {
        assert_eq!(any_time_string().equals(candidate), Ok(false));
        assert_eq!(any_date_string().equals(candidate), Ok(false));
        assert_eq!(any_datetime_string().equals(candidate), Ok(false));
        assert_eq!(any_http_uri().equals(candidate), Ok(false));
    }
}
