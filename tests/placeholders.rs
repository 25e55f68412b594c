use anyvalue::matchers::{
    any_date, any_integer, any_number, any_string, any_time, anything, array_of, even_number,
    odd_number, one_of, sorted_array, string_matching, string_of_length, upcase_string,
};
use anyvalue::{array, assert_that, map, matcher, refute_that, Placeholder, Scope, Value};
use chrono::{Duration, NaiveDate, Utc};
use regex::Regex;
use uuid::Uuid;

#[test]
fn placeholders_in_rows_of_generated_values() {
    let now = Utc::now();
    let people = array![
        array![Uuid::new_v4().to_string(), now, "Alice"],
        array![Uuid::new_v4().to_string(), now + Duration::seconds(10), "Bob"],
    ];

    let scope = Scope::new();
    let uuid = scope.any_unique() ^ string_of_length(36);

    assert_that!(
        people,
        array![
            array![&uuid, any_time(), "Alice"],
            array![&uuid, any_time(), "Bob"],
        ]
    );
}

#[test]
fn repeated_generated_value_is_rejected() {
    let id = Uuid::new_v4().to_string();
    let rows = array![array![&id, "Alice"], array![&id, "Bob"]];

    let uuid = Scope::new().any_unique() ^ string_of_length(36);

    refute_that!(rows, array![array![&uuid, "Alice"], array![&uuid, "Bob"]]);
}

#[cfg(feature = "json")]
#[test]
fn placeholders_in_json_documents() {
    let response = serde_json::json!({
        "id": 1234,
        "name": "Item 1",
        "created_at": "2024-05-01T12:00:00Z",
        "tags": ["a", "b"],
    });

    assert_that!(
        response,
        map! {
            "id" => any_integer(),
            "name" => "Item 1",
            "created_at" => anyvalue::matchers::any_datetime_string(),
            "tags" => array_of(any_string()).unwrap(),
        }
    );
}

#[test]
fn anything_accepts_every_value() {
    assert_that!(42, anything());
    assert_that!(anything(), anything());
    assert_that!(Value::Nil, anything());

    // `nil` never stands in for a placeholder.
    refute_that!(anything(), Value::Nil);
}

#[test]
fn any_integer_accepts_only_integers() {
    assert_that!(42, any_integer());

    refute_that!("foo", any_integer());
    refute_that!(1.0, any_integer());
    refute_that!(any_integer(), "foo");
}

#[test]
fn any_number_accepts_integers_and_floats() {
    assert_that!(42, any_number());
    assert_that!(42.0, any_number());

    refute_that!(any_number(), "foo");
}

#[test]
fn any_string_accepts_strings() {
    assert_that!("foo", any_string());

    refute_that!(42, any_string());
}

#[test]
fn one_of_accepts_listed_values() {
    let animals = Placeholder::from(anyvalue::one_of!("dog", "cat"));

    assert_that!("dog", &animals);
    refute_that!("chair", &animals);

    let nothing = Placeholder::from(one_of(Vec::new()));

    refute_that!("dog", &nothing);
}

#[test]
fn string_of_length_checks_length() {
    assert_that!("foo", string_of_length(3));

    refute_that!("foo", string_of_length(5));
}

#[test]
fn string_matching_searches_the_pattern() {
    let x = Placeholder::from(string_matching(Regex::new("foo").unwrap()));

    assert_that!("foo", &x);
    assert_that!("foo foo", &x);

    refute_that!("bar", &x);
}

#[test]
fn upcase_string_rejects_lowercase_letters() {
    assert_that!("FOO", upcase_string());

    refute_that!("Foo", upcase_string());
}

#[test]
fn composition() {
    let three_letter_upcase = string_of_length(3) ^ upcase_string();

    assert_that!("FOO", &three_letter_upcase);
    refute_that!("FOOFOO", &three_letter_upcase);
    refute_that!("foo", &three_letter_upcase);
}

#[matcher(expected = ("{} a string starting with N", switch("is", "is not")))]
fn starting_with_n(value: &Value) -> bool {
    value
        .as_str()
        .map_or(false, |s| s.starts_with('n') || s.starts_with('N'))
}

#[test]
fn composition_of_composition() {
    let acronym = string_of_length(3) ^ upcase_string() ^ starting_with_n();

    assert_that!("NBA", &acronym);
    assert_that!("NSA", &acronym);
    refute_that!("FBI", &acronym);
    refute_that!("NASA", &acronym);
    refute_that!("nba", &acronym);
}

#[test]
fn sorted_array_checks_ascending_order() {
    assert_that!(vec![1, 2, 3], sorted_array());

    refute_that!(vec![3, 2, 1], sorted_array());
}

#[test]
fn sorted_array_stands_in_for_an_array() {
    assert_eq!(
        Value::from(vec![1, 2, 3]).matches(&sorted_array().into()),
        Ok(true)
    );
    assert_eq!(
        Value::from(vec![3, 2, 1]).matches(&sorted_array().into()),
        Ok(false)
    );
}

#[test]
fn array_of_checks_every_element() {
    assert_that!(vec![1, 2, 3], array_of(any_integer()).unwrap());
    assert_that!(Vec::<i64>::new(), array_of(any_integer()).unwrap());

    refute_that!(array![1, "a", 3], array_of(any_integer()).unwrap());
    refute_that!("123", array_of(any_integer()).unwrap());
}

#[test]
fn array_of_requires_a_placeholder() {
    let error = array_of("integer").err().unwrap();

    assert_eq!(error.to_string(), r#"invalid argument: "integer""#);
}

#[test]
fn even_and_odd_numbers() {
    assert_that!(2, even_number());
    refute_that!(1, even_number());

    assert_that!(1, odd_number());
    refute_that!(2, odd_number());
}

#[test]
fn any_unique_accepts_distinct_values() {
    let scope = Scope::new();

    assert_that!(1, scope.any_unique());
    assert_that!(2, scope.any_unique());
}

#[test]
fn any_unique_rejects_repeated_values() {
    let scope = Scope::new();

    assert_that!(1, scope.any_unique());
    refute_that!(1, scope.any_unique());
}

#[test]
fn any_unique_composition() {
    let unique_string = Scope::new().any_unique() ^ any_string();

    assert_that!("a", &unique_string);
    assert_that!("b", &unique_string);
    assert_that!("c", &unique_string);
    refute_that!("c", &unique_string);
    refute_that!(42, &unique_string);
}

#[test]
fn increasing_values() {
    let scope = Scope::new();

    assert_that!(1, scope.increasing());
    assert_that!(2, scope.increasing());
    assert_that!(3, scope.increasing());
    refute_that!(1, scope.increasing());
    assert_that!(2, scope.increasing());
    assert_that!(3, scope.increasing());
}

#[test]
#[should_panic(expected = "could not be evaluated: comparison of string \"a\" with integer 1 failed")]
fn increasing_incomparable_values_are_a_setup_error() {
    let scope = Scope::new();

    assert_that!(1, scope.increasing());
    assert_that!("a", scope.increasing());
}

#[test]
fn any_time_accepts_times() {
    assert_that!(Utc::now(), any_time());
    refute_that!(42, any_time());
}

#[test]
fn any_date_accepts_dates() {
    assert_that!(NaiveDate::from_ymd_opt(2000, 1, 1), any_date());
    refute_that!(42, any_date());
}

#[test]
#[should_panic(expected = "expected: [<is an integer>, \"b\"]")]
fn failed_assertion_describes_the_expectation() {
    assert_that!(array!["a", "b"], array![any_integer(), "b"]);
}

#[test]
#[should_panic(expected = "expected: <is not a string of length 3>")]
fn failed_refutation_describes_the_negated_expectation() {
    refute_that!("foo", string_of_length(3));
}
