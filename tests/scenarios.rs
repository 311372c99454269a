//! End-to-end walks over sequences, mappings, strings and records

mod common;

use std::sync::Arc;

use common::{index_keys, name_keys, Recorder};
use partial_foreach::{
    by_key_value, by_value, Args, Arity, ByValue, Declared, Defaults, Key, Overrides, Record,
};
use serde_json::{json, Value};

fn mixed_array() -> Value {
    json!([1, 2, 3, 4, 5, true, false, null, null, "string"])
}

#[test]
fn test_object_values_one_arg() {
    let defaults = Defaults::new();
    let object = json!({"a": "1", "b": "2", "c": "3", "d": "4"});

    let mut values = Vec::new();
    defaults.foreach(&object, by_value(|value: &Value| values.push(value.clone())), None);

    assert_eq!(values, vec![json!("1"), json!("2"), json!("3"), json!("4")]);
}

#[test]
fn test_object_rebuilt_from_two_arg_walk() {
    let defaults = Defaults::new();
    let object = json!({"a": "1", "b": "2", "c": "3", "d": "4"});

    let mut rebuilt = serde_json::Map::new();
    defaults.foreach(
        &object,
        by_key_value(|key: Key<'_>, value: &Value| {
            rebuilt.insert(key.to_string(), value.clone());
        }),
        None,
    );

    assert_eq!(Value::Object(rebuilt), object);
}

#[test]
fn test_array_values_one_arg() {
    let defaults = Defaults::new();
    let array = mixed_array();
    let mut recorder = Recorder::<Value>::one_arg();

    defaults.foreach(&array, &mut recorder, None);

    assert_eq!(Value::Array(recorder.values()), array);
    assert!(recorder.keys().iter().all(Option::is_none));
}

#[test]
fn test_array_keys_are_numeric_by_default() {
    let defaults = Defaults::new();
    let mut recorder = Recorder::<Value>::two_args();

    defaults.foreach(&mixed_array(), &mut recorder, None);

    assert_eq!(recorder.keys(), index_keys(10));
}

#[test]
fn test_array_keys_native_without_cast() {
    let defaults = Defaults::new();
    let mut recorder = Recorder::<i32>::two_args();

    defaults.foreach(
        &vec![1, 2, 3, 4, 5],
        &mut recorder,
        Some(&Overrides::new().cast_array_index(false)),
    );

    assert_eq!(recorder.keys(), name_keys(5));
}

#[test]
fn test_false_stops_after_first_call() {
    let defaults = Defaults::new();
    let mut index = 0;

    defaults.foreach(
        &[1, 2, 3],
        by_value(|_: &i32| {
            index += 1;
            false
        }),
        None,
    );

    assert_eq!(index, 1);
}

#[test]
fn test_falsy_json_returns_do_not_stop() {
    let defaults = Defaults::new();
    let mut index = 0;
    let returns = [json!(0), json!(""), json!(null), json!(true)];

    defaults.foreach(
        &[1, 2, 3, 4],
        by_value(|_: &i32| {
            let result = returns[index].clone();
            index += 1;
            result
        }),
        None,
    );

    assert_eq!(index, 4);
}

#[test]
fn test_missing_container_never_invokes() {
    let defaults = Defaults::new();
    let mut calls = 0;

    defaults.foreach(&None::<Vec<i32>>, by_value(|_: &i32| calls += 1), None);
    defaults.foreach(&Value::Null, by_value(|_: &Value| calls += 1), None);

    assert_eq!(calls, 0);
}

#[test]
fn test_absent_callback_is_noop() {
    let defaults = Defaults::new();
    let absent: Option<ByValue<fn(&i32) -> bool, i32>> = None;

    defaults.foreach(&[1, 2, 3], absent, None);
}

#[test]
fn test_empty_containers_never_invoke() {
    let defaults = Defaults::new();
    let mut calls = 0;

    defaults.foreach(&Vec::<i32>::new(), by_value(|_: &i32| calls += 1), None);
    defaults.foreach(&"", by_value(|_: &str| calls += 1), None);
    defaults.foreach(&json!({}), by_value(|_: &Value| calls += 1), None);

    assert_eq!(calls, 0);
}

#[test]
fn test_string_characters() {
    let defaults = Defaults::new();
    let mut rebuilt = String::new();

    defaults.foreach(&"12345", by_value(|ch: &str| rebuilt.push_str(ch)), None);
    assert_eq!(rebuilt, "12345");

    let mut recorder = Recorder::<String>::two_args();
    defaults.foreach(&String::from("abc"), &mut recorder, None);
    assert_eq!(recorder.keys(), index_keys(3));
    assert_eq!(recorder.values(), vec!["a", "b", "c"]);
}

#[test]
fn test_check_arguments_off_forces_key_value() {
    let defaults = Defaults::new();
    let object = json!({"a": "1", "b": "2", "c": "3", "d": "4"});
    let mut recorder = Recorder::<Value>::one_arg();

    defaults.foreach(
        &object,
        &mut recorder,
        Some(&Overrides::new().check_arguments(false)),
    );

    let keys: Vec<String> = recorder
        .keys()
        .into_iter()
        .map(|key| key.expect("key handed over").to_string())
        .collect();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_declared_signatures_pick_shape() {
    let defaults = Defaults::new();
    let array = vec![1, 2, 3, 4, 5];

    let mut values = Vec::new();
    defaults.foreach(
        &array,
        Declared::new("(value) => { result.push(value); }", |args: Args<'_, i32>| {
            assert_eq!(args.arity(), Arity::One);
            values.push(*args.value());
        }),
        None,
    );
    assert_eq!(values, array);

    let mut pairs = Vec::new();
    defaults.foreach(
        &array,
        Declared::new("(key, value) => { result[key] = value; }", |args: Args<'_, i32>| {
            let (key, value) = args.into_parts();
            pairs.push((key.and_then(|key| key.as_index()), *value));
        }),
        None,
    );
    assert_eq!(
        pairs,
        vec![(Some(0), 1), (Some(1), 2), (Some(2), 3), (Some(3), 4), (Some(4), 5)]
    );
}

#[test]
fn test_zero_parameter_callback_gets_value() {
    let defaults = Defaults::new();
    let mut shapes = Vec::new();

    defaults.foreach(
        &[7],
        Declared::new("function () {}", |args: Args<'_, i32>| shapes.push(args.arity())),
        None,
    );

    assert_eq!(shapes, vec![Arity::One]);
}

#[test]
fn test_own_property_filter_on_prototype_chain() {
    let defaults = Defaults::new();
    let base = Arc::new(
        Record::new()
            .with_field("constructor", "Base")
            .with_field("baseFn", "fn")
            .with_field("baseProp", "1"),
    );
    let child = Record::inheriting(base)
        .with_field("childFn", "fn")
        .with_field("childProp", "2");

    let mut with = Recorder::<&str>::two_args();
    defaults.foreach(
        &child,
        &mut with,
        Some(&Overrides::new().check_own_property(true)),
    );
    assert_eq!(with.calls.len(), 2);

    let mut without = Recorder::<&str>::two_args();
    defaults.foreach(
        &child,
        &mut without,
        Some(&Overrides::new().check_own_property(false)),
    );
    assert!(without.calls.len() > 2);
    assert_eq!(without.calls.len(), 5);
}

#[test]
fn test_length_field_casts_object_keys() {
    // Anything with a length-like field counts as array-like, mappings included.
    let defaults = Defaults::new();
    let array_like = json!({"0": "a", "1": "b", "length": 2});
    let mut recorder = Recorder::<Value>::two_args();

    defaults.foreach(&array_like, &mut recorder, None);

    assert_eq!(
        recorder.keys(),
        vec![Some(Key::Index(0)), Some(Key::Index(1)), Some(Key::name("length"))]
    );
}

#[test]
fn test_zero_length_field_record_vs_json() {
    let defaults = Defaults::new();

    let record = Record::new().with_field("0", 0).with_field("length", 0);
    let mut recorder = Recorder::<i32>::two_args();
    defaults.foreach(&record, &mut recorder, None);
    assert_eq!(recorder.keys()[0], Some(Key::Index(0)));

    let object = json!({"0": 0, "length": 0});
    let mut recorder = Recorder::<Value>::two_args();
    defaults.foreach(&object, &mut recorder, None);
    assert_eq!(recorder.keys()[0], Some(Key::name("0")));
}

#[test]
fn test_plain_object_keys_never_cast() {
    let defaults = Defaults::new();
    let object = json!({"0": "a", "1": "b"});
    let mut recorder = Recorder::<Value>::two_args();

    defaults.foreach(&object, &mut recorder, None);

    assert_eq!(recorder.keys(), name_keys(2));
}

#[test]
fn test_per_call_options_leave_defaults_alone() {
    let defaults = Defaults::new();
    let before = defaults.get();

    defaults.foreach(
        &[1],
        by_value(|_: &i32| ()),
        Some(
            &Overrides::new()
                .check_arguments(false)
                .check_own_property(false)
                .cast_array_index(false),
        ),
    );

    assert_eq!(defaults.get(), before);
}

#[test]
fn test_instance_defaults_apply_to_walks() {
    let defaults = Defaults::new();
    defaults.set(Some(&Overrides::new().cast_array_index(false)));

    let mut recorder = Recorder::<i32>::two_args();
    defaults.foreach(&[1, 2], &mut recorder, None);
    assert_eq!(recorder.keys(), name_keys(2));

    let mut recorder = Recorder::<i32>::two_args();
    defaults.foreach(
        &[1, 2],
        &mut recorder,
        Some(&Overrides::new().cast_array_index(true)),
    );
    assert_eq!(recorder.keys(), index_keys(2));
}

#[test]
#[should_panic(expected = "callback failure")]
fn test_callback_panic_propagates() {
    let defaults = Defaults::new();
    defaults.foreach(
        &[1, 2, 3],
        by_value(|value: &i32| {
            if *value == 2 {
                panic!("callback failure");
            }
        }),
        None,
    );
}
