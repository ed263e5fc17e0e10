//! Tests for the value module.

use super::*;
// The sibling `value::core` module would otherwise shadow the `core` crate
// that `rstest` expansions refer to.
use ::core;
use crate::error::ValueError;
use rstest::rstest;

mod kind_tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	#[case::array(Value::from(vec![1, 2]), Kind::Sequence)]
	#[case::regexp(Value::RegExp(Pattern::new("a", "").unwrap()), Kind::Pattern)]
	#[case::date(Value::Date(Instant::invalid()), Kind::Instant)]
	#[case::object(Value::Object(ObjectRef::new()), Kind::Mapping)]
	#[case::string(Value::from("x"), Kind::Text)]
	#[case::function(Value::Function(Callable::native("Date")), Kind::Callable)]
	#[case::boolean(Value::from(true), Kind::Boolean)]
	#[case::number(Value::from(1.5), Kind::Numeric)]
	#[case::null(Value::Null, Kind::Null)]
	#[case::undefined(Value::Undefined, Kind::Absent)]
	#[case::unsupported(Value::Unsupported("Symbol".into()), Kind::Unsupported)]
	fn test_kind(#[case] value: Value, #[case] expected: Kind) {
		assert_eq!(value.kind(), expected);
	}

	#[rstest]
	fn test_kind_priority_order() {
		let mut kinds = vec![
			Kind::Unsupported,
			Kind::Mapping,
			Kind::Numeric,
			Kind::Sequence,
			Kind::Absent,
			Kind::Instant,
		];
		kinds.sort();
		assert_eq!(
			kinds,
			vec![
				Kind::Sequence,
				Kind::Instant,
				Kind::Mapping,
				Kind::Numeric,
				Kind::Absent,
				Kind::Unsupported,
			]
		);
	}

	#[rstest]
	fn test_only_arrays_and_objects_are_containers() {
		assert!(Kind::Sequence.is_container());
		assert!(Kind::Mapping.is_container());
		assert!(!Kind::Pattern.is_container());
		assert!(!Kind::Instant.is_container());
		assert!(!Kind::Text.is_container());
	}

	#[rstest]
	fn test_value_default_is_undefined() {
		assert_eq!(Value::default(), Value::Undefined);
		assert!(Value::default().is_nullish());
	}
}

mod container_tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn test_array_handles_compare_by_identity() {
		let a = ArrayRef::from_vec(vec![Value::from(1)]);
		let b = ArrayRef::from_vec(vec![Value::from(1)]);
		let alias = a.clone();

		assert_eq!(a, alias);
		assert_eq!(a.id(), alias.id());
		assert_ne!(a, b);
		assert_ne!(a.id(), b.id());
	}

	#[rstest]
	fn test_array_set_past_end_fills_with_undefined() {
		let a = ArrayRef::new();
		a.set(2, Value::from("c"));

		assert_eq!(
			a.to_vec(),
			vec![Value::Undefined, Value::Undefined, Value::from("c")]
		);
	}

	#[rstest]
	fn test_array_can_contain_itself() {
		let a = ArrayRef::new();
		a.push(Value::Array(a.clone()));

		assert_eq!(a.get(0), Some(Value::Array(a.clone())));
		// Debug output must not recurse
		let debug = format!("{:?}", a);
		assert!(debug.contains("len: 1"));
	}

	#[rstest]
	fn test_object_keeps_insertion_order() {
		let obj = ObjectRef::new();
		obj.insert("z", Value::from(1));
		obj.insert("a", Value::from(2));
		obj.insert("m", Value::from(3));
		obj.insert("z", Value::from(4));

		assert_eq!(obj.own_keys(), vec!["z", "a", "m"]);
		assert_eq!(obj.get_own("z"), Some(Value::from(4)));
	}

	#[rstest]
	fn test_object_remove_preserves_order_of_rest() {
		let obj = ObjectRef::from_entries([
			("a", Value::from(1)),
			("b", Value::from(2)),
			("c", Value::from(3)),
		]);
		assert_eq!(obj.remove("b"), Some(Value::from(2)));
		assert_eq!(obj.own_keys(), vec!["a", "c"]);
	}

	#[rstest]
	fn test_inherited_properties_are_not_own() {
		let proto = ObjectRef::from_entries([("inherited", Value::from(true))]);
		let obj = ObjectRef::with_prototype(proto.clone());

		assert!(obj.is_empty());
		assert!(!obj.has_own("inherited"));
		assert_eq!(obj.get("inherited"), Some(Value::from(true)));
		assert_eq!(obj.get_own("inherited"), None);
		assert_eq!(obj.keys(), vec!["inherited"]);
		assert_eq!(obj.prototype(), Some(proto));
	}

	#[rstest]
	fn test_own_property_shadows_inherited() {
		let proto = ObjectRef::from_entries([("k", Value::from(1)), ("p", Value::from(2))]);
		let obj = ObjectRef::with_prototype(proto);
		obj.insert("k", Value::from(10));

		assert_eq!(obj.get("k"), Some(Value::from(10)));
		assert_eq!(obj.keys(), vec!["k", "p"]);
	}

	#[rstest]
	fn test_set_prototype_rejects_cycles() {
		let a = ObjectRef::new();
		let b = ObjectRef::with_prototype(a.clone());

		assert!(!a.set_prototype(Some(b.clone())));
		assert!(!a.set_prototype(Some(a.clone())));
		assert_eq!(a.prototype(), None);
		assert!(b.set_prototype(None));
		assert_eq!(b.prototype(), None);
	}

	#[rstest]
	fn test_own_entry_at_follows_enumeration_order() {
		let obj = ObjectRef::from_entries([("b", Value::from(1)), ("a", Value::from(2))]);
		assert_eq!(obj.own_entry_at(0), Some(("b".to_string(), Value::from(1))));
		assert_eq!(obj.own_entry_at(1), Some(("a".to_string(), Value::from(2))));
		assert_eq!(obj.own_entry_at(2), None);
	}

	#[rstest]
	#[case::arrays(true)]
	#[case::objects(false)]
	fn test_dropping_deep_chain(#[case] arrays: bool) {
		// Released in a loop; nested drops would exhaust the test thread's stack
		let mut head = Value::Undefined;
		for _ in 0..200_000 {
			head = if arrays {
				Value::Array(ArrayRef::from_vec(vec![head]))
			} else {
				Value::Object(ObjectRef::from_entries([("next", head)]))
			};
		}
		drop(head);
	}

	#[rstest]
	fn test_dropping_deep_prototype_chain() {
		let mut proto = ObjectRef::new();
		for _ in 0..200_000 {
			proto = ObjectRef::with_prototype(proto);
		}
		assert!(proto.prototype().is_some());
		drop(proto);
	}

	#[rstest]
	fn test_shared_member_survives_container_drop() {
		let shared = ArrayRef::from_vec(vec![Value::from(1)]);
		let outer = ArrayRef::from_vec(vec![Value::Array(shared.clone())]);
		drop(outer);
		assert_eq!(shared.to_vec(), vec![Value::from(1)]);
	}
}

mod callable_tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	#[case::plain("function Date() { [native code] }", "Date")]
	#[case::multiline("function String() {\n    [native code]\n}", "String")]
	fn test_native_source_text_is_recognised(#[case] text: &str, #[case] name: &str) {
		let callable = Callable::from_source_text(text);
		assert!(callable.is_native());
		assert_eq!(callable.name(), Some(name));
		assert_eq!(callable.source(), None);
	}

	#[rstest]
	fn test_script_source_text_is_kept() {
		let text = "function () {\n    console.log(\"hello\");\n}";
		let callable = Callable::from_source_text(text);

		assert!(!callable.is_native());
		assert_eq!(callable.source(), Some(text));
		assert_eq!(callable.name(), None);
	}

	#[rstest]
	fn test_named_script() {
		let callable = Callable::named_script("add", "function add(a, b) { return a + b; }");
		assert_eq!(callable.name(), Some("add"));
	}
}

mod pattern_tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	#[case::none("", "")]
	#[case::canonical_order("yigm", "gimy")]
	#[case::all_but_v("dgimsuy", "dgimsuy")]
	fn test_flags_print_in_canonical_order(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(PatternFlags::parse(input).unwrap().to_string(), expected);
	}

	#[rstest]
	fn test_invalid_flag_is_rejected() {
		let err = PatternFlags::parse("gx").unwrap_err();
		assert!(matches!(err, ValueError::InvalidPatternFlag('x')));
	}

	#[rstest]
	fn test_duplicate_flag_is_rejected() {
		let err = PatternFlags::parse("gig").unwrap_err();
		assert!(matches!(err, ValueError::DuplicatePatternFlag('g')));
	}

	#[rstest]
	fn test_unicode_and_unicode_sets_conflict() {
		let err = PatternFlags::parse("uv").unwrap_err();
		assert!(matches!(err, ValueError::ConflictingPatternFlags));
	}

	#[rstest]
	#[case::plain("dasd", "dasd")]
	#[case::empty("", "(?:)")]
	#[case::slash("a/b", r"a\/b")]
	#[case::already_escaped(r"a\/b", r"a\/b")]
	#[case::slash_in_class("[/]", "[/]")]
	#[case::escaped_bracket(r"\[/\]", r"\[\/\]")]
	#[case::newline("a\nb", r"a\nb")]
	fn test_source_escaping(#[case] body: &str, #[case] expected: &str) {
		assert_eq!(Pattern::new(body, "").unwrap().source(), expected);
	}

	#[rstest]
	fn test_display_literal() {
		let p = Pattern::new("dasd", "gi").unwrap();
		assert_eq!(p.to_string(), "/dasd/gi");
		assert_eq!(Pattern::new("", "").unwrap().to_string(), "/(?:)/");
	}

	#[rstest]
	fn test_parse_literal() {
		let p = Pattern::parse_literal("/a/b+c/gi").unwrap();
		assert_eq!(p.body(), "a/b+c");
		assert_eq!(p.flags().to_string(), "gi");
	}

	#[rstest]
	#[case::no_leading_slash("abc/")]
	#[case::no_closing_slash("/abc")]
	#[case::empty_body("//g")]
	fn test_parse_literal_rejects_malformed(#[case] literal: &str) {
		let err = Pattern::parse_literal(literal).unwrap_err();
		assert!(matches!(err, ValueError::MalformedPatternLiteral(_)));
	}

	#[rstest]
	fn test_compile_honours_case_insensitive_flag() {
		let regex = Pattern::new("dasd", "gi").unwrap().compile().unwrap();
		assert!(regex.is_match("xDASDx"));

		let strict = Pattern::new("dasd", "").unwrap().compile().unwrap();
		assert!(!strict.is_match("DASD"));
	}

	#[rstest]
	fn test_compile_reports_regex_errors() {
		let err = Pattern::new("(unclosed", "").unwrap().compile().unwrap_err();
		assert!(matches!(err, ValueError::Regex(_)));
	}
}

mod instant_tests {
	use super::*;
	use chrono::{TimeZone, Utc};
	use pretty_assertions::assert_eq;

	#[rstest]
	#[case::epoch(0)]
	#[case::negative(-1)]
	#[case::upper_bound(8_640_000_000_000_000)]
	#[case::lower_bound(-8_640_000_000_000_000)]
	fn test_in_range(#[case] millis: i64) {
		assert_eq!(Instant::from_millis(millis).unwrap().millis(), Some(millis));
	}

	#[rstest]
	#[case::above(8_640_000_000_000_001)]
	#[case::below(-8_640_000_000_000_001)]
	fn test_out_of_range(#[case] millis: i64) {
		let err = Instant::from_millis(millis).unwrap_err();
		assert!(matches!(err, ValueError::InstantOutOfRange(m) if m == millis));
	}

	#[rstest]
	fn test_invalid_instant() {
		let invalid = Instant::invalid();
		assert!(!invalid.is_valid());
		assert_eq!(invalid.millis(), None);
		assert_eq!(invalid.to_datetime(), None);
	}

	#[rstest]
	fn test_from_chrono() {
		let dt = Utc.with_ymd_and_hms(1955, 1, 1, 0, 0, 0).unwrap();
		let instant = Instant::try_from(dt).unwrap();
		assert_eq!(instant.millis(), Some(-473_385_600_000));
		assert_eq!(instant.to_datetime(), Some(dt));
	}

	#[rstest]
	#[case::upper_bound(8_640_000_000_000_000)]
	#[case::lower_bound(-8_640_000_000_000_000)]
	fn test_valid_instant_beyond_chrono_range(#[case] millis: i64) {
		let instant = Instant::from_millis(millis).unwrap();
		assert!(instant.is_valid());
		assert_eq!(instant.to_datetime(), None);
	}
}

mod convert_tests {
	use super::*;
	use chrono::{DateTime, FixedOffset, TimeZone, Utc};
	use indexmap::IndexMap;
	use pretty_assertions::assert_eq;

	#[rstest]
	#[case::i32(Value::from(42i32), 42.0)]
	#[case::u8(Value::from(7u8), 7.0)]
	#[case::f32(Value::from(0.5f32), 0.5)]
	#[case::i64(Value::from(-3i64), -3.0)]
	fn test_numbers_widen_to_f64(#[case] value: Value, #[case] expected: f64) {
		assert_eq!(value.as_f64(), Some(expected));
	}

	#[rstest]
	fn test_option_none_is_null() {
		assert_eq!(Value::from(Option::<i32>::None), Value::Null);
		assert_eq!(Value::from(Some("x")), Value::from("x"));
	}

	#[rstest]
	fn test_vec_builds_new_array() {
		let value = Value::from(vec!["a", "b"]);
		let array = value.as_array().unwrap();
		assert_eq!(array.to_vec(), vec![Value::from("a"), Value::from("b")]);
	}

	#[rstest]
	fn test_index_map_builds_object() {
		let mut map = IndexMap::new();
		map.insert("one".to_string(), 1);
		map.insert("two".to_string(), 2);

		let value = Value::from(map);
		let obj = value.as_object().unwrap();
		assert_eq!(obj.own_keys(), vec!["one", "two"]);
		assert_eq!(obj.get_own("two"), Some(Value::from(2)));
	}

	#[rstest]
	fn test_chrono_datetime_builds_date() {
		let dt = Utc.with_ymd_and_hms(1955, 1, 1, 0, 0, 0).unwrap();
		assert_eq!(
			Value::from(dt),
			Value::Date(Instant::from_millis(-473_385_600_000).unwrap())
		);

		let offset = FixedOffset::east_opt(3600).unwrap();
		let local = offset.with_ymd_and_hms(1955, 1, 1, 1, 0, 0).unwrap();
		assert_eq!(Value::from(local), Value::from(dt));
	}

	#[rstest]
	#[case::max(DateTime::<Utc>::MAX_UTC)]
	#[case::min(DateTime::<Utc>::MIN_UTC)]
	fn test_chrono_extremes_stay_valid(#[case] dt: DateTime<Utc>) {
		let value = Value::from(dt);
		assert_eq!(
			value,
			Value::Date(Instant::from_millis(dt.timestamp_millis()).unwrap())
		);
	}

	#[rstest]
	fn test_json_conversion_keeps_structure() {
		let json = serde_json::json!({
			"string": "s",
			"number": 2342,
			"list": [1, true, null],
			"nested": {"k": "v"}
		});
		let value = Value::from(json);
		let obj = value.as_object().unwrap();

		assert_eq!(obj.own_keys(), vec!["string", "number", "list", "nested"]);
		assert_eq!(obj.get_own("number"), Some(Value::from(2342)));
		let list = obj.get_own("list").unwrap();
		assert_eq!(
			list.as_array().unwrap().to_vec(),
			vec![Value::from(1), Value::from(true), Value::Null]
		);
		let nested = obj.get_own("nested").unwrap();
		assert_eq!(nested.as_object().unwrap().get_own("k"), Some(Value::from("v")));
	}
}
