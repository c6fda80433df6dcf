//! Attribute path property tests

use proptest::prelude::*;
use serde_json::{Map, Value};
use uweb_tables::attr::resolve;

fn nest(key: &str, value: Value) -> Value {
	let mut map = Map::new();
	map.insert(key.to_string(), value);
	Value::Object(map)
}

fn leaf() -> impl Strategy<Value = Value> {
	prop_oneof![
		any::<i64>().prop_map(Value::from),
		any::<bool>().prop_map(Value::from),
		"[a-z ]{0,12}".prop_map(Value::from),
	]
}

proptest! {
	/// Test: a dotted path resolves like resolving one segment at a time
	///
	/// Category: Property
	#[test]
	fn prop_path_equals_stepwise(
		a in "[a-z][a-z0-9_]{0,7}",
		b in "[a-z][a-z0-9_]{0,7}",
		c in "[a-z][a-z0-9_]{0,7}",
		value in leaf(),
	) {
		let row = nest(&a, nest(&b, nest(&c, value.clone())));

		let direct = resolve(&row, &format!("{a}.{b}.{c}")).unwrap();
		let first = resolve(&row, &a).unwrap().unwrap();
		let second = resolve(&first, &b).unwrap().unwrap();
		let stepwise = resolve(&second, &c).unwrap();

		prop_assert_eq!(&direct, &stepwise);
		prop_assert_eq!(direct, Some(value));
	}

	/// Test: a null intermediate segment short-circuits to None
	///
	/// Category: Property
	#[test]
	fn prop_null_intermediate_is_none(
		a in "[a-z][a-z0-9_]{0,7}",
		rest in proptest::collection::vec("[a-z][a-z0-9_]{0,7}", 1..4),
	) {
		let row = nest(&a, Value::Null);
		let path = format!("{a}.{}", rest.join("."));
		prop_assert_eq!(resolve(&row, &path).unwrap(), None);
	}
}
