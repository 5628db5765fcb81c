/// Builds a [`Value`](crate::Value) with JSON-like syntax.
///
/// Arrays become [`Value::List`](crate::Value::List), objects become
/// [`Value::Object`](crate::Value::Object). Any other expression goes through
/// `Value::from`.
///
/// ```rust
/// use autoon::{value, Value};
///
/// let tags = value!(["user", "auth"]);
/// assert_eq!(tags, Value::from(vec!["user", "auth"]));
///
/// let owner = value!({ "name": "Ada", "admin": true });
/// assert!(owner.is_object());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Metadata::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Value::Object($crate::metadata!({ $($key : $value),* }))
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

/// Builds a [`Metadata`](crate::Metadata) map, keeping the written key order.
///
/// ```rust
/// use autoon::{metadata, Value};
///
/// let md = metadata!({
///     "description": "Example class diagram",
///     "version": "1.0.0",
///     "tags": ["user", "auth"]
/// });
/// assert_eq!(md.keys().collect::<Vec<_>>(), vec!["description", "version", "tags"]);
/// assert_eq!(md.get("version"), Some(&Value::from("1.0.0")));
/// ```
#[macro_export]
macro_rules! metadata {
    ({}) => {
        $crate::Metadata::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Metadata::new();
        $(
            map.insert($key.to_string(), $crate::value!($value));
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Metadata, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_lists() {
        assert_eq!(value!([]), Value::List(vec![]));

        match value!([1, "two", null]) {
            Value::List(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Number(Number::Integer(1)));
                assert_eq!(items[1], Value::from("two"));
                assert!(items[2].is_null());
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_value_macro_nested_object() {
        let value = value!({ "owner": { "name": "Ada" }, "tags": ["x"] });
        let object = value.as_object().unwrap();
        assert!(object.get("owner").unwrap().is_object());
        assert_eq!(object.get("tags"), Some(&Value::from(vec!["x"])));
    }

    #[test]
    fn test_metadata_macro() {
        assert_eq!(metadata!({}), Metadata::new());

        let md = metadata!({ "version": "1.0.0", "draft": false });
        assert_eq!(md.len(), 2);
        assert_eq!(md.get("draft"), Some(&Value::Bool(false)));
    }
}
