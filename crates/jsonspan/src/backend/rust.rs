use crate::{
    Array, Map, Value,
    backend::ValueCtx,
    error::{ErrorKind, Fault},
    parser::{NumberLexeme, StringLexeme, numbers, strings},
};

/// Builds owned [`Value`] trees.
#[derive(Debug, Default, PartialEq, Clone)]
pub(crate) struct RustContext;

impl ValueCtx for RustContext {
    type Value = Value;
    type Array = Array;
    type Object = Map;
    type Key = String;

    #[inline]
    fn value_null(&mut self) -> Value {
        Value::Null
    }

    #[inline]
    fn value_bool(&mut self, b: bool) -> Value {
        Value::Bool(b)
    }

    fn value_num(&mut self, offset: usize, n: NumberLexeme<'_>) -> Result<Value, Fault> {
        numbers::decode(n)
            .map(Value::Number)
            .map_err(|_| Fault::new(ErrorKind::InvalidNumber, offset))
    }

    fn value_str(&mut self, s: StringLexeme<'_>) -> Result<Value, Fault> {
        strings::decode(s).map(Value::String)
    }

    #[inline]
    fn array_new(&mut self) -> Array {
        Array::new()
    }

    #[inline]
    fn array_push(&mut self, arr: &mut Array, v: Value) {
        arr.push(v);
    }

    #[inline]
    fn array_finish(&mut self, arr: Array) -> Value {
        Value::Array(arr)
    }

    #[inline]
    fn object_new(&mut self) -> Map {
        Map::new()
    }

    fn object_key(&mut self, key: StringLexeme<'_>) -> Result<String, Fault> {
        strings::decode(key)
    }

    #[inline]
    fn object_insert(&mut self, obj: &mut Map, key: String, v: Value) {
        obj.insert(key, v);
    }

    #[inline]
    fn object_finish(&mut self, obj: Map) -> Value {
        Value::Object(obj)
    }
}
