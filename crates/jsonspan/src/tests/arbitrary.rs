use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Number, Value};

/// Any number a conformant encoder can write: NaN and the infinities have no
/// JSON spelling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(Number);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            return Self(Number::Integer(i64::arbitrary(g)));
        }
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }
        Self(Number::Float(value))
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let choices = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % choices {
                0 => Value::Null,
                1 => Value::Bool(bool::arbitrary(g)),
                2 => Value::Number(JsonNumber::arbitrary(g).0),
                3 => Value::String(String::arbitrary(g)),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    let items: Array = (0..len).map(|_| gen_val(g, depth - 1)).collect();
                    Value::Array(items)
                }
                _ => {
                    let len = usize::arbitrary(g) % 4;
                    let mut map = Map::new();
                    for _ in 0..len {
                        let key = String::arbitrary(g);
                        let val = gen_val(g, depth - 1);
                        map.insert(key, val);
                    }
                    Value::Object(map)
                }
            }
        }

        let depth = usize::arbitrary(g) % 4;
        gen_val(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Value::Array(items) => Box::new(items.clone().into_iter()),
            Value::Object(map) => Box::new(map.clone().into_values()),
            Value::String(s) => Box::new(s.shrink().map(Value::String)),
            _ => quickcheck::empty_shrinker(),
        }
    }
}
