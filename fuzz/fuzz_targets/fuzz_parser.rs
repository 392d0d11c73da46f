#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonspan::{Number, ParserOptions, Value as SpanValue};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // flag byte

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Mostly JSON whitespace, plus a few code points that look like whitespace
/// but must be rejected.
static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b" ",
    b"\n",
    "\u{00A0}".as_bytes(),
    "\u{2028}".as_bytes(),
    "\u{FEFF}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let limit = max_size - HEADER;
        let mut len = HEADER;
        len += append_whitespace(&mut data[len..], limit);
        len += append_value(&mut data[len..], size.max(16), max_size - len);
        len += append_whitespace(&mut data[len..], max_size - len);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Appends up to eight whitespace code points without exceeding `limit`.
fn append_whitespace(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let n_codepoints = rng.random_range(0..=limit.min(8));
        let mut written = 0;

        for _ in 0..n_codepoints {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    // Truncation is fine: it produces interesting invalid documents.
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(23)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(i64::arbitrary(u)?.into()),
            4 => Value::Number(u64::arbitrary(u)?.into()),
            5..=12 => Value::String(u.arbitrary()?),
            13..=17 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            18..=22 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn all_finite(value: &SpanValue) -> bool {
    match value {
        SpanValue::Number(Number::Float(f)) => f.is_finite(),
        SpanValue::Array(items) => items.iter().all(all_finite),
        SpanValue::Object(members) => members.values().all(all_finite),
        _ => true,
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, input)) = data.split_first() else {
        return;
    };

    // Low bit set: default options. Otherwise a small depth limit.
    let options = if flags & 1 != 0 {
        ParserOptions::default()
    } else {
        ParserOptions {
            max_depth: usize::from(flags >> 1),
        }
    };

    let parsed = jsonspan::parse_with_options(input, &options);

    // Deterministic, and `validate` agrees with `parse`.
    assert_eq!(jsonspan::parse_with_options(input, &options), parsed);
    match (&parsed, jsonspan::validate_with_options(input, &options)) {
        (Ok(_), Ok(())) => {}
        (Err(a), Err(b)) => assert_eq!(*a, b),
        (p, v) => panic!("parse and validate disagree: {p:?} vs {v:?}"),
    }

    match &parsed {
        Ok(value) => {
            // Whatever we accept survives a trip through a conformant encoder.
            if all_finite(value) {
                let text = serde_json::to_vec(value).expect("encode");
                assert_eq!(jsonspan::parse(&text).as_ref(), Ok(value));
            }
        }
        Err(err) => {
            assert!(err.offset() <= input.len());
            // `serde_json` stops at depth 128, well inside the default limit,
            // so anything it accepts must be accepted here too.
            if flags & 1 != 0 && serde_json::from_slice::<Value>(input).is_ok() {
                panic!("rejected input serde_json accepts: {err}");
            }
        }
    }
}

fuzz_target!(|data: &[u8]| parser(data));
