#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

pub const DOCUMENT: &str = r#"
{
    "moderation": {
        "decision": "allow",
        "reason": null
    },
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": 2,
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "metrics": {
        "latency_ms": 12.5,
        "ratio": -1.25e-3,
        "count": 9007199254740993
    },
    "unicode": "caf\u00e9 \ud83d\ude00 \u65e5\u672c",
    "matrix": [
        [
            true,
            false
        ],
        []
    ],
    "empty": {}
}
"#;
