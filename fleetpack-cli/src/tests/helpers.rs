//! Small helpers shared by the CLI tests.

use camino::Utf8Path;

/// Write bytes to a UTF-8 path, panicking on failure.
pub(crate) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("test file should be writable");
}

/// A minimal valid request: one store of demand 5 and one van of capacity 10.
pub(crate) const SIMPLE_REQUEST: &str = r#"{
    "stores": [{ "id": 1, "name": "Store 1", "demand": 5.0 }],
    "vehicles": [{ "id": 1, "name": "Van 1", "capacity": 10.0 }]
}"#;
