//! Fixture file driven test suite.
mod clock;

use std::path::PathBuf;

pub(crate) fn test_resource(subdir: &str, filename: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join(subdir)
        .join(filename)
}
