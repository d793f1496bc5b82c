//! CLI command implementations.

pub mod fixture;
pub mod seed;

use std::path::PathBuf;

use couponlab_server::fixtures::{Fixture, FixtureError};

/// Resolve the fixture: explicit file, `COUPONLAB_FIXTURE_FILE`, or defaults.
pub fn resolve_fixture(file: Option<PathBuf>) -> Result<Fixture, FixtureError> {
    let path = file.or_else(|| std::env::var("COUPONLAB_FIXTURE_FILE").ok().map(PathBuf::from));
    match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading fixture file");
            Fixture::from_file(&p)
        }
        None => Ok(Fixture::default()),
    }
}
