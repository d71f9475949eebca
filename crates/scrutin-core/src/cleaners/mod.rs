mod election;
mod security;
mod unemployment;

use polars::prelude::DataFrame;

use crate::error::CleanResult;

pub use election::clean_election;
pub use security::clean_security;
pub use unemployment::{clean_unemployment, COLUMNS as UNEMPLOYMENT_COLUMNS};

/// A per-dataset normalization step from a raw table to its canonical form.
///
/// Implementations never mutate their input.
pub trait Cleaner: Sync {
    fn name(&self) -> &'static str;
    fn clean(&self, raw: &DataFrame) -> CleanResult<DataFrame>;
}

pub struct ElectionCleaner;

impl Cleaner for ElectionCleaner {
    fn name(&self) -> &'static str {
        election::NAME
    }

    fn clean(&self, raw: &DataFrame) -> CleanResult<DataFrame> {
        clean_election(raw)
    }
}

pub struct UnemploymentCleaner;

impl Cleaner for UnemploymentCleaner {
    fn name(&self) -> &'static str {
        unemployment::NAME
    }

    fn clean(&self, raw: &DataFrame) -> CleanResult<DataFrame> {
        clean_unemployment(raw)
    }
}

pub struct SecurityCleaner;

impl Cleaner for SecurityCleaner {
    fn name(&self) -> &'static str {
        security::NAME
    }

    fn clean(&self, raw: &DataFrame) -> CleanResult<DataFrame> {
        clean_security(raw)
    }
}
