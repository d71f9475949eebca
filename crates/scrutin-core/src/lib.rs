pub mod cleaners;
pub mod columns;
pub mod config;
pub mod dataset;
pub mod department;
pub mod error;
pub mod extract;
pub mod load;
pub mod numeric;
pub mod pipeline;
pub mod text;

pub use cleaners::{clean_election, clean_security, clean_unemployment, Cleaner};
pub use config::EtlConfig;
pub use dataset::Dataset;
pub use department::normalize_department_code;
pub use error::{FatalValidationError, RecoverableParseError};
