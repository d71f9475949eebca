use std::fmt;

use serde::Serialize;

use crate::cleaners::{Cleaner, ElectionCleaner, SecurityCleaner, UnemploymentCleaner};

static ELECTION: ElectionCleaner = ElectionCleaner;
static UNEMPLOYMENT: UnemploymentCleaner = UnemploymentCleaner;
static SECURITY: SecurityCleaner = SecurityCleaner;

/// The four logical inputs of a pipeline run, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    ElectionRound1,
    ElectionRound2,
    Unemployment,
    Security,
}

impl Dataset {
    pub const ALL: [Dataset; 4] = [
        Dataset::ElectionRound1,
        Dataset::ElectionRound2,
        Dataset::Unemployment,
        Dataset::Security,
    ];

    /// Key of the input file in the `[files]` configuration table.
    pub fn config_key(&self) -> &'static str {
        match self {
            Dataset::ElectionRound1 => "t1",
            Dataset::ElectionRound2 => "t2",
            Dataset::Unemployment => "chomage",
            Dataset::Security => "securite",
        }
    }

    pub fn cleaner(&self) -> &'static dyn Cleaner {
        match self {
            Dataset::ElectionRound1 | Dataset::ElectionRound2 => &ELECTION,
            Dataset::Unemployment => &UNEMPLOYMENT,
            Dataset::Security => &SECURITY,
        }
    }

    pub fn output_file_name(&self) -> &'static str {
        match self {
            Dataset::ElectionRound1 => "clean_tour1.csv",
            Dataset::ElectionRound2 => "clean_tour2.csv",
            Dataset::Unemployment => "clean_chomage.csv",
            Dataset::Security => "clean_securite.csv",
        }
    }

    pub fn warehouse_table(&self) -> &'static str {
        match self {
            Dataset::ElectionRound1 => "fact_election_tour1",
            Dataset::ElectionRound2 => "fact_election_tour2",
            Dataset::Unemployment => "fact_chomage",
            Dataset::Security => "fact_securite",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}
