use chrono::{DateTime, Utc};
use polars::prelude::DataFrame;
use scrutin_parser::ParserError;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::{EtlConfig, InputFiles};
use crate::dataset::Dataset;
use crate::error::FatalValidationError;
use crate::extract::{DirectoryExtractor, Extractor};
use crate::load::{FlatFileSink, LoadError, TableSink, WarehouseSink};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to extract {dataset} from {file}: {source}")]
    Extract {
        dataset: Dataset,
        file: String,
        #[source]
        source: ParserError,
    },

    #[error("failed to clean {dataset}: {source}")]
    Clean {
        dataset: Dataset,
        #[source]
        source: FatalValidationError,
    },

    #[error("{sink} load of {dataset} into '{target}' failed: {source}")]
    Load {
        dataset: Dataset,
        sink: &'static str,
        target: String,
        #[source]
        source: LoadError,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub dataset: Dataset,
    pub source_file: String,
    pub cleaner: &'static str,
    pub rows_extracted: usize,
    pub rows_cleaned: usize,
    pub flat_file: Option<String>,
    pub warehouse_table: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub datasets: Vec<DatasetSummary>,
}

impl PipelineSummary {
    pub fn dataset(&self, dataset: Dataset) -> Option<&DatasetSummary> {
        self.datasets.iter().find(|summary| summary.dataset == dataset)
    }
}

struct CleanedTable {
    dataset: Dataset,
    table: DataFrame,
}

/// Runs the whole pipeline with the directory extractor, the flat-file sink
/// and the DuckDB warehouse described by `config`.
pub fn run(config: &EtlConfig) -> Result<PipelineSummary, PipelineError> {
    let extractor = DirectoryExtractor::new(&config.data_path);
    let flat_files = FlatFileSink::new(&config.output_path);
    let warehouse = WarehouseSink::new(&config.warehouse_path);
    run_with(&config.files, &extractor, &flat_files, &warehouse)
}

/// Extracts the four datasets, cleans each with its own cleaner, writes
/// every flat file and then registers every warehouse table.
///
/// Writes are not transactional: when a load fails the error is returned
/// straight away and whatever was already written stays in place.
pub fn run_with(
    files: &InputFiles,
    extractor: &dyn Extractor,
    flat_files: &dyn TableSink,
    warehouse: &dyn TableSink,
) -> Result<PipelineSummary, PipelineError> {
    let started_at = Utc::now();

    info!("extracting");
    let mut raw_tables = Vec::with_capacity(Dataset::ALL.len());
    for dataset in Dataset::ALL {
        let file = files.file_for(dataset);
        let table = extractor
            .extract(file)
            .map_err(|source| PipelineError::Extract {
                dataset,
                file: file.to_string(),
                source,
            })?;
        raw_tables.push((dataset, table));
    }

    info!("transforming");
    let mut summaries = Vec::with_capacity(raw_tables.len());
    let mut cleaned = Vec::with_capacity(raw_tables.len());
    for (dataset, raw) in raw_tables {
        let cleaner = dataset.cleaner();
        let table = cleaner
            .clean(&raw)
            .map_err(|source| PipelineError::Clean { dataset, source })?;

        info!(
            dataset = %dataset,
            cleaner = cleaner.name(),
            rows_in = raw.height(),
            rows_out = table.height(),
            "cleaned dataset"
        );

        summaries.push(DatasetSummary {
            dataset,
            source_file: files.file_for(dataset).to_string(),
            cleaner: cleaner.name(),
            rows_extracted: raw.height(),
            rows_cleaned: table.height(),
            flat_file: None,
            warehouse_table: None,
        });
        cleaned.push(CleanedTable { dataset, table });
    }

    info!(sink = flat_files.name(), "loading flat files");
    for (entry, summary) in cleaned.iter().zip(summaries.iter_mut()) {
        let location = load_one(flat_files, entry, entry.dataset.output_file_name())?;
        summary.flat_file = Some(location);
    }

    info!(sink = warehouse.name(), "loading warehouse");
    for (entry, summary) in cleaned.iter().zip(summaries.iter_mut()) {
        let location = load_one(warehouse, entry, entry.dataset.warehouse_table())?;
        summary.warehouse_table = Some(location);
    }

    Ok(PipelineSummary {
        started_at,
        finished_at: Utc::now(),
        datasets: summaries,
    })
}

fn load_one(
    sink: &dyn TableSink,
    entry: &CleanedTable,
    target: &str,
) -> Result<String, PipelineError> {
    sink.load(&entry.table, target)
        .map_err(|source| PipelineError::Load {
            dataset: entry.dataset,
            sink: sink.name(),
            target: target.to_string(),
            source,
        })
}
