//! CSV Data Loader Module
//! Parses grant disbursement CSVs into a [`GrantDataset`] using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::model::{GrantDataset, GrantRecord};

/// Required column: pool / funding-round name.
pub const POOL_COL: &str = "grant_pool_name";
/// Required column: source project.
pub const FROM_COL: &str = "from_project_name";
/// Required column: destination project.
pub const TO_COL: &str = "to_project_name";
/// Required column: disbursed amount. Upstream exports use this name.
pub const AMOUNT_COL: &str = "f0_";

const REQUIRED_COLS: [&str; 4] = [POOL_COL, FROM_COL, TO_COL, AMOUNT_COL];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a grant disbursement CSV.
///
/// The file must carry the four required columns; additional columns are
/// ignored. Rows matching the blocked transfer pair are dropped by the
/// dataset constructor. Row order is otherwise preserved.
///
/// An empty table with a valid header is a valid (empty) dataset.
pub fn load_csv(path: &Path) -> Result<GrantDataset, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let columns = df.get_column_names();
    for required in REQUIRED_COLS {
        if !columns.iter().any(|c| c.as_str() == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let pool_series = df.column(POOL_COL)?;
    let from_series = df.column(FROM_COL)?;
    let to_series = df.column(TO_COL)?;
    let amount_f64 = df.column(AMOUNT_COL)?.cast(&DataType::Float64)?;
    let amount_ca = amount_f64.f64()?;

    let mut records: Vec<GrantRecord> = Vec::with_capacity(df.height());
    let mut skipped = 0usize;

    for i in 0..df.height() {
        let (Ok(pool), Ok(from), Ok(to), Some(amount)) = (
            pool_series.get(i),
            from_series.get(i),
            to_series.get(i),
            amount_ca.get(i),
        ) else {
            skipped += 1;
            continue;
        };

        if pool.is_null() || from.is_null() || to.is_null() || amount.is_nan() {
            skipped += 1;
            continue;
        }

        records.push(GrantRecord {
            pool_name: pool.to_string().trim_matches('"').to_string(),
            from_project: from.to_string().trim_matches('"').to_string(),
            to_project: to.to_string().trim_matches('"').to_string(),
            amount,
        });
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} rows with null or non-numeric cells");
    }

    Ok(GrantDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::BLOCKED_TRANSFER;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp csv");
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_records_in_row_order() {
        let file = write_csv(
            "grant_pool_name,from_project_name,to_project_name,f0_\n\
             round-1,alpha,beta,40\n\
             round-1,alpha,gamma,10.5\n\
             round-2,delta,epsilon,3\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[0].to_project, "beta");
        assert_eq!(ds.records()[1].amount, 10.5);
        assert_eq!(ds.records()[2].pool_name, "round-2");
        assert_eq!(
            ds.pool_names(),
            &["round-1".to_string(), "round-2".to_string()]
        );
    }

    #[test]
    fn blocked_transfer_row_is_excluded() {
        let csv = format!(
            "grant_pool_name,from_project_name,to_project_name,f0_\n\
             round-1,alpha,beta,40\n\
             round-1,{},{},500\n\
             round-1,gamma,delta,10\n",
            BLOCKED_TRANSFER.0, BLOCKED_TRANSFER.1
        );
        let file = write_csv(&csv);

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(ds
            .records()
            .iter()
            .all(|r| r.from_project != BLOCKED_TRANSFER.0 || r.to_project != BLOCKED_TRANSFER.1));
        // Unaffected rows keep their order and values.
        assert_eq!(ds.records()[0].amount, 40.0);
        assert_eq!(ds.records()[1].from_project, "gamma");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let file = write_csv(
            "grant_pool_name,extra,from_project_name,to_project_name,f0_,notes\n\
             round-1,x,alpha,beta,40,hello\n",
        );

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].from_project, "alpha");
    }

    #[test]
    fn missing_required_column_errors() {
        let file = write_csv(
            "grant_pool_name,from_project_name,f0_\n\
             round-1,alpha,40\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        match err {
            LoadError::MissingColumn(col) => assert_eq!(col, TO_COL),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_errors_not_found() {
        let err = load_csv(Path::new("/nonexistent/grants.csv")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn header_only_file_is_empty_dataset() {
        let file = write_csv("grant_pool_name,from_project_name,to_project_name,f0_\n");

        let ds = load_csv(file.path()).unwrap();
        assert!(ds.is_empty());
    }
}
