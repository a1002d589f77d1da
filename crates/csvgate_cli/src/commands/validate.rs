use anyhow::{Context, Result};
use csvgate_loader::load_csv_file;
use csvgate_validator::CsvValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(file_path: &str, format: &str) -> Result<()> {
    info!("Validating CSV file: {}", file_path);

    // Load the file, repairing whole-line quoting
    let path = Path::new(file_path);
    let dataset =
        load_csv_file(path).with_context(|| format!("Error processing file: {}", file_path))?;

    if format != "json" {
        output::print_info(&format!(
            "Loaded {} data rows with columns: {}",
            dataset.len(),
            dataset.columns().join(", ")
        ));
    }

    let result = CsvValidator::new().run(&dataset);

    output::print_validation_result(&result, format)?;

    if !result.passed() {
        std::process::exit(1);
    }

    Ok(())
}
