use anyhow::{Context, Result};
use settlement_engine::InputValidator;
use settlement_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(input_path: &str) -> Result<()> {
    info!("Checking request: {}", input_path);

    let request = parse_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse request file: {}", input_path))?;

    let pendencies = InputValidator::new().validate(&request.contract);
    if pendencies.is_empty() {
        output::print_success("Dados do contrato prontos para análise");
        Ok(())
    } else {
        output::print_pendencies(&pendencies);
        std::process::exit(1);
    }
}
