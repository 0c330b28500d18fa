use anyhow::{Context, Result};
use settlement_engine::AnalysisEngine;
use settlement_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(input_path: &str, format: &str) -> Result<()> {
    info!("Analyzing request: {}", input_path);

    let request = parse_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse request file: {}", input_path))?;

    output::print_info(&format!(
        "Request loaded: {} ({})",
        request.client_name.as_deref().unwrap_or("Cliente não informado"),
        output::financing_label(request.contract.financing_type)
    ));

    let engine = AnalysisEngine::new();
    match engine.analyze(&request.contract) {
        Ok(analysis) => {
            let generated_at = chrono::Local::now().format("%d/%m/%Y às %H:%M").to_string();
            output::print_report(&request, &generated_at, &analysis, format);
            Ok(())
        }
        Err(failure) => {
            output::print_pendencies(&failure.pendencies);
            std::process::exit(1);
        }
    }
}
