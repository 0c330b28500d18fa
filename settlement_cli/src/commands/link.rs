use anyhow::{Context, Result};
use settlement_parser::{parse_file, to_query};
use std::path::Path;
use tracing::info;

pub fn execute(input_path: &str) -> Result<()> {
    info!("Building shareable link for: {}", input_path);

    let request = parse_file(Path::new(input_path))
        .with_context(|| format!("Failed to parse request file: {}", input_path))?;

    println!("{}", to_query(&request));
    Ok(())
}
