//! Request parsing for the arrears settlement analysis.
//!
//! An analysis request is the contract snapshot plus optional client and
//! consultant identification for the report header. Requests can be read
//! from YAML, TOML or JSON files (dispatched by extension) and from a
//! query-string form (`total_installments=48&installments_paid=20&...`),
//! which is also how analyses are shared between consultants.
//!
//! # Example
//!
//! ```rust
//! use settlement_parser::parse_yaml;
//!
//! let yaml = r#"
//! client_name: "Maria"
//! total_installments: 48
//! installments_paid: 20
//! installment_value: 1000.0
//! installments_late: 2
//! financing_type: vehicle
//! "#;
//!
//! let request = parse_yaml(yaml).expect("well-formed request");
//! assert_eq!(request.contract.total_installments, 48);
//! ```

use serde::{Deserialize, Serialize};
use settlement_core::{ContractInput, FinancingType};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while parsing an analysis request.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Query pair without a `key=value` shape
    #[error("Invalid query pair '{0}' (expected key=value)")]
    InvalidQueryPair(String),

    /// Query value that does not parse for its field
    #[error("Invalid value '{value}' for query parameter '{field}'")]
    InvalidQueryValue {
        /// Parameter name
        field: String,
        /// Offending raw value
        value: String,
    },

    /// Unsupported or missing file extension
    #[error("Invalid or missing file extension (expected .yml, .yaml, .toml or .json)")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// An analysis request: the contract snapshot plus the report header
/// identification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    /// Client name shown on the report header
    pub client_name: Option<String>,

    /// Consultant name shown on the report header
    pub consultant_name: Option<String>,

    /// The contract snapshot to analyze
    #[serde(flatten)]
    pub contract: ContractInput,
}

/// Parses a request from a YAML string.
pub fn parse_yaml(content: &str) -> Result<AnalysisRequest> {
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Parses a request from a TOML string.
pub fn parse_toml(content: &str) -> Result<AnalysisRequest> {
    Ok(toml::from_str(content)?)
}

/// Parses a request from a JSON string.
pub fn parse_json(content: &str) -> Result<AnalysisRequest> {
    Ok(serde_json::from_str(content)?)
}

/// Parses a request from a file, dispatching on the extension.
///
/// Supported extensions: `.yml`, `.yaml`, `.toml`, `.json`.
pub fn parse_file(path: &Path) -> Result<AnalysisRequest> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or(ParseError::InvalidExtension)?;

    let content = std::fs::read_to_string(path)?;

    match extension.as_str() {
        "yml" | "yaml" => parse_yaml(&content),
        "toml" => parse_toml(&content),
        "json" => parse_json(&content),
        _ => Err(ParseError::InvalidExtension),
    }
}

/// Parses a request from query-string pairs.
///
/// Values are taken verbatim (no percent decoding); empty values leave the
/// field at its default, mirroring how blank form fields behave. Unknown
/// keys are ignored so links stay forward compatible.
pub fn parse_query(query: &str) -> Result<AnalysisRequest> {
    let mut request = AnalysisRequest::default();

    for pair in query.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ParseError::InvalidQueryPair(pair.to_string()))?;
        if value.is_empty() {
            continue;
        }

        let contract = &mut request.contract;
        match key {
            "client_name" => request.client_name = Some(value.to_string()),
            "consultant_name" => request.consultant_name = Some(value.to_string()),
            "total_installments" => contract.total_installments = parse_value(key, value)?,
            "installments_paid" => contract.installments_paid = parse_value(key, value)?,
            "installment_value" => contract.installment_value = parse_value(key, value)?,
            "installments_late" => contract.installments_late = parse_value(key, value)?,
            "had_down_payment" => contract.had_down_payment = parse_value(key, value)?,
            "down_payment_value" => contract.down_payment_value = parse_value(key, value)?,
            "asset_value" => contract.asset_value = parse_value(key, value)?,
            "vehicle_year" => contract.vehicle_year = Some(parse_value(key, value)?),
            "bank_balance" => contract.bank_balance = parse_value(key, value)?,
            "financing_type" => {
                contract.financing_type = match value {
                    "vehicle" => FinancingType::Vehicle,
                    "real_estate" => FinancingType::RealEstate,
                    "machinery" => FinancingType::Machinery,
                    "other" => FinancingType::Other,
                    _ => {
                        return Err(ParseError::InvalidQueryValue {
                            field: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                }
            }
            _ => {}
        }
    }

    Ok(request)
}

/// Serializes a request into the shareable query-string form.
///
/// Emits every contract field plus the header names when present, in a
/// fixed order, so `parse_query` reads it back losslessly.
pub fn to_query(request: &AnalysisRequest) -> String {
    let contract = &request.contract;
    let mut pairs: Vec<String> = Vec::new();

    if let Some(client) = &request.client_name {
        pairs.push(format!("client_name={client}"));
    }
    if let Some(consultant) = &request.consultant_name {
        pairs.push(format!("consultant_name={consultant}"));
    }
    pairs.push(format!("total_installments={}", contract.total_installments));
    pairs.push(format!("installments_paid={}", contract.installments_paid));
    pairs.push(format!("installment_value={}", contract.installment_value));
    pairs.push(format!("installments_late={}", contract.installments_late));
    pairs.push(format!("had_down_payment={}", contract.had_down_payment));
    pairs.push(format!("down_payment_value={}", contract.down_payment_value));
    pairs.push(format!("asset_value={}", contract.asset_value));
    if let Some(year) = contract.vehicle_year {
        pairs.push(format!("vehicle_year={year}"));
    }
    pairs.push(format!("bank_balance={}", contract.bank_balance));
    let financing = match contract.financing_type {
        FinancingType::Vehicle => "vehicle",
        FinancingType::RealEstate => "real_estate",
        FinancingType::Machinery => "machinery",
        FinancingType::Other => "other",
    };
    pairs.push(format!("financing_type={financing}"));

    pairs.join("&")
}

fn parse_value<T: std::str::FromStr>(field: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| ParseError::InvalidQueryValue {
        field: field.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use settlement_core::ContractInputBuilder;

    #[test]
    fn test_parse_yaml_request() {
        let yaml = r#"
client_name: "Maria Silva"
consultant_name: "João"
total_installments: 48
installments_paid: 20
installment_value: 1000.0
installments_late: 2
financing_type: vehicle
"#;
        let request = parse_yaml(yaml).unwrap();
        assert_eq!(request.client_name.as_deref(), Some("Maria Silva"));
        assert_eq!(request.contract.total_installments, 48);
        assert_eq!(request.contract.financing_type, FinancingType::Vehicle);
        // Omitted fields fall back to defaults.
        assert_eq!(request.contract.bank_balance, 0.0);
    }

    #[test]
    fn test_parse_toml_request() {
        let toml = r#"
total_installments = 60
installments_paid = 30
installment_value = 850.5
had_down_payment = true
down_payment_value = 5000.0
financing_type = "real_estate"
"#;
        let request = parse_toml(toml).unwrap();
        assert_eq!(request.contract.total_installments, 60);
        assert!(request.contract.had_down_payment);
        assert_eq!(request.contract.financing_type, FinancingType::RealEstate);
        assert!(request.client_name.is_none());
    }

    #[test]
    fn test_parse_json_request() {
        let json = r#"{
            "total_installments": 12,
            "installment_value": 500.0,
            "vehicle_year": 2019
        }"#;
        let request = parse_json(json).unwrap();
        assert_eq!(request.contract.vehicle_year, Some(2019));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(parse_yaml("total_installments: [not a number").is_err());
    }

    #[test]
    fn test_parse_query_full() {
        let query = "client_name=Maria&total_installments=48&installments_paid=20\
                     &installment_value=1000&installments_late=2&financing_type=vehicle";
        let request = parse_query(query).unwrap();
        assert_eq!(request.client_name.as_deref(), Some("Maria"));
        assert_eq!(request.contract.total_installments, 48);
        assert_eq!(request.contract.installment_value, 1000.0);
        assert_eq!(request.contract.financing_type, FinancingType::Vehicle);
    }

    #[test]
    fn test_parse_query_skips_empty_and_unknown() {
        let query = "?total_installments=12&vehicle_year=&color=blue&installment_value=300";
        let request = parse_query(query).unwrap();
        assert_eq!(request.contract.total_installments, 12);
        assert!(request.contract.vehicle_year.is_none());
        assert_eq!(request.contract.installment_value, 300.0);
    }

    #[test]
    fn test_parse_query_rejects_bad_pairs() {
        assert!(matches!(
            parse_query("total_installments"),
            Err(ParseError::InvalidQueryPair(_))
        ));
        assert!(matches!(
            parse_query("total_installments=abc"),
            Err(ParseError::InvalidQueryValue { .. })
        ));
        assert!(matches!(
            parse_query("financing_type=boat"),
            Err(ParseError::InvalidQueryValue { .. })
        ));
    }

    #[test]
    fn test_query_round_trip() {
        let request = AnalysisRequest {
            client_name: Some("Maria".to_string()),
            consultant_name: None,
            contract: ContractInputBuilder::new(48, 1000.0)
                .installments_paid(20)
                .installments_late(2)
                .down_payment(5000.0)
                .asset_value(30000.0)
                .vehicle_year(2019)
                .bank_balance(26000.0)
                .financing_type(FinancingType::Vehicle)
                .build(),
        };

        let query = to_query(&request);
        let back = parse_query(&query).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_extension_dispatch() {
        let dir = std::env::temp_dir().join("settlement_parser_test");
        std::fs::create_dir_all(&dir).unwrap();

        let yml = dir.join("request.yml");
        std::fs::write(&yml, "total_installments: 10\ninstallment_value: 100.0\n").unwrap();
        assert_eq!(parse_file(&yml).unwrap().contract.total_installments, 10);

        let unknown = dir.join("request.csv");
        std::fs::write(&unknown, "").unwrap();
        assert!(matches!(
            parse_file(&unknown),
            Err(ParseError::InvalidExtension)
        ));
    }
}
