//! Product record types.
//!
//! A product enters the system as a [`RawProductRecord`] (every field
//! optional, unknown keys ignored) and is turned into a [`NormalizedProduct`]
//! by the normalize stage. Both are plain data.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Default product name used when the raw record has none.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// A loosely-structured product description as supplied by the user.
///
/// Text fields, list elements and competitor prices accept any scalar
/// (`699` and `"699"` both become `"699"`), so JSON and YAML inputs read
/// the same. Collection fields must have the right shape; a string where
/// a list is expected is rejected when the record is parsed.
///
/// ```yaml
/// name: GlowBoost Vitamin C Serum
/// concentration: 10% Vitamin C
/// skin_type: [Oily, Combination]
/// ingredients: [Vitamin C, Hyaluronic Acid]
/// benefits: [Brightening, Fades dark spots]
/// usage: Apply 2-3 drops in the morning before sunscreen
/// side_effects: Mild tingling for sensitive skin
/// price: ₹699
/// competitor_products:
///   PureGlow Serum: ₹899
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProductRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub concentration: Option<String>,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub skin_type: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,

    /// Free-form usage text (becomes `usage_instructions`)
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// Competitor name to competitor price, in input order
    #[serde(default, deserialize_with = "lenient_map", skip_serializing_if = "Option::is_none")]
    pub competitor_products: Option<IndexMap<String, String>>,
}

/// The canonical product representation shared by every later stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedProduct {
    pub product_name: String,
    pub concentration: String,
    pub skin_type: Vec<String>,
    pub ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub usage_instructions: String,
    pub side_effects: String,
    pub price: String,
    pub competitor_products: IndexMap<String, String>,
}

#[derive(thiserror::Error, Debug)]
pub enum ProductError {
    #[error("failed to read product file {0}: {1}")]
    Io(std::path::PathBuf, std::io::Error),

    #[error("invalid JSON product record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML product record: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported product file extension '{0}' (expected json, yaml or yml)")]
    UnsupportedFormat(String),
}

impl RawProductRecord {
    /// Parse a record from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ProductError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a record from YAML text.
    pub fn from_yaml_str(s: &str) -> Result<Self, ProductError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parse a record, picking the format from the file extension.
    pub fn parse_for_path(path: &Path, content: &str) -> Result<Self, ProductError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Self::from_json_str(content),
            "yaml" | "yml" => Self::from_yaml_str(content),
            other => Err(ProductError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Read and parse a record from disk.
    pub fn load(path: &Path) -> Result<Self, ProductError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProductError::Io(path.to_path_buf(), e))?;
        Self::parse_for_path(path, &content)
    }
}

/// A scalar read as text.
struct Text(String);

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        scalar_text(value).map(Text).map_err(D::Error::custom)
    }
}

fn scalar_text(value: serde_json::Value) -> Result<String, &'static str> {
    use serde_json::Value;

    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err("expected text, found null"),
        Value::Array(_) => Err("expected text, found a list"),
        Value::Object(_) => Err("expected text, found a mapping"),
    }
}

/// Accept any scalar as text; `null` counts as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Text>::deserialize(deserializer)?.map(|t| t.0))
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Text>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(|t| t.0).collect()))
}

fn lenient_map<'de, D>(deserializer: D) -> Result<Option<IndexMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<IndexMap<String, Text>>::deserialize(deserializer)?;
    Ok(entries.map(|entries| entries.into_iter().map(|(k, v)| (k, v.0)).collect()))
}
