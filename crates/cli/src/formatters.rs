//! Output formatting for command results.

use anyhow::{Result, bail};
use serde_json::Value;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact single-line JSON.
    Json,
    /// Human-readable indented JSON.
    Pretty,
}

impl OutputFormat {
    /// Parse an output format name.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => bail!("Unsupported output format '{}' (expected json or pretty)", other),
        }
    }

    /// Render a JSON payload in this format.
    pub fn render(self, value: &Value) -> Result<String> {
        let out = match self {
            Self::Json => serde_json::to_string(value)?,
            Self::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(out)
    }
}

/// Render a payload and print it to stdout.
pub fn emit(value: &Value, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    println!("{}", format.render(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_str_accepts_known_formats() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("PRETTY").unwrap(),
            OutputFormat::Pretty
        );
    }

    #[test]
    fn test_from_str_rejects_unknown_format() {
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_json_render_is_compact() {
        let value = json!({"power": [1, 2]});
        assert_eq!(
            OutputFormat::Json.render(&value).unwrap(),
            r#"{"power":[1,2]}"#
        );
    }

    #[test]
    fn test_pretty_render_is_indented() {
        let value = json!({"power": 1});
        let rendered = OutputFormat::Pretty.render(&value).unwrap();
        assert!(rendered.contains('\n'));
    }
}
