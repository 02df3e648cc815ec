use serde::{Deserialize, Serialize};

/// Converts a stored document to and from its text form.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Invalid YAML document: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse YAML: {}", e))
    }
}

/// A single unsigned number written in decimal, no delimiter.
/// Surrounding whitespace is tolerated on read.
#[derive(Default)]
pub struct DecimalSerializer;

impl ConfigSerializer<u32> for DecimalSerializer {
    fn serialize(&self, value: &u32) -> Result<String, String> {
        Ok(value.to_string())
    }

    fn deserialize(&self, content: &str) -> Result<u32, String> {
        content
            .trim()
            .parse()
            .map_err(|e| format!("Expected a decimal number, got {:?}: {}", content.trim(), e))
    }
}
