use std::fs;
use std::path::Path;
use anyhow::Result;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config_manager::main::Config;

/// Read a YAML or JSON configuration file with environment variable substitution
pub fn read_config_file(config_path: &str) -> Result<Value> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = load_text_file_with_guess_encoding(config_path)?;
    if content.trim().is_empty() {
        anyhow::bail!("Configuration file is empty: {}", config_path);
    }

    let content = substitute_env_vars(&content)?;

    let path_lower = config_path.to_lowercase();
    let value = if path_lower.ends_with(".json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    debug!("Parsed configuration file: {}", config_path);
    Ok(value)
}

/// Replace `${VAR_NAME}` with the variable's value; unknown variables are left as-is
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: &Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data.clone())?;
    Ok(config)
}

/// Load text file, stripping a UTF-8 BOM and decoding UTF-16 when one is present
pub fn load_text_file_with_guess_encoding(file_path: &str) -> Result<String> {
    let bytes = fs::read(file_path)?;

    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(&bytes) {
        let (cow, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return Ok(cow.into_owned());
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            // Legacy files saved from Windows editors
            let (cow, _, _) = encoding_rs::WINDOWS_1252.decode(e.as_bytes());
            Ok(cow.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn loads_yaml_with_defaults_for_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.yaml");
        fs::write(
            &path,
            "system_config:\n  port: 9000\ntranslator_config:\n  download_conditions:\n    require_wifi: false\n",
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.system_config.port, 9000);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert!(!config.translator_config.download_conditions.require_wifi);
        assert_eq!(config.asr_config.prompt, "Please speak now");
    }

    #[test]
    fn loads_json_with_bom() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.json");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(br#"{"asr_config": {"language": "vi-VN"}}"#);
        fs::write(&path, bytes).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.asr_config.language, "vi-VN");
        assert!(config.translator_config.download_conditions.require_wifi);
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("LINGO_BRIDGE_TEST_URL", "http://engine:9999");
        let out = substitute_env_vars("url: ${LINGO_BRIDGE_TEST_URL}\nother: ${LINGO_BRIDGE_UNSET_VAR}").unwrap();
        assert_eq!(out, "url: http://engine:9999\nother: ${LINGO_BRIDGE_UNSET_VAR}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(read_config_file(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn load_first_falls_back_to_defaults() {
        let (config, loaded) = Config::load_first(&["/definitely/not/here.yaml".to_string()]);
        assert!(loaded.is_none());
        assert_eq!(config.system_config.port, 12393);
    }
}
