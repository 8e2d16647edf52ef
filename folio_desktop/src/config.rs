use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Endpoint the contact form posts to when the config does not override it.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/xqawkbzr";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Whether the swarm field background animates.
    pub background_enabled: bool,

    /// Whether the hero globe animates.
    pub globe_enabled: bool,

    /// Seed the renderers in their reduced-detail form.
    pub reduced_detail: bool,

    /// Intensity multiplier for the swarm field. 1.0 is the resting level.
    pub audio_reactivity: f32,

    /// Endpoint the contact form posts to.
    pub contact_endpoint: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            background_enabled: true,
            globe_enabled: true,
            reduced_detail: false,
            audio_reactivity: 1.0,
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}

impl FolioConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config: FolioConfig = serde_yaml::from_str(&fs::read_to_string(path)?)?;
        // Hand-edited files may carry out-of-range values
        config.normalize();
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn get_config_path() -> String {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        format!("{home}/.folio/config.yaml")
    }

    /// Loads the config from the home path. A missing or unreadable file
    /// yields the defaults rather than an error.
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_from_file(Self::get_config_path()).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::get_config_path())
    }

    fn normalize(&mut self) {
        self.audio_reactivity = self.audio_reactivity.clamp(0.0, 2.0);
        if self.contact_endpoint.trim().is_empty() {
            self.contact_endpoint = DEFAULT_CONTACT_ENDPOINT.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_default() {
        let config = FolioConfig::default();

        assert!(config.background_enabled);
        assert!(config.globe_enabled);
        assert!(!config.reduced_detail);
        assert_eq!(config.audio_reactivity, 1.0);
        assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
    }

    #[test]
    fn test_save_and_load_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test_config.yaml");

        let original = FolioConfig {
            background_enabled: false,
            globe_enabled: true,
            reduced_detail: true,
            audio_reactivity: 0.5,
            contact_endpoint: "https://example.com/forms/abc".to_string(),
        };

        original.save_to_file(&config_path)?;
        assert!(config_path.exists());

        let loaded = FolioConfig::load_from_file(&config_path)?;

        assert_eq!(loaded.background_enabled, original.background_enabled);
        assert_eq!(loaded.globe_enabled, original.globe_enabled);
        assert_eq!(loaded.reduced_detail, original.reduced_detail);
        assert_eq!(loaded.audio_reactivity, original.audio_reactivity);
        assert_eq!(loaded.contact_endpoint, original.contact_endpoint);

        Ok(())
    }

    #[test]
    fn test_save_creates_parent_directories() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("nested").join("dir").join("config.yaml");

        assert!(!nested_path.parent().unwrap().exists());

        let config = FolioConfig::default();
        config.save_to_file(&nested_path)?;

        assert!(nested_path.exists());
        assert!(nested_path.parent().unwrap().exists());

        Ok(())
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "invalid: yaml: content: [").unwrap();

        let result = FolioConfig::load_from_file(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = FolioConfig::load_from_file("/path/that/does/not/exist/config.yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_reactivity_clamped_on_load() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        fs::write(
            temp_file.path(),
            "background_enabled: true\nglobe_enabled: true\nreduced_detail: false\naudio_reactivity: 9.0\ncontact_endpoint: \"https://example.com\"\n",
        )?;

        let config = FolioConfig::load_from_file(temp_file.path())?;
        assert_eq!(config.audio_reactivity, 2.0);

        Ok(())
    }

    #[test]
    fn test_blank_endpoint_falls_back_to_default() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        fs::write(
            temp_file.path(),
            "background_enabled: true\nglobe_enabled: true\nreduced_detail: false\naudio_reactivity: 1.0\ncontact_endpoint: \"  \"\n",
        )?;

        let config = FolioConfig::load_from_file(temp_file.path())?;
        assert_eq!(config.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);

        Ok(())
    }

    #[test]
    fn test_config_path_and_load_or_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::env::set_var("HOME", temp_dir.path());

        let config_path = FolioConfig::get_config_path();
        assert!(config_path.ends_with("/.folio/config.yaml"));

        // No file yet, so defaults come back
        let config = FolioConfig::load_or_default()?;
        assert!(config.background_enabled);
        assert_eq!(config.audio_reactivity, 1.0);

        // Saved settings survive the round trip through the home path
        let mut custom = FolioConfig::default();
        custom.reduced_detail = true;
        custom.save()?;

        let reloaded = FolioConfig::load_or_default()?;
        assert!(reloaded.reduced_detail);

        std::env::remove_var("HOME");
        Ok(())
    }

    #[test]
    fn test_config_serialization_roundtrip() -> Result<()> {
        let original = FolioConfig {
            background_enabled: true,
            globe_enabled: false,
            reduced_detail: false,
            audio_reactivity: 1.5,
            contact_endpoint: "https://example.com/forms/xyz".to_string(),
        };

        let yaml = serde_yaml::to_string(&original)?;
        let deserialized: FolioConfig = serde_yaml::from_str(&yaml)?;

        assert_eq!(deserialized.globe_enabled, original.globe_enabled);
        assert_eq!(deserialized.audio_reactivity, original.audio_reactivity);
        assert_eq!(deserialized.contact_endpoint, original.contact_endpoint);

        Ok(())
    }
}
