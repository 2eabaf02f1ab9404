use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use serde::{Deserialize, Serialize};
use signpost_markdown::SidebarItem;

use crate::{
  error::ConfigError,
  navigation::{NavigationSection, SidebarSpec},
  search::SearchConfig,
};

/// Header links rendered above the service navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderConfig {
  /// Name of the service shown next to the navigation.
  pub service_name: Option<String>,

  /// Site-root relative link for the service name.
  pub service_href: String,
}

impl Default for HeaderConfig {
  fn default() -> Self {
    Self {
      service_name: None,
      service_href: "/".to_string(),
    }
  }
}

/// Configuration for a Signpost site.
///
/// [`SiteConfig`] describes where the site is deployed, where its markdown
/// sources live, the ordered navigation sections and the search client.
/// It is loaded from a TOML or JSON file and can be adjusted with
/// `KEY=VALUE` overrides from the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
  /// Deployment prefix of the site (e.g. `/interactive-map/`).
  pub base_url: String,

  /// Directory holding the markdown sources for `auto` sidebars.
  pub docs_dir: PathBuf,

  /// Number of threads used while resolving auto sidebars.
  pub jobs: Option<usize>,

  /// Header configuration.
  pub header: HeaderConfig,

  /// Search client configuration.
  pub search: SearchConfig,

  /// Top-level navigation sections, in display order.
  pub navigation: Vec<NavigationSection>,
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      base_url:   "/".to_string(),
      docs_dir:   PathBuf::from("docs"),
      jobs:       None,
      header:     HeaderConfig::default(),
      search:     SearchConfig::default(),
      navigation: Vec::new(),
    }
  }
}

impl SiteConfig {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    let parsed = match ext.to_lowercase().as_str() {
      "json" => Self::from_json_str(&content),
      "toml" => Self::from_toml_str(&content),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )));
      },
    };

    parsed.map_err(|e| {
      ConfigError::Config(format!(
        "Failed to parse config from {}: {}",
        path.display(),
        e
      ))
    })
  }

  /// # Errors
  ///
  /// Returns an error if the document is not a valid TOML config.
  pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(content)?)
  }

  /// # Errors
  ///
  /// Returns an error if the document is not a valid JSON config.
  pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(content)?)
  }

  /// Load configuration from the given files, or a discovered one, then apply
  /// `KEY=VALUE` overrides.
  ///
  /// Files are merged in order, later files taking precedence. With no files
  /// and nothing discovered, defaults are used.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged = Self::from_file(first)?;
      for path in rest {
        merged.merge(Self::from_file(path)?);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }
      merged
    } else if let Some(discovered) = Self::find_config_file() {
      log::info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      log::debug!("No config file found, using defaults");
      Self::default()
    };

    config.apply_overrides(config_overrides)?;
    Ok(config)
  }

  /// Search for config files in the current directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok()?;
        Self::find_config_file_in(&current_dir)
      })
      .clone()
  }

  /// Search `dir` for one of the well-known config file names.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    const CONFIG_FILENAMES: [&str; 4] = [
      "signpost.toml",
      "signpost.json",
      ".signpost.toml",
      ".signpost.json",
    ];

    CONFIG_FILENAMES
      .iter()
      .map(|name| dir.join(name))
      .find(|path| path.exists())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: other's [`Some`] value replaces this one
  /// - navigation: other's list replaces this one when it is not empty
  /// - plain fields: other's value replaces this one when it differs from the
  ///   default
  pub fn merge(&mut self, other: Self) {
    let defaults = Self::default();

    if other.base_url != defaults.base_url {
      self.base_url = other.base_url;
    }
    if other.docs_dir != defaults.docs_dir {
      self.docs_dir = other.docs_dir;
    }
    if other.jobs.is_some() {
      self.jobs = other.jobs;
    }
    if other.header.service_name.is_some() {
      self.header.service_name = other.header.service_name;
    }
    if other.header.service_href != defaults.header.service_href {
      self.header.service_href = other.header.service_href;
    }
    if other.search != defaults.search {
      self.search = other.search;
    }
    if !other.navigation.is_empty() {
      self.navigation = other.navigation;
    }
  }

  /// Apply `KEY=VALUE` overrides, typically from the command line.
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&[
  ///     "search.enable=false".to_string(),
  ///     "base_url=/handbook/".to_string(),
  /// ])?;
  /// ```
  ///
  /// # Errors
  ///
  /// Returns an error for malformed entries, unknown keys or values that do
  /// not parse.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
      "base_url" => self.base_url = value.to_string(),
      "docs_dir" => self.docs_dir = PathBuf::from(value),
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          Some(value.parse().map_err(|e| {
            ConfigError::Config(format!("Invalid value for 'jobs': {e}"))
          })?)
        };
      },
      "header.service_name" => {
        self.header.service_name =
          (!value.is_empty()).then(|| value.to_string());
      },
      "header.service_href" => self.header.service_href = value.to_string(),
      "search.enable" => {
        self.search.enable = value.parse().map_err(|_| {
          ConfigError::Config(format!(
            "Invalid value for 'search.enable': '{value}'. Expected true or \
             false"
          ))
        })?;
      },
      "search.index_url" => self.search.index_url = value.to_string(),
      "search.dir" => self.search.dir = value.to_string(),
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown config key: '{key}'"
        )));
      },
    }

    log::debug!("Applied config override {key}={value}");
    Ok(())
  }

  /// A starter configuration showing every sidebar style.
  #[must_use]
  pub fn example() -> Self {
    Self {
      header: HeaderConfig {
        service_name: Some("My service".to_string()),
        ..HeaderConfig::default()
      },
      navigation: vec![
        NavigationSection {
          href:    "/".to_string(),
          text:    "Home".to_string(),
          sidebar: None,
        },
        NavigationSection {
          href:    "/guide".to_string(),
          text:    "Guide".to_string(),
          sidebar: Some(SidebarSpec::Manual(vec![
            SidebarItem::new("Installation", "install"),
            SidebarItem::new("Usage", "usage")
              .with_items(vec![SidebarItem::new("Options", "options")]),
          ])),
        },
        NavigationSection {
          href:    "/api".to_string(),
          text:    "API reference".to_string(),
          sidebar: Some(SidebarSpec::Auto),
        },
      ],
      ..Self::default()
    }
  }

  /// Write [`SiteConfig::example`] to `path` as TOML or JSON.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unknown, serialization fails or the
  /// file cannot be written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let example = Self::example();
    let content = match format {
      "toml" => {
        toml::to_string_pretty(&example)
          .map_err(|e| ConfigError::Config(e.to_string()))?
      },
      "json" => serde_json::to_string_pretty(&example)?,
      other => {
        return Err(ConfigError::Config(format!(
          "Unsupported config format: {other}"
        )));
      },
    };

    fs::write(path, content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
