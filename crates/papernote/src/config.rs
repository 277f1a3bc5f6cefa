//! User configuration.
//!
//! Everything has a default, so no configuration file is needed. When one exists it is
//! a TOML file; any field may be left out:
//!
//! ```toml
//! registry_endpoint = "https://api.crossref.org/works/{doi}"
//! doi_prefixes      = ["https://doi.org/", "doi:"]
//! mailto            = "me@example.org"
//! template_path     = "/home/me/notes/paper_template.md"
//!
//! [journal_abbreviations]
//! "Phys. Rev. X" = "PRX"
//! ```

use super::*;

/// Registry lookup endpoint; `{doi}` is replaced by the bare DOI.
pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://api.crossref.org/works/{doi}";

/// Prefixes stripped from an identifier to get a bare DOI.
pub const DEFAULT_DOI_PREFIXES: [&str; 5] =
  ["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "http://dx.doi.org/", "doi:"];

/// Settings for a [`Papernote`] instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Registry endpoint template containing `{doi}`
  pub registry_endpoint:     String,
  /// Prefixes removed from DOI identifiers, first match wins
  pub doi_prefixes:          Vec<String>,
  /// Contact address sent with registry requests
  pub mailto:                Option<String>,
  /// Template file, instead of the one next to the executable
  pub template_path:         Option<PathBuf>,
  /// Extra journal short names, merged over the built-in table
  pub journal_abbreviations: BTreeMap<String, String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      registry_endpoint:     DEFAULT_REGISTRY_ENDPOINT.to_string(),
      doi_prefixes:          DEFAULT_DOI_PREFIXES.iter().map(ToString::to_string).collect(),
      mailto:                None,
      template_path:         None,
      journal_abbreviations: BTreeMap::new(),
    }
  }
}

impl FromStr for Config {
  type Err = PapernoteError;

  fn from_str(s: &str) -> Result<Self> {
    let config: Self = toml::from_str(s)?;
    if !config.registry_endpoint.contains("{doi}") {
      return Err(PapernoteError::Config(format!(
        "registry_endpoint \"{}\" has no {{doi}} placeholder",
        config.registry_endpoint
      )));
    }
    Ok(config)
  }
}

impl Config {
  /// Returns the default configuration file location.
  ///
  /// - On Linux: `~/.config/papernote/config.toml`
  /// - On macOS: `~/Library/Application Support/papernote/config.toml`
  /// - On Windows: `%APPDATA%\papernote\config.toml`
  /// - Fallback: `./papernote/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("papernote").join("config.toml")
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    std::fs::read_to_string(path)?.parse()
  }

  /// Reads a configuration file if it exists, otherwise returns the defaults.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Sets the template file.
  pub fn with_template_path(mut self, path: impl AsRef<Path>) -> Self {
    self.template_path = Some(path.as_ref().to_path_buf());
    self
  }

  /// Sets the contact address sent to the registry.
  pub fn with_mailto(mut self, mailto: &str) -> Self {
    self.mailto = Some(mailto.to_string());
    self
  }

  /// Sets the registry endpoint template.
  pub fn with_registry_endpoint(mut self, endpoint: &str) -> Self {
    self.registry_endpoint = endpoint.to_string();
    self
  }

  /// Adds a journal short name.
  pub fn with_journal_abbreviation(mut self, journal: &str, code: &str) -> Self {
    self.journal_abbreviations.insert(journal.to_string(), code.to_string());
    self
  }

  /// The `User-Agent` sent with every request.
  pub fn user_agent(&self) -> String {
    let agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
    match &self.mailto {
      Some(mailto) => format!("{agent} (mailto:{mailto})"),
      None => agent.to_string(),
    }
  }
}
