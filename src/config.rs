use std::path::Path;

use crate::error::Error;

/// Environment variable overriding the configured documentation page
/// root. Read once at load time; everything downstream receives the
/// value as an explicit parameter.
pub const PAGE_ROOT_ENV: &str = "SCHEMADOC_PAGE_ROOT";

/// Rendering configuration loaded from `.schemadoc.toml`.
///
/// Defaults to no page-root prefix and an empty namespace marker; an
/// empty marker classifies every type as internal, the safe reading
/// for a single-universe doc set.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Namespace prefix marking qualified type names as internal to
    /// the documented schema universe.
    pub namespace_root: String,
    /// Directory prefix under which documentation pages are emitted.
    /// Empty means no prefix.
    pub page_root: String,
}

/// Raw TOML structure for `.schemadoc.toml`.
#[derive(serde::Deserialize)]
struct SchemadocTomlConfig {
    #[serde(default)]
    namespace_root: String,
    #[serde(default)]
    page_root: String,
}

impl Config {
    /// Load config from `.schemadoc.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist. Returns an error if
    /// the file exists but is malformed; a config the user wrote is
    /// never silently replaced by defaults. The `SCHEMADOC_PAGE_ROOT`
    /// environment variable, when set, overrides the file's page root.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".schemadoc.toml");
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => {
                let raw: SchemadocTomlConfig = toml::from_str(&content)?;
                Self {
                    namespace_root: raw.namespace_root,
                    page_root: raw.page_root,
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(Error::Io(e)),
        };

        if let Ok(page_root) = std::env::var(PAGE_ROOT_ENV) {
            config.page_root = page_root;
        }
        Ok(config)
    }
}
