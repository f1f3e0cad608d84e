//! Core configuration.

use pipe_trait::Pipe ;
use serde::Deserialize ;
use thiserror::Error ;



/// Controls how [`Core::init`]( crate::Core::init ) treats missing dependencies.
///
/// | `auto_load_dependencies` | `allow_unsatisfied` | Missing dependency |
/// |--------------------------|---------------------|--------------------|
/// | `true` (default)         | `false` (default)   | defaults loaded; failure aborts `init` |
/// | `true`                   | `true`              | defaults loaded; failure drops the dependent |
/// | `false`                  | either              | nothing loaded; the dependent is dropped |
///
/// With `allow_unsatisfied`, a plugin whose own `init` fails is dropped as well
/// instead of aborting.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Deserialize )]
#[serde( default, deny_unknown_fields )]
pub struct CoreConfig {
    /// Load default providers for dependencies nothing loaded satisfies.
    pub auto_load_dependencies: bool,
    /// Drop plugins with unresolvable dependencies instead of failing.
    pub allow_unsatisfied: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self { auto_load_dependencies: true, allow_unsatisfied: false }
    }
}

/// Error parsing a [`CoreConfig`] document.
#[derive( Error, Debug )]
pub enum ConfigError {
    #[error( "Invalid core configuration: {0}" )] Toml( #[from] toml::de::Error ),
}

#[derive( Deserialize, Default )]
#[serde( default )]
struct ConfigDocument {
    core: CoreConfig,
}

impl CoreConfig {

    /// No automatic loading: plugins with missing dependencies are dropped.
    pub fn strict() -> Self {
        Self { auto_load_dependencies: false, allow_unsatisfied: true }
    }

    pub fn with_auto_load_dependencies( mut self, enabled: bool ) -> Self {
        self.auto_load_dependencies = enabled ;
        self
    }

    pub fn with_allow_unsatisfied( mut self, enabled: bool ) -> Self {
        self.allow_unsatisfied = enabled ;
        self
    }

    /// Reads the `[core]` table of a TOML document. Other tables are ignored,
    /// so the core can share a file with the host's own settings. A missing
    /// table or key keeps its default.
    ///
    /// ```
    /// use plugin_link::CoreConfig ;
    ///
    /// let config = CoreConfig::from_toml_str( r#"
    ///     [core]
    ///     auto_load_dependencies = false
    ///
    ///     [ocr]
    ///     language = "eng"
    /// "# ).unwrap();
    /// assert!( !config.auto_load_dependencies );
    /// assert!( !config.allow_unsatisfied );
    /// ```
    ///
    /// # Errors
    /// Fails on malformed TOML, on wrongly typed values, and on unknown keys
    /// inside `[core]`.
    pub fn from_toml_str( document: &str ) -> Result<Self, ConfigError> {
        document
            .pipe( toml::from_str::<ConfigDocument> )
            .map(| document | document.core )
            .map_err( ConfigError::from )
    }

}
