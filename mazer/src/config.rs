//! Configuration file handling.
//!
//! Settings come from, in order of precedence: command-line flags, the file
//! given with `--config`, `mazer.toml` in the working directory, and the
//! built-in defaults.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use mazer_crossterm::Glyphs;
use serde::Deserialize;

use crate::cli::Args;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_FILE: &str = "mazer.toml";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Flooding frames per second; 0 = no delay.
    pub fps: u32,
    /// Show the live flooding view.
    pub flood: bool,
    /// Print the path and the rendered maze.
    pub print_path: bool,
    pub color: bool,
    /// Seed for the random frontier. Drawn from OS entropy when absent.
    pub seed: Option<u64>,
    pub glyphs: Glyphs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 20,
            flood: true,
            print_path: true,
            color: false,
            seed: None,
            glyphs: Glyphs::default(),
        }
    }
}

impl Config {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: None,
            source,
        })
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Find the configuration for this run.
    ///
    /// An explicit file must load. The implicit [`DEFAULT_FILE`] is optional,
    /// and a broken one only costs a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = Path::new(DEFAULT_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path).or_else(|e| {
            log::warn!("{e}; using default configuration");
            Ok(Self::default())
        })
    }

    /// Let command-line flags override file settings.
    pub fn apply(&mut self, args: &Args) {
        if let Some(fps) = args.fps {
            self.fps = fps;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if args.no_flood || args.json || args.compare {
            self.flood = false;
        }
        if args.no_path {
            self.print_path = false;
        }
        if args.color {
            self.color = true;
        }
    }
}

/// Errors from reading a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: Option<PathBuf>,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "can not read config \"{}\": {source}", path.display())
            }
            Self::Parse {
                path: Some(path),
                source,
            } => write!(f, "invalid config \"{}\": {source}", path.display()),
            Self::Parse { path: None, source } => write!(f, "invalid config: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn full_document() {
        let c = Config::from_toml(
            r#"
fps = 0
flood = false
print_path = false
color = true
seed = 42

[glyphs]
opened = "+"
end = "G"
"#,
        )
        .unwrap();
        assert_eq!(c.fps, 0);
        assert!(!c.flood && !c.print_path && c.color);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.glyphs.opened, '+');
        assert_eq!(c.glyphs.end, 'G');
        assert_eq!(c.glyphs.closed, '.');
        assert_eq!(c.glyphs.start, 'S');
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_toml("speed = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn bad_value_is_rejected() {
        assert!(Config::from_toml("fps = \"fast\"").is_err());
        assert!(Config::from_toml("[glyphs]\nopened = \"oo\"").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::resolve(Some(Path::new("/nonexistent/mazer.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/mazer.toml"));
    }

    #[test]
    fn explicit_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        std::fs::write(&path, "fps = 5\ncolor = true\n").unwrap();
        let c = Config::resolve(Some(path.as_path())).unwrap();
        assert_eq!(c.fps, 5);
        assert!(c.color);
        assert!(c.flood);
    }

    #[test]
    fn flags_override_file() {
        let mut c = Config {
            seed: Some(1),
            ..Config::default()
        };
        let args = Args::try_parse_from([
            "mazer", "m", "bfs", "--fps", "60", "--seed", "9", "--no-path", "--color",
        ])
        .unwrap();
        c.apply(&args);
        assert_eq!(c.fps, 60);
        assert_eq!(c.seed, Some(9));
        assert!(!c.print_path);
        assert!(c.color);
        assert!(c.flood);

        let args = Args::try_parse_from(["mazer", "m", "bfs", "--json"]).unwrap();
        c.apply(&args);
        assert!(!c.flood);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let mut c = Config {
            fps: 3,
            color: true,
            seed: Some(11),
            ..Config::default()
        };
        let before = c.clone();
        let args = Args::try_parse_from(["mazer", "m", "dfs"]).unwrap();
        c.apply(&args);
        assert_eq!(c, before);
    }
}
