
//! Settings shared by all demos. Values are read from `superbible.toml` (if it exists) and can be
//! overridden from the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "superbible.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub timing: TimingConfig,
    /// Directory from which textures are loaded
    pub assets: PathBuf,
    /// Directory into which screenshots are written
    pub screenshots: PathBuf,
    /// Seed for the random scene layouts. A fixed default keeps scenes identical between runs.
    pub seed: u64,
    /// Exit after this many frames. Only set from the command line.
    #[serde(skip)]
    pub frame_limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frames shorter than this are padded out with a sleep. 0 disables sleeping.
    pub target_delta_ms: u64,
    /// Animation ticks per second
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            window: WindowConfig::default(),
            timing: TimingConfig::default(),
            assets: PathBuf::from("assets"),
            screenshots: PathBuf::from("."),
            seed: 0,
            frame_limit: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> WindowConfig {
        WindowConfig { width: 800, height: 600, vsync: true }
    }
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig { target_delta_ms: 16, tick_rate: 60 }
    }
}

impl Config {
    pub fn from_toml(source: &str, path: &Path) -> Result<Config> {
        toml::from_str(source).map_err(|source| Error::Config { path: path.to_owned(), source })
    }

    /// Loads the config file at the given path. If no path is given `superbible.toml` in the
    /// working directory is used, and a missing file just gives the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        match fs::read_to_string(path) {
            Ok(source) => {
                info!("Loading config from {}", path.display());
                Config::from_toml(&source, path)
            },
            Err(ref err) if err.kind() == io::ErrorKind::NotFound && !required => {
                debug!("No {} found, using default config", path.display());
                Ok(Config::default())
            },
            Err(err) => Err(Error::io(path, err)),
        }
    }
}

/// Command line arguments accepted by every demo
#[derive(Parser, Debug, Default)]
#[command(version, about = "OpenGL SuperBible demo")]
pub struct Args {
    /// Config file to load instead of ./superbible.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Enable or disable vsync
    #[arg(long)]
    pub vsync: Option<bool>,

    /// Directory from which textures are loaded
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Exit after rendering this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Seed for randomly placed scene objects
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Overrides the values in `config` with the ones given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width { config.window.width = width; }
        if let Some(height) = self.height { config.window.height = height; }
        if let Some(vsync) = self.vsync { config.window.vsync = vsync; }
        if let Some(ref assets) = self.assets { config.assets = assets.clone(); }
        if let Some(seed) = self.seed { config.seed = seed; }
        if let Some(frames) = self.frames { config.frame_limit = Some(frames); }
    }

    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply(&mut config);
        Ok(config)
    }
}

/// Logs at `info` by default. `RUST_LOG` overrides this as usual.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(800, config.window.width);
        assert_eq!(600, config.window.height);
        assert_eq!(16, config.timing.target_delta_ms);
        assert_eq!(60, config.timing.tick_rate);
        assert_eq!(PathBuf::from("assets"), config.assets);
    }

    #[test]
    fn partial_file() {
        let source = "
            seed = 7
            [window]
            width = 1024
        ";
        let config = Config::from_toml(source, Path::new("test.toml")).unwrap();

        assert_eq!(1024, config.window.width);
        assert_eq!(600, config.window.height);
        assert_eq!(60, config.timing.tick_rate);
        assert_eq!(7, config.seed);
    }

    #[test]
    fn invalid_file() {
        let err = Config::from_toml("[window]\nwidth = \"wide\"", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn missing_file() {
        let path = Path::new("does/not/exist.toml");
        assert!(matches!(Config::load(Some(path)), Err(Error::Io { .. })));
    }

    #[test]
    fn command_line_overrides() {
        let args = Args::parse_from(&["demo", "--width", "640", "--vsync", "false", "--seed", "3", "--frames", "10"]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(640, config.window.width);
        assert_eq!(600, config.window.height);
        assert!(!config.window.vsync);
        assert_eq!(3, config.seed);
        assert_eq!(Some(10), config.frame_limit);
    }
}
