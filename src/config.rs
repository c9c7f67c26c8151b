use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from `TVDASH_`-prefixed environment
/// variables (a `.env` file is honoured).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// CSV file loaded at startup
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("tv_shows.csv")
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    860.0
}

impl Config {
    /// Load configuration from the environment. The first command-line
    /// argument, when given, replaces `dataset_path`.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let vars: Vec<(String, String)> = std::env::vars().collect();
        Self::from_vars(vars, std::env::args().nth(1))
    }

    fn from_vars(
        vars: Vec<(String, String)>,
        path_arg: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = envy::prefixed("TVDASH_")
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        if let Some(path) = path_arg {
            config.dataset_path = PathBuf::from(path);
        }
        Ok(config)
    }
}
