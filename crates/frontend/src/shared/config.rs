use serde::Deserialize;

/// `localStorage` key holding an optional TOML override
pub const CONFIG_STORAGE_KEY: &str = "nlsql.config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub chart: ChartStyle,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means same origin as the page
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartStyle {
    pub canvas_id: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[logging]
level = "debug"

[chart]
canvas_id = "chartCanvas"
background_color = "rgba(54, 162, 235, 0.6)"
border_color = "rgba(54, 162, 235, 1)"
border_width = 1
"#;

impl ClientConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // The embedded default is covered by tests
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            api: ApiConfig {
                base_url: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            chart: ChartStyle {
                canvas_id: "chartCanvas".to_string(),
                background_color: "rgba(54, 162, 235, 0.6)".to_string(),
                border_color: "rgba(54, 162, 235, 1)".to_string(),
                border_width: 1,
            },
        })
    }
}

/// Load configuration
///
/// Search order:
/// 1. TOML stored in `localStorage` under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to embedded default config
///
/// Runs before the logger is installed, so problems go to the console directly.
pub fn load_config() -> ClientConfig {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    if let Some(contents) = stored {
        match ClientConfig::parse(&contents) {
            Ok(config) => return config,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("Ignoring invalid {}: {}", CONFIG_STORAGE_KEY, e).into(),
                );
            }
        }
    }

    ClientConfig::default()
}
