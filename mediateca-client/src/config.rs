use serde::{Deserialize, Serialize};

/// Process-wide client configuration, resolved once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration: environment wins over the on-disk file, which
    /// wins over the built-in default.
    pub fn load() -> Self {
        if let Ok(url) = std::env::var("MEDIATECA_SERVER_URL")
            && !url.trim().is_empty()
        {
            return Self { server_url: url };
        }
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("mediateca").join("config.json");
            if config_path.exists()
                && let Ok(content) = std::fs::read_to_string(&config_path)
                && let Ok(config) = serde_json::from_str(&content)
            {
                return config;
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("mediateca");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}
