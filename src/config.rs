use crate::error::{AppError, Result};
use crate::weather::ForecastPeriod;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::info;

/// Range the pH input is restricted to.
pub const PH_INPUT_RANGE: (f64, f64) = (4.0, 9.0);

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub pest: PestConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_forecast_period")]
    pub forecast_period: String,
    #[serde(default = "default_ph")]
    pub ph: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            forecast_period: default_forecast_period(),
            ph: default_ph(),
        }
    }
}

fn default_location() -> String {
    "Nairobi".to_string()
}

fn default_forecast_period() -> String {
    ForecastPeriod::SevenDay.as_str().to_string()
}

fn default_ph() -> f64 {
    6.5
}

#[derive(Debug, Deserialize, Clone)]
pub struct AdviceConfig {
    /// pH assumed when assembling crop advice.
    #[serde(default = "default_ph")]
    pub demo_ph: f64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            demo_ph: default_ph(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PestConfig {
    #[serde(default, deserialize_with = "deserialize_seed")]
    pub seed: Option<u64>,
}

/// Custom deserializer that handles the seed as both number and string
///
/// Accepts:
/// - `seed: 42` (number)
/// - `seed: "42"` (string that parses to number)
/// - `seed: "${PEST_SEED}"` (env var substituted to either)
fn deserialize_seed<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SeedValue {
        Number(u64),
        String(String),
    }

    match Option::<SeedValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(SeedValue::Number(n)) => Ok(Some(n)),
        Some(SeedValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(SeedValue::String(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Invalid pest seed: '{}'", s))),
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageConfig {
    /// Glob patterns an uploaded image's file name must match.
    #[serde(default = "default_image_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            patterns: default_image_patterns(),
        }
    }
}

fn default_image_patterns() -> Vec<String> {
    vec!["*.jpg".to_string(), "*.jpeg".to_string(), "*.png".to_string()]
}

impl ImageConfig {
    /// Case-insensitive match of `file_name` against the configured patterns.
    pub fn matches_file(&self, file_name: &str) -> bool {
        let options = glob::MatchOptions {
            case_sensitive: false,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        self.patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches_with(file_name, options))
                .unwrap_or(false)
        })
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::load(path)?;
            info!("Configuration loaded from {}", path.display());
            Ok(config)
        } else {
            info!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let expanded = expand_env_vars(content)?;

        // An empty document deserializes to unit, not a mapping
        let config: Config = if expanded.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&expanded)
                .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))?
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// Checks for:
    /// - pH values inside the accepted input range
    /// - A forecast period the weather model knows
    /// - At least one valid image pattern
    fn validate(&self) -> Result<()> {
        let ph_fields = [
            ("defaults.ph", self.defaults.ph),
            ("advice.demo_ph", self.advice.demo_ph),
        ];

        for (field_name, value) in &ph_fields {
            if !(PH_INPUT_RANGE.0..=PH_INPUT_RANGE.1).contains(value) {
                return Err(AppError::Config(format!(
                    "{} must be between {:.1} and {:.1}, got {}",
                    field_name, PH_INPUT_RANGE.0, PH_INPUT_RANGE.1, value
                )));
            }
        }

        if self.defaults.location.trim().is_empty() {
            return Err(AppError::Config("defaults.location cannot be empty".to_string()));
        }

        if self.defaults.forecast_period.parse::<ForecastPeriod>().is_err() {
            return Err(AppError::Config(format!(
                "defaults.forecast_period '{}' must be one of: 7-day, 14-day, Seasonal",
                self.defaults.forecast_period
            )));
        }

        if self.images.patterns.is_empty() {
            return Err(AppError::Config(
                "images.patterns must list at least one pattern".to_string(),
            ));
        }

        for pattern in &self.images.patterns {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(AppError::Config(format!("Invalid image pattern '{}': {}", pattern, e)));
            }
        }

        Ok(())
    }
}

/// Substitute `${NAME}` references from the environment. Comment lines are
/// copied through untouched.
fn expand_env_vars(content: &str) -> Result<String> {
    let re = regex_lite::Regex::new(r"\$\{([^}]+)\}")
        .map_err(|e| AppError::Config(format!("Invalid env var pattern: {}", e)))?;

    let mut missing_vars = Vec::new();
    let mut lines = Vec::new();

    for line in content.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut expanded = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    expanded = expanded.replace(&cap[0], &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(expanded);
    }

    if !missing_vars.is_empty() {
        return Err(AppError::Config(format!(
            "Missing required environment variable{}: {}\n\n\
             To fix this:\n\
             1. Create a .env file in the project root\n\
             2. Set the missing variable{}: export {}=<value>\n\
             3. Or remove the reference from the config file",
            if missing_vars.len() > 1 { "s" } else { "" },
            missing_vars.join(", "),
            if missing_vars.len() > 1 { "s" } else { "" },
            missing_vars[0],
        )));
    }

    Ok(lines.join("\n"))
}
