//! Per-tab actions.
//!
//! Each action takes the current [`UserSelection`], checks the fields that
//! tab requires and returns a finished [`Report`]. Nothing is remembered
//! between calls.

use crate::catalog::{Catalog, Season, SoilType};
use crate::config::{Config, PH_INPUT_RANGE};
use crate::error::{AppError, Result};
use crate::image::validate_image;
use crate::pest::PestModel;
use crate::report;
use crate::weather::{ForecastPeriod, WeatherModel};
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs collected from the front end for a single action.
#[derive(Debug, Clone, Default)]
pub struct UserSelection {
    pub soil_type: Option<String>,
    pub ph: Option<f64>,
    pub location: Option<String>,
    pub forecast_period: Option<String>,
    pub season: Option<String>,
    pub image_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    SoilAnalysis,
    WeatherForecast,
    PestIdentification,
    CropAdvice,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::SoilAnalysis => "Soil Analysis",
            Tab::WeatherForecast => "Weather Forecast",
            Tab::PestIdentification => "Pest Identification",
            Tab::CropAdvice => "Crop Advice",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One titled block of report text.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub title: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub tab: Tab,
    pub panes: Vec<Pane>,
}

impl Report {
    fn single(tab: Tab, title: &'static str, text: String) -> Self {
        Self {
            tab,
            panes: vec![Pane { title, text }],
        }
    }

    /// Text of the pane titled `title`, if present.
    pub fn pane(&self, title: &str) -> Option<&str> {
        self.panes
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.text.as_str())
    }
}

pub struct Advisor<R = StdRng> {
    config: Config,
    catalog: Catalog,
    weather: WeatherModel,
    pest_model: PestModel<R>,
}

impl Advisor<StdRng> {
    /// Advisor whose pest model is seeded from `config.pest.seed` when set.
    pub fn new(config: Config) -> Self {
        let pest_model = match config.pest.seed {
            Some(seed) => {
                info!("Pest model seeded with {}", seed);
                PestModel::seeded(seed)
            }
            None => PestModel::new(),
        };
        Self::with_pest_model(config, pest_model)
    }
}

impl<R: Rng> Advisor<R> {
    pub fn with_pest_model(config: Config, pest_model: PestModel<R>) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            weather: WeatherModel::new(),
            pest_model,
        }
    }

    pub fn dashboard(&self) -> Report {
        Report::single(
            Tab::Dashboard,
            "Dashboard",
            report::dashboard_report(&self.catalog),
        )
    }

    pub fn analyze_soil(&self, selection: &UserSelection) -> Result<Report> {
        let soil = required(selection.soil_type.as_deref(), "Please select a soil type")?;
        let soil = canonical_soil(soil);
        let ph = selection.ph.unwrap_or(self.config.defaults.ph);
        check_ph(ph)?;

        info!("Analyzing {} soil at pH {:.1}", soil, ph);
        Ok(Report::single(
            Tab::SoilAnalysis,
            "Soil Analysis Results",
            report::soil_analysis_report(&self.catalog, &soil, ph),
        ))
    }

    pub fn forecast(&self, selection: &UserSelection) -> Result<Report> {
        let location = required(
            Some(self.location_or_default(selection)),
            "Please enter a location",
        )?;
        let period = selection
            .forecast_period
            .as_deref()
            .unwrap_or(&self.config.defaults.forecast_period);

        info!("Forecast requested for {} ({})", location, period);
        let forecast = self.weather.predict(location, period);
        let recommendations = report::weather_recommendations(&forecast);

        Ok(Report {
            tab: Tab::WeatherForecast,
            panes: vec![
                Pane {
                    title: "Forecast",
                    text: forecast,
                },
                Pane {
                    title: "Recommendations",
                    text: recommendations.to_string(),
                },
            ],
        })
    }

    pub fn identify_pest(&mut self, selection: &UserSelection) -> Result<Report> {
        let path = selection
            .image_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| AppError::MissingInput("Please select an image first".to_string()))?;
        let path = validate_image(path, &self.config.images)?;

        let prediction = self.pest_model.predict(&path);
        info!("Identified '{}' in {}", prediction, path.display());
        if self.catalog.pest(prediction).is_none() {
            debug!("No pest record for '{}', using fallback text", prediction);
        }

        Ok(Report::single(
            Tab::PestIdentification,
            "Identification Results",
            report::pest_report(&self.catalog, prediction),
        ))
    }

    pub fn crop_advice(&self, selection: &UserSelection) -> Result<Report> {
        const MISSING: &str = "Please fill all fields";
        let location = required(Some(self.location_or_default(selection)), MISSING)?;
        let soil = canonical_soil(required(selection.soil_type.as_deref(), MISSING)?);
        let season = canonical_season(required(selection.season.as_deref(), MISSING)?);

        // Crop advice always uses the configured demo pH, never a live reading.
        let ph = self.config.advice.demo_ph;
        let forecast = self.weather.forecast(location, ForecastPeriod::Seasonal);

        info!(
            "Crop advice for {} ({} soil, {} season, pH {:.1})",
            location, soil, season, ph
        );
        Ok(Report::single(
            Tab::CropAdvice,
            "Crop Advice",
            report::crop_advice_report(&self.catalog, location, &soil, ph, &season, &forecast),
        ))
    }

    fn location_or_default<'a>(&'a self, selection: &'a UserSelection) -> &'a str {
        selection
            .location
            .as_deref()
            .unwrap_or(&self.config.defaults.location)
    }
}

/// Trimmed `value`, or a [`AppError::MissingInput`] carrying `message`.
fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingInput(message.to_string())),
    }
}

/// Known soil labels are normalised to their canonical spelling; anything
/// else passes through unchanged.
fn canonical_soil(soil: &str) -> String {
    soil.parse::<SoilType>()
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|_| soil.to_string())
}

fn canonical_season(season: &str) -> String {
    season
        .parse::<Season>()
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|_| season.to_string())
}

fn check_ph(ph: f64) -> Result<()> {
    if (PH_INPUT_RANGE.0..=PH_INPUT_RANGE.1).contains(&ph) {
        Ok(())
    } else {
        Err(AppError::InvalidData(format!(
            "pH must be between {:.1} and {:.1}, got {}",
            PH_INPUT_RANGE.0, PH_INPUT_RANGE.1, ph
        )))
    }
}
