//! Decision rules behind the soil and crop reports.

use crate::catalog::{Catalog, CropRecord, Rainfall};
use std::fmt;

/// Bounds of the optimal pH band, inclusive.
pub const OPTIMAL_PH: (f64, f64) = (6.0, 7.5);

/// Band used by [`is_ph_suitable`], inclusive.
pub const CROP_PH_RANGE: (f64, f64) = (5.5, 7.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhStatus {
    Optimal,
    Acidic,
    Alkaline,
}

impl PhStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhStatus::Optimal => "optimal",
            PhStatus::Acidic => "acidic (needs lime)",
            PhStatus::Alkaline => "alkaline (needs sulfur)",
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify_ph(ph: f64) -> PhStatus {
    if (OPTIMAL_PH.0..=OPTIMAL_PH.1).contains(&ph) {
        PhStatus::Optimal
    } else if ph < OPTIMAL_PH.0 {
        PhStatus::Acidic
    } else {
        PhStatus::Alkaline
    }
}

pub fn ph_recommendation(ph: f64) -> &'static str {
    match classify_ph(ph) {
        PhStatus::Acidic => "Apply agricultural lime to raise pH",
        PhStatus::Alkaline => "Apply elemental sulfur to lower pH",
        PhStatus::Optimal => "pH is in optimal range, no adjustment needed",
    }
}

/// Fertilizer for a soil label. Unknown labels get the balanced default.
///
/// `_ph` is part of the signature but does not affect the result.
pub fn fertilizer_recommendation(soil: &str, _ph: f64) -> &'static str {
    match soil {
        "Sandy" => "Slow-release nitrogen fertilizer",
        "Clay" => "Phosphorus-rich fertilizer",
        _ => "Balanced NPK fertilizer",
    }
}

/// Names of crops that grow in `soil`, in catalog order.
pub fn crops_for_soil<'a>(catalog: &'a Catalog, soil: &str) -> Vec<&'a str> {
    catalog
        .crops()
        .iter()
        .filter(|crop| crop.accepts_soil(soil))
        .map(|crop| crop.name)
        .collect()
}

/// In the dry season only low or medium rainfall crops qualify.
pub fn is_season_suitable(season: &str, crop: &CropRecord) -> bool {
    if season == "Dry" {
        matches!(crop.rainfall, Rainfall::Low | Rainfall::Medium)
    } else {
        true
    }
}

/// Same band for every crop.
pub fn is_ph_suitable(ph: f64, _crop: &CropRecord) -> bool {
    (CROP_PH_RANGE.0..=CROP_PH_RANGE.1).contains(&ph)
}

pub fn crop_details(crop: &CropRecord) -> String {
    let soils: Vec<&str> = crop.soils.iter().map(|s| s.as_str()).collect();
    format!(
        "Prefers {} rainfall, temp range {}–{}°C, best in {} soil",
        crop.rainfall,
        crop.temp_range.0,
        crop.temp_range.1,
        soils.join(", ")
    )
}

/// Crops passing the soil, pH and season checks together.
pub fn recommended_crops<'a>(
    catalog: &'a Catalog,
    soil: &str,
    ph: f64,
    season: &str,
) -> Vec<&'a CropRecord> {
    catalog
        .crops()
        .iter()
        .filter(|crop| {
            crop.accepts_soil(soil) && is_ph_suitable(ph, crop) && is_season_suitable(season, crop)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ph_boundaries() {
        assert_eq!(classify_ph(6.0), PhStatus::Optimal);
        assert_eq!(classify_ph(7.5), PhStatus::Optimal);
        assert_eq!(classify_ph(6.5), PhStatus::Optimal);
        assert_eq!(classify_ph(5.99), PhStatus::Acidic);
        assert_eq!(classify_ph(4.0), PhStatus::Acidic);
        assert_eq!(classify_ph(7.51), PhStatus::Alkaline);
        assert_eq!(classify_ph(9.0), PhStatus::Alkaline);
    }

    #[test]
    fn test_ph_status_labels() {
        assert_eq!(PhStatus::Acidic.to_string(), "acidic (needs lime)");
        assert_eq!(PhStatus::Alkaline.to_string(), "alkaline (needs sulfur)");
    }

    #[test]
    fn test_ph_recommendation() {
        assert_eq!(ph_recommendation(5.0), "Apply agricultural lime to raise pH");
        assert_eq!(ph_recommendation(8.0), "Apply elemental sulfur to lower pH");
        assert_eq!(
            ph_recommendation(7.0),
            "pH is in optimal range, no adjustment needed"
        );
    }

    #[test]
    fn test_fertilizer_ignores_ph() {
        assert_eq!(fertilizer_recommendation("Sandy", 4.0), "Slow-release nitrogen fertilizer");
        assert_eq!(fertilizer_recommendation("Sandy", 9.0), "Slow-release nitrogen fertilizer");
        assert_eq!(fertilizer_recommendation("Clay", 6.5), "Phosphorus-rich fertilizer");
        assert_eq!(fertilizer_recommendation("Peaty", 6.5), "Balanced NPK fertilizer");
        assert_eq!(fertilizer_recommendation("Gravel", 6.5), "Balanced NPK fertilizer");
    }

    #[test]
    fn test_crops_for_soil() {
        let catalog = Catalog::new();
        assert_eq!(crops_for_soil(&catalog, "Clay"), vec!["Wheat", "Rice"]);
        assert_eq!(crops_for_soil(&catalog, "Sandy"), vec!["Beans"]);
        assert_eq!(crops_for_soil(&catalog, "Loamy"), vec!["Maize", "Wheat", "Beans"]);
        assert!(crops_for_soil(&catalog, "Peaty").is_empty());
    }

    #[test]
    fn test_dry_season_excludes_high_rainfall() {
        let catalog = Catalog::new();
        let suitable: Vec<&str> = catalog
            .crops()
            .iter()
            .filter(|c| is_season_suitable("Dry", c))
            .map(|c| c.name)
            .collect();
        assert_eq!(suitable, vec!["Maize", "Wheat", "Beans"]);
    }

    #[test]
    fn test_other_seasons_accept_everything() {
        let catalog = Catalog::new();
        for season in ["Rainy", "Planting", "Harvest", "anything"] {
            assert!(catalog.crops().iter().all(|c| is_season_suitable(season, c)));
        }
    }

    #[test]
    fn test_ph_suitability_is_crop_independent() {
        let catalog = Catalog::new();
        assert!(catalog.crops().iter().all(|c| is_ph_suitable(6.5, c)));
        assert!(catalog.crops().iter().all(|c| is_ph_suitable(5.5, c)));
        assert!(catalog.crops().iter().all(|c| !is_ph_suitable(7.6, c)));
    }

    #[test]
    fn test_crop_details() {
        let maize = Catalog::new().crop("Maize").unwrap();
        assert_eq!(
            crop_details(maize),
            "Prefers medium rainfall, temp range 18–32°C, best in Loamy, Silty soil"
        );
    }

    #[test]
    fn test_recommended_crops_clay_dry() {
        let catalog = Catalog::new();
        let names: Vec<&str> = recommended_crops(&catalog, "Clay", 6.5, "Dry")
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Wheat"]);
    }
}
