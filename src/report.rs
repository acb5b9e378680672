//! Report text for each tab.
//!
//! Reports are plain text with embedded line breaks and symbol glyphs; the
//! presenter decides how to show them.

use crate::advisory::{
    classify_ph, crop_details, crops_for_soil, fertilizer_recommendation, ph_recommendation,
    recommended_crops,
};
use crate::catalog::Catalog;

pub const NO_SUITABLE_CROPS: &str = "no suitable crops";

const RECENT_ALERTS: [&str; 3] = [
    "System updated to v2.1",
    "New pest database available",
    "Weather API connection stable",
];

/// Dashboard quick actions: label and the command that opens that tab.
pub const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Get Crop Advice", "advice"),
    ("Check Soil Needs", "soil"),
    ("Weather Forecast", "weather"),
    ("Pest Identification", "pest"),
];

pub fn dashboard_report(catalog: &Catalog) -> String {
    let mut lines = Vec::new();

    lines.push("Personalized AI Farming Advisory".to_string());
    lines.push(String::new());

    lines.push("Quick actions:".to_string());
    for (label, command) in QUICK_ACTIONS {
        lines.push(format!("  {:<22}→ {}", label, command));
    }
    lines.push(String::new());

    lines.push(format!("Crops in Database: {}", catalog.crops().len()));
    lines.push(format!("Common Pests: {}", catalog.pests().len()));
    lines.push(format!("Soil Types: {}", catalog.soil_types().len()));
    lines.push(String::new());

    lines.push("Recent Alerts:".to_string());
    for alert in RECENT_ALERTS {
        lines.push(format!("• {}", alert));
    }

    lines.join("\n")
}

pub fn soil_analysis_report(catalog: &Catalog, soil: &str, ph: f64) -> String {
    let crops = crops_for_soil(catalog, soil);
    let crops = if crops.is_empty() {
        NO_SUITABLE_CROPS.to_string()
    } else {
        crops.join(", ")
    };

    format!(
        "🌱 Soil Analysis Results 🌱\n\n\
         🔹 Soil Type: {soil}\n\
         🔹 pH Level: {ph:.1} ({status})\n\n\
         📋 Recommendations:\n\
         • For pH adjustment: {adjust}\n\
         • Suitable crops: {crops}\n\
         • Fertilizer suggestion: {fertilizer}",
        soil = soil,
        ph = ph,
        status = classify_ph(ph),
        adjust = ph_recommendation(ph),
        crops = crops,
        fertilizer = fertilizer_recommendation(soil, ph),
    )
}

/// Farming advice keyed on the forecast wording.
pub fn weather_recommendations(forecast: &str) -> &'static str {
    let forecast = forecast.to_lowercase();
    if forecast.contains("heavy rain") {
        "⚠️ Weather Alert: Heavy Rain Expected ⚠️\n\n\
         Recommendations:\n\
         • Delay planting until after heavy rains\n\
         • Ensure proper drainage in fields\n\
         • Consider cover crops to prevent erosion"
    } else if forecast.contains("drought") {
        "⚠️ Weather Alert: Drought Conditions ⚠️\n\n\
         Recommendations:\n\
         • Select drought-resistant crops\n\
         • Implement water conservation techniques\n\
         • Consider mulching to retain soil moisture"
    } else {
        "✅ Weather Conditions Normal\n\n\
         Recommendations:\n\
         • Proceed with normal planting schedule\n\
         • Monitor local weather updates"
    }
}

pub fn pest_report(catalog: &Catalog, prediction: &str) -> String {
    match catalog.pest(prediction) {
        Some(info) => format!(
            "🔍 Identification: {}\n\n\
             💊 Solution:\n{}\n\n\
             🛡️ Prevention:\n{}",
            prediction, info.solution, info.prevention
        ),
        None => format!(
            "🔍 Identification: {}\n\n\
             ℹ️ No specific information found in database.\n\
             Please contact your agricultural extension officer for assistance.",
            prediction
        ),
    }
}

/// Full advice for a location, combining soil, pH, season and outlook.
pub fn crop_advice_report(
    catalog: &Catalog,
    location: &str,
    soil: &str,
    ph: f64,
    season: &str,
    forecast: &str,
) -> String {
    let mut advice = format!(
        "🌾 Comprehensive Crop Advice for {location} 🌾\n\n\
         📌 Location: {location}\n\
         🌱 Soil Type: {soil}\n\
         🌦️ Season: {season}\n\n\
         📡 Weather Outlook:\n\
         {forecast}\n\n\
         ✅ Recommended Crops:\n",
        location = location,
        soil = soil,
        season = season,
        forecast = forecast,
    );

    let crops = recommended_crops(catalog, soil, ph, season);
    if crops.is_empty() {
        advice.push_str("No suitable crops found for current conditions.\n");
        advice.push_str("Consider adjusting soil parameters or selecting different season.");
    } else {
        for crop in crops {
            advice.push_str(&format!("\n⭐ {}:\n", crop.name));
            advice.push_str(&format!("   • {}\n", crop_details(crop)));
        }
    }

    advice
}
