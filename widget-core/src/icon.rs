//! Category → icon mapping.
//!
//! The widget ships one canonical table with two lookup modes. The
//! current-conditions lookup knows the full category set and splits
//! "clouds" on cloud cover; the forecast lookup covers a smaller set and
//! always maps "clouds" to the overcast icon. Categories a mode does not
//! know fall back to [`Icon::Sun`]; widening one mode's coverage changes
//! which icons render.

/// The widget's icon set, one variant per shipped asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    SunCloud,
    Cloud,
    Rain,
    Snow,
    Storm,
    Fog,
}

impl Icon {
    /// Asset file name under the frontend's icon directory.
    pub const fn file(&self) -> &'static str {
        match self {
            Icon::Sun => "sun.svg",
            Icon::SunCloud => "suncloud.svg",
            Icon::Cloud => "cloud.svg",
            Icon::Rain => "rain.svg",
            Icon::Snow => "snow.svg",
            Icon::Storm => "storm.svg",
            Icon::Fog => "fog.svg",
        }
    }
}

/// Which of the two lookups to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// Current conditions: full category coverage, cloud-cover split.
    Current { cloud_cover: u8 },
    /// Forecast cards: reduced coverage, no cloud-cover data available.
    Forecast,
}

/// Icon for a current-conditions category. `cloud_cover` only matters for
/// the "clouds" category: 50% or less shows the partly-cloudy icon.
pub fn current_icon(category: &str, cloud_cover: u8) -> Icon {
    resolve(category, Lookup::Current { cloud_cover })
}

/// Icon for a forecast card category.
pub fn forecast_icon(category: &str) -> Icon {
    resolve(category, Lookup::Forecast)
}

fn resolve(category: &str, lookup: Lookup) -> Icon {
    let category = category.to_lowercase();

    match (category.as_str(), lookup) {
        ("clear", _) => Icon::Sun,
        ("clouds", Lookup::Current { cloud_cover }) if cloud_cover <= 50 => Icon::SunCloud,
        ("clouds", _) => Icon::Cloud,
        ("rain" | "drizzle", _) => Icon::Rain,
        ("snow", _) => Icon::Snow,
        ("thunderstorm", _) => Icon::Storm,
        ("mist" | "haze" | "fog", _) => Icon::Fog,
        // Only the current-conditions table covers these.
        ("smoke" | "dust" | "sand" | "ash", Lookup::Current { .. }) => Icon::Fog,
        ("squall" | "tornado", Lookup::Current { .. }) => Icon::Storm,
        _ => Icon::Sun,
    }
}
