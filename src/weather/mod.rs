pub const MAX_TEMPERATURE_C: f64 = 10.0;
pub const MIN_WIND_KMH: f64 = 4.8;

/// Metric wind chill (°C, km/h).
pub fn wind_chill(temp_c: f64, wind_kmh: f64) -> f64 {
    let v = wind_kmh.powf(0.16);
    13.12 + 0.6215 * temp_c - 11.37 * v + 0.3965 * temp_c * v
}

/// Formats the wind chill, or "N/A" outside the formula's valid range.
pub fn format_wind_chill(temp_c: f64, wind_kmh: f64) -> String {
    if temp_c <= MAX_TEMPERATURE_C && wind_kmh > MIN_WIND_KMH {
        format!("{:.1} °C", wind_chill(temp_c, wind_kmh))
    } else {
        "N/A".to_string()
    }
}
