//! Loading game rules from a JSON file.

use std::io;
use std::path::Path;

use nova_core::config::Rules;

/// Load rules from a JSON file. Missing fields keep their defaults.
pub fn load_rules(path: &Path) -> io::Result<Rules> {
    let text = std::fs::read_to_string(path)?;
    parse_rules(&text)
}

/// Parse and sanity-check rules from a JSON string.
pub fn parse_rules(json: &str) -> io::Result<Rules> {
    let rules = Rules::from_json_str(json)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid rules: {e}")))?;

    let non_negative = [
        ("threat_speed_min", rules.threat_speed_min),
        ("threat_speed_max", rules.threat_speed_max),
        ("threat_speed_step", rules.threat_speed_step),
        ("impact_tolerance", rules.impact_tolerance),
        ("blast_max_radius", rules.blast_max_radius),
        ("spawn_interval_base_ms", rules.spawn_interval_base_ms),
        ("spawn_interval_step_ms", rules.spawn_interval_step_ms),
        ("spawn_interval_min_ms", rules.spawn_interval_min_ms),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{name} must be a finite, non-negative number (got {value})"),
            ));
        }
    }

    let positive = [
        ("width", rules.width),
        ("height", rules.height),
        ("interceptor_speed", rules.interceptor_speed),
        ("blast_duration_ms", rules.blast_duration_ms),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{name} must be a finite, positive number (got {value})"),
            ));
        }
    }

    if rules.turrets.is_empty() || rules.cities.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Rules need at least one turret and one city",
        ));
    }
    if rules
        .turrets
        .iter()
        .chain(&rules.cities)
        .any(|position| !position.is_finite())
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Structure positions must be finite",
        ));
    }
    if rules.threat_speed_min > rules.threat_speed_max {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "threat_speed_min {} exceeds threat_speed_max {}",
                rules.threat_speed_min, rules.threat_speed_max
            ),
        ));
    }

    Ok(rules)
}
