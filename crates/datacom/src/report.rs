//! Human-readable reports for tool results

use crate::normalize::{EntityPoints, EntityVariablePoints, ObservationPoint};
use serde_json::Value;
use std::collections::BTreeMap;

/// Render a JSON value for a report, grouping digits of numbers
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => group_digits(&n.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "n/a".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Insert thousands separators into a plain decimal literal
fn group_digits(literal: &str) -> String {
    // Exponent notation is left untouched
    if literal.contains(['e', 'E']) {
        return literal.to_string();
    }

    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn as_of(point: &ObservationPoint) -> String {
    format!(
        "{} (as of {})",
        format_value(point.value.as_ref()),
        point.date.as_deref().unwrap_or("unknown date")
    )
}

/// Report for variable discovery
pub fn variables_report(variables: &BTreeMap<String, Vec<String>>, limit: usize) -> String {
    let mut report = format!("Available variables (limited to first {limit} per place):\n");

    for (entity, vars) in variables {
        if vars.is_empty() {
            report.push_str(&format!("\nNo variables found for place {entity}\n"));
        } else {
            report.push_str(&format!("\nFor place {entity}:\n"));
            for var in vars {
                report.push_str(&format!("  - {var}\n"));
            }
        }
    }

    report
}

/// Report for population counts
pub fn population_report(points: &EntityPoints) -> String {
    let mut report = String::from("Population counts:\n");

    if points.is_empty() {
        report.push_str("\nNo population data found for the requested places.");
    } else {
        for (entity, point) in points {
            report.push_str(&format!("\n{entity}: {}", as_of(point)));
        }
    }

    report
}

/// Report for arbitrary variable observations
pub fn observations_report(points: &EntityVariablePoints) -> String {
    let mut report = String::from("Observations:\n");

    if points.is_empty() {
        report.push_str("\nNo data found for the requested places and variables.");
        return report;
    }

    for (entity, by_variable) in points {
        report.push_str(&format!("\nFor place {entity}:\n"));
        for (variable, point) in by_variable {
            report.push_str(&format!("  - {variable}: {}\n", as_of(point)));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pt(value: Value, date: &str) -> ObservationPoint {
        ObservationPoint {
            value: Some(value),
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(&json!(39_029_342))), "39,029,342");
        assert_eq!(format_value(Some(&json!(999))), "999");
        assert_eq!(format_value(Some(&json!(-1_234_567))), "-1,234,567");
        assert_eq!(format_value(Some(&json!(1234.5))), "1,234.5");
        assert_eq!(format_value(Some(&json!(37.9))), "37.9");
        assert_eq!(format_value(Some(&json!("n.a."))), "n.a.");
        assert_eq!(format_value(None), "n/a");
        assert_eq!(format_value(Some(&Value::Null)), "n/a");
    }

    #[test]
    fn test_population_report() {
        let mut points = EntityPoints::new();
        points.insert("geoId/06".to_string(), pt(json!(39_029_342), "2022"));

        let report = population_report(&points);
        assert_eq!(report, "Population counts:\n\ngeoId/06: 39,029,342 (as of 2022)");
    }

    #[test]
    fn test_population_report_empty() {
        let report = population_report(&EntityPoints::new());
        assert!(report.contains("No population data found"));
    }

    #[test]
    fn test_variables_report() {
        let mut vars = BTreeMap::new();
        vars.insert("geoId/06".to_string(), vec!["Count_Person".to_string()]);
        vars.insert("geoId/99".to_string(), Vec::new());

        let report = variables_report(&vars, 10);
        assert!(report.starts_with("Available variables (limited to first 10 per place):"));
        assert!(report.contains("For place geoId/06:\n  - Count_Person\n"));
        assert!(report.contains("No variables found for place geoId/99"));
    }

    #[test]
    fn test_observations_report() {
        let mut points = EntityVariablePoints::new();
        points
            .entry("country/USA".to_string())
            .or_default()
            .insert("Median_Age_Person".to_string(), pt(json!(38.9), "2022"));

        let report = observations_report(&points);
        assert!(report.contains("For place country/USA:\n  - Median_Age_Person: 38.9 (as of 2022)"));

        let empty = observations_report(&EntityVariablePoints::new());
        assert!(empty.contains("No data found"));
    }
}
