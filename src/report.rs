use crate::domain::{GeoPoint, ObserverLocation, PhoneReport};
use crate::geo;
use crate::phone::{digit_sum, masked};
use serde::Serialize;

pub fn render(report: &PhoneReport, observer: &ObserverLocation) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("═══ NUMBER ANALYSIS ═══".to_string());
    lines.push(format!("Number: {}", report.raw));
    lines.push(format!("Status: {}", if report.valid { "✓ VALID" } else { "✗ INVALID" }));
    lines.push(format!("Country code: +{}", report.country_code));
    lines.push(format!("National number: {}", report.national_number));

    if let Some(e164) = &report.e164 {
        lines.push(format!("E.164 format: {}", e164));
    }
    if let Some(national) = &report.national {
        lines.push(format!("National format: {}", national));
    }
    if let Some(international) = &report.international {
        lines.push(format!("International format: {}", international));
    }
    if let Some(rfc3966) = &report.rfc3966 {
        lines.push(format!("RFC3966 format: {}", rfc3966));
    }

    lines.push(format!("Region: {}", report.region.as_deref().unwrap_or("UNKNOWN")));

    if let Some(centroid) = report.centroid {
        let (north_south, east_west) = hemispheres(&centroid);
        lines.push(format!("Approximate coordinates: {:.6}, {:.6}", centroid.latitude(), centroid.longitude()));
        lines.push(format!("Hemisphere: {}, {}", north_south, east_west));

        let distance = geo::distance(centroid, observer.point);
        lines.push(format!("Distance from your location: {:.0} km", distance.as_kilometers()));
    }

    let digits = report.national_number.to_string();
    lines.push(format!("Number pattern: {}", masked(&digits)));
    lines.push(format!("Digit sum: {}", digit_sum(&digits)));
    lines.push(format!("Number length: {} digits", digits.len()));

    lines
}

/// Placement payload for machine consumption. Placement falls back to the
/// observer's own coordinates when the region has no known centroid.
pub fn to_json(report: &PhoneReport, observer: &ObserverLocation) -> serde_json::Result<String> {
    let placement = report.centroid.unwrap_or(observer.point);
    let distance_km = report.centroid.map(|centroid| geo::distance(centroid, observer.point).as_kilometers());

    serde_json::to_string_pretty(&Placement {
        number: report.e164.as_deref().unwrap_or(&report.raw),
        valid: report.valid,
        region: report.region.as_deref(),
        lat: placement.latitude(),
        lon: placement.longitude(),
        distance_km,
    })
}

#[derive(Debug, Serialize)]
struct Placement<'a> {
    number: &'a str,
    valid: bool,
    region: Option<&'a str>,
    lat: f64,
    lon: f64,
    distance_km: Option<f64>,
}

fn hemispheres(point: &GeoPoint) -> (&'static str, &'static str) {
    (
        if point.latitude() >= 0.0 { "North" } else { "South" },
        if point.longitude() >= 0.0 { "East" } else { "West" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_report() -> PhoneReport {
        PhoneReport {
            raw: "+1 650 253 0000".to_string(),
            valid: true,
            country_code: 1,
            national_number: 6_502_530_000,
            region: Some("US".to_string()),
            e164: Some("+16502530000".to_string()),
            national: Some("(650) 253-0000".to_string()),
            international: Some("+1 650-253-0000".to_string()),
            rfc3966: Some("tel:+1-650-253-0000".to_string()),
            centroid: Some(GeoPoint::new(39.8283, -98.5795).unwrap()),
        }
    }

    fn observer_at(latitude: f64, longitude: f64) -> ObserverLocation {
        ObserverLocation {
            point: GeoPoint::new(latitude, longitude).unwrap(),
            country: "Colombia".to_string(),
            region: "Bogota D.C.".to_string(),
            city: "Bogotá".to_string(),
        }
    }

    #[test]
    fn render_reports_a_valid_number_in_full() {
        let lines = render(&valid_report(), &observer_at(39.8283, -98.5795));

        assert_eq!(
            lines,
            vec![
                "═══ NUMBER ANALYSIS ═══",
                "Number: +1 650 253 0000",
                "Status: ✓ VALID",
                "Country code: +1",
                "National number: 6502530000",
                "E.164 format: +16502530000",
                "National format: (650) 253-0000",
                "International format: +1 650-253-0000",
                "RFC3966 format: tel:+1-650-253-0000",
                "Region: US",
                "Approximate coordinates: 39.828300, -98.579500",
                "Hemisphere: North, West",
                "Distance from your location: 0 km",
                "Number pattern: 650***000",
                "Digit sum: 21",
                "Number length: 10 digits",
            ]
        );
    }

    #[test]
    fn render_skips_formats_and_placement_for_an_unplaced_invalid_number() {
        let report = PhoneReport {
            raw: "+1 650 253".to_string(),
            valid: false,
            country_code: 1,
            national_number: 650_253,
            region: None,
            e164: None,
            national: None,
            international: None,
            rfc3966: None,
            centroid: None,
        };

        let lines = render(&report, &observer_at(4.6097, -74.0817));

        assert_eq!(
            lines,
            vec![
                "═══ NUMBER ANALYSIS ═══",
                "Number: +1 650 253",
                "Status: ✗ INVALID",
                "Country code: +1",
                "National number: 650253",
                "Region: UNKNOWN",
                "Number pattern: 650***253",
                "Digit sum: 21",
                "Number length: 6 digits",
            ]
        );
    }

    #[test]
    fn render_reports_the_distance_in_whole_kilometers() {
        let mut report = valid_report();
        report.centroid = Some(GeoPoint::new(0.0, 0.0).unwrap());

        let lines = render(&report, &observer_at(0.0, 90.0));

        assert!(lines.contains(&"Distance from your location: 10008 km".to_string()), "lines: {:?}", lines);
    }

    #[test]
    fn to_json_places_the_number_at_its_centroid() -> serde_json::Result<()> {
        let json = to_json(&valid_report(), &observer_at(39.8283, -98.5795))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(
            value,
            serde_json::json!({
                "number": "+16502530000",
                "valid": true,
                "region": "US",
                "lat": 39.8283,
                "lon": -98.5795,
                "distance_km": 0.0,
            })
        );

        Ok(())
    }

    #[test]
    fn to_json_falls_back_to_the_observer_for_an_unplaced_number() -> serde_json::Result<()> {
        let mut report = valid_report();
        report.centroid = None;
        report.e164 = None;

        let json = to_json(&report, &observer_at(4.6097, -74.0817))?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(
            value,
            serde_json::json!({
                "number": "+1 650 253 0000",
                "valid": true,
                "region": "US",
                "lat": 4.6097,
                "lon": -74.0817,
                "distance_km": null,
            })
        );

        Ok(())
    }
}
