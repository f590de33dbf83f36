use chrono::{DateTime, Utc};
use selene::describe::{format_transit_data, format_transit_data_for_table, TransitRow};
use selene::lunar::current_moon_phase;
use selene::{AspectCalculator, AspectError, CelestialBody, MoonPhase, ZodiacSign};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rising_sign: Option<ZodiacSign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon_phase: Option<MoonPhase>,
    pub rows: Vec<TransitRow>,
    pub lines: Vec<String>,
}

/// Transits against the natal chart, or the natal chart against itself when no transits are given.
pub fn build_report(
    calculator: &AspectCalculator,
    natal: &[CelestialBody],
    transits: Option<&[CelestialBody]>,
    rising_sign: Option<ZodiacSign>,
) -> Result<Report, AspectError> {
    let (rows, lines, sky) = match transits {
        Some(transits) => (
            format_transit_data_for_table(calculator, transits, natal)?,
            format_transit_data(calculator, transits, natal)?,
            transits,
        ),
        None => {
            let mut rows = Vec::new();
            let mut lines = Vec::new();
            for i in 0..natal.len() {
                let (from, rest) = (&natal[i..=i], &natal[i + 1..]);
                rows.extend(format_transit_data_for_table(calculator, from, rest)?);
                lines.extend(format_transit_data(calculator, from, rest)?);
            }
            (rows, lines, natal)
        }
    };

    Ok(Report {
        generated_at: Utc::now(),
        rising_sign,
        moon_phase: current_moon_phase(calculator, sky)?,
        rows,
        lines,
    })
}

/// Fixed-width columns for terminal output.
pub fn render_table(rows: &[TransitRow]) -> String {
    let mut out = format!(
        "{:<12} {:<12} {:<12} {:<12} {:<12} {:>5} {:>5}\n",
        "TRANSIT", "SIGN", "ASPECT", "NATAL", "SIGN", "HOUSE", "ORB"
    );
    for row in rows {
        let transit = if row.transiting_retrograde {
            format!("{} (R)", row.transiting_body)
        } else {
            row.transiting_body.clone()
        };
        let house = row.natal_house.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<12} {:<12} {:<12} {:<12} {:<12} {:>5} {:>5.1}\n",
            transit,
            row.transiting_sign.name(),
            row.aspect,
            row.natal_body,
            row.natal_sign.name(),
            house,
            row.orb
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn natal() -> Vec<CelestialBody> {
        vec![
            CelestialBody::new("Sun", 10.0, false),
            CelestialBody::new("Moon", 100.0, false),
            CelestialBody::new("Mars", 220.0, false).with_house(8).unwrap(),
        ]
    }

    #[test]
    fn test_natal_only_report() {
        let calculator = AspectCalculator::default();
        let report = build_report(&calculator, &natal(), None, None).unwrap();
        // Sun square Moon, Sun quincunx Mars, Moon trine Mars
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].aspect, "square");
        assert_eq!(report.moon_phase, Some(MoonPhase::FirstQuarterMoon));
        assert_eq!(report.lines.len(), report.rows.len());
    }

    #[test]
    fn test_transit_report() {
        let calculator = AspectCalculator::default();
        let transits = vec![
            CelestialBody::new("Sun", 215.0, false),
            CelestialBody::new("Moon", 35.0, false),
        ];
        let report = build_report(&calculator, &natal(), Some(transits.as_slice()), Some(ZodiacSign::Leo)).unwrap();
        assert_eq!(report.moon_phase, Some(MoonPhase::FullMoon));
        assert!(report.rows.iter().any(|r| r.transiting_body == "Sun" && r.natal_body == "Mars"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["risingSign"], "Leo");
        assert_eq!(json["moonPhase"], "Full Moon");
        assert!(json["generatedAt"].is_string());
    }

    #[test]
    fn test_render_table() {
        let row = TransitRow {
            transiting_body: "Mercury".to_string(),
            transiting_sign: ZodiacSign::Taurus,
            transiting_retrograde: true,
            aspect: "square".to_string(),
            natal_body: "Mars".to_string(),
            natal_sign: ZodiacSign::Aquarius,
            natal_house: None,
            orb: 0.2,
        };
        let table = render_table(&[row]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("TRANSIT"));
        assert!(lines[1].starts_with("Mercury (R)"));
        assert!(lines[1].ends_with("0.2"));
        assert!(lines[1].contains(" - "));
    }
}
