use selene::aspects::AspectCalculator;
use selene::bodies::CelestialBody;
use selene::describe::{format_aspect, format_transit_data, format_transit_data_for_table};
use selene::zodiac::ZodiacSign;

fn natal_chart() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new("Mars", 316.2, false).with_house(5).unwrap(),
        CelestialBody::new("Sun", 15.0, false).with_house(7).unwrap(),
    ]
}

#[test]
fn test_format_aspect_sentence() {
    let calculator = AspectCalculator::default();
    let venus = CelestialBody::new("Venus", 195.0, false);
    let mars = CelestialBody::new("Mars", 316.2, false);
    let aspect = calculator.aspect_between(&venus, &mars).unwrap().unwrap();
    assert_eq!(
        format_aspect(&venus, &mars, &aspect),
        "Venus in Libra forming a trine to Mars in Aquarius with an orb of 1.2 degrees"
    );
}

#[test]
fn test_format_transit_data() {
    let calculator = AspectCalculator::default();
    let transits = vec![
        CelestialBody::new("Venus", 195.0, false),
        CelestialBody::new("Mercury", 46.0, true),
    ];
    let lines = format_transit_data(&calculator, &transits, &natal_chart()).unwrap();
    assert_eq!(
        lines,
        vec![
            "Venus in Libra forming a trine to Mars in Aquarius in the 5th house with an orb of 1.2 degrees",
            "Venus in Libra forming an opposition to Sun in Aries in the 7th house with an orb of 0.0 degrees",
            "Mercury retrograde in Taurus forming a square to Mars in Aquarius in the 5th house with an orb of 0.2 degrees",
        ]
    );
}

#[test]
fn test_format_transit_data_for_table() {
    let calculator = AspectCalculator::default();
    let transits = vec![CelestialBody::new("Mercury", 46.0, true)];
    let rows = format_transit_data_for_table(&calculator, &transits, &natal_chart()).unwrap();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.transiting_body, "Mercury");
    assert_eq!(row.transiting_sign, ZodiacSign::Taurus);
    assert!(row.transiting_retrograde);
    assert_eq!(row.aspect, "square");
    assert_eq!(row.natal_body, "Mars");
    assert_eq!(row.natal_house, Some(5));
    assert_eq!(row.orb, 0.2);

    let json = serde_json::to_value(row).unwrap();
    assert_eq!(json["transitingBody"], "Mercury");
    assert_eq!(json["natalSign"], "Aquarius");
}

#[test]
fn test_unknown_transiting_body_propagates() {
    let calculator = AspectCalculator::default();
    let transits = vec![CelestialBody::new("Eris", 20.0, false)];
    assert!(format_transit_data(&calculator, &transits, &natal_chart()).is_err());
}
