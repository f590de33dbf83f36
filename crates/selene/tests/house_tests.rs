use selene::bodies::CelestialBody;
use selene::houses::{house_number, place_in_houses, resolve_house, rising_sign};
use selene::zodiac::ZodiacSign;

#[test]
fn test_resolve_house_examples() {
    assert_eq!(resolve_house("Aries", "Cancer"), Some(4));
    assert_eq!(resolve_house("Leo", "Aries"), Some(9));
}

#[test]
fn test_unrecognized_sign() {
    assert_eq!(resolve_house("Ares", "Cancer"), None);
    assert_eq!(resolve_house("Aries", "Cancr"), None);
}

#[test]
fn test_each_house_once_per_rising_sign() {
    for rising in ZodiacSign::ALL {
        let mut seen = [false; 12];
        for target in ZodiacSign::ALL {
            let house = house_number(rising, target);
            assert!((1..=12).contains(&house));
            assert!(!seen[(house - 1) as usize], "house {house} assigned twice");
            seen[(house - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}

#[test]
fn test_chart_houses_from_ascendant() {
    let chart = vec![
        CelestialBody::new("Ascendant", 281.0, false), // Capricorn rising
        CelestialBody::new("Sun", 15.0, false),        // Aries
        CelestialBody::new("Venus", 275.0, false),     // Capricorn
        CelestialBody::new("Jupiter", 260.0, true),    // Sagittarius
    ];
    let rising = rising_sign(&chart).unwrap();
    assert_eq!(rising, ZodiacSign::Capricorn);

    let houses: Vec<Option<u8>> = place_in_houses(&chart, rising)
        .iter()
        .map(CelestialBody::house)
        .collect();
    assert_eq!(houses, vec![Some(1), Some(4), Some(1), Some(12)]);
}
