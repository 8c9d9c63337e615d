use super::*;

#[test]
fn it_parses_plain_integers() {
    assert_eq!(parse_temperature("20"), Ok(20));
    assert_eq!(parse_temperature("0"), Ok(0));
    assert_eq!(parse_temperature("-60"), Ok(-60));
}

#[test]
fn it_accepts_an_explicit_plus_sign() {
    assert_eq!(parse_temperature("+7"), Ok(7));
}

#[test]
fn it_rejects_non_integers() {
    for raw in ["", "abc", "20.5", "1e3", " 20", "20 ", "+", "-", "2O"] {
        let err = parse_temperature(raw).unwrap_err();
        assert_eq!(err.raw, raw);
        assert_eq!(err.to_string(), "enter a valid temperature");
    }
}

#[test]
fn it_rejects_values_outside_i32() {
    assert!(parse_temperature("2147483647").is_ok());
    assert!(parse_temperature("2147483648").is_err());
    assert!(parse_temperature("-2147483649").is_err());
}

#[test]
fn it_builds_a_reading_from_form_input() {
    let reading = TemperatureReading::parse("Moscow", "-5").unwrap();
    assert_eq!(reading.city(), "Moscow");
    assert_eq!(reading.celsius(), -5);

    assert!(TemperatureReading::parse("Moscow", "cold").is_err());
}
