use resunits::size::{from_size, parse_size, DECIMAL_UNITS};
use resunits::{cpu, ResUnitsError};

#[test]
fn test_error_kinds() {
    assert!(matches!(
        cpu::parse("lots"),
        Err(ResUnitsError::InvalidNumber { .. })
    ));
    assert!(matches!(
        cpu::parse_milli("2.5m"),
        Err(ResUnitsError::FractionalMillicores { .. })
    ));
    assert!(matches!(
        from_size("512XB", &DECIMAL_UNITS),
        Err(ResUnitsError::UnknownUnit { .. })
    ));
    assert!(matches!(
        parse_size("not-a-size"),
        Err(ResUnitsError::UnknownFormat { .. })
    ));
    assert!(matches!(
        cpu::parse("-3"),
        Err(ResUnitsError::OutOfRange { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = parse_size("not-a-size").unwrap_err();
    assert_eq!(err.to_string(), "format size 'not-a-size' unknown");

    let err = from_size("512XB", &DECIMAL_UNITS).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unit 'XB' unknown, available units [b, kb, mb, gb, tb, pb]"
    );

    let err = cpu::parse_milli("2.5m").unwrap_err();
    assert!(err.to_string().contains("fractional parts are not allowed"));
}

#[test]
fn test_invalid_number_keeps_source() {
    use std::error::Error;

    let err = cpu::parse_core("1,5").unwrap_err();
    assert!(err.source().is_some());
    assert!(err.to_string().contains("1,5"));
}
