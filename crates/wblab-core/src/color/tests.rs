//! Tests for color temperature conversion

use super::*;

#[test]
fn test_kelvin_to_rgb_reference_values() {
    let cases = [
        (1800.0, Rgb::new(255, 126, 0)),
        (2000.0, Rgb::new(255, 137, 14)),
        (2850.0, Rgb::new(255, 172, 99)),
        (4000.0, Rgb::new(255, 206, 166)),
        (5500.0, Rgb::new(255, 237, 222)),
        (6500.0, Rgb::new(255, 254, 250)),
        (6600.0, Rgb::new(255, 255, 255)),
        (7500.0, Rgb::new(230, 235, 255)),
        (10000.0, Rgb::new(202, 218, 255)),
    ];

    for (kelvin, expected) in cases {
        assert_eq!(kelvin_to_rgb(kelvin), expected, "mismatch at {}K", kelvin);
    }
}

#[test]
fn test_red_saturated_up_to_6600k() {
    let mut kelvin = 100.0;
    while kelvin <= 6600.0 {
        assert_eq!(kelvin_to_rgb(kelvin).r, 255, "red at {}K", kelvin);
        kelvin += 50.0;
    }
}

#[test]
fn test_blue_saturated_from_6600k() {
    let mut kelvin = 6600.0;
    while kelvin <= 40000.0 {
        assert_eq!(kelvin_to_rgb(kelvin).b, 255, "blue at {}K", kelvin);
        kelvin += 250.0;
    }
}

#[test]
fn test_blue_zero_at_or_below_1900k() {
    for kelvin in [100.0, 500.0, 1000.0, 1500.0, 1899.0, 1900.0] {
        assert_eq!(kelvin_to_rgb(kelvin).b, 0, "blue at {}K", kelvin);
    }
    assert!(kelvin_to_rgb(2000.0).b > 0);
}

#[test]
fn test_blue_non_decreasing_with_temperature() {
    let mut previous = kelvin_to_rgb(1000.0).b;
    let mut kelvin = 1000.0;
    while kelvin <= 12000.0 {
        let blue = kelvin_to_rgb(kelvin).b;
        assert!(blue >= previous, "blue dropped at {}K", kelvin);
        previous = blue;
        kelvin += 10.0;
    }
}

#[test]
fn test_extreme_inputs_do_not_panic() {
    // Very low temperatures drive green below zero before clamping
    assert_eq!(kelvin_to_rgb(50.0), Rgb::new(255, 0, 0));
    assert_eq!(kelvin_to_rgb(f64::MIN_POSITIVE), Rgb::new(255, 0, 0));

    let hot = kelvin_to_rgb(1.0e9);
    assert_eq!(hot.b, 255);
    assert!(hot.r < 255 && hot.g < 255);
}

#[test]
fn test_kelvin_to_rgb_is_deterministic() {
    for kelvin in [2000.0, 3333.3, 5500.0, 6600.0, 9999.9] {
        assert_eq!(kelvin_to_rgb(kelvin), kelvin_to_rgb(kelvin));
    }
}

#[test]
fn test_rgb_css_and_hex_formats() {
    let c = Rgb::new(255, 172, 99);
    assert_eq!(c.to_string(), "rgb(255, 172, 99)");
    assert_eq!(c.to_hex(), "#ffac63");
    assert_eq!(Rgb::from_hex("#FFAC63").unwrap(), c);
    assert_eq!(Rgb::from_hex("87ceeb").unwrap(), Rgb::from_u32(0x87CEEB));
}

#[test]
fn test_rgb_from_hex_rejects_malformed() {
    assert!(Rgb::from_hex("#fff").is_err());
    assert!(Rgb::from_hex("#gg0000").is_err());
    assert!(Rgb::from_hex("").is_err());
}

#[test]
fn test_rgb_unit_conversion_clamps() {
    assert_eq!(Rgb::from_unit([1.5, -0.2, 0.5]), Rgb::new(255, 0, 128));
    let unit = Rgb::WHITE.to_unit();
    assert!(unit.iter().all(|v| (*v - 1.0).abs() < 1e-12));
}

#[test]
fn test_rgb_mix_endpoints() {
    let a = Rgb::new(10, 20, 30);
    let b = Rgb::new(200, 100, 0);
    assert_eq!(a.mix(b, 0.0), a);
    assert_eq!(a.mix(b, 1.0), b);
}
