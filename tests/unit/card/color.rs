use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgb8 = serde_json::from_value(json!("#0f0f13")).unwrap();
    assert_eq!(c, Rgb8::new(0x0f, 0x0f, 0x13));

    let c: Rgba8 = serde_json::from_value(json!("FFFFFF85")).unwrap();
    assert_eq!(c, Rgba8::new(255, 255, 255, 133));

    let c: Rgba8 = serde_json::from_value(json!("#a78bfa")).unwrap();
    assert_eq!(c, Rgba8::new(167, 139, 250, 255));
}

#[test]
fn parses_arrays() {
    let c: Rgb8 = serde_json::from_value(json!([96, 165, 250])).unwrap();
    assert_eq!(c, Rgb8::new(96, 165, 250));

    let c: Rgba8 = serde_json::from_value(json!([255, 255, 255, 133])).unwrap();
    assert_eq!(c.a, 133);
}

#[test]
fn rejects_bad_inputs() {
    assert!(serde_json::from_value::<Rgb8>(json!("#12345")).is_err());
    assert!(serde_json::from_value::<Rgb8>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<Rgb8>(json!([1, 2])).is_err());
    assert!(serde_json::from_value::<Rgb8>(json!([1, 2, 300])).is_err());
    assert!(serde_json::from_value::<Rgb8>(json!("#ffffff80")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#ffé0000")).is_err());
}

#[test]
fn serializes_as_lowercase_hex() {
    assert_eq!(
        serde_json::to_value(Rgb8::new(0x1e, 0x1b, 0x2e)).unwrap(),
        json!("#1e1b2e")
    );
    assert_eq!(
        serde_json::to_value(Rgba8::new(255, 255, 255, 133)).unwrap(),
        json!("#ffffff85")
    );
}
