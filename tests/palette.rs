use pixplot::demo::palette::{lookup, ColorCode, FALLBACK, PALETTE_LEN};
use pixplot::engine::canvas::Rgb;

#[test]
fn test_palette_matches_documented_table() {
    let expected = [
        (0, Rgb::new(255, 255, 0)),
        (1, Rgb::new(160, 160, 0)),
        (2, Rgb::new(0, 255, 0)),
        (3, Rgb::new(0, 160, 0)),
        (4, Rgb::new(0, 255, 255)),
        (5, Rgb::new(0, 160, 160)),
        (6, Rgb::new(160, 100, 0)),
        (7, Rgb::new(110, 50, 0)),
        (8, Rgb::new(0, 60, 130)),
    ];
    assert_eq!(expected.len(), PALETTE_LEN);

    for (code, rgb) in expected {
        assert_eq!(lookup(code), rgb, "code {code}");
    }
}

#[test]
fn test_out_of_range_codes_fall_back_to_black() {
    assert_eq!(FALLBACK, Rgb::BLACK);
    for code in [-1, 9, 10, 255, i32::MIN, i32::MAX] {
        assert_eq!(lookup(code), Rgb::new(0, 0, 0), "code {code}");
    }
}

#[test]
fn test_color_code_conversion() {
    assert_eq!(ColorCode::try_from(0), Ok(ColorCode::Yellow));
    assert_eq!(ColorCode::try_from(8), Ok(ColorCode::Background));
    assert_eq!(ColorCode::try_from(9), Err(9));
    assert_eq!(ColorCode::try_from(-3), Err(-3));

    for (index, code) in ColorCode::ALL.iter().enumerate() {
        assert_eq!(*code as usize, index);
        assert_eq!(code.rgb(), lookup(index as i32));
    }
    assert_eq!(ColorCode::Background.rgb(), Rgb::new(0, 60, 130));
}
