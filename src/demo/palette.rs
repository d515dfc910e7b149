use crate::engine::canvas::Rgb;

/// Number of palette entries, background included.
pub const PALETTE_LEN: usize = 9;

/// Returned for codes the palette does not define.
pub const FALLBACK: Rgb = Rgb::BLACK;

const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb::new(255, 255, 0),
    Rgb::new(160, 160, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 160, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 160, 160),
    Rgb::new(160, 100, 0),
    Rgb::new(110, 50, 0),
    Rgb::new(0, 60, 130),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCode {
    Yellow = 0,
    DarkYellow = 1,
    Green = 2,
    DarkGreen = 3,
    Cyan = 4,
    DarkCyan = 5,
    Brown = 6,
    DarkBrown = 7,
    Background = 8,
}

impl ColorCode {
    pub const ALL: [ColorCode; PALETTE_LEN] = [
        ColorCode::Yellow,
        ColorCode::DarkYellow,
        ColorCode::Green,
        ColorCode::DarkGreen,
        ColorCode::Cyan,
        ColorCode::DarkCyan,
        ColorCode::Brown,
        ColorCode::DarkBrown,
        ColorCode::Background,
    ];

    pub fn rgb(self) -> Rgb {
        PALETTE[self as usize]
    }
}

impl TryFrom<i32> for ColorCode {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(code)
    }
}

/// Resolves a raw color code, falling back to [`FALLBACK`] outside `0..=8`.
pub fn lookup(code: i32) -> Rgb {
    ColorCode::try_from(code).map_or(FALLBACK, ColorCode::rgb)
}
