//! Hex color parsing for configuration strings

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb` or the keywords `white` / `black`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.to_ascii_lowercase().as_str() {
            "white" => return Some(Self::WHITE),
            "black" => return Some(Self::BLACK),
            _ => {}
        }

        let hex = value.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => Some(Self::new(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|d| d * 17);
                Some(Self::new(digit(0).ok()?, digit(1).ok()?, digit(2).ok()?))
            }
            _ => None,
        }
    }

    /// Parse, falling back to `fallback` for unreadable input
    pub fn parse_or(value: &str, fallback: Rgb) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::warn!("Unreadable color {:?}, using fallback", value);
            fallback
        })
    }

    /// Components scaled to 0.0..=1.0
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Rgb::parse("#94a3b8"), Some(Rgb::new(0x94, 0xa3, 0xb8)));
        assert_eq!(Rgb::parse("#FFF"), Some(Rgb::WHITE));
        assert_eq!(Rgb::parse("white"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Rgb::parse("94a3b8"), None);
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("#zzzzzz"), None);
        assert_eq!(Rgb::parse(""), None);
    }
}
