//! Color encoders: basis element → color and sign → color.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::algebra::{BasisElement, Sign, DIM};
use crate::error::ParseError;

/// An opaque sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::Color(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Color::hex)
            .map_err(|_| ParseError::Color(s.to_string()))
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// One color per basis element, in basis order.
pub const ELEMENT_COLORS: [Color; DIM] = [
    Color::hex(0xdbc78f), // p
    Color::hex(0x4a778f), // 23
    Color::hex(0x6fa0b0), // 31
    Color::hex(0x8fb5bf), // 12
    Color::hex(0x872e2e), // 0
    Color::hex(0x76718f), // 023
    Color::hex(0x9c8ead), // 031
    Color::hex(0xb49bbf), // 012
    Color::hex(0x4c4861), // 123
    Color::hex(0xbd4442), // 1
    Color::hex(0xd66847), // 2
    Color::hex(0xd98e66), // 3
    Color::hex(0xdbaa56), // 0123
    Color::hex(0x498c6b), // 01
    Color::hex(0x84b394), // 02
    Color::hex(0x9fc4a0), // 03
];

pub const POSITIVE_COLOR: Color = Color::hex(0xfbf1c7);
pub const NEGATIVE_COLOR: Color = Color::hex(0x504945);

pub fn color_by_element(element: BasisElement) -> Color {
    ELEMENT_COLORS[element.index()]
}

pub fn color_by_sign(sign: Sign) -> Color {
    match sign {
        Sign::Positive => POSITIVE_COLOR,
        Sign::Negative => NEGATIVE_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::BASIS;
    use std::collections::HashSet;

    #[test]
    fn element_colors_are_injective() {
        let colors: HashSet<Color> = BASIS.iter().map(|&e| color_by_element(e)).collect();
        assert_eq!(colors.len(), DIM);
    }

    #[test]
    fn sign_colors_are_distinct() {
        assert_ne!(color_by_sign(Sign::Positive), color_by_sign(Sign::Negative));
    }

    #[test]
    fn encoders_are_deterministic() {
        for &e in &BASIS {
            assert_eq!(color_by_element(e), color_by_element(e));
        }
        assert_eq!(color_by_element(BasisElement::E23).to_string(), "#4a778f");
        assert_eq!(color_by_element(BasisElement::E0123).to_string(), "#dbaa56");
        assert_eq!(color_by_sign(Sign::Negative).to_string(), "#504945");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!("#fbf1c7".parse::<Color>(), Ok(POSITIVE_COLOR));
        assert_eq!("504945".parse::<Color>(), Ok(NEGATIVE_COLOR));
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_u32(), 0x123456);
        assert!("#fff".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }
}
