use std::{fmt, str::FromStr};

use serde::Deserialize;

/// An opaque RGB color, written `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::BadColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| err());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The pastel colors assigned to found words, in assignment order.
pub const PASTELS: [Color; 10] = [
    Color::rgb(0xFF, 0xD1, 0xDC),
    Color::rgb(0xFF, 0xDF, 0xBA),
    Color::rgb(0xD4, 0xA5, 0xA5),
    Color::rgb(0xA8, 0xD5, 0xBA),
    Color::rgb(0xB5, 0xEA, 0xD7),
    Color::rgb(0xC7, 0xCE, 0xEA),
    Color::rgb(0xFF, 0xB3, 0xBA),
    Color::rgb(0xFF, 0xDA, 0xC1),
    Color::rgb(0xFF, 0x9A, 0xA2),
    Color::rgb(0xD9, 0xD9, 0xD9),
];

/// A fixed, non-empty, cyclic list of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Vec<Color>);

impl Default for Palette {
    fn default() -> Self {
        Palette(PASTELS.to_vec())
    }
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Palette(colors))
    }

    /// The color for the `n`th found word, wrapping around the palette.
    pub fn nth(&self, n: usize) -> Color {
        self.0[n % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a palette needs at least one color")]
    Empty,
    #[error("\"{0}\" is not a `#RRGGBB` color")]
    BadColor(String),
}
