use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display color in a style palette. Written in YAML as `"#rrggbb"`, or as
/// `"#rgb"` with each digit doubled.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Color used for the unlit edge of shaded stickers.
    pub const BLACK: Rgb = Rgb([0, 0, 0]);

    /// Constructs a color from 8-bit sRGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb([r, g, b])
    }

    /// Returns the red, green, and blue components.
    pub const fn components(self) -> [u8; 3] {
        self.0
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode(self.0))
    }
}

impl FromStr for Rgb {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let mut components = [0; 3];
        if digits.len() == 3 {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            hex::decode_to_slice(doubled, &mut components)?;
        } else {
            hex::decode_to_slice(digits, &mut components)?;
        }
        Ok(Rgb(components))
    }
}

impl TryFrom<String> for Rgb {
    type Error = hex::FromHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_palette_strings() {
        assert_eq!("#FF8000".parse::<Rgb>(), Ok(Rgb::new(255, 128, 0)));
        assert_eq!("#303".parse::<Rgb>(), Ok(Rgb::new(0x33, 0, 0x33)));
        assert_eq!(" dd0000".parse::<Rgb>(), Ok(Rgb::new(0xdd, 0, 0)));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#ggg".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(0, 0x70, 0).to_string(), "#007000");
        assert_eq!(Rgb::new(1, 2, 3).components(), [1, 2, 3]);
    }

    #[test]
    fn test_palette_yaml() {
        let colors: Vec<Rgb> = serde_norway::from_str("[\"#fff\", \"#0000ff\"]").unwrap();
        assert_eq!(colors, vec![Rgb::new(255, 255, 255), Rgb::new(0, 0, 255)]);
        let yaml = serde_norway::to_string(&Rgb::new(0xff, 0xeb, 0)).unwrap();
        assert!(yaml.contains("#ffeb00"), "{yaml}");
        assert_eq!(serde_norway::from_str::<Rgb>(&yaml).unwrap(), Rgb::new(0xff, 0xeb, 0));
        assert!(serde_norway::from_str::<Rgb>("\"#12\"").is_err());
    }
}
