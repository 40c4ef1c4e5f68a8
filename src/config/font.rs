use std::fmt;
use std::str::FromStr;

use eframe::egui;

/// Font family choices offered by the font dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamilyKind {
    #[default]
    Proportional,
    Monospace,
}

impl FontFamilyKind {
    pub fn all() -> [Self; 2] {
        [Self::Proportional, Self::Monospace]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Proportional => "Proportional",
            Self::Monospace => "Monospace",
        }
    }
}

/// A font described as family + point size.
///
/// Stored in the settings record as a string so the record stays independent
/// of any font handle; `Display` and `FromStr` form an exact round-trip
/// (e.g. `"proportional, 20"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: FontFamilyKind,
    pub size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamilyKind::Proportional,
            size: 20.0,
        }
    }
}

impl FontSpec {
    pub fn font_id(&self) -> egui::FontId {
        let family = match self.family {
            FontFamilyKind::Proportional => egui::FontFamily::Proportional,
            FontFamilyKind::Monospace => egui::FontFamily::Monospace,
        };
        egui::FontId::new(self.size, family)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.family {
            FontFamilyKind::Proportional => "proportional",
            FontFamilyKind::Monospace => "monospace",
        };
        write!(f, "{}, {}", family, self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFontSpecError(String);

impl fmt::Display for ParseFontSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid font descriptor: {}", self.0)
    }
}

impl std::error::Error for ParseFontSpecError {}

impl FromStr for FontSpec {
    type Err = ParseFontSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, size) = s
            .split_once(',')
            .ok_or_else(|| ParseFontSpecError(s.to_string()))?;

        let family = match family.trim() {
            "proportional" => FontFamilyKind::Proportional,
            "monospace" => FontFamilyKind::Monospace,
            _ => return Err(ParseFontSpecError(s.to_string())),
        };

        let size: f32 = size
            .trim()
            .parse()
            .map_err(|_| ParseFontSpecError(s.to_string()))?;
        if !size.is_finite() || size <= 0.0 {
            return Err(ParseFontSpecError(s.to_string()));
        }

        Ok(Self { family, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_round_trip() {
        let spec = FontSpec {
            family: FontFamilyKind::Monospace,
            size: 14.5,
        };
        let parsed: FontSpec = spec.to_string().parse().unwrap();
        assert_eq!(parsed, spec);

        let default = FontSpec::default();
        let parsed: FontSpec = default.to_string().parse().unwrap();
        assert_eq!(parsed, default);
    }

    #[test]
    fn test_garbage_descriptors_rejected() {
        assert!("".parse::<FontSpec>().is_err());
        assert!("wingdings, 12".parse::<FontSpec>().is_err());
        assert!("proportional".parse::<FontSpec>().is_err());
        assert!("proportional, zero".parse::<FontSpec>().is_err());
        assert!("proportional, -3".parse::<FontSpec>().is_err());
    }
}
