use palette::Srgb;

use crate::error::{EdaError, Result};

// ---------------------------------------------------------------------------
// Report palette
// ---------------------------------------------------------------------------

/// Named report colours, in cycle order. Fixed at compile time and never
/// mutated; plotting layers read these as-is.
pub const REPORT_COLORS: [(&str, &str); 5] = [
    ("gray", "#413934"),
    ("gold", "#be9530"),
    ("pink", "#e1839a"),
    ("orange", "#cf5530"),
    ("tan", "#e8e3d6"),
];

/// The plain colour cycle, same order as [`REPORT_COLORS`].
pub const COLOR_CYCLE: [&str; 5] = ["#413934", "#be9530", "#e1839a", "#cf5530", "#e8e3d6"];

/// Look up a report colour by name.
pub fn report_color(name: &str) -> Option<&'static str> {
    REPORT_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hex)| *hex)
}

// ---------------------------------------------------------------------------
// Colormap – an ordered colour cycle for plotting layers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    pub name: String,
    colors: Vec<Srgb<u8>>,
}

impl Colormap {
    /// The report palette in cycle order.
    pub fn report() -> Self {
        Colormap {
            name: "report".to_string(),
            colors: vec![
                Srgb::new(0x41, 0x39, 0x34),
                Srgb::new(0xbe, 0x95, 0x30),
                Srgb::new(0xe1, 0x83, 0x9a),
                Srgb::new(0xcf, 0x55, 0x30),
                Srgb::new(0xe8, 0xe3, 0xd6),
            ],
        }
    }

    /// Build a colormap from `#rrggbb` hex codes.
    pub fn from_hex(name: &str, hex_codes: &[&str]) -> Result<Self> {
        let colors = hex_codes
            .iter()
            .map(|hex| {
                hex.parse::<Srgb<u8>>()
                    .map_err(|_| EdaError::Color((*hex).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Colormap {
            name: name.to_string(),
            colors,
        })
    }

    /// The same palette in reverse order, named with an `_r` suffix.
    pub fn reversed(&self) -> Self {
        Colormap {
            name: format!("{}_r", self.name),
            colors: self.colors.iter().rev().copied().collect(),
        }
    }

    /// Colour for series `i`; wraps around when the palette runs out.
    pub fn color_at(&self, i: usize) -> Option<Srgb<u8>> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors[i % self.colors.len()])
        }
    }

    /// The palette as lowercase `#rrggbb` strings.
    pub fn hex_colors(&self) -> Vec<String> {
        self.colors
            .iter()
            .map(|c| format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
