use serde::{Deserialize, Serialize};

/// Opaque RGB display color for a chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Build a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS color for the line itself.
    #[must_use]
    pub fn border(&self) -> String {
        format!("rgba({},{},{},1)", self.r, self.g, self.b)
    }

    /// CSS color for the translucent fill under the line.
    #[must_use]
    pub fn background(&self) -> String {
        format!("rgba({},{},{},0.2)", self.r, self.g, self.b)
    }
}

/// Ordered list of colors assigned to series by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Colors used when no palette is configured.
    pub const DEFAULT_COLORS: [Color; 6] = [
        Color::rgb(75, 192, 192),
        Color::rgb(255, 99, 132),
        Color::rgb(54, 162, 235),
        Color::rgb(255, 206, 86),
        Color::rgb(153, 102, 255),
        Color::rgb(255, 159, 64),
    ];

    /// Build a palette from an explicit color list.
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Color for the symbol at `index` in the ordered symbol list.
    ///
    /// Wraps around with `index mod len`. Returns `None` only for an empty
    /// palette, which session builders reject.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Option<Color> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(index % self.0.len()).copied()
    }

    /// Number of distinct colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(Self::DEFAULT_COLORS.to_vec())
    }
}
