//! Layout Templates - Four Fixed Compositions
//!
//! Every layout is a pure function of (brand, font, palette). Coordinates are
//! hand-picked constants; nothing is measured.

use serde::{Deserialize, Serialize};

use crate::config::Brand;
use crate::fonts::FontSpec;
use crate::palette::Palette;
use crate::svg::{SvgDocument, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Horizontal,
    Stacked,
    TextOnly,
    IconOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Accent {
    Primary,
    Secondary,
}

struct IconStroke {
    from: (i32, i32),
    to: (i32, i32),
    accent: Accent,
    width: u32,
}

/// The crossed "AV" mark, drawn at the origin of an 180x180 box
const ICON_STROKES: [IconStroke; 5] = [
    IconStroke { from: (60, 130), to: (100, 40), accent: Accent::Primary, width: 6 },
    IconStroke { from: (100, 40), to: (140, 130), accent: Accent::Primary, width: 6 },
    IconStroke { from: (70, 40), to: (100, 130), accent: Accent::Secondary, width: 6 },
    IconStroke { from: (100, 130), to: (130, 40), accent: Accent::Secondary, width: 6 },
    IconStroke { from: (80, 100), to: (120, 100), accent: Accent::Secondary, width: 4 },
];

/// Fixed placement of both brand words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wordmark {
    pub primary_at: (i32, i32),
    pub secondary_at: (i32, i32),
    pub font_size: u32,
}

/// Canvas and element placement for one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub icon_offset: Option<(i32, i32)>,
    pub wordmark: Option<Wordmark>,
}

impl Layout {
    /// Generation order
    pub const ALL: [Layout; 4] = [
        Layout::Horizontal,
        Layout::Stacked,
        Layout::TextOnly,
        Layout::IconOnly,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Layout::Horizontal => "horizontal.svg",
            Layout::Stacked => "stacked.svg",
            Layout::TextOnly => "text_only.svg",
            Layout::IconOnly => "icon_only.svg",
        }
    }

    /// Name used in the README
    pub fn display_name(&self) -> &'static str {
        match self {
            Layout::Horizontal => "Horizontal",
            Layout::Stacked => "Stacked",
            Layout::TextOnly => "Text-Only",
            Layout::IconOnly => "Icon-Only",
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Layout::Horizontal => Geometry {
                width: 800,
                height: 180,
                icon_offset: Some((0, 0)),
                wordmark: Some(Wordmark {
                    primary_at: (180, 105),
                    secondary_at: (395, 105),
                    font_size: 48,
                }),
            },
            // Icon centered over the words
            Layout::Stacked => Geometry {
                width: 320,
                height: 250,
                icon_offset: Some((60, 0)),
                wordmark: Some(Wordmark {
                    primary_at: (50, 200),
                    secondary_at: (210, 200),
                    font_size: 32,
                }),
            },
            Layout::TextOnly => Geometry {
                width: 600,
                height: 100,
                icon_offset: None,
                wordmark: Some(Wordmark {
                    primary_at: (40, 70),
                    secondary_at: (265, 70),
                    font_size: 48,
                }),
            },
            Layout::IconOnly => Geometry {
                width: 180,
                height: 180,
                icon_offset: Some((0, 0)),
                wordmark: None,
            },
        }
    }

    /// Render this layout to a complete SVG document
    pub fn render(&self, brand: &Brand, font: &FontSpec, palette: &Palette) -> String {
        let geometry = self.geometry();
        let mut doc = SvgDocument::new(geometry.width, geometry.height, &palette.background.hex);

        if let Some((dx, dy)) = geometry.icon_offset {
            for stroke in &ICON_STROKES {
                let color = match stroke.accent {
                    Accent::Primary => &palette.primary.hex,
                    Accent::Secondary => &palette.secondary.hex,
                };
                doc.add_line(
                    (stroke.from.0 + dx, stroke.from.1 + dy),
                    (stroke.to.0 + dx, stroke.to.1 + dy),
                    color,
                    stroke.width,
                );
            }
        }

        if let Some(wordmark) = geometry.wordmark {
            let style = TextStyle {
                font_family: &font.family,
                font_weight: &font.weight,
                font_size: wordmark.font_size,
            };
            doc.add_text(&brand.primary, wordmark.primary_at, &style, &palette.primary.hex);
            doc.add_text(&brand.secondary, wordmark.secondary_at, &style, &palette.secondary.hex);
        }

        doc.finish()
    }
}
