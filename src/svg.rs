//! SVG markup builder for logo documents

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Text styling shared by every word in a layout
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub font_family: &'a str,
    pub font_weight: &'a str,
    pub font_size: u32,
}

/// Build an SVG document element by element
pub struct SvgDocument {
    width: u32,
    height: u32,
    background: String,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Start a document of the given pixel size with a full-canvas background rect
    pub fn new(width: u32, height: u32, background: &str) -> Self {
        Self {
            width,
            height,
            background: background.to_string(),
            elements: vec![],
        }
    }

    pub fn add_line(&mut self, from: (i32, i32), to: (i32, i32), stroke: &str, stroke_width: u32) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            escape_xml(stroke),
            stroke_width
        ));
    }

    pub fn add_text(&mut self, text: &str, at: (i32, i32), style: &TextStyle<'_>, fill: &str) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            at.0,
            at.1,
            escape_xml(style.font_family),
            style.font_size,
            escape_xml(style.font_weight),
            escape_xml(fill),
            escape_xml(text)
        ));
    }

    /// Serialize to a complete document, one element per line
    pub fn finish(self) -> String {
        let mut svg = format!(
            "<svg width=\"{}\" height=\"{}\" xmlns=\"{}\">\n",
            self.width, self.height, SVG_NAMESPACE
        );
        svg.push_str(&format!(
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            escape_xml(&self.background)
        ));
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
