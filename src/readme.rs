//! README summary of the generated fonts and colors

use crate::config::GeneratorConfig;
use crate::fonts::FontSpec;
use crate::layout::Layout;
use crate::palette::Palette;

/// Header shared by every README
pub fn header(title: &str) -> String {
    format!("# {}\n\n## Font & Color Info\n", title)
}

/// One `###` block describing a font and the assets produced for it
pub fn font_section(font: &FontSpec, palette: &Palette) -> String {
    let layouts: Vec<_> = Layout::ALL.iter().map(|l| l.display_name()).collect();
    format!(
        "### {}\n- Font: {}\n- Weight: {}\n- Colors: {} {}, {} {}, Background {}\n- Layouts: {}\n",
        font.id,
        font.family,
        font.weight,
        palette.primary.label,
        palette.primary.hex,
        palette.secondary.label,
        palette.secondary.hex,
        palette.background.hex,
        layouts.join(", ")
    )
}

/// Join the header and per-font sections into the final document
pub fn assemble(title: &str, sections: &[String]) -> String {
    let mut blocks = vec![header(title)];
    blocks.extend(sections.iter().cloned());
    blocks.join("\n")
}

/// Full README for a configuration
pub fn render(config: &GeneratorConfig) -> String {
    let sections: Vec<_> = config
        .fonts
        .iter()
        .map(|f| font_section(f, &config.palette))
        .collect();
    assemble(&config.readme_title, &sections)
}
