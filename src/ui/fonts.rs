//! System font discovery for catalog text.
//!
//! egui's bundled fonts have no CJK glyphs, so a suitable system font is
//! looked up with `fontdb` and appended as a fallback to both font families.

use eframe::egui;
use std::sync::Arc;

/// Name the fallback font is registered under in egui.
const FALLBACK_FONT_NAME: &str = "cjk-fallback";

/// Families tried in order; the first one installed on the system wins.
const CJK_FAMILIES: &[&str] = &[
    "PingFang SC",
    "Hiragino Sans GB",
    "Microsoft YaHei",
    "Noto Sans CJK SC",
    "Noto Sans SC",
    "Source Han Sans SC",
    "WenQuanYi Micro Hei",
    "Droid Sans Fallback",
];

/// Loads the first available CJK family from `db` as egui font data.
fn find_cjk_font(db: &fontdb::Database) -> Option<(String, egui::FontData)> {
    CJK_FAMILIES.iter().find_map(|name| {
        let families = [fontdb::Family::Name(*name)];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query)?;
        db.with_face_data(id, |data, index| {
            let mut font = egui::FontData::from_owned(data.to_vec());
            font.index = index;
            (name.to_string(), font)
        })
    })
}

/// Builds font definitions with `font` appended as a fallback.
fn with_fallback(font: egui::FontData) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(FALLBACK_FONT_NAME.to_owned(), Arc::new(font));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FALLBACK_FONT_NAME.to_owned());
    }
    fonts
}

/// Installs a CJK-capable system font as a fallback. Returns whether one was found.
pub fn install_cjk_fallback(ctx: &egui::Context) -> bool {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    match find_cjk_font(&db) {
        Some((family, font)) => {
            log::info!("Using system font {family:?} for CJK text");
            ctx.set_fonts(with_fallback(font));
            true
        }
        None => {
            log::warn!("No CJK system font found; catalog text may not render");
            false
        }
    }
}
