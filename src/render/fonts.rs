use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{CinetrendError, CinetrendResult};

/// Font database shared by chart and header text.
///
/// Every text run in cinetrend is written with `font-family="sans-serif"`; the database maps that
/// generic family to the configured face, and [`FontSet::options`] falls back to any loaded face
/// so text never silently disappears.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontSet {
    /// Load `font_path` if given, otherwise the system fonts. Having no usable face is fatal.
    pub fn load(font_path: Option<&Path>) -> CinetrendResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        match font_path {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|e| {
                    CinetrendError::resource(format!("read font '{}': {e}", path.display()))
                })?;
                db.load_font_data(bytes);
                if db.is_empty() {
                    return Err(CinetrendError::resource(format!(
                        "no usable font faces in '{}'",
                        path.display()
                    )));
                }
                let family = db
                    .faces()
                    .next()
                    .and_then(|face| face.families.first())
                    .map(|(name, _)| name.clone());
                if let Some(family) = family {
                    db.set_sans_serif_family(family);
                }
            }
            None => {
                db.load_system_fonts();
                if db.is_empty() {
                    return Err(CinetrendError::resource(
                        "no system fonts found; configure font_path",
                    ));
                }
            }
        }
        let fonts = Self { db: Arc::new(db) };
        tracing::debug!(faces = fonts.face_count(), "fonts loaded");
        Ok(fonts)
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Parse options wired to this font set.
    pub fn options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            font_resolver: font_resolver(),
            ..Default::default()
        }
    }
}

fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            // The generic sans-serif family may name a face that is not installed.
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
