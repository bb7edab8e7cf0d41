//! System font lookup for text elements.
//!
//! Family strings use CSS syntax (`"Impact, Arial Black, sans-serif"`); each entry is
//! tried in order and generic names map to fontdb's generic families. Loaded faces
//! are cached for the life of the process.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::{HashMap, HashSet},
    fs,
    sync::{Mutex, OnceLock},
};

#[derive(Clone, Eq, PartialEq, Hash)]
struct FontKey {
    family: String,
    bold: bool,
    italic: bool,
}

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        db
    })
}

pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Splits a CSS family list into trimmed, unquoted names.
pub fn parse_family_list(family: &str) -> Vec<&str> {
    family
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|f| !f.is_empty())
        .collect()
}

fn to_family(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" | "sans" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

/// Font for a CSS family list, falling back to any sans-serif face.
///
/// `None` only when the system has no usable font at all.
pub fn get_font_for(family: &str, bold: bool, italic: bool) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<FontKey, &'static Font<'static>>>> = OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    let key = FontKey {
        family: family.to_string(),
        bold,
        italic,
    };

    if let Some(font) = cache.lock().unwrap_or_else(|p| p.into_inner()).get(&key) {
        return Some(*font);
    }

    let mut families: Vec<Family<'_>> = parse_family_list(family).into_iter().map(to_family).collect();
    families.push(Family::SansSerif);

    let font_ref: &'static Font<'static> = match load_font_from_system(&families, bold, italic) {
        Some(font) => Box::leak(Box::new(font)),
        None => {
            tracing::warn!("No system font available for '{}'", family);
            return None;
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(key, font_ref);
    Some(font_ref)
}

fn load_font_from_system(families: &[Family<'_>], bold: bool, italic: bool) -> Option<Font<'static>> {
    let query = Query {
        families,
        weight: if bold { Weight::BOLD } else { Weight::NORMAL },
        stretch: Stretch::Normal,
        style: if italic { Style::Italic } else { Style::Normal },
    };

    let id = db().query(&query).or_else(|| db().faces().next().map(|f| f.id))?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}
