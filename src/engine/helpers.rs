use geo_types::Geometry;
use geozero::wkb;
use sqlx::{postgres::PgRow, Row};

use crate::{
    entities::Place,
    error::{unexpected_error, Error},
};

pub const PLACE_COLUMNS: &str = "id, name, description, location::geometry AS location";

pub fn place_from_row(row: &PgRow) -> Result<Place, Error> {
    let id: i32 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let description: String = row.try_get("description")?;
    let wkb::Decode { geometry }: wkb::Decode<Geometry<f64>> = row.try_get("location")?;

    let geometry = geometry.ok_or_else(|| unexpected_error("stored location is null"))?;

    Ok(Place {
        id,
        name,
        description,
        location: geometry.try_into()?,
    })
}

/// Builds an ILIKE pattern matching `needle` anywhere, with LIKE wildcards
/// in `needle` taken literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');

    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

#[test]
fn contains_pattern_escapes_wildcards() {
    assert_eq!(contains_pattern("new"), "%new%");
    assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    assert_eq!(contains_pattern(""), "%%");
}
