//! Movie entity representing one row of the catalog.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single film in the catalog.
///
/// Records are created and removed by whoever owns the `movies` table; this
/// service only reads them. `budget` is kept as a fixed-precision decimal so
/// monetary values never pass through floating point inside the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub score: f64,
    pub genre: String,
    pub overview: String,
    pub crew: String,
    pub orig_title: String,
    pub status: String,
    pub orig_lang: String,
    pub budget: Decimal,
    pub revenue: i64,
    pub country: String,
}
