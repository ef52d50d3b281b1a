use super::derive::total_red_cards;
use super::record::{NormalizedRow, Record};
use super::table::{selector, ColumnSpec, Extraction, Locator, Normalization, RowSelection, TableSpec};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Season totals of one squad member.
///
/// Counting columns keep the site's text, with the placeholder turned into
/// `"0"`. Only `red_cards` is numeric because it is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSeasonStats {
    pub numero: String,
    pub nom: String,
    pub age: String,
    pub position: String,
    pub matches: String,
    pub titularisations: String,
    pub goals: String,
    pub assists: String,
    pub yellow_cards: String,
    pub red_cards: i64,
    pub substitutions_in: String,
    pub substitutions_out: String,
    pub points_per_match: Option<String>,
    pub minutes: Option<String>,
}

impl Record for PlayerSeasonStats {
    const KIND: &'static str = "players";
    const SOURCE_URL: &'static str =
        "https://www.transfermarkt.fr/aj-auxerre/leistungsdaten/verein/290/reldata/%262025/plus/1";
    const OUTPUT_FILE: &'static str = "aja_statistics.json";

    /// Indices count the three cells of the name/position sub-table (2..=4).
    fn table_spec() -> Result<TableSpec> {
        let dash_to_zero = |field: &'static str, index: usize| {
            ColumnSpec::text(field, index).normalize(Normalization::DashToZero)
        };
        let count = |field: &'static str, index: usize| {
            ColumnSpec::text(field, index).normalize(Normalization::IntOrZero)
        };

        Ok(TableSpec {
            name: Self::KIND,
            locator: Locator::class("items")?,
            rows: RowSelection::Classed(selector("tr.odd, tr.even")?),
            min_cells: 15,
            columns: vec![
                ColumnSpec::text("numero", 0),
                ColumnSpec::new("nom", 1, Extraction::SubTableLink(selector(".hauptlink a")?)),
                ColumnSpec::new("position", 1, Extraction::SubTableSecondRow),
                ColumnSpec::text("age", 5),
                ColumnSpec::text("matches", 7),
                ColumnSpec::text("titularisations", 8),
                dash_to_zero("goals", 9),
                dash_to_zero("assists", 10),
                dash_to_zero("yellow_cards", 11),
                count("second_yellow_cards", 12),
                count("direct_red_cards", 13),
                dash_to_zero("substitutions_in", 14),
                dash_to_zero("substitutions_out", 15),
                ColumnSpec::text("points_per_match", 16),
                ColumnSpec::text("minutes", 17),
            ],
        })
    }

    fn from_row(row: &NormalizedRow) -> Self {
        Self {
            numero: row.text("numero"),
            nom: row.text("nom"),
            age: row.text("age"),
            position: row.text("position"),
            matches: row.text("matches"),
            titularisations: row.text("titularisations"),
            goals: row.text("goals"),
            assists: row.text("assists"),
            yellow_cards: row.text("yellow_cards"),
            red_cards: total_red_cards(row.int("second_yellow_cards"), row.int("direct_red_cards")),
            substitutions_in: row.text("substitutions_in"),
            substitutions_out: row.text("substitutions_out"),
            points_per_match: row.opt_text("points_per_match"),
            minutes: row.opt_text("minutes"),
        }
    }
}
