use super::derive::{parse_goals, qualification_tier};
use super::record::{NormalizedRow, Record};
use super::table::{selector, ColumnSpec, Extraction, Locator, Normalization, RowSelection, TableSpec};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub position: i64,
    pub equipe: String,
    pub matchs_joues: i64,
    pub gagnes: i64,
    pub nuls: i64,
    pub perdus: i64,
    pub buts_marques: i64,
    pub buts_encaisses: i64,
    pub difference: i64,
    pub points: i64,
    #[serde(rename = "positionStatus")]
    pub position_status: String,
}

impl Record for StandingRow {
    const KIND: &'static str = "standings";
    const SOURCE_URL: &'static str =
        "https://www.transfermarkt.fr/ligue-1/tabelle/wettbewerb/FR1/saison_id/2025";
    const OUTPUT_FILE: &'static str = "classementligue1.json";

    fn table_spec() -> Result<TableSpec> {
        let int = |field: &'static str, index: usize| {
            ColumnSpec::text(field, index).normalize(Normalization::Int)
        };

        Ok(TableSpec {
            name: Self::KIND,
            locator: Locator::class("items")?,
            rows: RowSelection::AfterHeader,
            min_cells: 10,
            columns: vec![
                int("position", 0),
                ColumnSpec::new(
                    "equipe",
                    2,
                    Extraction::LinkOrText(selector("a.vereinprofil_tooltip")?),
                ),
                int("matchs_joues", 3),
                int("gagnes", 4),
                int("nuls", 5),
                int("perdus", 6),
                ColumnSpec::text("buts", 7),
                int("difference", 8),
                int("points", 9),
            ],
        })
    }

    fn from_row(row: &NormalizedRow) -> Self {
        let position = row.int("position");
        let equipe = row.text("equipe");
        let (buts_marques, buts_encaisses) = parse_goals(&row.text("buts"));
        debug!("{}. {}", position, equipe);

        Self {
            position,
            equipe,
            matchs_joues: row.int("matchs_joues"),
            gagnes: row.int("gagnes"),
            nuls: row.int("nuls"),
            perdus: row.int("perdus"),
            buts_marques,
            buts_encaisses,
            difference: row.int("difference"),
            points: row.int("points"),
            position_status: qualification_tier(position).to_string(),
        }
    }
}
