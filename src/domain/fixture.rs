use super::record::{NormalizedRow, Record};
use super::table::{selector, ColumnSpec, Extraction, Locator, RowSelection, TableSpec};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One match of the club's season calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub journee: Option<String>,
    pub date: Option<String>,
    pub horaire: Option<String>,
    pub dom_ext: Option<String>,
    pub classement: Option<String>,
    pub contre: Option<String>,
    pub formation: Option<String>,
    pub spectateurs: Option<String>,
    pub resultat: Option<String>,
}

impl Record for Fixture {
    const KIND: &'static str = "fixtures";
    const SOURCE_URL: &'static str =
        "https://www.transfermarkt.fr/aj-auxerre/spielplan/verein/290/saison_id/2025#FR1";
    const OUTPUT_FILE: &'static str = "aja_calendrier.json";

    fn table_spec() -> Result<TableSpec> {
        Ok(TableSpec {
            name: Self::KIND,
            locator: Locator::headers(&["Journée", "Contre", "Résultat"]),
            rows: RowSelection::AfterHeader,
            min_cells: 10,
            columns: vec![
                ColumnSpec::text("journee", 0),
                ColumnSpec::text("date", 1),
                ColumnSpec::text("horaire", 2),
                ColumnSpec::text("dom_ext", 3),
                ColumnSpec::text("classement", 4),
                // 5 is the opponent's crest
                ColumnSpec::new(
                    "contre",
                    6,
                    Extraction::LinkAndBadge {
                        link: selector("a")?,
                        badge: selector("span.tabellenplatz")?,
                    },
                ),
                ColumnSpec::text("formation", 7),
                ColumnSpec::text("spectateurs", 8),
                ColumnSpec::new(
                    "resultat",
                    9,
                    Extraction::PreferredSpan(selector("span.greentext")?),
                ),
            ],
        })
    }

    fn from_row(row: &NormalizedRow) -> Self {
        Self {
            journee: row.opt_text("journee"),
            date: row.opt_text("date"),
            horaire: row.opt_text("horaire"),
            dom_ext: row.opt_text("dom_ext"),
            classement: row.opt_text("classement"),
            contre: row.opt_text("contre"),
            formation: row.opt_text("formation"),
            spectateurs: row.opt_text("spectateurs"),
            resultat: row.opt_text("resultat"),
        }
    }
}
