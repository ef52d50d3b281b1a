mod derive;
mod fixture;
mod page;
mod player;
mod record;
mod standing;
pub(crate) mod storage;
mod table;

pub use derive::{parse_goals, qualification_tier, total_red_cards};
pub use fixture::Fixture;
pub use page::{stripped_text, Page};
pub use player::PlayerSeasonStats;
pub use record::{NormalizedRow, RawRow, Record, ResultSet, SkipReason, Value};
pub use standing::StandingRow;
pub use storage::Storage;
pub(crate) use table::selector;
pub use table::{ColumnSpec, Extraction, Locator, Normalization, RowSelection, TableSpec};
