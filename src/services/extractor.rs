use crate::domain::{stripped_text, Extraction, RawRow, RowSelection, SkipReason, TableSpec};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static NESTED_TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());

/// Lazily walks the data rows of a located table.
///
/// Rows are yielded in document order. A row with fewer cells than
/// `spec.min_cells` comes out as [`SkipReason::TooFewCells`] instead of a
/// [`RawRow`]. Cells are collected from every `td` below the row, nested
/// sub-tables included, so column indices count those inner cells too.
pub struct RowExtractor<'a> {
    rows: std::iter::Enumerate<Box<dyn Iterator<Item = ElementRef<'a>> + 'a>>,
    spec: &'a TableSpec,
}

pub fn extract<'a>(table: ElementRef<'a>, spec: &'a TableSpec) -> RowExtractor<'a> {
    let rows: Box<dyn Iterator<Item = ElementRef<'a>> + 'a> = match &spec.rows {
        RowSelection::AfterHeader => Box::new(table.select(&ROW).skip(1)),
        RowSelection::Classed(selector) => Box::new(table.select(selector)),
    };

    RowExtractor {
        rows: rows.enumerate(),
        spec,
    }
}

impl Iterator for RowExtractor<'_> {
    type Item = Result<RawRow, SkipReason>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, row) = self.rows.next()?;
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();

        if cells.len() < self.spec.min_cells {
            return Some(Err(SkipReason::TooFewCells {
                row: index,
                found: cells.len(),
                required: self.spec.min_cells,
            }));
        }

        let cells = self
            .spec
            .columns
            .iter()
            .map(|column| {
                cells
                    .get(column.index)
                    .map(|cell| extract_cell(*cell, &column.extraction))
            })
            .collect();

        Some(Ok(RawRow { index, cells }))
    }
}

pub fn extract_cell(cell: ElementRef<'_>, extraction: &Extraction) -> String {
    match extraction {
        Extraction::Text => stripped_text(cell),
        Extraction::LinkAndBadge { link, badge } => {
            let link_text = first_text(cell, link).unwrap_or_default();
            let badge_text = first_text(cell, badge).unwrap_or_default();
            format!("{link_text} {badge_text}").trim().to_string()
        }
        Extraction::SubTableLink(link) => cell
            .select(&NESTED_TABLE)
            .next()
            .and_then(|table| first_text(table, link))
            .unwrap_or_default(),
        Extraction::SubTableSecondRow => cell
            .select(&NESTED_TABLE)
            .next()
            .and_then(|table| table.select(&ROW).nth(1))
            .and_then(|row| first_text(row, &CELL))
            .unwrap_or_default(),
        Extraction::PreferredSpan(preferred) | Extraction::LinkOrText(preferred) => {
            first_text(cell, preferred).unwrap_or_else(|| stripped_text(cell))
        }
    }
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().map(stripped_text)
}
