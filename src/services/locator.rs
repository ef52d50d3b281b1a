use crate::domain::{stripped_text, Locator, Page, TableSpec};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use std::collections::HashSet;
use tracing::debug;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());

/// Finds the table a `TableSpec` describes, `None` if the page has no such table.
pub fn locate<'a>(page: &'a Page, spec: &TableSpec) -> Option<ElementRef<'a>> {
    match &spec.locator {
        Locator::HeaderSignature(labels) => page
            .document()
            .select(&TABLE)
            .enumerate()
            .find(|(position, table)| {
                let headers = header_texts(*table);
                let matched = labels.iter().all(|label| headers.contains(*label));
                debug!(
                    "{}: table #{} headers {:?} match={}",
                    spec.name, position, headers, matched
                );
                matched
            })
            .map(|(_, table)| table),
        Locator::Class { class, selector } => {
            let table = page.document().select(selector).next();
            debug!("{}: table.{} found={}", spec.name, class, table.is_some());
            table
        }
    }
}

fn header_texts(table: ElementRef<'_>) -> HashSet<String> {
    table.select(&HEADER_CELL).map(stripped_text).collect()
}
