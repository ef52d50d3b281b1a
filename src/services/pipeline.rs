use crate::domain::{Page, Record, ResultSet, SkipReason, Storage};
use crate::error::{Result, ScrapeError};
use crate::infrastructure::Fetcher;
use crate::services::{extractor::extract, locator::locate, normalizer::normalize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written {
        path: PathBuf,
        records: usize,
        skipped: usize,
    },
    /// The page came back but the target table was not on it. Nothing written.
    TableNotFound,
}

/// Locate, extract and normalize the records of `R` from an already fetched page.
///
/// Returns `Ok(None)` when the table is missing. Rows that cannot be turned into
/// a record are kept as skip reasons in the result set, they never fail the call.
pub fn scrape<R: Record>(page: &Page) -> Result<Option<ResultSet<R>>> {
    let spec = R::table_spec()?;

    let Some(table) = locate(page, &spec) else {
        return Ok(None);
    };
    info!("{}: table located, extracting rows", spec.name);

    let mut results = ResultSet::new();
    for row in extract(table, &spec) {
        match row.and_then(|raw| normalize(&raw, &spec)) {
            Ok(normalized) => results.push(R::from_row(&normalized)),
            Err(reason) => {
                match &reason {
                    SkipReason::TooFewCells { .. } => debug!("{}: skipped {}", spec.name, reason),
                    SkipReason::Malformed { .. } => warn!("{}: skipped {}", spec.name, reason),
                }
                results.skip(reason);
            }
        }
    }

    Ok(Some(results))
}

/// Fetch → locate → extract → normalize → persist, once, for one record kind.
pub struct Pipeline<S> {
    fetcher: Box<dyn Fetcher>,
    store: S,
}

impl<S: Storage> Pipeline<S> {
    pub fn new(fetcher: Box<dyn Fetcher>, store: S) -> Self {
        Self { fetcher, store }
    }

    pub async fn run<R: Record>(&self) -> Result<Outcome> {
        self.run_url::<R>(R::SOURCE_URL).await
    }

    pub async fn run_url<R: Record>(&self, url: &str) -> Result<Outcome> {
        info!("Starting {} pipeline ({} fetcher)", R::KIND, self.fetcher.name());

        let markup = self.fetcher.fetch(url).await?;
        let page = Page::parse(url, &markup);

        let Some(results) = scrape::<R>(&page)? else {
            warn!("{}: target table not found on {}", R::KIND, page.url());
            return Ok(Outcome::TableNotFound);
        };

        if results.is_empty() {
            return Err(ScrapeError::NoData { kind: R::KIND });
        }

        let path = self.store.save_records(&results)?;
        info!(
            "{} {} records written to {:?}, {} rows skipped",
            results.len(),
            R::KIND,
            path,
            results.skipped().len()
        );

        Ok(Outcome::Written {
            path,
            records: results.len(),
            skipped: results.skipped().len(),
        })
    }
}
