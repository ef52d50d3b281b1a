use crate::config::{init_tracing, Config};
use crate::domain::Record;
use crate::error::Result;
use crate::services::{Outcome, Pipeline};
use tracing::{info, warn};

/// Entry point shared by the binaries: one pipeline run for record kind `R`.
///
/// A missing table ends the run cleanly with nothing written. A fetch failure
/// or an empty result is returned as an error, so the process exits non-zero.
pub async fn run<R: Record>() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);

    let pipeline = Pipeline::new(config.build_fetcher()?, config.build_store());

    match pipeline.run::<R>().await? {
        Outcome::Written { path, records, .. } => {
            info!("{} {} saved to {:?}", records, R::KIND, path);
        }
        Outcome::TableNotFound => {
            warn!("No {} table in the page, nothing written", R::KIND);
        }
    }

    Ok(())
}
