use aja_data::domain::StandingRow;
use aja_data::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    aja_data::app::run::<StandingRow>().await
}
