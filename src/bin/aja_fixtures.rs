use aja_data::domain::Fixture;
use aja_data::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    aja_data::app::run::<Fixture>().await
}
