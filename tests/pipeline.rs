use aja_data::domain::{Fixture, PlayerSeasonStats, Record, StandingRow};
use aja_data::error::ScrapeError;
use aja_data::infrastructure::{
    FileFetcher, FileSystemStore, HttpFetcher, ImpersonatedFetcher, Jitter,
};
use aja_data::services::{Outcome, Pipeline};
use httpmock::prelude::*;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_html(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

fn file_pipeline(fixture: &str, data_dir: &std::path::Path) -> Pipeline<FileSystemStore> {
    Pipeline::new(
        Box::new(FileFetcher::new(fixture_path(fixture))),
        FileSystemStore::new(data_dir),
    )
}

const ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7";

fn http_fetcher() -> HttpFetcher {
    HttpFetcher::new(Jitter::none(), Duration::from_secs(5)).unwrap()
}

fn chrome_fetcher() -> ImpersonatedFetcher {
    ImpersonatedFetcher::new(Jitter::none(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn writes_pretty_json_in_row_order() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline = file_pipeline("statistics.html", temp_dir.path());

    let outcome = pipeline.run::<PlayerSeasonStats>().await.unwrap();

    let expected_path = temp_dir.path().join("aja_statistics.json");
    assert_eq!(
        outcome,
        Outcome::Written {
            path: expected_path.clone(),
            records: 3,
            skipped: 1,
        }
    );

    let json = std::fs::read_to_string(&expected_path).unwrap();
    assert!(json.starts_with("[\n  {\n    \"numero\": \"16\",\n    \"nom\": \"Donovan Léon\","));
    assert!(json.contains("\"position\": \"Arrière droit\""));
    assert!(json.contains("\"red_cards\": 2,"));
    assert!(json.contains("\"points_per_match\": null"));
    assert!(!json.contains("\\u00e9"));
    assert!(!json.ends_with('\n'));

    let parsed: Vec<PlayerSeasonStats> = serde_json::from_str(&json).unwrap();
    let names: Vec<&str> = parsed.iter().map(|p| p.nom.as_str()).collect();
    assert_eq!(names, ["Donovan Léon", "Gauthier Hein", "Paul Joly"]);
}

#[tokio::test]
async fn field_order_is_fixed_per_record_kind() {
    let temp_dir = TempDir::new().unwrap();
    file_pipeline("classement.html", temp_dir.path())
        .run::<StandingRow>()
        .await
        .unwrap();

    let json = std::fs::read_to_string(temp_dir.path().join(StandingRow::OUTPUT_FILE)).unwrap();
    let first_record = &json[..json.find('}').unwrap()];
    let fields = [
        "position",
        "equipe",
        "matchs_joues",
        "gagnes",
        "nuls",
        "perdus",
        "buts_marques",
        "buts_encaisses",
        "difference",
        "points",
        "positionStatus",
    ];
    let offsets: Vec<usize> = fields
        .iter()
        .map(|field| first_record.find(&format!("\"{field}\":")).unwrap())
        .collect();
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn rerun_on_same_page_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline = file_pipeline("calendrier.html", temp_dir.path());
    let path = temp_dir.path().join(Fixture::OUTPUT_FILE);

    pipeline.run::<Fixture>().await.unwrap();
    let first = std::fs::read(&path).unwrap();
    pipeline.run::<Fixture>().await.unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn creates_missing_directories_and_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("nested/data");
    let pipeline = file_pipeline("calendrier.html", &data_dir);

    pipeline.run::<Fixture>().await.unwrap();
    let path = data_dir.join("aja_calendrier.json");
    assert!(path.exists());

    std::fs::write(&path, "stale content").unwrap();
    pipeline.run::<Fixture>().await.unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.starts_with('['));
    assert!(!json.contains("stale"));
}

#[tokio::test]
async fn missing_table_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let pipeline = file_pipeline("calendrier.html", temp_dir.path());

    let outcome = pipeline.run::<StandingRow>().await.unwrap();

    assert_eq!(outcome, Outcome::TableNotFound);
    assert!(!temp_dir.path().join(StandingRow::OUTPUT_FILE).exists());
}

#[tokio::test]
async fn table_without_usable_rows_is_no_data() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/empty");
            then.status(200).body(
                "<table class=\"items\"><tr><th>#</th></tr>\
                 <tr><td>Publicité</td><td></td><td></td><td></td><td></td>\
                 <td></td><td></td><td></td><td></td><td></td></tr></table>",
            );
        })
        .await;
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(http_fetcher()), FileSystemStore::new(temp_dir.path()));

    let result = pipeline.run_url::<StandingRow>(&server.url("/empty")).await;

    assert!(matches!(result, Err(ScrapeError::NoData { kind: "standings" })));
    assert!(!temp_dir.path().join(StandingRow::OUTPUT_FILE).exists());
}

#[tokio::test]
async fn plain_fetch_sends_language_preference() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ligue-1/tabelle")
                .header("user-agent", HttpFetcher::user_agent())
                .header("accept-language", ACCEPT_LANGUAGE);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(fixture_html("classement.html"));
        })
        .await;
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(http_fetcher()), FileSystemStore::new(temp_dir.path()));

    let outcome = pipeline
        .run_url::<StandingRow>(&server.url("/ligue-1/tabelle"))
        .await
        .unwrap();

    page.assert_async().await;
    assert!(matches!(outcome, Outcome::Written { records: 18, skipped: 1, .. }));
}

#[tokio::test]
async fn http_error_status_fails_closed() {
    let server = MockServer::start_async().await;
    let blocked = server
        .mock_async(|when, then| {
            when.method(GET).path("/blocked");
            then.status(403).body("<html>Just a moment...</html>");
        })
        .await;
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(http_fetcher()), FileSystemStore::new(temp_dir.path()));

    let result = pipeline.run_url::<Fixture>(&server.url("/blocked")).await;

    match result {
        Err(ScrapeError::HttpStatus { status, .. }) => assert_eq!(status, 403),
        other => panic!("expected HTTP status error, got {other:?}"),
    }
    blocked.assert_hits_async(1).await;
    assert!(!temp_dir.path().join(Fixture::OUTPUT_FILE).exists());
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let fetcher = HttpFetcher::new(Jitter::none(), Duration::from_millis(500)).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(fetcher), FileSystemStore::new(temp_dir.path()));

    let result = pipeline.run_url::<Fixture>("http://127.0.0.1:9/").await;

    assert!(matches!(result, Err(ScrapeError::Network(_))));
}

#[tokio::test]
async fn chrome_emulation_fetches_with_browser_identity() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ligue-1/tabelle")
                .header_exists("user-agent")
                .header_exists("sec-ch-ua")
                .header("accept-language", ACCEPT_LANGUAGE);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body(fixture_html("classement.html"));
        })
        .await;
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(chrome_fetcher()), FileSystemStore::new(temp_dir.path()));

    let outcome = pipeline
        .run_url::<StandingRow>(&server.url("/ligue-1/tabelle"))
        .await
        .unwrap();

    page.assert_async().await;
    assert!(matches!(outcome, Outcome::Written { records: 18, skipped: 1, .. }));
}

#[tokio::test]
async fn chrome_emulation_fails_closed_on_block() {
    let server = MockServer::start_async().await;
    let blocked = server
        .mock_async(|when, then| {
            when.method(GET).path("/blocked");
            then.status(403).body("<html>Just a moment...</html>");
        })
        .await;
    let temp_dir = TempDir::new().unwrap();
    let pipeline = Pipeline::new(Box::new(chrome_fetcher()), FileSystemStore::new(temp_dir.path()));

    let result = pipeline.run_url::<StandingRow>(&server.url("/blocked")).await;

    assert!(matches!(result, Err(ScrapeError::HttpStatus { status: 403, .. })));
    blocked.assert_hits_async(1).await;
    assert!(!temp_dir.path().join(StandingRow::OUTPUT_FILE).exists());
}
