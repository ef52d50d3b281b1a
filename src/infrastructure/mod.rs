mod fetchers;
mod storage;

pub use fetchers::{
    file::FileFetcher,
    http::{HttpFetcher, Jitter},
    impersonate::ImpersonatedFetcher,
    Fetcher,
};
pub use storage::fs_store::FileSystemStore;
