pub mod fetcher;
pub mod web;

pub use fetcher::Fetch;
pub use web::HttpFetcher;
