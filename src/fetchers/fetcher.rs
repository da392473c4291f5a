use crate::error::Result;
use std::future::Future;
use url::Url;

// Define a base trait for page sources
pub trait Fetch {
    /// Retrieve the raw markup for a URL
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}
