use crate::config::RecorderConfig;
use crate::error::{RecordError, Result};
use crate::fetchers::Fetch;
use reqwest::Client;
use std::error::Error as _;
use url::Url;

/// Fetches pages with a single GET request: no retries, no backoff.
///
/// Redirects follow reqwest's default policy.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client carrying the configured user agent and total timeout
    pub fn new(config: &RecorderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| RecordError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        ::log::info!("Fetching: {}", url);
        let started = std::time::Instant::now();

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        ::log::debug!(
            "GET {} returned {} after {} ms",
            url,
            status,
            started.elapsed().as_millis()
        );

        let body = response
            .error_for_status()
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)?;

        ::log::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Flattens a reqwest error and its causes into a single message
fn network_error(err: reqwest::Error) -> RecordError {
    let mut message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    };

    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    RecordError::Network(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url(server: &MockServer, route: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", crate::config::DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&RecorderConfig::default()).unwrap();
        let body = fetcher.fetch(&url(&server, "/page")).await.unwrap();

        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&RecorderConfig::default()).unwrap();
        let err = fetcher.fetch(&url(&server, "/missing")).await.unwrap_err();

        assert!(err.is_network(), "unexpected error: {}", err);
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_redirect_is_followed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&RecorderConfig::default()).unwrap();
        let body = fetcher.fetch(&url(&server, "/old")).await.unwrap();

        assert_eq!(body, "moved");
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("too late")
                    .set_delay(std::time::Duration::from_millis(2_000)),
            )
            .mount(&server)
            .await;

        let config = RecorderConfig {
            timeout_ms: 100,
            ..RecorderConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let err = fetcher.fetch(&url(&server, "/slow")).await.unwrap_err();

        assert!(err.is_network());
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind and drop a listener to get a port nothing is serving on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = HttpFetcher::new(&RecorderConfig::default()).unwrap();
        let target = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        assert!(fetcher.fetch(&target).await.unwrap_err().is_network());
    }
}
