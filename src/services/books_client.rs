//! Books Client
//!
//! HTTP access to the BookTrack books listing.

use futures::future::{BoxFuture, FutureExt};
use snafu::ResultExt;

use crate::domain::book::Book;
use crate::domain::config::ApiConfig;
use crate::error::{DecodeSnafu, HttpStatusSnafu, Result, TransportSnafu};
use crate::services::runtime::run_in_tokio;

/// Anything that can produce the list of books
///
/// The page controller only depends on this seam, so tests can hand it a
/// canned outcome instead of a live server. The returned future is polled
/// on the GPUI executor.
pub trait BookSource: Send + Sync {
    /// Fetch the full list of books, in server order
    fn fetch_books(&self) -> BoxFuture<'static, Result<Vec<Book>>>;
}

/// reqwest-backed books client
#[derive(Debug, Clone)]
pub struct BooksClient {
    http: reqwest::Client,
    url: String,
}

impl BooksClient {
    /// Create a client for the configured API
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_url(config.books_url()?))
    }

    /// Create a client for an explicit books URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// URL the client requests
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `GET` the books listing
    ///
    /// A non-success status fails before the body is read.
    pub async fn get_books(&self) -> Result<Vec<Book>> {
        tracing::info!("Fetching books from {}", self.url);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .context(TransportSnafu)?;

        let status = response.status();
        if !status.is_success() {
            return HttpStatusSnafu {
                status: status.as_u16(),
            }
            .fail();
        }

        let body = response.bytes().await.context(TransportSnafu)?;
        let books: Vec<Book> = serde_json::from_slice(&body).context(DecodeSnafu)?;

        tracing::info!("Fetched {} books", books.len());
        Ok(books)
    }
}

impl BookSource for BooksClient {
    /// reqwest needs a tokio reactor, so the request runs on the bridge runtime
    fn fetch_books(&self) -> BoxFuture<'static, Result<Vec<Book>>> {
        let client = self.clone();
        run_in_tokio(async move { client.get_books().await }).boxed()
    }
}
