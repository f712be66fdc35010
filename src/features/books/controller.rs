//! Books Controller
//!
//! Issues the single books request when the page is first shown and
//! applies its outcome to `BooksState`.

use std::sync::Arc;

use gpui::{AsyncApp, Context};

use crate::app::entities::AppEntities;
use crate::features::books::page::BooksPage;
use crate::services::books_client::BookSource;
use crate::state::books_state::FetchOutcome;

/// Await the source and collapse any failure into its display text
pub async fn fetch_outcome(source: &dyn BookSource) -> FetchOutcome {
    match source.fetch_books().await {
        Ok(books) => Ok(books),
        Err(e) => {
            tracing::warn!("Failed to load books: {:?}", e);
            Err(e.to_string())
        }
    }
}

/// Books page controller
pub struct BooksController {
    entities: AppEntities,
    source: Arc<dyn BookSource>,
}

impl BooksController {
    /// Create a new controller
    pub fn new(entities: AppEntities, source: Arc<dyn BookSource>) -> Self {
        Self { entities, source }
    }

    /// Fetch the books unless this page load already did
    ///
    /// The continuation holds only a weak handle to the page, so a response
    /// arriving after the page is gone is dropped.
    pub fn load_once(&self, cx: &mut Context<BooksPage>) {
        let started = self.entities.books.update(cx, |state, cx| {
            let started = state.begin_fetch();
            cx.notify();
            started
        });
        if !started {
            tracing::debug!("Books already requested for this page");
            return;
        }

        let books = self.entities.books.clone();
        let source = self.source.clone();

        cx.spawn(async move |this, cx: &mut AsyncApp| {
            let outcome = fetch_outcome(source.as_ref()).await;

            if let Err(e) = this.update(cx, |_page, cx| {
                books.update(cx, |state, cx| {
                    state.apply(outcome);
                    cx.notify();
                });
            }) {
                tracing::debug!("Books page dropped before response arrived: {:?}", e);
            }
        })
        .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::Book;
    use crate::error::{Error, Result};
    use crate::features::books::view::BooksView;
    use crate::state::books_state::{BooksState, LoadPhase};
    use futures::channel::oneshot;
    use futures::future::{BoxFuture, FutureExt};
    use gpui::{AppContext, TestAppContext};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source returning a canned response and counting calls
    struct FakeSource {
        response: fn() -> Result<Vec<Book>>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(response: fn() -> Result<Vec<Book>>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl BookSource for FakeSource {
        fn fetch_books(&self) -> BoxFuture<'static, Result<Vec<Book>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = (self.response)();
            async move { result }.boxed()
        }
    }

    /// Source whose response is released by the test through a oneshot sender
    struct HeldSource {
        rx: Mutex<Option<oneshot::Receiver<Vec<Book>>>>,
    }

    impl HeldSource {
        fn new(rx: oneshot::Receiver<Vec<Book>>) -> Self {
            Self {
                rx: Mutex::new(Some(rx)),
            }
        }
    }

    impl BookSource for HeldSource {
        fn fetch_books(&self) -> BoxFuture<'static, Result<Vec<Book>>> {
            let rx = self.rx.lock().expect("source lock").take();
            async move {
                let rx = rx.ok_or_else(|| Error::Invalid {
                    message: "fetched twice".to_string(),
                })?;
                rx.await.map_err(|_| Error::Invalid {
                    message: "response sender dropped".to_string(),
                })
            }
            .boxed()
        }
    }

    async fn render_after_fetch(source: &FakeSource) -> BooksView {
        let mut state = BooksState::default();
        assert!(state.begin_fetch());
        state.apply(fetch_outcome(source).await);
        BooksView::from_state(&state)
    }

    #[tokio::test]
    async fn test_two_books_in_order() {
        let source = FakeSource::new(|| Ok(vec![Book::new(1, "A"), Book::new(2, "B")]));
        let view = render_after_fetch(&source).await;
        assert_eq!(view.titles(), vec!["A", "B"]);
        assert!(view.error.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_status_failure_shows_generic_message() {
        let source = FakeSource::new(|| Err(Error::HttpStatus { status: 500 }));
        let view = render_after_fetch(&source).await;
        assert_eq!(view.error.as_deref(), Some("Failed to fetch books"));
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_response() {
        let source = FakeSource::new(|| Ok(Vec::new()));
        let view = render_after_fetch(&source).await;
        assert!(view.error.is_none());
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn test_refetch_is_deterministic() {
        let source = FakeSource::new(|| Ok(vec![Book::new(1, "A"), Book::new(2, "B")]));
        let first = render_after_fetch(&source).await;
        let second = render_after_fetch(&source).await;
        assert_eq!(first, second);
        assert_eq!(second.items.len(), 2);
    }

    #[tokio::test]
    async fn test_decode_failure_message_reaches_page() {
        let source = FakeSource::new(|| {
            let source = serde_json::from_str::<Vec<Book>>("{}").unwrap_err();
            Err(Error::Decode { source })
        });
        let view = render_after_fetch(&source).await;
        let message = view.error.expect("error shown");
        assert!(!message.is_empty());
        assert_ne!(message, "Failed to fetch books");
    }

    #[gpui::test]
    fn test_load_once_issues_single_request(cx: &mut TestAppContext) {
        let source = Arc::new(FakeSource::new(|| Ok(vec![Book::new(1, "A")])));
        let page_source: Arc<dyn BookSource> = source.clone();
        let entities = cx.update(AppEntities::init);

        let page = cx.new(|cx| BooksPage::new(entities.clone(), page_source, cx));
        page.update(cx, |page, cx| page.controller().load_once(cx));
        page.update(cx, |page, cx| page.controller().load_once(cx));
        cx.run_until_parked();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        let (phase, books, error) = entities.books.read_with(cx, |state, _| {
            (state.phase, state.books.clone(), state.error.clone())
        });
        assert_eq!(phase, LoadPhase::Loaded);
        assert_eq!(books, vec![Book::new(1, "A")]);
        assert!(error.is_none());
    }

    #[gpui::test]
    fn test_load_once_failure_reaches_state(cx: &mut TestAppContext) {
        let source: Arc<dyn BookSource> =
            Arc::new(FakeSource::new(|| Err(Error::HttpStatus { status: 503 })));
        let entities = cx.update(AppEntities::init);

        let _page = cx.new(|cx| BooksPage::new(entities.clone(), source, cx));
        cx.run_until_parked();

        let (phase, books, error) = entities.books.read_with(cx, |state, _| {
            (state.phase, state.books.clone(), state.error.clone())
        });
        assert_eq!(phase, LoadPhase::Failed);
        assert!(books.is_empty());
        assert_eq!(error.as_deref(), Some("Failed to fetch books"));
    }

    #[gpui::test]
    fn test_response_after_page_dropped_is_ignored(cx: &mut TestAppContext) {
        let (tx, rx) = oneshot::channel();
        let source: Arc<dyn BookSource> = Arc::new(HeldSource::new(rx));
        let entities = cx.update(AppEntities::init);

        let page = cx.new(|cx| BooksPage::new(entities.clone(), source, cx));
        cx.run_until_parked();
        assert_eq!(
            entities.books.read_with(cx, |state, _| state.phase),
            LoadPhase::Loading
        );

        drop(page);
        cx.run_until_parked();

        let _ = tx.send(vec![Book::new(1, "Late")]);
        cx.run_until_parked();

        let (phase, books, error) = entities.books.read_with(cx, |state, _| {
            (state.phase, state.books.clone(), state.error.clone())
        });
        assert_eq!(phase, LoadPhase::Loading);
        assert!(books.is_empty());
        assert!(error.is_none());
    }
}
