//! Books Page
//!
//! Heading, optional error paragraph and the list of book titles.

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, Context, ElementId, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::features::books::controller::BooksController;
use crate::features::books::view::{BookItem, BooksView};
use crate::services::books_client::BookSource;
use crate::theme::colors::BookColors;

/// Books page component
pub struct BooksPage {
    entities: AppEntities,
    controller: BooksController,
}

impl BooksPage {
    pub fn new(
        entities: AppEntities,
        source: Arc<dyn BookSource>,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller = BooksController::new(entities.clone(), source);

        // Observe books state
        cx.observe(&entities.books, |_this, _, cx| cx.notify())
            .detach();

        controller.load_once(cx);

        Self {
            entities,
            controller,
        }
    }

    /// Controller driving this page
    pub fn controller(&self) -> &BooksController {
        &self.controller
    }

    fn render_item(item: BookItem) -> impl IntoElement {
        div()
            .id(ElementId::Name(SharedString::from(item.key)))
            .w_full()
            .min_h(px(32.0))
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(BookColors::border())
            .text_sm()
            .text_color(BookColors::text_primary())
            .child(item.title)
    }
}

impl Render for BooksPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = BooksView::from_state(self.entities.books.read(cx));

        div()
            .id("books-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_3()
            .bg(BookColors::content_bg())
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(BookColors::text_primary())
                    .child(view.heading),
            )
            .when_some(view.error, |page, message| {
                page.child(
                    div()
                        .text_sm()
                        .text_color(BookColors::danger())
                        .child(message),
                )
            })
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .border_1()
                    .border_color(BookColors::border())
                    .rounded_md()
                    .children(view.items.into_iter().map(Self::render_item)),
            )
    }
}
