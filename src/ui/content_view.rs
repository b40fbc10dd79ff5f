//! The two content widgets that live inside the page wizard: the
//! styled reader (`TextDisplay` with a style buffer) and the blog
//! index (`HoldBrowser` of post rows).

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    browser::HoldBrowser,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::domain::post::Post;
use crate::app::messages::Message;
use crate::app::services::render::{self, StyledDoc};

/// Read-only styled text area used for the home page and post pages.
pub struct ContentView {
    pub display: TextDisplay,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
}

impl ContentView {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        let mut display = TextDisplay::new(x, y, w, h, None);
        display.set_buffer(buffer.clone());
        display.wrap_mode(WrapMode::AtBounds, 0);
        display.set_frame(fltk::enums::FrameType::FlatBox);
        display.set_scrollbar_size(12);

        Self {
            display,
            buffer,
            style_buffer,
        }
    }

    /// Swap in a rendered page. The style table is rebuilt per page
    /// because code highlighting allocates entries dynamically.
    pub fn show_doc(&mut self, doc: &StyledDoc) {
        self.buffer.set_text(&doc.text);
        self.style_buffer.set_text(&doc.styles);
        self.display
            .set_highlight_data(self.style_buffer.clone(), doc.table.clone());
        self.display.scroll(0, 0);
        self.display.redraw();
    }
}

/// Blog index list. Rows are formatted by the renderer; selecting one
/// sends `Message::OpenPost` with the post's slug.
pub struct BlogIndex {
    pub browser: HoldBrowser,
    slugs: Rc<RefCell<Vec<String>>>,
}

impl BlogIndex {
    pub fn new(x: i32, y: i32, w: i32, h: i32, sender: Sender<Message>) -> Self {
        let mut browser = HoldBrowser::new(x, y, w, h, None);
        browser.set_frame(fltk::enums::FrameType::FlatBox);

        let slugs: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let cb_slugs = slugs.clone();
        browser.set_callback(move |b| {
            let line = b.value();
            if line < 1 {
                return;
            }
            let slugs = cb_slugs.borrow();
            if let Some(slug) = slugs.get((line - 1) as usize) {
                sender.send(Message::OpenPost(slug.clone()));
            }
        });

        Self { browser, slugs }
    }

    pub fn set_posts(&mut self, posts: &[Post]) {
        self.browser.clear();
        let mut slugs = self.slugs.borrow_mut();
        slugs.clear();
        for post in posts {
            self.browser.add(&render::index_row(post));
            slugs.push(post.slug.clone());
        }
        drop(slugs);

        if posts.is_empty() {
            self.browser.add("No posts yet.");
        }
        self.browser.redraw();
    }

    pub fn set_text_attrs(&mut self, font: fltk::enums::Font, size: i32) {
        self.browser.set_text_font(font);
        self.browser.set_text_size(size);
        self.browser.redraw();
    }
}
