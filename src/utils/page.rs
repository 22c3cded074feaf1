use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::utils::dom;

/// The page-level side effects a preference change has outside the signal tree.
pub trait PageEffects: 'static {
    fn add_body_class(&self, class: &str);
    fn remove_body_class(&self, class: &str);
    fn set_document_lang(&self, lang: &str);
    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl PageEffects for BrowserPage {
    fn add_body_class(&self, class: &str) {
        dom::add_body_class(class);
    }

    fn remove_body_class(&self, class: &str) {
        dom::remove_body_class(class);
    }

    fn set_document_lang(&self, lang: &str) {
        dom::set_document_lang(lang);
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        dom::sleep_ms(ms).boxed_local()
    }
}
