use std::cell::{ Cell, RefCell };
use std::future::poll_fn;
use std::rc::Rc;
use std::task::{ Poll, Waker };

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::utils::PageEffects;

#[derive(Default)]
struct Timer {
    elapsed: Cell<bool>,
    waker: RefCell<Option<Waker>>,
}

/// Records every page side effect. Sleeps stay pending until `elapse` is called.
#[derive(Clone, Default)]
pub struct RecordingPage {
    log: Rc<RefCell<Vec<String>>>,
    timer: Rc<Timer>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    /// Lets every pending sleep finish.
    pub fn elapse(&self) {
        self.timer.elapsed.set(true);
        if let Some(waker) = self.timer.waker.borrow_mut().take() {
            waker.wake();
        }
    }

    fn record(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl PageEffects for RecordingPage {
    fn add_body_class(&self, class: &str) {
        self.record(format!("+{}", class));
    }

    fn remove_body_class(&self, class: &str) {
        self.record(format!("-{}", class));
    }

    fn set_document_lang(&self, lang: &str) {
        self.record(format!("lang={}", lang));
    }

    fn sleep(&self, ms: u32) -> LocalBoxFuture<'static, ()> {
        self.record(format!("sleep {}", ms));
        let timer = self.timer.clone();
        poll_fn(move |cx| {
            if timer.elapsed.get() {
                Poll::Ready(())
            } else {
                *timer.waker.borrow_mut() = Some(cx.waker().clone());
                Poll::Pending
            }
        }).boxed_local()
    }
}
