//! Search flow: begin on the shared session, wait out the theatrical delay, then reveal.

use missguided_core::{PendingSearch, SEARCH_DELAY_MS, SHORTCUT_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

use crate::app::state::PageSession;

/// Runs `task` after `delay_ms` milliseconds.
pub type Scheduler = Rc<dyn Fn(u32, Box<dyn FnOnce()>)>;

/// Drives searches against the one session owned by the page.
///
/// Every clone shares the same session and shortcut flag, so callbacks captured
/// in different renders still see each other's in-flight search.
#[derive(Clone)]
pub struct SearchFlow {
    session: Rc<RefCell<PageSession>>,
    shortcut_queued: Rc<RefCell<bool>>,
    set_query: Callback<String>,
    refresh: Callback<()>,
    schedule: Scheduler,
}

impl SearchFlow {
    #[must_use]
    pub fn new(
        session: Rc<RefCell<PageSession>>,
        shortcut_queued: Rc<RefCell<bool>>,
        set_query: Callback<String>,
        refresh: Callback<()>,
    ) -> Self {
        Self {
            session,
            shortcut_queued,
            set_query,
            refresh,
            schedule: Rc::new(after_delay),
        }
    }

    #[must_use]
    pub fn with_scheduler(mut self, schedule: Scheduler) -> Self {
        self.schedule = schedule;
        self
    }

    #[must_use]
    pub const fn session(&self) -> &Rc<RefCell<PageSession>> {
        &self.session
    }

    /// True while a shortcut is waiting to fire or a search is unresolved.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.shortcut_queued.borrow() || self.session.borrow().is_searching()
    }

    /// Start a search for `raw`, revealing the result after [`SEARCH_DELAY_MS`].
    ///
    /// Returns `false` without touching state for blank input or while busy.
    pub fn start_search(&self, raw: &str) -> bool {
        if *self.shortcut_queued.borrow() {
            log::debug!("search {raw:?} ignored: shortcut pending");
            return false;
        }
        self.begin(raw)
    }

    /// Pre-fill the input with a catalog key, then search for it after
    /// [`SHORTCUT_DELAY_MS`]. The page counts as busy from the click onward.
    pub fn start_shortcut(&self, key: &str) -> bool {
        if self.is_busy() {
            log::debug!("shortcut {key:?} ignored: search in flight");
            return false;
        }
        *self.shortcut_queued.borrow_mut() = true;
        self.set_query.emit(key.to_string());
        self.refresh.emit(());

        let flow = self.clone();
        let key = key.to_string();
        (self.schedule)(
            SHORTCUT_DELAY_MS,
            Box::new(move || {
                *flow.shortcut_queued.borrow_mut() = false;
                if !flow.begin(&key) {
                    flow.refresh.emit(());
                }
            }),
        );
        true
    }

    fn begin(&self, raw: &str) -> bool {
        let pending = match self.session.borrow_mut().begin_search(raw) {
            Ok(pending) => pending,
            Err(err) => {
                log::debug!("search not started: {err}");
                return false;
            }
        };
        self.refresh.emit(());

        let flow = self.clone();
        (self.schedule)(SEARCH_DELAY_MS, Box::new(move || flow.finish(pending)));
        true
    }

    fn finish(&self, pending: PendingSearch) {
        let outcome = self
            .session
            .borrow_mut()
            .complete_search(pending)
            .map(|_| ());
        match outcome {
            Ok(()) => self.set_query.emit(String::new()),
            Err(err) => log::warn!("search completion dropped: {err}"),
        }
        self.refresh.emit(());
    }
}

#[cfg(target_arch = "wasm32")]
fn after_delay(delay_ms: u32, then: Box<dyn FnOnce()>) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::dom::sleep_ms(delay_ms).await {
            log::error!("{err}; continuing without delay");
        }
        then();
    });
}

// Server-side rendering and native tests have no event loop to wait on.
#[cfg(not(target_arch = "wasm32"))]
fn after_delay(_delay_ms: u32, then: Box<dyn FnOnce()>) {
    then();
}
