use missguided_core::Session;
use yew::prelude::*;

use crate::app::search::SearchFlow;
use crate::clock::{BrowserClock, entropy_seed};

pub type PageSession = Session<BrowserClock>;

#[derive(Clone)]
pub struct AppState {
    pub flow: SearchFlow,
    pub query: UseStateHandle<String>,
}

/// One session per page load, shared by every callback the page hands out.
#[hook]
pub fn use_app_state() -> AppState {
    let session = use_mut_ref(|| Session::with_clock(entropy_seed(), BrowserClock));
    let shortcut_queued = use_mut_ref(|| false);
    let query = use_state(String::new);
    let trigger = use_force_update();

    let set_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let refresh = Callback::from(move |()| trigger.force_update());

    AppState {
        flow: SearchFlow::new(session, shortcut_queued, set_query, refresh),
        query,
    }
}
