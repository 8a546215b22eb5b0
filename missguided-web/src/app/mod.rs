use missguided_core::Catalog;
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::history_card::HistoryCard;
use crate::components::map_display::MapDisplay;
use crate::components::popular_searches::PopularSearches;
use crate::components::search_panel::SearchPanel;
use crate::components::warning_banner::WarningBanner;

pub mod search;
pub mod state;

pub use state::{AppState, PageSession, use_app_state};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_app_state();
    let searching = state.flow.is_busy();
    let (total_searches, accuracy_rate, current, history) = {
        let session = state.flow.session().borrow();
        (
            session.total_searches(),
            session.accuracy_rate_percent(),
            session.current().cloned(),
            session.history().clone(),
        )
    };

    let on_input = {
        let query = state.query.clone();
        Callback::from(move |value: String| query.set(value))
    };
    let on_submit = {
        let flow = state.flow.clone();
        let query = state.query.clone();
        Callback::from(move |()| {
            flow.start_search(&query);
        })
    };
    let on_pick = {
        let flow = state.flow.clone();
        Callback::from(move |key: AttrValue| {
            flow.start_shortcut(&key);
        })
    };

    let popular: Vec<AttrValue> = Catalog::builtin()
        .popular_keys()
        .map(AttrValue::from)
        .collect();

    html! {
        <div class="page">
            <div class="backdrop" aria-hidden="true">
                <div class="orb orb-purple"></div>
                <div class="orb orb-pink"></div>
                <div class="orb orb-blue"></div>
            </div>
            <main id="main" class="page-content">
                <Header {total_searches} {accuracy_rate} />
                <WarningBanner />
                <div class="layout-grid">
                    <div class="side-column">
                        <SearchPanel
                            query={AttrValue::from((*state.query).clone())}
                            {searching}
                            current={current.clone()}
                            {on_input}
                            {on_submit}
                        />
                        <HistoryCard {history} />
                    </div>
                    <div class="map-column">
                        <MapDisplay {current} />
                    </div>
                </div>
                <PopularSearches keys={popular} disabled={searching} {on_pick} />
            </main>
        </div>
    }
}
