use missguided_core::{MisdirectionResult, is_blank};
use yew::prelude::*;

use super::result_card::ResultCard;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub query: AttrValue,
    pub searching: bool,
    #[prop_or_default]
    pub current: Option<MisdirectionResult>,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Whether the search button accepts a click.
#[must_use]
pub fn can_submit(query: &str, searching: bool) -> bool {
    !searching && !is_blank(query)
}

#[function_component(SearchPanel)]
pub fn search_panel(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let onkeypress = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit(());
            }
        })
    };
    let onclick = {
        let cb = p.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let spinner = html! { <span class="spinner" role="status" aria-label="Searching"></span> };

    html! {
        <section class="card search-card" aria-labelledby="search-title">
            <h2 id="search-title" class="card-title">{ "Search Location" }</h2>
            <p class="card-description">
                { "Enter any destination and watch us confidently point you in the wrong direction!" }
            </p>
            <div class="search-row">
                <div class="search-input-wrap">
                    <input
                        id="search-input"
                        type="text"
                        placeholder="e.g., New York, Tokyo, Paris..."
                        value={p.query.clone()}
                        {oninput}
                        {onkeypress}
                    />
                    if p.searching { { spinner.clone() } }
                </div>
                <button
                    id="search-btn"
                    class="search-button"
                    disabled={!can_submit(&p.query, p.searching)}
                    {onclick}
                >
                    if p.searching { { spinner } } else { { "🔍" } }
                </button>
            </div>
            if let Some(result) = p.current.clone() {
                <ResultCard {result} />
            }
        </section>
    }
}
