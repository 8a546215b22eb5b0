use yew::prelude::*;

use super::title_case;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub keys: Vec<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_pick: Callback<AttrValue>,
}

#[function_component(PopularSearches)]
pub fn popular_searches(p: &Props) -> Html {
    html! {
        <section class="card popular-card" aria-labelledby="popular-title">
            <h2 id="popular-title" class="card-title">{ "Popular Misdirections" }</h2>
            <p class="card-description">
                { "Try these popular searches and discover where they really lead! Each one guaranteed to be wrong." }
            </p>
            <div class="popular-grid">
                { for p.keys.iter().map(|key| {
                    let onclick = {
                        let cb = p.on_pick.clone();
                        let key = key.clone();
                        Callback::from(move |_| cb.emit(key.clone()))
                    };
                    html! {
                        <button class="shortcut" data-key={key.clone()} disabled={p.disabled} {onclick}>
                            { title_case(key) }
                        </button>
                    }
                }) }
            </div>
        </section>
    }
}
