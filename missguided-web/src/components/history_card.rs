use missguided_core::History;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub history: History,
}

#[function_component(HistoryCard)]
pub fn history_card(p: &Props) -> Html {
    if p.history.is_empty() {
        return Html::default();
    }
    html! {
        <section class="card history-card" aria-labelledby="history-title">
            <h2 id="history-title" class="card-title">{ "Recent Misdirections" }</h2>
            <ol class="history-list">
                { for p.history.iter().map(|record| html! {
                    <li class="history-item">
                        <div class="history-copy">
                            <p class="history-searched">{ record.searched_text.clone() }</p>
                            <p class="history-actual">{ format!("→ {}", record.actual_label) }</p>
                            <p class="history-distance">{ record.distance_label.clone() }</p>
                        </div>
                        <span class="badge">{ record.timestamp_label() }</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}
