use missguided_core::MisdirectionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub result: MisdirectionResult,
}

#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    let result = &p.result;
    html! {
        <div class="result-card" aria-live="polite">
            <div class="result-pin" aria-hidden="true">{ "📍" }</div>
            <div class="result-body">
                <p class="result-caption">{ "You searched for:" }</p>
                <p class="result-searched">{ result.searched_text.clone() }</p>
                <p class="result-caption">{ "But we're showing you:" }</p>
                <p class="result-actual">
                    { result.actual_label.clone() }
                    <span class="result-flag">{ result.country_emoji.clone() }</span>
                </p>
                <p class="result-coords">
                    { format!("Coordinates: {}", result.coordinates.display()) }
                </p>
                <p class="result-distance">{ result.distance_label.clone() }</p>
            </div>
        </div>
    }
}
