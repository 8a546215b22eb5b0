use missguided_core::MisdirectionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub current: Option<MisdirectionResult>,
}

#[function_component(MapDisplay)]
pub fn map_display(p: &Props) -> Html {
    let title = p.current.as_ref().map_or_else(
        || "Miss Guided Map".to_string(),
        |r| format!("\"{}\"", r.searched_text),
    );
    let body = p.current.as_ref().map_or_else(idle_view, found_view);

    html! {
        <section class="card map-card" aria-labelledby="map-title">
            <h2 id="map-title" class="card-title">{ title }</h2>
            if let Some(result) = p.current.as_ref() {
                <p class="card-description">
                    { format!("Actually showing: {} {}", result.actual_label, result.country_emoji) }
                </p>
            }
            <div class="map-canvas">
                <div class="map-grid" aria-hidden="true"></div>
                { body }
            </div>
        </section>
    }
}

fn idle_view() -> Html {
    html! {
        <div class="map-idle">
            <div class="compass-spin map-compass" aria-hidden="true">{ "🧭" }</div>
            <h3>{ "Ready to Get Spectacularly Lost?" }</h3>
            <p>{ "Search for any location and watch us confidently point you in the completely wrong direction!" }</p>
        </div>
    }
}

fn found_view(result: &MisdirectionResult) -> Html {
    html! {
        <div class="map-found">
            <div class="map-flag bounce" aria-hidden="true">{ result.country_emoji.clone() }</div>
            <h3>{ result.actual_label.clone() }</h3>
            <p>
                { "You searched for " }
                <span class="map-searched">{ format!("\"{}\"", result.searched_text) }</span>
                { " but here you are instead!" }
            </p>
            <p class="map-coords">{ result.coordinates.display() }</p>
            <p class="map-distance">{ format!("🎯 You're {}!", result.distance_label) }</p>
        </div>
    }
}
