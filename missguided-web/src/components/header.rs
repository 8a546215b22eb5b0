use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub total_searches: u64,
    pub accuracy_rate: u8,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    html! {
        <header role="banner" class="hero">
            <div class="hero-badge" aria-hidden="true">
                <span class="compass-spin">{ "🧭" }</span>
            </div>
            <h1 class="hero-title">{ "Miss Guided Map" }</h1>
            <p class="hero-tagline">
                { "The world's most confidently incorrect navigation system. We'll get you everywhere except where you want to go." }
            </p>
            <div class="stat-pills" role="list">
                <div class="stat-pill" role="listitem">
                    <span class="stat-icon" aria-hidden="true">{ "⚡" }</span>
                    <span class="stat-value">{ p.total_searches.to_string() }</span>
                    <span class="stat-label">{ "Lost Travelers" }</span>
                </div>
                <div class="stat-pill" role="listitem">
                    <span class="stat-icon" aria-hidden="true">{ "🌐" }</span>
                    <span class="stat-value">{ format!("{}%", p.accuracy_rate) }</span>
                    <span class="stat-label">{ "Accuracy Rate" }</span>
                </div>
            </div>
        </header>
    }
}
