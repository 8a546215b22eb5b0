use yew::prelude::*;

#[function_component(WarningBanner)]
pub fn warning_banner() -> Html {
    html! {
        <div class="alert alert-warning" role="alert">
            <span class="alert-icon" aria-hidden="true">{ "⚠" }</span>
            <p class="alert-text">
                <strong>{ "Warning:" }</strong>
                { " This map is professionally unreliable. Perfect for getting lost, terrible for getting found!" }
            </p>
        </div>
    }
}
