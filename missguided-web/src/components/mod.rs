pub mod header;
pub mod history_card;
pub mod map_display;
pub mod popular_searches;
pub mod result_card;
pub mod search_panel;
pub mod warning_banner;

/// Render a catalog key the way the shortcut buttons show it ("new york" -> "New York").
#[must_use]
pub fn title_case(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
