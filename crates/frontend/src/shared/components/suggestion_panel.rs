use leptos::prelude::*;

pub const NO_SUGGESTIONS_TEXT: &str = "No suggestions generated.";

/// Content of the suggestions region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SuggestionList {
    /// Reset at the start of an upload
    #[default]
    Cleared,
    /// Upload succeeded without suggestions
    Empty,
    Items(Vec<String>),
}

impl SuggestionList {
    pub fn from_suggestions(suggestions: &[String]) -> Self {
        if suggestions.is_empty() {
            SuggestionList::Empty
        } else {
            SuggestionList::Items(suggestions.to_vec())
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            SuggestionList::Items(items) => items.get(index).map(String::as_str),
            _ => None,
        }
    }
}

/// Clickable suggestion list; a click reports the item index, nothing is submitted
#[component]
pub fn SuggestionPanel(
    #[prop(into)] suggestions: Signal<SuggestionList>,
    on_pick: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="suggestions">
            {move || match suggestions.get() {
                SuggestionList::Cleared => view! {}.into_any(),
                SuggestionList::Empty => view! { <p>{NO_SUGGESTIONS_TEXT}</p> }.into_any(),
                SuggestionList::Items(items) => view! {
                    <ul>
                        {items
                            .into_iter()
                            .enumerate()
                            .map(|(index, text)| {
                                view! {
                                    <li class="suggestion-item" on:click=move |_| on_pick.run(index)>
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
