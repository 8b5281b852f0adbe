/// Search box and sort header helpers shared by list pages
use crate::shared::components::data_table::model::SortState;
use contracts::shared::filters::SortDirection;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before a typed search term is sent
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Sort arrow for a header cell
pub fn get_sort_indicator(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn get_sort_class(sort: Option<&SortState>, field: &str) -> &'static str {
    match sort {
        Some(s) if s.field == field => "sort-icon active",
        _ => "sort-icon",
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Search term currently applied to the list
    #[prop(into)]
    value: Signal<String>,
    /// Receives the term once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // Replacing the pending timeout drops, and so cancels, the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(text));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    // Reset from outside (e.g. "Reset filters") must show up in the box
    Effect::new(move |_| {
        let applied = value.get();
        if applied.is_empty() {
            set_input_value.set(applied);
        }
    });

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if value.get().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                (!input_value.get().is_empty()).then(|| view! {
                    <button class="search-input__clear" on:click=clear title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(field: &str, direction: SortDirection) -> SortState {
        SortState {
            field: field.to_string(),
            direction,
        }
    }

    #[test]
    fn test_sort_indicator() {
        let sort = sorted("name", SortDirection::Asc);
        assert_eq!(get_sort_indicator(Some(&sort), "name"), " ▲");
        assert_eq!(get_sort_indicator(Some(&sort), "code"), " ⇅");
        assert_eq!(
            get_sort_indicator(Some(&sorted("name", SortDirection::Desc)), "name"),
            " ▼"
        );
        assert_eq!(get_sort_indicator(None, "name"), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        let sort = sorted("amount", SortDirection::Desc);
        assert_eq!(get_sort_class(Some(&sort), "amount"), "sort-icon active");
        assert_eq!(get_sort_class(Some(&sort), "code"), "sort-icon");
    }
}
