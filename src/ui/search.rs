/// Yew search widget: input plus suggestion dropdown.
///
/// Pages that keep the server-rendered search field use the exported
/// `fetchSuggestions` path instead. The widget renders its own input and
/// list without the template's `search-input`/`suggestions-box` ids, so it
/// never cross-talks with the raw-DOM path on a page that has both.

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api;
use crate::suggest::{QueryAction, classify_query};

#[derive(Clone, PartialEq)]
enum WidgetState {
    Idle,
    Loading,
    Error(String),
}

#[function_component(SearchWidget)]
pub fn search_widget() -> Html {
    let state = use_state(|| WidgetState::Idle);
    let query = use_state(String::new);
    let suggestions = use_state(Vec::<String>::new);
    // Sequence number of the newest issued request; older responses are
    // dropped instead of racing the user's typing.
    let latest = use_mut_ref(|| 0u64);

    // Input handler
    let on_input = {
        let state = state.clone();
        let query = query.clone();
        let suggestions = suggestions.clone();
        let latest = latest.clone();

        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            query.set(value.clone());

            match classify_query(&value) {
                QueryAction::Clear => {
                    *latest.borrow_mut() += 1;
                    suggestions.set(Vec::new());
                    state.set(WidgetState::Idle);
                }
                QueryAction::Fetch(q) => {
                    let seq = {
                        let mut l = latest.borrow_mut();
                        *l += 1;
                        *l
                    };
                    let state = state.clone();
                    let suggestions = suggestions.clone();
                    let latest = latest.clone();

                    state.set(WidgetState::Loading);
                    spawn_local(async move {
                        match api::get_suggestions(&q).await {
                            Ok(items) => {
                                if *latest.borrow() == seq {
                                    suggestions.set(items);
                                    state.set(WidgetState::Idle);
                                }
                            }
                            Err(e) => {
                                if *latest.borrow() == seq {
                                    log::error!("suggestion request for {q:?} failed: {e}");
                                    state.set(WidgetState::Error(e.to_string()));
                                }
                            }
                        }
                    });
                }
            }
        })
    };

    // Click handler for a rendered suggestion
    let on_pick = {
        let state = state.clone();
        let query = query.clone();
        let suggestions = suggestions.clone();
        let latest = latest.clone();

        move |item: String| {
            let state = state.clone();
            let query = query.clone();
            let suggestions = suggestions.clone();
            let latest = latest.clone();

            Callback::from(move |_: MouseEvent| {
                *latest.borrow_mut() += 1;
                query.set(item.clone());
                suggestions.set(Vec::new());
                state.set(WidgetState::Idle);
            })
        }
    };

    html! {
        <div class="search-widget">
            <input
                type="text"
                class="search-input"
                placeholder="Search the catalog..."
                value={(*query).clone()}
                oninput={on_input}
            />

            // Status display
            {match &*state {
                WidgetState::Loading => html! { <Spinner /> },
                WidgetState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Suggestions unavailable"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                WidgetState::Idle => html! {},
            }}

            <ul class="suggestions-box">
                {for suggestions.iter().map(|item| html! {
                    <li
                        key={item.clone()}
                        style="padding: 10px; cursor: pointer;"
                        onclick={on_pick(item.clone())}
                    >
                        {item}
                    </li>
                })}
            </ul>
        </div>
    }
}
