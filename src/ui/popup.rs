/// Popup UI for Domain Replacer extension

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;

use crate::bookmark::{flatten_bookmarks, BookmarkNode, Diff};
use crate::domain::normalize_domain_input;
use crate::i18n::Language;
use crate::matcher::{MatchMode, Matcher};
use crate::message::{Message, ReplaceRequest, ReplaceResponse};
use crate::preview::{build_preview, unchanged_preview, PreviewEntry};
use crate::settings::Settings;
use crate::store::{BookmarkStore, ChromeBookmarks};
use crate::ui::components::{LanguageSwitcher, ModeSelect, PreviewList};

// Import JS bridge functions
#[wasm_bindgen(module = "/js/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn sendReplaceMessage(message: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading,
    Done(String),
    Error(String),
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub settings: Settings,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let language = use_state(|| props.settings.language);
    let state = use_state(|| AppState::Idle);
    let from_input = use_state(String::new);
    let to_input = use_state(String::new);
    let mode = use_state(MatchMode::default);
    let bookmarks = use_state(Vec::<BookmarkNode>::new);
    let preview = use_state(Vec::<PreviewEntry>::new);
    let only_changed = use_state(|| false);

    let t = language.translations();
    let settings = Settings { language: *language };

    let on_language_change = {
        let language = language.clone();
        Callback::from(move |lang: Language| language.set(lang))
    };

    let on_from_input = {
        let from_input = from_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                from_input.set(input.value());
            }
        })
    };

    let on_to_input = {
        let to_input = to_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                to_input.set(input.value());
            }
        })
    };

    let on_mode_change = {
        let mode = mode.clone();
        Callback::from(move |m: MatchMode| mode.set(m))
    };

    let on_only_changed = {
        let only_changed = only_changed.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                only_changed.set(input.checked());
            }
        })
    };

    // Load bookmarks handler
    let on_load = {
        let state = state.clone();
        let bookmarks = bookmarks.clone();
        let preview = preview.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let bookmarks = bookmarks.clone();
            let preview = preview.clone();

            state.set(AppState::Loading);

            spawn_local(async move {
                match load_bookmarks().await {
                    Ok(loaded) => {
                        preview.set(unchanged_preview(&loaded));
                        bookmarks.set(loaded);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        log::error!("Failed to load bookmarks: {}", e);
                        state.set(AppState::Error(t.bookmark_load_error.to_string()));
                    }
                }
            });
        })
    };

    // Preview handler: dry run over the loaded bookmarks, nothing is written
    let on_preview = {
        let state = state.clone();
        let bookmarks = bookmarks.clone();
        let preview = preview.clone();
        let from_input = from_input.clone();
        let to_input = to_input.clone();
        let mode = mode.clone();

        Callback::from(move |_| {
            let from = normalize_domain_input(&from_input);
            if from.is_empty() {
                preview.set(unchanged_preview(&bookmarks));
                return;
            }
            let to = normalize_domain_input(&to_input);

            match Matcher::new(&from, *mode) {
                Ok(matcher) => {
                    preview.set(build_preview(&bookmarks, &matcher, &to));
                    state.set(AppState::Idle);
                }
                Err(e) => state.set(AppState::Error(e.to_string())),
            }
        })
    };

    // Apply handler: confirm, hand the run to the background worker, reload
    let on_apply = {
        let state = state.clone();
        let bookmarks = bookmarks.clone();
        let preview = preview.clone();
        let from_input = from_input.clone();
        let to_input = to_input.clone();
        let mode = mode.clone();

        Callback::from(move |_| {
            let from = normalize_domain_input(&from_input);
            let to = normalize_domain_input(&to_input);
            if from.is_empty() || to.is_empty() {
                state.set(AppState::Error(t.domain_required.to_string()));
                return;
            }
            if !confirm(t.confirm_replace) {
                return;
            }

            let state = state.clone();
            let bookmarks = bookmarks.clone();
            let preview = preview.clone();
            let request = ReplaceRequest::new(&from, &to, *mode);

            state.set(AppState::Loading);

            spawn_local(async move {
                let outcome = match send_replace(request).await {
                    Ok(diffs) => {
                        log::info!("Replace applied to {} bookmarks", diffs.len());
                        AppState::Done(format!("{} {}: {}", t.replace_complete, t.change_count, diffs.len()))
                    }
                    Err(e) => {
                        log::error!("Replace failed: {}", e);
                        AppState::Error(format!("{} {}", t.replace_error, e))
                    }
                };

                match load_bookmarks().await {
                    Ok(loaded) => {
                        preview.set(unchanged_preview(&loaded));
                        bookmarks.set(loaded);
                        state.set(outcome);
                    }
                    Err(e) => {
                        log::error!("Failed to reload bookmarks: {}", e);
                        state.set(AppState::Error(t.bookmark_load_error.to_string()));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, AppState::Loading);

    html! {
        <ContextProvider<Settings> context={settings}>
            <div class="padding-20">
                <div class="popup-header">
                    <h1 class="popup-title">{t.title}</h1>
                    <LanguageSwitcher on_change={on_language_change} />
                </div>
                <p class="popup-description">{t.description}</p>

                <div class="domain-inputs">
                    <input
                        type="text"
                        class="domain-input"
                        placeholder={t.from_domain_placeholder}
                        value={(*from_input).clone()}
                        oninput={on_from_input}
                    />
                    <input
                        type="text"
                        class="domain-input"
                        placeholder={t.to_domain_placeholder}
                        value={(*to_input).clone()}
                        oninput={on_to_input}
                    />
                </div>

                <div class="button-row">
                    <Button onclick={on_load} disabled={is_busy} variant={ButtonVariant::Secondary}>
                        {t.load_bookmarks}
                    </Button>
                    <Button onclick={on_preview} disabled={is_busy} variant={ButtonVariant::Secondary}>
                        {t.update_preview}
                    </Button>
                    <ModeSelect mode={*mode} on_change={on_mode_change} disabled={is_busy} />
                </div>

                <Button onclick={on_apply} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {t.apply_replace}
                </Button>

                // Status display
                {match &*state {
                    AppState::Loading => html! {
                        <div class="loading-text-center">
                            <Spinner />
                        </div>
                    },
                    AppState::Done(msg) => html! {
                        <Alert r#type={AlertType::Success} title={msg.clone()} inline={true}>
                        </Alert>
                    },
                    AppState::Error(err) => html! {
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    },
                    AppState::Idle => html! {}
                }}

                <div class="preview-header">
                    <span class="preview-heading">{t.preview_title}</span>
                    <label class="only-changed">
                        <input type="checkbox" checked={*only_changed} onchange={on_only_changed} />
                        <span>{t.show_only_changed}</span>
                    </label>
                </div>

                <PreviewList entries={(*preview).clone()} only_changed={*only_changed} />
            </div>
        </ContextProvider<Settings>>
    }
}

// Helper functions

async fn load_bookmarks() -> Result<Vec<BookmarkNode>, String> {
    let tree = ChromeBookmarks.get_tree().await.map_err(|e| e.to_string())?;
    Ok(flatten_bookmarks(&tree).into_iter().cloned().collect())
}

async fn send_replace(request: ReplaceRequest) -> Result<Vec<Diff>, String> {
    let message_js = serde_wasm_bindgen::to_value(&Message::PerformReplace(request))
        .map_err(|e| format!("Failed to serialize: {:?}", e))?;

    let response_js = sendReplaceMessage(message_js)
        .await
        .map_err(|e| format!("Message failed: {:?}", e))?;

    let response: ReplaceResponse = serde_wasm_bindgen::from_value(response_js)
        .map_err(|e| format!("Failed to parse response: {:?}", e))?;

    response.into_result()
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
