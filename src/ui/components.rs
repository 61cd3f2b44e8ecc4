/// Reusable UI components

use yew::prelude::*;
use web_sys::HtmlSelectElement;

use crate::domain::format_preview_url;
use crate::i18n::Language;
use crate::matcher::MatchMode;
use crate::preview::{visible_entries, PreviewEntry};
use crate::settings::Settings;

#[hook]
fn use_language() -> Language {
    use_context::<Settings>().unwrap_or_default().language
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitcherProps {
    pub on_change: Callback<Language>,
}

#[function_component(LanguageSwitcher)]
pub fn language_switcher(props: &LanguageSwitcherProps) -> Html {
    let language = use_language();

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(lang) = Language::from_tag(&select.value()) {
                    on_change.emit(lang);
                }
            }
        })
    };

    html! {
        <select class="language-switcher" title={language.translations().language_label} {onchange}>
            {for Language::ALL.iter().map(|lang| html! {
                <option value={lang.code()} selected={*lang == language}>
                    {lang.native_name()}
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModeSelectProps {
    pub mode: MatchMode,
    pub on_change: Callback<MatchMode>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(ModeSelect)]
pub fn mode_select(props: &ModeSelectProps) -> Html {
    let t = use_language().translations();

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(mode) = MatchMode::parse(&select.value()) {
                    on_change.emit(mode);
                }
            }
        })
    };

    html! {
        <select class="mode-select" disabled={props.disabled} {onchange}>
            {for MatchMode::ALL.iter().map(|mode| html! {
                <option value={mode.as_str()} selected={*mode == props.mode}>
                    {t.mode_label(*mode)}
                </option>
            })}
        </select>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewListProps {
    pub entries: Vec<PreviewEntry>,
    pub only_changed: bool,
}

#[function_component(PreviewList)]
pub fn preview_list(props: &PreviewListProps) -> Html {
    let t = use_language().translations();

    if props.entries.is_empty() {
        return html! {
            <div class="preview-box">
                <p class="empty-state">{t.not_loaded}</p>
            </div>
        };
    }

    html! {
        <div class="preview-box">
            <ol class="preview-list">
                {for visible_entries(&props.entries, props.only_changed).into_iter().map(|entry| {
                    let short_url = format_preview_url(&entry.url);
                    html! {
                        <li key={entry.id.clone()} class={if entry.changed() { "preview-item changed" } else { "preview-item" }}>
                            <a href={entry.url.clone()} target="_blank" rel="noreferrer" title={entry.url.clone()}>
                                if entry.title.is_empty() {
                                    <span class="preview-title">{short_url}</span>
                                } else {
                                    <span class="preview-title">{&entry.title}</span>
                                    <span class="preview-url">{short_url}</span>
                                }
                            </a>
                        </li>
                    }
                })}
            </ol>
        </div>
    }
}
