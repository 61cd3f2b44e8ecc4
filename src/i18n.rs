/// Popup strings in Japanese and English, plus language detection

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ja, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Name shown in the language switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
        }
    }

    /// Accepts a bare code or a full tag; only the primary subtag counts
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::Ja => &JA,
            Language::En => &EN,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Translations {
    pub title: &'static str,
    pub description: &'static str,
    pub from_domain_placeholder: &'static str,
    pub to_domain_placeholder: &'static str,
    pub load_bookmarks: &'static str,
    pub update_preview: &'static str,
    pub apply_replace: &'static str,
    pub preview_title: &'static str,
    pub show_only_changed: &'static str,
    pub not_loaded: &'static str,
    pub bookmark_load_error: &'static str,
    pub domain_required: &'static str,
    pub confirm_replace: &'static str,
    pub replace_complete: &'static str,
    pub replace_error: &'static str,
    pub change_count: &'static str,
    pub language_label: &'static str,
    pub exact: &'static str,
    pub wildcard: &'static str,
    pub regexp: &'static str,
}

impl Translations {
    pub fn mode_label(&self, mode: crate::matcher::MatchMode) -> &'static str {
        use crate::matcher::MatchMode;
        match mode {
            MatchMode::Exact => self.exact,
            MatchMode::Wildcard => self.wildcard,
            MatchMode::Regexp => self.regexp,
        }
    }
}

static JA: Translations = Translations {
    title: "ドメイン置換くん",
    description: "ブックマークを読み込み、指定したドメインを任意のドメインに変更します。",
    from_domain_placeholder: "置換元ドメイン（例: example.com）",
    to_domain_placeholder: "置換先ドメイン（例: example.net）",
    load_bookmarks: "ブックマーク読み込み",
    update_preview: "プレビュー更新",
    apply_replace: "置換実行",
    preview_title: "プレビュー（置換後のURL）",
    show_only_changed: "置換対象のみ表示",
    not_loaded: "読み込まれていません",
    bookmark_load_error: "ブックマークの読み込みに失敗しました。",
    domain_required: "置換元と置換先のドメインを入力してください。",
    confirm_replace: "実際にブックマークを更新します。よろしいですか？",
    replace_complete: "置換が完了しました。",
    replace_error: "置換中にエラーが発生しました。",
    change_count: "変更件数",
    language_label: "言語",
    exact: "exact",
    wildcard: "wildcard (*)",
    regexp: "regexp",
};

static EN: Translations = Translations {
    title: "Domain Replacer",
    description: "Load bookmarks and change specified domains to any domain.",
    from_domain_placeholder: "From domain (e.g., example.com)",
    to_domain_placeholder: "To domain (e.g., example.net)",
    load_bookmarks: "Load Bookmarks",
    update_preview: "Update Preview",
    apply_replace: "Apply Replace",
    preview_title: "Preview (URLs after replacement)",
    show_only_changed: "Show only changed items",
    not_loaded: "Not loaded",
    bookmark_load_error: "Failed to load bookmarks.",
    domain_required: "Please enter both from and to domains.",
    confirm_replace: "Are you sure you want to update the bookmarks?",
    replace_complete: "Replacement completed.",
    replace_error: "An error occurred during replacement.",
    change_count: "Changes",
    language_label: "Language",
    exact: "exact",
    wildcard: "wildcard (*)",
    regexp: "regexp",
};

/// Pick the popup language from what the browser reports
///
/// Order:
/// 1. Browser UI language, then each preferred language, first supported wins
/// 2. Time zone: Tokyo → ja, America/Europe → en
/// 3. Japanese
pub fn detect_language(candidates: &[String], time_zone: Option<&str>) -> Language {
    for tag in candidates {
        if let Some(lang) = Language::from_tag(tag) {
            log::debug!("Using language {} from {:?}", lang.code(), tag);
            return lang;
        }
    }

    if let Some(tz) = time_zone {
        if tz.contains("Tokyo") {
            log::debug!("Using ja from time zone {}", tz);
            return Language::Ja;
        }
        if tz.contains("America") || tz.contains("Europe") {
            log::debug!("Using en from time zone {}", tz);
            return Language::En;
        }
    }

    Language::default()
}
