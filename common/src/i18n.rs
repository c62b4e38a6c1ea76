//! 多言語辞書（fr / en）
//!
//! キーは `TextKey` で列挙し、言語ごとの `match` を網羅させることで
//! 両言語のキー集合が一致することをコンパイル時に保証する。
//! 文字列が空でないことは `check_parity` で起動時に確認する。

use crate::locale::Locale;

macro_rules! text_keys {
    ($($variant:ident => $attr:literal,)+) => {
        /// 辞書キー（HTML の `data-i18n` 属性値に対応）
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TextKey {
            $($variant,)+
        }

        impl TextKey {
            /// 全キー
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// `data-i18n` 属性値
            pub fn attr(&self) -> &'static str {
                match self {
                    $(TextKey::$variant => $attr,)+
                }
            }

            /// 属性値からキーを取得（未知の属性値は None）
            pub fn from_attr(attr: &str) -> Option<Self> {
                match attr {
                    $($attr => Some(TextKey::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

text_keys! {
    Role => "role",
    NavAbout => "nav_about",
    NavProjects => "nav_projects",
    NavSkills => "nav_skills",
    NavContact => "nav_contact",
    HeroTitle => "hero_title",
    HeroText => "hero_text",
    HeroText2 => "hero_text2",
    AboutBody => "about_body",
    AvailabilityTitle => "availability_title",
    AvailabilityValue => "availability_value",
    Location => "location",
    RepoCount => "repo_count",
    ProjectsTitle => "projects_title",
    ProjectsSub => "projects_sub",
    ProjectsCategory => "projects_category",
    ProjectsEmpty => "projects_empty",
    SkillsTitle => "skills_title",
    SkillsSub => "skills_sub",
    SkillsCategory => "skills_category",
    ContactTitle => "contact_title",
    ContactSub => "contact_sub",
    FormName => "form_name",
    FormEmail => "form_email",
    FormMessage => "form_message",
    FormSend => "form_send",
    FormSending => "form_sending",
    FormHint => "form_hint",
    SendSuccess => "send_success",
    SendFailed => "send_failed",
    LangToggle => "lang_toggle",
    FooterNote => "footer_note",
}

fn french(key: TextKey) -> &'static str {
    match key {
        TextKey::Role => "Développeur",
        TextKey::NavAbout => "Qui je suis",
        TextKey::NavProjects => "Projets",
        TextKey::NavSkills => "Compétences",
        TextKey::NavContact => "Contact",
        TextKey::HeroTitle => "Spécialisé dans des expériences web sobres, rapides et soignées.",
        TextKey::HeroText => "Je collabore avec des équipes qui valorisent la clarté, la cohérence et la qualité d'exécution.",
        TextKey::HeroText2 => "Je livre des interfaces précises en soignant la performance et les détails.",
        TextKey::AboutBody => "Développeur curieux, je privilégie la simplicité, la lisibilité et la performance.",
        TextKey::AvailabilityTitle => "Disponibilité",
        TextKey::AvailabilityValue => "Disponible dès maintenant — Remote",
        TextKey::Location => "France",
        TextKey::RepoCount => "repos",
        TextKey::ProjectsTitle => "Projets publics",
        TextKey::ProjectsSub => "Liste automatique via l'API GitHub.",
        TextKey::ProjectsCategory => "Sélection",
        TextKey::ProjectsEmpty => "Aucun projet public trouvé pour le moment.",
        TextKey::SkillsTitle => "Compétences",
        TextKey::SkillsSub => "Focus sur la qualité, la clarté et la performance.",
        TextKey::SkillsCategory => "Services",
        TextKey::ContactTitle => "Contact",
        TextKey::ContactSub => "Simple, direct, sans surcharge.",
        TextKey::FormName => "Nom",
        TextKey::FormEmail => "Email",
        TextKey::FormMessage => "Message",
        TextKey::FormSend => "Envoyer",
        TextKey::FormSending => "Envoi…",
        TextKey::FormHint => "Ce formulaire envoie un email directement (backend sécurisé).",
        TextKey::SendSuccess => "Email envoyé avec succès.",
        TextKey::SendFailed => "Échec de l'envoi. Réessaie plus tard.",
        TextKey::LangToggle => "EN",
        TextKey::FooterNote => "Conçu pour être rapide et léger.",
    }
}

fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::Role => "Developer",
        TextKey::NavAbout => "About",
        TextKey::NavProjects => "Projects",
        TextKey::NavSkills => "Skills",
        TextKey::NavContact => "Contact",
        TextKey::HeroTitle => "Specialized in understated, fast, and thoughtful web experiences.",
        TextKey::HeroText => "I work with teams who value clarity, consistency, and strong execution.",
        TextKey::HeroText2 => "I ship precise interfaces with performance and detail in mind.",
        TextKey::AboutBody => "Curious developer focused on simplicity, readability, and performance.",
        TextKey::AvailabilityTitle => "Availability",
        TextKey::AvailabilityValue => "Available now — Remote",
        TextKey::Location => "France",
        TextKey::RepoCount => "public repos",
        TextKey::ProjectsTitle => "Public projects",
        TextKey::ProjectsSub => "Auto list via the GitHub API.",
        TextKey::ProjectsCategory => "Selection",
        TextKey::ProjectsEmpty => "No public projects found yet.",
        TextKey::SkillsTitle => "Skills",
        TextKey::SkillsSub => "Focus on quality, clarity, and performance.",
        TextKey::SkillsCategory => "Services",
        TextKey::ContactTitle => "Contact",
        TextKey::ContactSub => "Simple, direct, no bloat.",
        TextKey::FormName => "Name",
        TextKey::FormEmail => "Email",
        TextKey::FormMessage => "Message",
        TextKey::FormSend => "Send",
        TextKey::FormSending => "Sending…",
        TextKey::FormHint => "This form sends an email directly (secure backend).",
        TextKey::SendSuccess => "Email sent successfully.",
        TextKey::SendFailed => "Send failed. Please try again later.",
        TextKey::LangToggle => "FR",
        TextKey::FooterNote => "Designed to be fast and lightweight.",
    }
}

/// 言語ごとの辞書
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dictionary {
    locale: Locale,
}

impl Dictionary {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: TextKey) -> &'static str {
        match self.locale {
            Locale::Fr => french(key),
            Locale::En => english(key),
        }
    }

    /// `data-i18n` 属性値で検索
    pub fn lookup(&self, attr: &str) -> Option<&'static str> {
        TextKey::from_attr(attr).map(|key| self.get(key))
    }
}

/// 翻訳文字列を取得
pub fn t(locale: Locale, key: TextKey) -> &'static str {
    Dictionary::new(locale).get(key)
}

/// 辞書の整合性違反
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityViolation {
    pub locale: Locale,
    pub key: TextKey,
}

/// 全言語で全キーが空でない文字列を持つことを確認
pub fn check_parity() -> Result<(), Vec<ParityViolation>> {
    let violations: Vec<ParityViolation> = Locale::ALL
        .iter()
        .flat_map(|&locale| {
            let dict = Dictionary::new(locale);
            TextKey::ALL
                .iter()
                .filter(move |&&key| dict.get(key).trim().is_empty())
                .map(move |&key| ParityViolation { locale, key })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// `data-i18n` 属性を持つテキストノード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub key: String,
    pub text: String,
}

impl LabeledText {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// 既知のキーを持つノードのテキストを差し替える
///
/// 未知のキーは変更しない。更新したノード数を返す。
pub fn relabel<'a>(nodes: impl IntoIterator<Item = &'a mut LabeledText>, locale: Locale) -> usize {
    let dict = Dictionary::new(locale);
    let mut updated = 0;
    for node in nodes {
        if let Some(text) = dict.lookup(&node.key) {
            node.text = text.to_string();
            updated += 1;
        }
    }
    updated
}
