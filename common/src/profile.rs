//! サイト所有者のプロフィール（静的データ）

use crate::locale::Locale;

/// GitHubのアカウント名
pub const GITHUB_USERNAME: &str = "CorbiatFlorentin";

/// 連絡先メールアドレス
pub const CONTACT_EMAIL: &str = "florentin.corbiat@yahoo.fr";

/// 初期表示言語
pub const DEFAULT_LOCALE: Locale = Locale::Fr;

const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "HTML/CSS",
    "Node.js",
    "Git",
    "UI/UX",
    "Performance",
    "APIs",
];

/// プロフィール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub username: &'static str,
    pub contact_email: &'static str,
    pub skills: &'static [&'static str],
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: GITHUB_USERNAME,
            contact_email: CONTACT_EMAIL,
            skills: SKILLS,
        }
    }
}

impl Profile {
    /// `mailto:` リンク
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.username, "CorbiatFlorentin");
        assert_eq!(profile.skills.len(), 8);
        assert_eq!(profile.skills[0], "JavaScript");
        assert_eq!(profile.skills[7], "APIs");
    }

    #[test]
    fn test_mailto() {
        let profile = Profile::default();
        assert_eq!(profile.mailto(), "mailto:florentin.corbiat@yahoo.fr");
    }
}
