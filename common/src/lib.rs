//! Portfolio Common Library
//!
//! 中継サーバーとWeb(WASM)で共有される型とユーティリティ

pub mod contact;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod profile;
pub mod repo;
pub mod state;

pub use contact::{ContactForm, ContactResponse, ContactSubmission, CONTACT_ENDPOINT};
pub use error::{Error, Result};
pub use i18n::{check_parity, relabel, t, Dictionary, LabeledText, TextKey};
pub use locale::Locale;
pub use profile::Profile;
pub use repo::{parse_repos, public_repos, repos_url, RepoSummary};
pub use state::{Notice, RepoListing, SubmitButton, UiState};
