use serde::{Deserialize, Serialize};

/// A selectable wellness topic. Catalog entries are compiled in and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: &'static str,
    pub title: &'static str,
    pub short: &'static str,
    /// Markdown; render with [`crate::rich_text::to_html`].
    pub full: &'static str,
    pub image: &'static str,
    pub image_large: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// The other supported language (header toggle).
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    /// Confirmation shown after a successful submission: (title, description).
    pub fn success_text(self) -> (&'static str, &'static str) {
        match self {
            Language::En => (
                "Thank you!",
                "Your preferences have been submitted successfully.",
            ),
            Language::Fr => (
                "Merci !",
                "Vos préférences ont bien été envoyées.",
            ),
        }
    }

    /// Headline of the failure banner.
    pub fn error_title(self) -> &'static str {
        match self {
            Language::En => "Error",
            Language::Fr => "Erreur",
        }
    }
}

/// Preferred contact method ("extra choice" on the form).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub const ALL: [ContactMethod; 2] = [ContactMethod::Email, ContactMethod::Phone];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSinceMenopause {
    #[serde(rename = "0-5")]
    UpToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl TimeSinceMenopause {
    pub const ALL: [TimeSinceMenopause; 3] = [
        TimeSinceMenopause::UpToFive,
        TimeSinceMenopause::FiveToTen,
        TimeSinceMenopause::TenPlus,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeSinceMenopause::UpToFive => "0-5",
            TimeSinceMenopause::FiveToTen => "5-10",
            TimeSinceMenopause::TenPlus => "10+",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}
