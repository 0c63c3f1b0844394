use crate::models::{ContactMethod, Language, Theme, TimeSinceMenopause};
use crate::validation::{SchemaVariant, ValidForm};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeRef {
    pub id: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePriority {
    pub theme_id: String,
    /// 1-based rank.
    pub priority: usize,
}

/// Everything sent for one submission attempt. Built at submit time, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub personal: Personal,
    pub age_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_since_menopause: Option<TimeSinceMenopause>,
    pub extra_choice: ContactMethod,
    pub themes: Vec<ThemeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_priorities: Option<Vec<ThemePriority>>,
    pub consent: bool,
    pub language: Language,
}

impl FormPayload {
    /// `themes` keeps the order given; priorities (ranking schema only) are
    /// their 1-based positions.
    pub fn build(
        variant: SchemaVariant,
        form: ValidForm,
        themes: &[&Theme],
        language: Language,
    ) -> Self {
        let refs: Vec<ThemeRef> = themes
            .iter()
            .map(|t| ThemeRef {
                id: t.id.to_string(),
                title: t.title.to_string(),
            })
            .collect();
        let theme_priorities = variant.ranks_themes().then(|| {
            refs.iter()
                .enumerate()
                .map(|(i, t)| ThemePriority {
                    theme_id: t.id.clone(),
                    priority: i + 1,
                })
                .collect()
        });

        FormPayload {
            personal: Personal {
                name: form.name,
                email: form.email,
            },
            age_group: form.age_group,
            time_since_menopause: form.time_since_menopause,
            extra_choice: form.extra_choice,
            themes: refs,
            theme_priorities,
            consent: form.consent,
            language,
        }
    }
}
