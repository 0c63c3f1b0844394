//! Static theme catalog shown in the gallery.

use crate::models::Theme;

static THEMES: [Theme; 6] = [
    Theme {
        id: "theme-1",
        title: "Vital Living & Longevity",
        short: "A lifestyle of healthy habits that sustain energy, joy, and long life",
        full: "**Subthemes:**

- Movement as Medicine – gardening, cleaning, daily chores, gentle fitness
- Food and Nourishment – plant-based eating, 80% full, anti-inflammatory foods
- Alcohol/Softdrinks – nuanced discussion of moderation and wellbeing
- Downshifting – slowing down, simplifying life, reducing stress
",
        image: "/assets/themes/vital-living.png",
        image_large: "/assets/themes/vital-living.png",
    },
    Theme {
        id: "theme-2",
        title: "The Inner Journey & Life Transitions",
        short: "Emotional, psychological, and spiritual shifts that shape us through life",
        full: "**Subthemes:**

- Hormonal Changes and Menopause – pre/meno/post menopause, physical/mental changes
- Loss & Rediscovery of Identity – self-esteem, purpose, acceptance, empty nesters
- Personal Boundaries & Limits – managing influence, setting limits, saying yes/no
- Soul, Purpose & Longing – meaning-making, inner beauty, desires without boundaries
- Desires in life – what excites you, what keeps you awake at night
",
        image: "/assets/themes/inner-journey.png",
        image_large: "/assets/themes/inner-journey.png",
    },
    Theme {
        id: "theme-3",
        title: "Relationships & Belonging",
        short: "The changing role of relationships and community throughout life",
        full: "**Subthemes:**

- Family & Friends – friends as family, extended family, kids, partner
- Tribe & Community – social circle, right tribe, belonging
- Sisterhood – shared experience, emotional support, women supporting women
- Changes in Relationships – changes with self, friends, partner, work
- Loneliness & Connection – internally, externally
",
        image: "/assets/themes/relationships.png",
        image_large: "/assets/themes/relationships.png",
    },
    Theme {
        id: "theme-4",
        title: "Resilience & Daily Mastery",
        short: "Practical skills to navigate daily life with intention and confidence",
        full: "**Subthemes:**

- Financial Health – planning, independence, navigating changes
- Work & Purpose – meaning of work, shifting values, staying engaged
- Managing Daily Life – routines, wellbeing now and in the future
- Managing Change, Embracing Limits – adapting to change, mindset
",
        image: "/assets/themes/resilience.png",
        image_large: "/assets/themes/resilience.png",
    },
    Theme {
        id: "theme-5",
        title: "Safety and Security",
        short: "Creating safety that nurtures trust, freedom, and peace of mind",
        full: "**Subthemes:**

- Emotional Safety & Vulnerability – especially for topics like illness, menopause, end-of-life
- Physical Safety – walking alone outside or in darkness, daily errands (bank, post, shopping), self defence, unexpected visitors
- IT Security – frauds, whom and what to trust, spam, knowledge
",
        image: "/assets/themes/safety.png",
        image_large: "/assets/themes/safety.png",
    },
    Theme {
        id: "theme-6",
        title: "Legacy, Mortality & Future Planning",
        short: "Creating peace of mind through intentional choices for the future",
        full: "**Subthemes:**

- End-of-Life Desires – funeral wishes, music, setting, atmosphere
- Footprints & Legacy – how you want to be remembered
- Care & Contingency Plans – illness, accidents, caregiving preferences
- Legal & Ethical Considerations – will, organ donation, body disposition
",
        image: "/assets/themes/legacy.png",
        image_large: "/assets/themes/legacy.png",
    },
];

/// All themes in gallery order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

pub fn find(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

pub fn contains(id: &str) -> bool {
    find(id).is_some()
}

/// Resolve ids to catalog entries in the given order, skipping unknown ids.
pub fn resolve<'a, I>(ids: I) -> Vec<&'static Theme>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().filter_map(find).collect()
}
