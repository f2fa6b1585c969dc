use serde::{Deserialize, Serialize};

use crate::countries::get_country_translation;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Hu,
    En,
}

impl Locale {
    /// Code as written in the config file
    pub fn code(self) -> &'static str {
        match self {
            Locale::Hu => "hu",
            Locale::En => "en",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Hu => &HU,
            Locale::En => &EN,
        }
    }

    /// Display name of a country in this locale
    pub fn country_name(self, country: &str) -> String {
        match self {
            Locale::Hu => get_country_translation(country),
            Locale::En => country.to_string(),
        }
    }
}

/// Every user-facing label of the panel
#[derive(Debug)]
pub struct Strings {
    pub tab_own_list: &'static str,
    pub tab_countries: &'static str,
    pub tab_global: &'static str,
    pub last_updated: &'static str,
    pub refresh: &'static str,
    pub refreshing: &'static str,
    pub cases: &'static str,
    pub deaths: &'static str,
    pub recovered: &'static str,
    pub today: &'static str,
    pub active: &'static str,
    pub critical: &'static str,
    pub tests: &'static str,
    pub select_text: &'static str,
    pub selected_text: &'static str,
    pub search_placeholder: &'static str,
    pub not_found: &'static str,
    pub close: &'static str,
    pub no_countries: &'static str,
    pub own_list_saved: &'static str,
    pub never: &'static str,
}

pub static HU: Strings = Strings {
    tab_own_list: "Saját lista",
    tab_countries: "Országok",
    tab_global: "Összesített",
    last_updated: "Adatbázis frissítésre legutóbb:",
    refresh: "Frissítés",
    refreshing: "Frissítés...",
    cases: "Fertőzött esetek:",
    deaths: "Elhunytak száma:",
    recovered: "Felépültek száma:",
    today: "ma",
    active: "Aktív:",
    critical: "Súlyos:",
    tests: "Tesztek:",
    select_text: "Ország hozzáadása",
    selected_text: "kiválasztva",
    search_placeholder: "Kezdjen el gépelni egy országot...",
    not_found: "Ilyen elem nem található.",
    close: "OK",
    no_countries: "Nincs megjeleníthető ország.",
    own_list_saved: "Saját lista elmentve",
    never: "még soha",
};

pub static EN: Strings = Strings {
    tab_own_list: "Own list",
    tab_countries: "Countries",
    tab_global: "Global",
    last_updated: "Database last updated:",
    refresh: "Refresh",
    refreshing: "Refreshing...",
    cases: "Confirmed cases:",
    deaths: "Deaths:",
    recovered: "Recovered:",
    today: "today",
    active: "Active:",
    critical: "Critical:",
    tests: "Tests:",
    select_text: "Add country",
    selected_text: "selected",
    search_placeholder: "Start typing a country...",
    not_found: "No such item.",
    close: "OK",
    no_countries: "No countries to show.",
    own_list_saved: "Own list saved",
    never: "never",
};
