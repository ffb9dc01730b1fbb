//! Interface languages and their phrase tables.
//!
//! Three languages, one flat table each. Lookups are infallible: every
//! phrase exists in every language, enforced by the struct shape rather
//! than by a runtime key check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interface language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Es,
    De,
}

/// Every user-facing phrase the text interface needs, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrases {
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub results_for: &'static str,
    pub all_courses: &'static str,
    pub modules: &'static str,
    pub level: &'static str,
    pub category: &'static str,
    pub share: &'static str,
    pub export: &'static str,
    pub explain_code: &'static str,
    pub explain_unavailable: &'static str,
}

const EN: Phrases = Phrases {
    search_placeholder: "Search courses...",
    no_results: "No courses match your search.",
    results_for: "Results for",
    all_courses: "All courses",
    modules: "Modules",
    level: "Level",
    category: "Category",
    share: "Share",
    export: "Export",
    explain_code: "Explain this code",
    explain_unavailable: "Explanation service is not available.",
};

const ES: Phrases = Phrases {
    search_placeholder: "Buscar cursos...",
    no_results: "Ningún curso coincide con tu búsqueda.",
    results_for: "Resultados para",
    all_courses: "Todos los cursos",
    modules: "Módulos",
    level: "Nivel",
    category: "Categoría",
    share: "Compartir",
    export: "Exportar",
    explain_code: "Explicar este código",
    explain_unavailable: "El servicio de explicaciones no está disponible.",
};

const DE: Phrases = Phrases {
    search_placeholder: "Kurse durchsuchen...",
    no_results: "Keine Kurse entsprechen deiner Suche.",
    results_for: "Ergebnisse für",
    all_courses: "Alle Kurse",
    modules: "Module",
    level: "Niveau",
    category: "Kategorie",
    share: "Teilen",
    export: "Exportieren",
    explain_code: "Diesen Code erklären",
    explain_unavailable: "Der Erklärungsdienst ist nicht verfügbar.",
};

impl Lang {
    /// The phrase table for this language.
    pub fn phrases(self) -> &'static Phrases {
        match self {
            Lang::En => &EN,
            Lang::Es => &ES,
            Lang::De => &DE,
        }
    }

    /// Two-letter code, as stored in settings.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::De => "de",
        }
    }

    pub fn all() -> [Lang; 3] {
        [Lang::En, Lang::Es, Lang::De]
    }

    /// Footer line under truncated search results. Word order shifts per
    /// language, so this is a function rather than a table entry.
    pub fn shown_of_matched(self, shown: usize, matched: usize) -> String {
        match self {
            Lang::En => format!("{shown} shown of {matched} matched"),
            Lang::Es => format!("se muestran {shown} de {matched} coincidencias"),
            Lang::De => format!("{shown} von {matched} Treffern angezeigt"),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unrecognized language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLangError(pub String);

impl fmt::Display for ParseLangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language '{}' (expected en, es, or de)", self.0)
    }
}

impl std::error::Error for ParseLangError {}

impl FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "es" => Ok(Lang::Es),
            "de" => Ok(Lang::De),
            _ => Err(ParseLangError(s.to_string())),
        }
    }
}
