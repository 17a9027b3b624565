//! Education extraction — scoped to the resume's education section.

use std::collections::BTreeSet;

use regex::Regex;

use cvsift_core::LanguageCode;

/// Sentinel when the language has no configured headers/terms.
pub fn terms_not_defined(language: LanguageCode) -> String {
    format!("Education terms not defined for {}", language.code())
}

/// Sentinel when no section header matches.
pub const SECTION_NOT_FOUND: &str = "Education section not found";

/// Sentinel when a section exists but contains no recognized terms.
pub const EDUCATION_NOT_FOUND: &str = "Education not found";

fn section_headers(language: LanguageCode) -> &'static [&'static str] {
    match language {
        LanguageCode::En => &["Education", "Academic Background", "Qualifications"],
        LanguageCode::Fr => &["Formation", "Éducation", "Diplômes"],
        LanguageCode::Es => &["Educación", "Formación Académica", "Calificaciones"],
        LanguageCode::Nl => &["Opleiding", "Academische Achtergrond", "Diploma's"],
        LanguageCode::Unknown => &[],
    }
}

fn education_terms(language: LanguageCode) -> &'static [&'static str] {
    match language {
        LanguageCode::En => &[
            "Bachelor", "Master", "PhD", "Degree", "Diploma", "University", "College", "GPA",
        ],
        LanguageCode::Fr => &[
            "Baccalauréat", "Licence", "Master", "Doctorat", "Université", "École", "Diplôme",
        ],
        LanguageCode::Es => &[
            "Licenciatura", "Máster", "Doctorado", "Universidad", "Escuela", "Diploma",
        ],
        LanguageCode::Nl => &[
            "Bachelor", "Master", "Doctoraat", "Universiteit", "School", "Diploma",
        ],
        LanguageCode::Unknown => &[],
    }
}

/// Extract education qualifications from the education section of the text.
///
/// Collects the union of degree-term regex matches and whole section lines
/// containing a term (excluding internship lines), sorted and joined with
/// `", "`.
pub fn extract_education(text: &str, language: LanguageCode) -> String {
    let headers = section_headers(language);
    let terms = education_terms(language);
    if headers.is_empty() || terms.is_empty() {
        return terms_not_defined(language);
    }

    // Section runs from a header match to the next blank line or end of text.
    let header_alt = alternation(headers);
    let section_re = Regex::new(&format!(r"(?is)({})(.*?)(?:\n\n|\z)", header_alt))
        .expect("valid section pattern");

    let mut section = String::new();
    for cap in section_re.captures_iter(text) {
        section.push_str(&cap[2]);
    }
    if section.trim().is_empty() {
        return SECTION_NOT_FOUND.to_string();
    }

    let term_alt = alternation(terms);
    let degree_re = Regex::new(&format!(r"(?i)({})(?:\s+[\w\s,]+)?", term_alt))
        .expect("valid degree pattern");

    // BTreeSet gives the dedup + sort the joined output relies on.
    let mut found: BTreeSet<String> = degree_re
        .captures_iter(&section)
        .map(|cap| cap[1].to_string())
        .collect();

    for line in section.lines() {
        let lower = line.to_lowercase();
        if terms.iter().any(|t| lower.contains(&t.to_lowercase())) && !lower.contains("intern") {
            found.insert(line.trim().to_string());
        }
    }

    if found.is_empty() {
        EDUCATION_NOT_FOUND.to_string()
    } else {
        found.into_iter().collect::<Vec<_>>().join(", ")
    }
}

fn alternation(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|")
}
