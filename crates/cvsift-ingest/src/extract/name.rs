//! Name extraction — ordered rule chain, first success wins.

use once_cell::sync::Lazy;
use regex::Regex;

use cvsift_core::LanguageCode;

/// Sentinel returned when every rule fails.
pub const NAME_NOT_FOUND: &str = "Name not found";

// Terms that disqualify a person candidate, per language. These are words
// that commonly appear capitalized in resumes without being names.
fn ignore_terms(language: LanguageCode) -> &'static [&'static str] {
    match language {
        LanguageCode::En => &["phone", "school", "university", "institute"],
        LanguageCode::Es => &[
            "teléfono",
            "departamento",
            "escuela",
            "universidad",
            "licenciatura",
        ],
        LanguageCode::Fr => &["téléphone", "lycée", "université", "école"],
        LanguageCode::Nl => &["telefoon", "gymnasium", "universiteit", "opleiding"],
        LanguageCode::Unknown => &[],
    }
}

// Word separator is space/tab only; a newline ends the captured name.
static NAME_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:Name|Nom)[:\s]*([A-Z][a-z]+(?:[ \t][A-Z][a-z]+)*)").unwrap());

// Candidates are single-line name spans; `[ \t]+` keeps a line's last
// word from gluing onto the next line's first word.
static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Dr|Prof)\.[ \t]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?)").unwrap()
});

static TWO_CAP_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+[ \t]+[A-Z][a-z]+)\b").unwrap());

/// Extract a name from resume text.
///
/// Rules, in strict order:
/// 1. Explicit `Name:`/`Nom:` label followed by capitalized words.
/// 2. First person-entity candidate that passes the ignore-term and
///    digit/symbol filters.
/// 3. First 5 lines scanned for two consecutive capitalized words.
/// 4. The [`NAME_NOT_FOUND`] sentinel.
pub fn extract_name(text: &str, language: LanguageCode) -> String {
    let ignore = ignore_terms(language);

    if let Some(cap) = NAME_LABEL_RE.captures(text) {
        return cap[1].to_string();
    }

    for candidate in person_candidates(text) {
        if is_valid_person(&candidate, ignore) {
            return candidate;
        }
    }

    for line in text.lines().take(5) {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() >= 2
            && words[..2].iter().all(|w| is_capitalized_word(w))
            && !line.chars().any(|c| c.is_ascii_digit())
            && !contains_ignore_term(line, ignore)
        {
            return words[..2].join(" ");
        }
    }

    NAME_NOT_FOUND.to_string()
}

/// Person-entity candidates in text order: title + name patterns first,
/// then two consecutive capitalized words (skipping the very start of the
/// text, which is usually a heading rather than a sentence-interior name).
fn person_candidates(text: &str) -> Vec<String> {
    let mut candidates: Vec<String> = TITLE_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect();

    for m in TWO_CAP_WORDS_RE.find_iter(text) {
        let name = m.as_str().to_string();
        if m.start() > 2 && !candidates.contains(&name) {
            candidates.push(name);
        }
    }

    candidates
}

fn is_valid_person(candidate: &str, ignore: &[&str]) -> bool {
    !contains_ignore_term(candidate, ignore)
        && !candidate.chars().any(|c| c.is_ascii_digit() || c == '|' || c == '/')
}

fn contains_ignore_term(text: &str, ignore: &[&str]) -> bool {
    let lower = text.to_lowercase();
    ignore.iter().any(|term| lower.contains(term))
}

fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest: Vec<char> = chars.collect();
            !rest.is_empty() && rest.iter().all(|c| c.is_lowercase())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_label() {
        let text = "Resume\nName: John Smith\nDeveloper";
        assert_eq!(extract_name(text, LanguageCode::En), "John Smith");
    }

    #[test]
    fn test_nom_label() {
        let text = "CV\nNom: Marie Dubois\nIngénieure logiciel";
        assert_eq!(extract_name(text, LanguageCode::Fr), "Marie Dubois");
    }

    #[test]
    fn test_person_entity_pass() {
        let text = "curriculum vitae of Jane Doe, backend engineer since 2015.";
        assert_eq!(extract_name(text, LanguageCode::En), "Jane Doe");
    }

    #[test]
    fn test_entity_with_ignore_term_rejected() {
        // "State University" is capitalized but matches the en stoplist,
        // so the next candidate wins.
        let text = "resume from the State University careers office\nAlice Brown\nEngineer";
        let name = extract_name(text, LanguageCode::En);
        assert_eq!(name, "Alice Brown");
    }

    #[test]
    fn test_entity_candidates_stay_on_one_line() {
        // "Gomez" must not glue onto the next line's "Edad".
        let text = "Nombre\nCarlos Gomez\nEdad: 34 años\nDesarrollador de software";
        assert_eq!(extract_name(text, LanguageCode::Es), "Carlos Gomez");
    }

    #[test]
    fn test_fallback_first_lines() {
        let text = "Carlos Gomez\ndesarrollador de software";
        assert_eq!(extract_name(text, LanguageCode::Es), "Carlos Gomez");
    }

    #[test]
    fn test_fallback_skips_lines_with_digits() {
        let text = "Alice Brown 42\nplain text only here";
        assert_eq!(extract_name(text, LanguageCode::En), NAME_NOT_FOUND);
    }

    #[test]
    fn test_not_found() {
        let text = "no capitalized words here\njust plain text\n555-1234";
        assert_eq!(extract_name(text, LanguageCode::En), NAME_NOT_FOUND);
    }
}
