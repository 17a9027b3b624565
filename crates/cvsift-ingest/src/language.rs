//! Best-effort language detection.

use cvsift_core::LanguageCode;

/// Classify the language of a text.
///
/// Detection never fails: empty or too-short input, or a language the
/// extraction heuristics have no rules for, maps to
/// [`LanguageCode::Unknown`].
pub fn detect_language(text: &str) -> LanguageCode {
    match whatlang::detect(text).map(|info| info.lang()) {
        Some(whatlang::Lang::Eng) => LanguageCode::En,
        Some(whatlang::Lang::Spa) => LanguageCode::Es,
        Some(whatlang::Lang::Fra) => LanguageCode::Fr,
        Some(whatlang::Lang::Nld) => LanguageCode::Nl,
        _ => LanguageCode::Unknown,
    }
}
