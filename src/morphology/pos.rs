//! Part-of-speech labels shown to dictionary users.

use log::warn;

use crate::morphology::category::LexicalCategory;
use crate::morphology::parser::AnalysisParser;

/// A coarse part of speech for display ("Noun", "Verb", ...).
///
/// Sources are consulted in order:
/// 1. the inflectional category from the source dictionary (`VAI-v`,
///    `NA-1`, `IPV`, ...), where `IPV` always means a preverb, even when
///    the source lists its part of speech as a particle;
/// 2. the explicit part-of-speech code (`N`, `V`, `IPC`, `PRON`, `IPV`);
/// 3. the category code of the inflectional category, then the category
///    extracted from the analysis.
///
/// Returns `None` when none of these says anything useful.
pub fn presentational_pos(
    parser: &dyn AnalysisParser,
    pos: &str,
    inflectional_category: &str,
    analysis: &str,
) -> Option<&'static str> {
    let lc_code = inflectional_category
        .split('-')
        .next()
        .unwrap_or_default()
        .trim();

    if lc_code.eq_ignore_ascii_case("IPV") {
        return Some("Preverb");
    }

    match pos.trim().to_ascii_uppercase().as_str() {
        "N" => return Some("Noun"),
        "V" => return Some("Verb"),
        "IPC" => return Some("Particle"),
        "PRON" => return Some("Pronoun"),
        "IPV" => return Some("Preverb"),
        _ => {}
    }

    let category = lc_code
        .parse::<LexicalCategory>()
        .ok()
        .or_else(|| parser.extract_lexical_category(analysis));

    match category {
        Some(category) if category.is_noun() => Some("Noun"),
        Some(category) if category.is_verb() => Some("Verb"),
        Some(LexicalCategory::Particle) => Some("Particle"),
        Some(LexicalCategory::Pronoun) => Some("Pronoun"),
        _ => {
            warn!(
                "cannot determine presentational pos for analysis={:?} pos={:?} lc={:?}",
                analysis, pos, inflectional_category
            );
            None
        }
    }
}
