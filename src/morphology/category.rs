//! Simplified lexical categories and their tag markers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MorphodictError, Result};

/// Lexical category derived from the tags that follow a lemma.
///
/// The string form is the category code used throughout the lexicon data
/// (`NA`, `VTA`, `IPC`, ...), i.e. the marker tags with the `+` removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LexicalCategory {
    #[serde(rename = "NA")]
    NounAnimate,
    #[serde(rename = "NAD")]
    NounAnimateDiminutive,
    #[serde(rename = "NI")]
    NounInanimate,
    #[serde(rename = "NID")]
    NounInanimateDiminutive,
    #[serde(rename = "VAI")]
    VerbAnimateIntransitive,
    #[serde(rename = "VTA")]
    VerbTransitiveAnimate,
    #[serde(rename = "VTI")]
    VerbTransitiveInanimate,
    #[serde(rename = "VII")]
    VerbInanimateIntransitive,
    #[serde(rename = "IPC")]
    Particle,
    #[serde(rename = "PRON")]
    Pronoun,
}

impl LexicalCategory {
    pub const ALL: [LexicalCategory; 10] = [
        LexicalCategory::NounAnimate,
        LexicalCategory::NounAnimateDiminutive,
        LexicalCategory::NounInanimate,
        LexicalCategory::NounInanimateDiminutive,
        LexicalCategory::VerbAnimateIntransitive,
        LexicalCategory::VerbTransitiveAnimate,
        LexicalCategory::VerbTransitiveInanimate,
        LexicalCategory::VerbInanimateIntransitive,
        LexicalCategory::Particle,
        LexicalCategory::Pronoun,
    ];

    /// The category code, e.g. `"VTA"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LexicalCategory::NounAnimate => "NA",
            LexicalCategory::NounAnimateDiminutive => "NAD",
            LexicalCategory::NounInanimate => "NI",
            LexicalCategory::NounInanimateDiminutive => "NID",
            LexicalCategory::VerbAnimateIntransitive => "VAI",
            LexicalCategory::VerbTransitiveAnimate => "VTA",
            LexicalCategory::VerbTransitiveInanimate => "VTI",
            LexicalCategory::VerbInanimateIntransitive => "VII",
            LexicalCategory::Particle => "IPC",
            LexicalCategory::Pronoun => "PRON",
        }
    }

    pub fn is_noun(&self) -> bool {
        matches!(
            self,
            LexicalCategory::NounAnimate
                | LexicalCategory::NounAnimateDiminutive
                | LexicalCategory::NounInanimate
                | LexicalCategory::NounInanimateDiminutive
        )
    }

    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            LexicalCategory::VerbAnimateIntransitive
                | LexicalCategory::VerbTransitiveAnimate
                | LexicalCategory::VerbTransitiveInanimate
                | LexicalCategory::VerbInanimateIntransitive
        )
    }

    pub fn is_diminutive(&self) -> bool {
        matches!(
            self,
            LexicalCategory::NounAnimateDiminutive | LexicalCategory::NounInanimateDiminutive
        )
    }

    /// Recognize a category marker at the very start of `tags`.
    ///
    /// Returns the category and how many tags the marker spans. The
    /// diminutive `D` only counts when another tag follows it, and a `Num`
    /// tag fused in front of `Ipc` is part of the particle marker.
    pub fn match_marker<S: AsRef<str>>(tags: &[S]) -> Option<(LexicalCategory, usize)> {
        let tag = |i: usize| tag_at(tags, i);

        match (tag(0)?, tag(1)) {
            ("N", Some("A")) => Some(if tag(2) == Some("D") && tag(3).is_some() {
                (LexicalCategory::NounAnimateDiminutive, 3)
            } else {
                (LexicalCategory::NounAnimate, 2)
            }),
            ("N", Some("I")) => Some(if tag(2) == Some("D") && tag(3).is_some() {
                (LexicalCategory::NounInanimateDiminutive, 3)
            } else {
                (LexicalCategory::NounInanimate, 2)
            }),
            ("V", Some("AI")) => Some((LexicalCategory::VerbAnimateIntransitive, 2)),
            ("V", Some("TA")) => Some((LexicalCategory::VerbTransitiveAnimate, 2)),
            ("V", Some("TI")) => Some((LexicalCategory::VerbTransitiveInanimate, 2)),
            ("V", Some("II")) => Some((LexicalCategory::VerbInanimateIntransitive, 2)),
            ("Num", Some("Ipc")) => Some((LexicalCategory::Particle, 2)),
            ("Ipc", _) => Some((LexicalCategory::Particle, 1)),
            ("Pron", _) => Some((LexicalCategory::Pronoun, 1)),
            _ => None,
        }
    }

    /// Find the first category marker anywhere in `tags`.
    ///
    /// Returns the category and the index of the marker's first tag.
    pub fn find_marker<S: AsRef<str>>(tags: &[S]) -> Option<(LexicalCategory, usize)> {
        (0..tags.len()).find_map(|start| {
            Self::match_marker(&tags[start..]).map(|(category, _)| (category, start))
        })
    }
}

fn tag_at<S: AsRef<str>>(tags: &[S], i: usize) -> Option<&str> {
    tags.get(i).map(|t| t.as_ref())
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LexicalCategory {
    type Err = MorphodictError;

    /// Parse a category code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_ascii_uppercase();
        LexicalCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == upper)
            .ok_or_else(|| {
                MorphodictError::invalid_argument(format!("unknown lexical category: {s}"))
            })
    }
}
