//! Human-friendly labels for FST tag sequences.
//!
//! A [`Relabelling`] table maps compound tag keys (`V`, `V+TA`,
//! `3Sg+4Sg/PlO`, ...) to up to four label variants. Lookups take an ordered
//! tag sequence and return the label of its longest known prefix, so a full
//! analysis tail such as `V+TA+Prs+Ind+3Sg` still resolves to the `V+TA`
//! label.
//!
//! # Examples
//!
//! ```
//! use morphodict::relabel::{LabelFriendliness, Relabelling};
//!
//! let labels = Relabelling::from_tsv_str(
//!     "FST TAG\tSHORT\tLONG\tENGLISH\tNÊHIYAWÊWIN\tEMOJI\n\
//!      V\tVerb\t\tAction word\tispayin-itwêwin\n\
//!      V+TA\tTransitive animate verb\tVerb - transitive animate\tAction word\t\n",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     labels.get_longest(&["V", "TA", "Prs", "Ind", "3Sg"], LabelFriendliness::LinguisticLong),
//!     Some("Verb - transitive animate")
//! );
//! assert_eq!(labels.linguistic_short().get_longest_one("V"), Some("Verb"));
//! ```

pub mod friendliness;
pub mod table;

pub use friendliness::{LabelFriendliness, LabelSetting};
pub use table::{Labels, RelabelFetcher, Relabelling};

/// Separator used to join tags into a compound key.
pub const TAG_SEPARATOR: &str = "+";
