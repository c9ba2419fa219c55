use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MorphodictError, Result};

/// Which label variant to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelFriendliness {
    /// Terse linguistic terminology ("Transitive animate verb")
    LinguisticShort,
    /// Spelled-out linguistic terminology ("Verb - transitive animate")
    LinguisticLong,
    /// Plain English for community users ("Action word - like: wîcihêw")
    English,
    /// Labels written in nêhiyawêwin
    Nehiyawewin,
}

impl LabelFriendliness {
    pub const ALL: [LabelFriendliness; 4] = [
        LabelFriendliness::LinguisticShort,
        LabelFriendliness::LinguisticLong,
        LabelFriendliness::English,
        LabelFriendliness::Nehiyawewin,
    ];

    /// Column of this variant in the relabelling TSV (the tag key is column 0).
    pub fn column(&self) -> usize {
        match self {
            LabelFriendliness::LinguisticShort => 1,
            LabelFriendliness::LinguisticLong => 2,
            LabelFriendliness::English => 3,
            LabelFriendliness::Nehiyawewin => 4,
        }
    }
}

/// A user's paradigm label preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSetting {
    #[default]
    English,
    Linguistic,
    Nehiyawewin,
}

impl LabelSetting {
    pub fn friendliness(&self) -> LabelFriendliness {
        match self {
            LabelSetting::English => LabelFriendliness::English,
            LabelSetting::Linguistic => LabelFriendliness::LinguisticShort,
            LabelSetting::Nehiyawewin => LabelFriendliness::Nehiyawewin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSetting::English => "english",
            LabelSetting::Linguistic => "linguistic",
            LabelSetting::Nehiyawewin => "nehiyawewin",
        }
    }
}

impl From<LabelSetting> for LabelFriendliness {
    fn from(setting: LabelSetting) -> Self {
        setting.friendliness()
    }
}

impl fmt::Display for LabelSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelSetting {
    type Err = MorphodictError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "english" => Ok(LabelSetting::English),
            "linguistic" => Ok(LabelSetting::Linguistic),
            "nehiyawewin" => Ok(LabelSetting::Nehiyawewin),
            other => Err(MorphodictError::config(format!(
                "unknown label setting: {other}"
            ))),
        }
    }
}
