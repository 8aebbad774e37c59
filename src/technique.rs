use crate::error::MindfulError;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported meditation techniques.
///
/// Each variant maps to a canonical lowercase identifier used in request
/// payloads. Decoding is case-sensitive and rejects anything outside the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    BodyScan,
    FocusedAttention,
    LovingKindness,
    MindfulnessEmotion,
    GratitudePractice,
}

impl Technique {
    pub const ALL: [Technique; 5] = [
        Technique::BodyScan,
        Technique::FocusedAttention,
        Technique::LovingKindness,
        Technique::MindfulnessEmotion,
        Technique::GratitudePractice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Technique::BodyScan => "body_scan",
            Technique::FocusedAttention => "focused_attention",
            Technique::LovingKindness => "loving_kindness",
            Technique::MindfulnessEmotion => "mindfulness_emotion",
            Technique::GratitudePractice => "gratitude_practice",
        }
    }
}

impl FromStr for Technique {
    type Err = MindfulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "body_scan" => Ok(Technique::BodyScan),
            "focused_attention" => Ok(Technique::FocusedAttention),
            "loving_kindness" => Ok(Technique::LovingKindness),
            "mindfulness_emotion" => Ok(Technique::MindfulnessEmotion),
            "gratitude_practice" => Ok(Technique::GratitudePractice),
            other => Err(MindfulError::UnrecognizedTechnique(other.to_string())),
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Technique {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Technique {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
