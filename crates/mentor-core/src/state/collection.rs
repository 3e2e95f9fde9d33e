//! Named collections of the session document.

use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Whether a collection is keyed or ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionShape {
    Map,
    Sequence,
}

/// Every collection the operation handlers read or write.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    /// course id -> difficulty tag
    DifficultyPreferences,
    /// course id -> pace tag
    PacePreferences,
    /// resource records, unique by id
    SavedResources,
    /// append-only feedback records
    FeedbackList,
    /// recommendation id -> relevance entry
    RecommendationFeedback,
    /// goal records, unique by id
    LearningGoals,
    /// append-only audit records
    InteractionHistory,
}

impl Collection {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn shape(self) -> CollectionShape {
        match self {
            Collection::DifficultyPreferences
            | Collection::PacePreferences
            | Collection::RecommendationFeedback => CollectionShape::Map,
            Collection::SavedResources
            | Collection::FeedbackList
            | Collection::LearningGoals
            | Collection::InteractionHistory => CollectionShape::Sequence,
        }
    }

    /// The value an absent collection reads as.
    pub fn empty_default(self) -> Value {
        match self.shape() {
            CollectionShape::Map => Value::Object(Map::new()),
            CollectionShape::Sequence => Value::Array(Vec::new()),
        }
    }
}
