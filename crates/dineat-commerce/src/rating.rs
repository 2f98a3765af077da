//! Dish ratings and reviews.
//!
//! Ratings live in one JSON object under the [`keys::RATINGS`] storage key,
//! mapping dish id to the latest rating for that dish:
//!
//! ```json
//! {"butter-chicken": {"rating": "5", "review": "Rich", "timestamp": "2026-01-04T19:22:10.512Z"}}
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use dineat_storage::{keys, JsonStoreExt, KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};

use crate::error::RatingError;
use crate::ids::ItemId;
use crate::notify::Notifier;

/// A star rating from 1 to 5.
///
/// Stored as a string; numbers are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawStars", into = "String")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }
}

impl From<Stars> for String {
    fn from(stars: Stars) -> Self {
        stars.0.to_string()
    }
}

impl fmt::Display for Stars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStars {
    Number(u8),
    Text(String),
}

impl TryFrom<RawStars> for Stars {
    type Error = RatingError;

    fn try_from(raw: RawStars) -> Result<Self, Self::Error> {
        match raw {
            RawStars::Number(n) => Stars::try_from(n),
            RawStars::Text(s) => s
                .trim()
                .parse::<u8>()
                .map_err(|_| RatingError::NoRating)
                .and_then(Stars::try_from),
        }
    }
}

/// The stored rating for one dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub rating: Stars,
    #[serde(default)]
    pub review: String,
    pub timestamp: DateTime<Utc>,
}

/// Read and write dish ratings.
pub struct RatingBook<'a> {
    storage: &'a dyn KeyValueStore,
    notifier: &'a dyn Notifier,
}

impl<'a> RatingBook<'a> {
    pub fn new(storage: &'a dyn KeyValueStore, notifier: &'a dyn Notifier) -> Self {
        Self { storage, notifier }
    }

    /// Record a rating, replacing any earlier rating of the same dish.
    ///
    /// `stars` is `None` when the user has not picked a rating.
    pub fn submit(
        &self,
        dish_id: &str,
        stars: Option<u8>,
        review: &str,
    ) -> Result<RatingRecord, RatingError> {
        let dish_id = ItemId::new(dish_id);
        if dish_id.is_empty() {
            return Err(RatingError::MissingDish);
        }
        let rating = Stars::try_from(stars.ok_or(RatingError::NoRating)?)?;

        let record = RatingRecord {
            rating,
            review: review.to_string(),
            timestamp: Utc::now().trunc_subsecs(3),
        };

        let value = serde_json::to_value(&record).map_err(StorageError::from)?;
        let mut entries = self.raw_entries();
        entries.insert(dish_id.clone(), value);
        self.storage.set_json(keys::RATINGS, &entries)?;

        tracing::info!(dish_id = %dish_id, rating = rating.get(), "rating submitted");
        self.notifier.success("Thank you for your review!");
        Ok(record)
    }

    /// Every stored rating.
    ///
    /// Records that fail to decode are skipped; a map that is not a JSON
    /// object reads as empty.
    pub fn all(&self) -> BTreeMap<ItemId, RatingRecord> {
        self.raw_entries()
            .into_iter()
            .filter_map(|(dish_id, value)| {
                match serde_json::from_value::<RatingRecord>(value) {
                    Ok(record) => Some((dish_id, record)),
                    Err(e) => {
                        tracing::warn!(dish_id = %dish_id, error = %e, "skipping malformed rating");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn get(&self, dish_id: &str) -> Option<RatingRecord> {
        self.all().remove(&ItemId::new(dish_id))
    }

    // Stored entries, not yet decoded.
    fn raw_entries(&self) -> BTreeMap<ItemId, serde_json::Value> {
        match self
            .storage
            .get_json::<BTreeMap<ItemId, serde_json::Value>>(keys::RATINGS)
        {
            Ok(entries) => entries.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "stored ratings unreadable, starting fresh");
                BTreeMap::new()
            }
        }
    }
}

impl fmt::Debug for RatingBook<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingBook").finish_non_exhaustive()
    }
}
