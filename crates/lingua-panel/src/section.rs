//! Tagged right-panel section model.
//!
//! One variant per widget kind, adjacently tagged on the wire as
//! `{"kind": ..., "data": ...}`. Adding a kind is a single-point,
//! compile-time-checked extension: one variant here plus one rendering
//! strategy in [`crate::render`]. Kinds minted after this build
//! deserialize to [`RightSection::Unknown`] rather than failing.

use serde::{Deserialize, Serialize};

/// Course stats widget payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    /// Language code of the active course.
    pub language_code: String,
    /// Display name of the active course.
    pub language_name: String,
    /// Flag image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
    /// Current level in the course.
    pub level: u32,
    /// Consecutive practice days.
    pub streak_days: u32,
    /// In-app currency balance.
    pub lingots: u32,
    /// Lifetime XP in the course.
    pub total_xp: u32,
}

/// One entry in the notifications widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Who triggered the notification.
    pub author: String,
    /// Human-readable relative time ("2h ago").
    pub relative_time: String,
    /// Notification body.
    pub message: String,
    /// Reaction tallies, empty when nobody reacted.
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

/// Reaction tally on a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction emoji.
    pub emoji: String,
    /// How many people reacted.
    pub count: u32,
}

/// One entry in the follows widget's lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEntry {
    /// Profile identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lifetime XP shown beside the name.
    pub xp: u32,
}

/// One daily mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Mission title.
    pub title: String,
    /// Progress so far.
    pub progress: u32,
    /// Completion target.
    pub target: u32,
    /// XP awarded on completion.
    pub reward_xp: u32,
}

impl Mission {
    /// Progress bar fill in whole percent, clamped to 0..=100.
    #[must_use]
    pub fn progress_pct(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        (100 * self.progress / self.target).min(100)
    }
}

/// One widget's data payload in the right panel, tagged by kind.
///
/// Deserialization is hand-written: the derived adjacently tagged
/// deserializer rejects an unknown tag whose `data` payload still has to be
/// consumed, so decoding goes through a raw envelope and maps unrecognized
/// kinds to [`RightSection::Unknown`] instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RightSection {
    /// Stats for the learner's active course.
    LanguageStats(LanguageStats),
    /// Recent activity notifications.
    Notifications {
        /// Ordered notification entries, newest first.
        entries: Vec<Notification>,
    },
    /// Social follow lists.
    Follows {
        /// Profiles the learner follows.
        following: Vec<FollowEntry>,
        /// Profiles following the learner.
        followers: Vec<FollowEntry>,
    },
    /// Daily mission progress.
    DailyMissions {
        /// Ordered missions for today.
        missions: Vec<Mission>,
    },
    /// Promotional widget.
    Ad {
        /// Creative image URL.
        image_url: String,
        /// Headline.
        title: String,
        /// Supporting copy.
        subtitle: String,
        /// Call-to-action label.
        cta_label: String,
        /// Call-to-action target URL.
        cta_url: String,
    },
    /// A kind this build does not recognize. Renderers skip or placeholder
    /// it; they never crash on it.
    Unknown,
}

/// Wire envelope: the discriminant plus whatever payload came with it.
#[derive(Deserialize)]
struct RawSection {
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl<'de> Deserialize<'de> for RightSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;

        #[derive(Deserialize)]
        struct NotificationsData {
            entries: Vec<Notification>,
        }
        #[derive(Deserialize)]
        struct FollowsData {
            following: Vec<FollowEntry>,
            followers: Vec<FollowEntry>,
        }
        #[derive(Deserialize)]
        struct DailyMissionsData {
            missions: Vec<Mission>,
        }
        #[derive(Deserialize)]
        struct AdData {
            image_url: String,
            title: String,
            subtitle: String,
            cta_label: String,
            cta_url: String,
        }

        let raw = RawSection::deserialize(deserializer)?;
        let section = match raw.kind.as_str() {
            "language_stats" => Self::LanguageStats(
                serde_json::from_value(raw.data).map_err(D::Error::custom)?,
            ),
            "notifications" => {
                let data: NotificationsData =
                    serde_json::from_value(raw.data).map_err(D::Error::custom)?;
                Self::Notifications {
                    entries: data.entries,
                }
            }
            "follows" => {
                let data: FollowsData =
                    serde_json::from_value(raw.data).map_err(D::Error::custom)?;
                Self::Follows {
                    following: data.following,
                    followers: data.followers,
                }
            }
            "daily_missions" => {
                let data: DailyMissionsData =
                    serde_json::from_value(raw.data).map_err(D::Error::custom)?;
                Self::DailyMissions {
                    missions: data.missions,
                }
            }
            "ad" => {
                let data: AdData =
                    serde_json::from_value(raw.data).map_err(D::Error::custom)?;
                Self::Ad {
                    image_url: data.image_url,
                    title: data.title,
                    subtitle: data.subtitle,
                    cta_label: data.cta_label,
                    cta_url: data.cta_url,
                }
            }
            // Kinds minted after this build, payload or not.
            _ => Self::Unknown,
        };
        Ok(section)
    }
}
