//! Static base configuration of right-panel sections.
//!
//! The panel ships with a fixed widget lineup; per-request course context
//! is overlaid by composition, never baked in here.

use lingua_panel::section::{LanguageStats, Mission, RightSection};

/// The shipped right-panel lineup, ordered top to bottom.
#[must_use]
pub fn base_sections() -> Vec<RightSection> {
    vec![
        RightSection::LanguageStats(LanguageStats {
            // Course fields are placeholders; composition overlays the
            // learner's actual course.
            language_code: "en".to_owned(),
            language_name: "English".to_owned(),
            flag_url: None,
            level: 1,
            streak_days: 0,
            lingots: 0,
            total_xp: 0,
        }),
        RightSection::DailyMissions {
            missions: vec![
                Mission {
                    title: "Earn 30 XP".to_owned(),
                    progress: 0,
                    target: 30,
                    reward_xp: 10,
                },
                Mission {
                    title: "Complete 2 lessons".to_owned(),
                    progress: 0,
                    target: 2,
                    reward_xp: 5,
                },
            ],
        },
        RightSection::Notifications { entries: vec![] },
        RightSection::Follows {
            following: vec![],
            followers: vec![],
        },
        RightSection::Ad {
            image_url: "https://static.lingua.example/ads/plus.png".to_owned(),
            title: "Try Lingua Plus".to_owned(),
            subtitle: "No ads, unlimited hearts".to_owned(),
            cta_label: "Start free trial".to_owned(),
            cta_url: "https://lingua.example/plus".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lineup_starts_with_language_stats() {
        let sections = base_sections();

        assert!(matches!(sections[0], RightSection::LanguageStats(_)));
        assert_eq!(sections.len(), 5);
    }
}
