//! Right-panel composition service.

use lingua_core::course::CourseContext;

use crate::section::RightSection;

/// Overlays course context onto a static base configuration.
///
/// Every `language_stats` section gets the context's course identifier,
/// display name, and (when present) flag URL; its remaining fields and all
/// other section kinds pass through unmodified. The base is never mutated,
/// so the same configuration can serve concurrent requests with different
/// contexts.
#[must_use]
pub fn compose(base: &[RightSection], ctx: &CourseContext) -> Vec<RightSection> {
    base.iter()
        .map(|section| match section {
            RightSection::LanguageStats(stats) => {
                let mut stats = stats.clone();
                stats.language_code = ctx.course_id.clone();
                stats.language_name = ctx.course_name.clone();
                if let Some(flag_url) = &ctx.flag_url {
                    stats.flag_url = Some(flag_url.clone());
                }
                RightSection::LanguageStats(stats)
            }
            other => other.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{FollowEntry, LanguageStats};

    fn base_sections() -> Vec<RightSection> {
        vec![
            RightSection::LanguageStats(LanguageStats {
                language_code: "en".to_owned(),
                language_name: "English".to_owned(),
                flag_url: None,
                level: 7,
                streak_days: 12,
                lingots: 340,
                total_xp: 9150,
            }),
            RightSection::Follows {
                following: vec![FollowEntry {
                    id: "u1".to_owned(),
                    name: "Ana".to_owned(),
                    xp: 5100,
                }],
                followers: vec![],
            },
        ]
    }

    #[test]
    fn test_compose_overlays_course_fields_onto_language_stats() {
        let base = base_sections();
        let ctx = CourseContext::new("id", "Bahasa Indonesia");

        let composed = compose(&base, &ctx);

        let RightSection::LanguageStats(stats) = &composed[0] else {
            panic!("expected language_stats first");
        };
        assert_eq!(stats.language_code, "id");
        assert_eq!(stats.language_name, "Bahasa Indonesia");
        // Non-course fields untouched.
        assert_eq!(stats.level, 7);
        assert_eq!(stats.streak_days, 12);
        assert_eq!(stats.lingots, 340);
        assert_eq!(stats.total_xp, 9150);
    }

    #[test]
    fn test_compose_passes_other_kinds_through_unchanged() {
        let base = base_sections();
        let ctx = CourseContext::new("id", "Bahasa Indonesia");

        let composed = compose(&base, &ctx);

        assert_eq!(composed[1], base[1]);
    }

    #[test]
    fn test_compose_does_not_mutate_the_base() {
        let base = base_sections();
        let snapshot = base.clone();

        let _with_id = compose(&base, &CourseContext::new("id", "Bahasa Indonesia"));
        let _with_fr = compose(&base, &CourseContext::new("fr", "French"));

        assert_eq!(base, snapshot);
    }

    #[test]
    fn test_compose_with_different_contexts_yields_independent_results() {
        let base = base_sections();

        let id = compose(&base, &CourseContext::new("id", "Bahasa Indonesia"));
        let fr = compose(&base, &CourseContext::new("fr", "French"));

        let RightSection::LanguageStats(id_stats) = &id[0] else {
            panic!("expected language_stats");
        };
        let RightSection::LanguageStats(fr_stats) = &fr[0] else {
            panic!("expected language_stats");
        };
        assert_eq!(id_stats.language_code, "id");
        assert_eq!(fr_stats.language_code, "fr");
    }

    #[test]
    fn test_compose_overlays_flag_url_only_when_present() {
        let base = base_sections();

        let mut ctx = CourseContext::new("id", "Bahasa Indonesia");
        let without = compose(&base, &ctx);
        let RightSection::LanguageStats(stats) = &without[0] else {
            panic!("expected language_stats");
        };
        assert!(stats.flag_url.is_none());

        ctx.flag_url = Some("https://example.com/id.svg".to_owned());
        let with = compose(&base, &ctx);
        let RightSection::LanguageStats(stats) = &with[0] else {
            panic!("expected language_stats");
        };
        assert_eq!(stats.flag_url.as_deref(), Some("https://example.com/id.svg"));
    }
}
