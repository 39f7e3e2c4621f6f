//! Kind-dispatched section rendering.

use crate::section::{FollowEntry, LanguageStats, Mission, Notification, RightSection};

/// One rendering strategy per section kind.
///
/// A strategy returns `None` to skip its section; the default `unknown`
/// strategy skips, so renderers degrade gracefully when the panel carries
/// a kind minted after they were written.
pub trait SectionRenderer {
    /// What rendering a section produces.
    type Output;

    /// Renders the course stats widget.
    fn language_stats(&self, stats: &LanguageStats) -> Option<Self::Output>;

    /// Renders the notifications widget.
    fn notifications(&self, entries: &[Notification]) -> Option<Self::Output>;

    /// Renders the follows widget.
    fn follows(
        &self,
        following: &[FollowEntry],
        followers: &[FollowEntry],
    ) -> Option<Self::Output>;

    /// Renders the daily missions widget.
    fn daily_missions(&self, missions: &[Mission]) -> Option<Self::Output>;

    /// Renders the ad widget.
    fn ad(
        &self,
        image_url: &str,
        title: &str,
        subtitle: &str,
        cta_label: &str,
        cta_url: &str,
    ) -> Option<Self::Output>;

    /// Fallback for unrecognized kinds. Skips by default.
    fn unknown(&self) -> Option<Self::Output> {
        None
    }
}

/// Renders an ordered section sequence, dispatching each element on its
/// kind and dropping sections whose strategy declines to render.
pub fn render_sections<R: SectionRenderer>(
    renderer: &R,
    sections: &[RightSection],
) -> Vec<R::Output> {
    sections
        .iter()
        .filter_map(|section| match section {
            RightSection::LanguageStats(stats) => renderer.language_stats(stats),
            RightSection::Notifications { entries } => renderer.notifications(entries),
            RightSection::Follows {
                following,
                followers,
            } => renderer.follows(following, followers),
            RightSection::DailyMissions { missions } => renderer.daily_missions(missions),
            RightSection::Ad {
                image_url,
                title,
                subtitle,
                cta_label,
                cta_url,
            } => renderer.ad(image_url, title, subtitle, cta_label, cta_url),
            RightSection::Unknown => renderer.unknown(),
        })
        .collect()
}

/// One-line plain-text renderer, used by tests and CLI consumers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl SectionRenderer for TextRenderer {
    type Output = String;

    fn language_stats(&self, stats: &LanguageStats) -> Option<String> {
        Some(format!(
            "{} — level {}, {} day streak, {} XP",
            stats.language_name, stats.level, stats.streak_days, stats.total_xp
        ))
    }

    fn notifications(&self, entries: &[Notification]) -> Option<String> {
        Some(format!("{} notification(s)", entries.len()))
    }

    fn follows(&self, following: &[FollowEntry], followers: &[FollowEntry]) -> Option<String> {
        Some(format!(
            "following {}, followed by {}",
            following.len(),
            followers.len()
        ))
    }

    fn daily_missions(&self, missions: &[Mission]) -> Option<String> {
        let done = missions
            .iter()
            .filter(|m| m.progress_pct() == 100)
            .count();
        Some(format!("{done}/{} missions complete", missions.len()))
    }

    fn ad(
        &self,
        _image_url: &str,
        title: &str,
        _subtitle: &str,
        cta_label: &str,
        cta_url: &str,
    ) -> Option<String> {
        Some(format!("ad: {title}, {cta_label} ({cta_url})"))
    }
}
