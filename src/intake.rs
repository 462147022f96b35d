//! Multi-step influencer intake form.
//!
//! Three steps over one accumulating record: Profile, Audience, Preferences.
//! Step transitions clamp at the ends; the step-3 action is "submit", handed
//! to a [`SubmissionSink`] rather than incrementing past the last step.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Selectable platforms on step 1.
pub const PLATFORMS: [&str; 5] = ["Instagram", "YouTube", "TikTok", "Twitter", "Facebook"];

/// Selectable content categories on step 3.
pub const CATEGORIES: [&str; 6] = ["Fashion", "Beauty", "Tech", "Fitness", "Food", "Travel"];

/// Selectable engagement-rate buckets on step 2.
pub const ENGAGEMENT_RATES: [&str; 5] = ["<1%", "1-3%", "3-5%", "5-10%", ">10%"];

/// One influencer's accumulated form answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerRecord {
    pub name: String,
    pub platform: String,
    pub audience_size: String,
    pub categories: Vec<String>,
    pub engagement_rate: String,
    pub preferred_brands: Vec<String>,
}

/// Form stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Profile,
    Audience,
    Preferences,
}

impl Step {
    /// 1-based step number for display.
    pub fn number(&self) -> usize {
        match self {
            Step::Profile => 1,
            Step::Audience => 2,
            Step::Preferences => 3,
        }
    }

    /// Step title for display.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Profile => "Profile",
            Step::Audience => "Audience",
            Step::Preferences => "Preferences",
        }
    }

    /// All steps in order, for the progress indicator.
    pub const ALL: [Step; 3] = [Step::Profile, Step::Audience, Step::Preferences];
}

/// Intake form state: current step plus the record under construction.
pub struct IntakeForm {
    step: Step,
    pub record: InfluencerRecord,
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            step: Step::Profile,
            record: InfluencerRecord::default(),
        }
    }

    /// The current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Whether the current step is the last one (its action is submit).
    pub fn is_last_step(&self) -> bool {
        self.step == Step::Preferences
    }

    /// Advance one step; no-op on the last step.
    pub fn next(&mut self) {
        self.step = match self.step {
            Step::Profile => Step::Audience,
            Step::Audience | Step::Preferences => Step::Preferences,
        };
    }

    /// Retreat one step; no-op on the first step.
    pub fn back(&mut self) {
        self.step = match self.step {
            Step::Preferences => Step::Audience,
            Step::Audience | Step::Profile => Step::Profile,
        };
    }

    /// Toggle a category's membership: present is removed, absent is appended.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.record.categories.iter().position(|c| c == category) {
            self.record.categories.remove(pos);
        } else {
            self.record.categories.push(category.to_string());
        }
    }

    /// Re-derive the preferred-brands list from raw comma-separated text.
    ///
    /// Each segment is trimmed; empty segments are kept so an in-progress
    /// trailing comma survives the next redisplay.
    pub fn set_preferred_brands(&mut self, raw: &str) {
        self.record.preferred_brands = raw.split(',').map(|b| b.trim().to_string()).collect();
    }

    /// Text shown in the brands field: the parsed list joined with ", ".
    ///
    /// The raw keystroke buffer is never redisplayed, so the visible text and
    /// the parsed list cannot drift apart.
    pub fn preferred_brands_display(&self) -> String {
        self.record.preferred_brands.join(", ")
    }

    /// Clear the form back to step 1 with an empty record.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Destination for a completed intake record.
///
/// Where submissions ultimately go is not decided yet, so the boundary is a
/// trait and the shipped implementation only logs.
pub trait SubmissionSink {
    fn submit(&mut self, record: &InfluencerRecord) -> Result<()>;
}

/// Sink that logs the submission and discards it.
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(&mut self, record: &InfluencerRecord) -> Result<()> {
        tracing::info!(
            "Intake submission: name={:?} platform={:?} categories={}",
            record.name,
            record.platform,
            record.categories.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last_step() {
        let mut form = IntakeForm::new();
        form.next();
        form.next();
        assert_eq!(form.step(), Step::Preferences);

        form.next();
        assert_eq!(form.step(), Step::Preferences);
    }

    #[test]
    fn test_back_clamps_at_first_step() {
        let mut form = IntakeForm::new();
        assert_eq!(form.step(), Step::Profile);

        form.back();
        assert_eq!(form.step(), Step::Profile);
    }

    #[test]
    fn test_back_and_forth() {
        let mut form = IntakeForm::new();
        form.next();
        assert_eq!(form.step(), Step::Audience);
        form.back();
        assert_eq!(form.step(), Step::Profile);
    }

    #[test]
    fn test_toggle_category_twice_is_identity() {
        let mut form = IntakeForm::new();
        form.toggle_category("Tech");
        assert_eq!(form.record.categories, vec!["Tech"]);

        form.toggle_category("Tech");
        assert!(form.record.categories.is_empty());
    }

    #[test]
    fn test_toggle_preserves_other_categories() {
        let mut form = IntakeForm::new();
        form.toggle_category("Fashion");
        form.toggle_category("Tech");
        form.toggle_category("Food");
        form.toggle_category("Tech");
        assert_eq!(form.record.categories, vec!["Fashion", "Food"]);
    }

    #[test]
    fn test_brands_parse_trims_segments() {
        let mut form = IntakeForm::new();
        form.set_preferred_brands("Nike, Adidas,  Apple");
        assert_eq!(form.record.preferred_brands, vec!["Nike", "Adidas", "Apple"]);
    }

    #[test]
    fn test_brands_display_normalizes_spacing() {
        let mut form = IntakeForm::new();
        form.set_preferred_brands("Nike, Adidas,  Apple");
        assert_eq!(form.preferred_brands_display(), "Nike, Adidas, Apple");
    }

    #[test]
    fn test_brands_trailing_comma_keeps_empty_segment() {
        let mut form = IntakeForm::new();
        form.set_preferred_brands("Nike,");
        assert_eq!(form.record.preferred_brands, vec!["Nike", ""]);
        assert_eq!(form.preferred_brands_display(), "Nike, ");
    }

    #[test]
    fn test_reset_clears_record_and_step() {
        let mut form = IntakeForm::new();
        form.record.name = "someone".to_string();
        form.next();
        form.reset();
        assert_eq!(form.step(), Step::Profile);
        assert_eq!(form.record, InfluencerRecord::default());
    }
}
