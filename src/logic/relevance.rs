//! Relevance display logic
//!
//! The analysis pipeline stores relevance as 0.0–1.0 and may also provide a
//! 0–100 display value. Buckets drive how a screenshot is highlighted in both
//! the session detail view and search results.

use crate::api::Screenshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceBucket {
    High,
    Medium,
    Low,
}

impl RelevanceBucket {
    pub fn as_str(&self) -> &str {
        match self {
            RelevanceBucket::High => "high",
            RelevanceBucket::Medium => "medium",
            RelevanceBucket::Low => "low",
        }
    }
}

/// Bucket a 0–100 display relevance
///
/// # Examples
/// ```
/// use shotdeck::logic::relevance::{bucket, RelevanceBucket};
///
/// assert_eq!(bucket(70), RelevanceBucket::High);
/// assert_eq!(bucket(69), RelevanceBucket::Medium);
/// assert_eq!(bucket(40), RelevanceBucket::Medium);
/// assert_eq!(bucket(39), RelevanceBucket::Low);
/// ```
pub fn bucket(display: u32) -> RelevanceBucket {
    if display >= 70 {
        RelevanceBucket::High
    } else if display >= 40 {
        RelevanceBucket::Medium
    } else {
        RelevanceBucket::Low
    }
}

/// Display relevance for a screenshot (0–100)
///
/// Uses the pipeline-provided value when present, otherwise derives it from
/// the stored score. Unscored screenshots display as 0.
pub fn display_relevance(shot: &Screenshot) -> u32 {
    if let Some(display) = shot.relevance_display {
        return display.min(100);
    }
    shot.relevance_score
        .map(score_to_display)
        .unwrap_or(0)
}

/// Scale a 0.0–1.0 score to 0–100
pub fn score_to_display(score: f64) -> u32 {
    if !score.is_finite() {
        return 0;
    }
    (score * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(score: Option<f64>, display: Option<u32>) -> Screenshot {
        Screenshot {
            id: None,
            file_path: "x.png".to_string(),
            timestamp: None,
            analyzed: score.is_some() || display.is_some(),
            relevance_score: score,
            relevance_display: display,
            ai_summary: None,
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket(100), RelevanceBucket::High);
        assert_eq!(bucket(70), RelevanceBucket::High);
        assert_eq!(bucket(69), RelevanceBucket::Medium);
        assert_eq!(bucket(40), RelevanceBucket::Medium);
        assert_eq!(bucket(39), RelevanceBucket::Low);
        assert_eq!(bucket(0), RelevanceBucket::Low);
    }

    #[test]
    fn test_display_prefers_provided_value() {
        assert_eq!(display_relevance(&shot(Some(0.1), Some(85))), 85);
    }

    #[test]
    fn test_display_derived_from_score() {
        assert_eq!(display_relevance(&shot(Some(0.456), None)), 46);
        assert_eq!(display_relevance(&shot(Some(1.0), None)), 100);
    }

    #[test]
    fn test_display_unscored_is_zero() {
        assert_eq!(display_relevance(&shot(None, None)), 0);
    }

    #[test]
    fn test_display_clamped() {
        assert_eq!(display_relevance(&shot(None, Some(250))), 100);
        assert_eq!(score_to_display(-0.5), 0);
        assert_eq!(score_to_display(f64::NAN), 0);
    }
}
