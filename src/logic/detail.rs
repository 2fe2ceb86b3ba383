//! Session detail aggregates
//!
//! Derived once when a session detail arrives; never written back to the
//! session itself.

use crate::api::Screenshot;

use super::relevance::display_relevance;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailStats {
    pub total: usize,
    pub analyzed_count: usize,
    /// Average display relevance of analyzed screenshots (0–100)
    pub avg_relevance: u32,
}

impl DetailStats {
    /// Analysis is offered only for sessions with nothing analyzed yet
    pub fn can_analyze(&self) -> bool {
        self.analyzed_count == 0
    }
}

/// Compute analyzed count and average relevance
///
/// # Examples
/// ```
/// use shotdeck::logic::detail::compute_stats;
///
/// let stats = compute_stats(&[]);
/// assert_eq!(stats.analyzed_count, 0);
/// assert_eq!(stats.avg_relevance, 0);
/// ```
pub fn compute_stats(screenshots: &[Screenshot]) -> DetailStats {
    let analyzed: Vec<u32> = screenshots
        .iter()
        .filter(|shot| shot.analyzed)
        .map(display_relevance)
        .collect();

    let avg_relevance = if analyzed.is_empty() {
        0
    } else {
        let sum: u64 = analyzed.iter().map(|&v| v as u64).sum();
        (sum as f64 / analyzed.len() as f64).round() as u32
    };

    DetailStats {
        total: screenshots.len(),
        analyzed_count: analyzed.len(),
        avg_relevance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed(display: u32) -> Screenshot {
        Screenshot {
            id: None,
            file_path: "a.png".to_string(),
            timestamp: None,
            analyzed: true,
            relevance_score: Some(display as f64 / 100.0),
            relevance_display: Some(display),
            ai_summary: Some("summary".to_string()),
        }
    }

    fn unanalyzed() -> Screenshot {
        Screenshot {
            id: None,
            file_path: "b.png".to_string(),
            timestamp: None,
            analyzed: false,
            relevance_score: None,
            relevance_display: None,
            ai_summary: None,
        }
    }

    #[test]
    fn test_empty_session_average_is_zero() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.analyzed_count, 0);
        assert_eq!(stats.avg_relevance, 0);
        assert!(stats.can_analyze());
    }

    #[test]
    fn test_mixed_session_average() {
        let stats = compute_stats(&[analyzed(80), unanalyzed(), analyzed(40)]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.analyzed_count, 2);
        assert_eq!(stats.avg_relevance, 60);
        assert!(!stats.can_analyze());
    }

    #[test]
    fn test_only_unanalyzed_average_is_zero() {
        let stats = compute_stats(&[unanalyzed(), unanalyzed()]);
        assert_eq!(stats.analyzed_count, 0);
        assert_eq!(stats.avg_relevance, 0);
        assert!(stats.can_analyze());
    }

    #[test]
    fn test_average_rounds() {
        let stats = compute_stats(&[analyzed(50), analyzed(51)]);
        assert_eq!(stats.avg_relevance, 51);
    }
}
