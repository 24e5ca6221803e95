//! Speaker gender aggregation.
//!
//! This module reduces a batch of quote records to a `GenderStats`
//! tally and renders a short text summary of the result.

use crate::models::{GenderStats, QuoteRecord};

/// Tally speaker genders over a batch of quotes.
///
/// Every record counts toward `num_quotes`. Records without a recognized
/// `speaker_gender` are not counted in any bucket. The result does not
/// depend on record order.
pub fn compute_stats(quotes: &[QuoteRecord]) -> GenderStats {
    quotes.iter().fold(GenderStats::default(), |mut stats, quote| {
        stats.record(quote.speaker_gender());
        stats
    })
}

/// Generate a text summary of the statistics.
pub fn summary_text(stats: &GenderStats) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Total Quotes: {}", stats.num_quotes));
    lines.push(format!(
        "- Women: {} ({})",
        stats.women_speakers,
        share(stats.women_speakers, stats.num_quotes)
    ));
    lines.push(format!(
        "- Men: {} ({})",
        stats.men_speakers,
        share(stats.men_speakers, stats.num_quotes)
    ));
    lines.push(format!(
        "- Unknown: {} ({})",
        stats.unknown_speakers,
        share(stats.unknown_speakers, stats.num_quotes)
    ));

    let uncategorized = stats.uncategorized();
    if uncategorized > 0 {
        lines.push(format!(
            "- Uncategorized: {} ({})",
            uncategorized,
            share(uncategorized, stats.num_quotes)
        ));
    }

    lines.join("\n")
}

fn share(count: u64, total: u64) -> String {
    if total == 0 {
        return "n/a".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn quotes(value: Value) -> Vec<QuoteRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn stats(num: u64, women: u64, men: u64, unknown: u64) -> GenderStats {
        GenderStats {
            num_quotes: num,
            women_speakers: women,
            men_speakers: men,
            unknown_speakers: unknown,
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compute_stats(&[]), stats(0, 0, 0, 0));
    }

    #[test]
    fn test_mixed_labels_with_organisation() {
        let input = quotes(json!([
            {"speaker_gender": "female"},
            {"speaker_gender": "male"},
            {"speaker_gender": "unknown"},
            {"speaker_gender": "organization"}
        ]));
        assert_eq!(compute_stats(&input), stats(4, 1, 1, 1));
    }

    #[test]
    fn test_repeated_label() {
        let input = quotes(json!([
            {"speaker_gender": "female"},
            {"speaker_gender": "female"}
        ]));
        assert_eq!(compute_stats(&input), stats(2, 2, 0, 0));
    }

    #[test]
    fn test_missing_field_counts_toward_total_only() {
        let input = quotes(json!([{}]));
        assert_eq!(compute_stats(&input), stats(1, 0, 0, 0));
    }

    #[test]
    fn test_null_and_non_string_labels() {
        let input = quotes(json!([
            {"speaker_gender": null},
            {"speaker_gender": 0},
            {"speaker_gender": {"label": "male"}},
            {"speaker_gender": "Male"},
            {"speaker_gender": "male"}
        ]));
        assert_eq!(compute_stats(&input), stats(5, 0, 1, 0));
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut input = quotes(json!([
            {"speaker_gender": "female"},
            {"speaker_gender": "male"},
            {"speaker_gender": "male"},
            {"speaker_gender": "unknown"},
            {"speaker": "ACME Corp."},
            {"speaker_gender": "female"}
        ]));
        let expected = compute_stats(&input);

        input.reverse();
        assert_eq!(compute_stats(&input), expected);

        input.rotate_left(2);
        assert_eq!(compute_stats(&input), expected);
    }

    #[test]
    fn test_bucket_sum_bounded_by_total() {
        let all_known = quotes(json!([
            {"speaker_gender": "female"},
            {"speaker_gender": "male"},
            {"speaker_gender": "unknown"}
        ]));
        let result = compute_stats(&all_known);
        assert_eq!(result.categorized(), result.num_quotes);

        let some_unknown = quotes(json!([
            {"speaker_gender": "female"},
            {"speaker_gender": "group"}
        ]));
        let result = compute_stats(&some_unknown);
        assert!(result.categorized() < result.num_quotes);
    }

    #[test]
    fn test_summary_text() {
        let text = summary_text(&stats(4, 1, 1, 1));
        assert!(text.contains("Total Quotes: 4"));
        assert!(text.contains("- Women: 1 (25.0%)"));
        assert!(text.contains("- Uncategorized: 1 (25.0%)"));
    }

    #[test]
    fn test_summary_text_empty() {
        let text = summary_text(&stats(0, 0, 0, 0));
        assert!(text.contains("- Men: 0 (n/a)"));
        assert!(!text.contains("Uncategorized"));
    }
}
