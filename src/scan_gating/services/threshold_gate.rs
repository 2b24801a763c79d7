use crate::scan_gating::domain::{SeverityCounts, Thresholds, GATED_LEVELS};

/// Pure pass/fail policy over aggregated counts.
///
/// The gate fails iff any gated level's count is strictly greater than
/// its configured maximum; a count exactly equal to its maximum still
/// passes. Untriaged findings never gate.
pub fn passes(counts: &SeverityCounts, thresholds: &Thresholds) -> bool {
    GATED_LEVELS.iter().all(|level| {
        match thresholds.limit_for(*level) {
            Some(max) => counts.get(*level) <= max,
            // limit_for is Some for every gated level
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_gating::domain::Severity;

    fn counts(critical: u64, high: u64, medium: u64, low: u64, untriaged: u64) -> SeverityCounts {
        let mut c = SeverityCounts::new();
        for _ in 0..critical {
            c.increment(Severity::Critical);
        }
        for _ in 0..high {
            c.increment(Severity::High);
        }
        for _ in 0..medium {
            c.increment(Severity::Medium);
        }
        for _ in 0..low {
            c.increment(Severity::Low);
        }
        for _ in 0..untriaged {
            c.increment(Severity::Untriaged);
        }
        c
    }

    #[test]
    fn test_all_zero_counts_pass_zero_thresholds() {
        assert!(passes(&counts(0, 0, 0, 0, 0), &Thresholds::zero()));
    }

    #[test]
    fn test_single_critical_fails_zero_threshold() {
        assert!(!passes(&counts(1, 0, 0, 0, 0), &Thresholds::zero()));
    }

    #[test]
    fn test_count_equal_to_threshold_passes() {
        let thresholds = Thresholds::new(1, 2, 3, 4);
        assert!(passes(&counts(1, 2, 3, 4, 0), &thresholds));
    }

    #[test]
    fn test_count_one_over_threshold_fails() {
        let thresholds = Thresholds::new(1, 2, 3, 4);
        assert!(!passes(&counts(2, 2, 3, 4, 0), &thresholds));
        assert!(!passes(&counts(1, 3, 3, 4, 0), &thresholds));
        assert!(!passes(&counts(1, 2, 4, 4, 0), &thresholds));
        assert!(!passes(&counts(1, 2, 3, 5, 0), &thresholds));
    }

    #[test]
    fn test_any_single_level_failing_fails_the_gate() {
        let thresholds = Thresholds::new(10, 10, 10, 0);
        assert!(!passes(&counts(0, 0, 0, 1, 0), &thresholds));
    }

    #[test]
    fn test_untriaged_never_fails_the_gate() {
        assert!(passes(&counts(0, 0, 0, 0, 100), &Thresholds::zero()));
    }

    #[test]
    fn test_fails_iff_some_level_exceeds() {
        // Exhaustive sweep over small counts/thresholds: the gate result
        // must match the quantified definition exactly.
        let levels = [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ];

        for c in 0..3u64 {
            for t in 0..3u64 {
                for level in levels {
                    let mut severity_counts = SeverityCounts::new();
                    for _ in 0..c {
                        severity_counts.increment(level);
                    }

                    let mut thresholds = Thresholds::new(9, 9, 9, 9);
                    match level {
                        Severity::Critical => thresholds.max_critical = t,
                        Severity::High => thresholds.max_high = t,
                        Severity::Medium => thresholds.max_medium = t,
                        Severity::Low => thresholds.max_low = t,
                        Severity::Untriaged => unreachable!(),
                    }

                    assert_eq!(passes(&severity_counts, &thresholds), c <= t);
                }
            }
        }
    }
}
