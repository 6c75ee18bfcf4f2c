/// Shortest elapsed time used for speed math. Anything below this is treated
/// as half a second so the first keystrokes don't produce absurd WPM values.
pub const MIN_ELAPSED_SECS: f64 = 0.5;

/// Characters per word for gross WPM.
pub const CHARS_PER_WORD: f64 = 5.0;

/// Derived readouts for one session, recomputed on every update tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub elapsed_secs: f64,
    pub wpm: f64,
    pub accuracy: f64,
    pub progress: f64,
}

impl Metrics {
    pub fn compute(target: &str, typed: &str, elapsed_secs: f64) -> Self {
        Self {
            elapsed_secs,
            wpm: gross_wpm(typed.chars().count(), elapsed_secs),
            accuracy: accuracy(target, typed),
            progress: progress_percent(target, typed),
        }
    }
}

/// Positional character accuracy against the target, in percent.
///
/// The denominator is always the target length: characters typed beyond the
/// target and positions not yet typed both count as not-correct. An empty
/// target yields 0.
pub fn accuracy(target: &str, typed: &str) -> f64 {
    let target_len = target.chars().count();
    if target_len == 0 {
        return 0.0;
    }

    let matches = target
        .chars()
        .zip(typed.chars())
        .filter(|(t, y)| t == y)
        .count();

    (matches as f64 / target_len as f64) * 100.0
}

/// Gross words per minute using the 5-characters-per-word convention.
/// No error penalty; accuracy is reported separately.
pub fn gross_wpm(typed_chars: usize, elapsed_secs: f64) -> f64 {
    let minutes = elapsed_secs.max(MIN_ELAPSED_SECS) / 60.0;
    (typed_chars as f64 / CHARS_PER_WORD) / minutes
}

/// How far through the target the typist is, as a percentage in [0, 100].
pub fn progress_percent(target: &str, typed: &str) -> f64 {
    let target_len = target.chars().count();
    let typed_len = typed.chars().count();

    let ratio = typed_len.min(target_len) as f64 / target_len.max(1) as f64;
    (ratio * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_exact_match() {
        assert_eq!(accuracy("cat", "cat"), 100.0);
    }

    #[test]
    fn test_accuracy_single_miss() {
        let acc = accuracy("cat", "cab");
        assert!((acc - 66.66666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_accuracy_overflow_does_not_penalize_matches() {
        // All three target positions match; the trailing 's' is outside the
        // denominator.
        assert_eq!(accuracy("cat", "cats"), 100.0);
    }

    #[test]
    fn test_accuracy_empty_typed() {
        assert_eq!(accuracy("cat", ""), 0.0);
    }

    #[test]
    fn test_accuracy_empty_target() {
        assert_eq!(accuracy("", "anything"), 0.0);
        assert_eq!(accuracy("", ""), 0.0);
    }

    #[test]
    fn test_accuracy_bounds() {
        let cases = [
            ("hello world", "hello world"),
            ("hello world", "hxllo"),
            ("hello world", "zzzzzzzzzzz"),
            ("hello world", "hello world plus extra"),
        ];
        for (t, y) in cases {
            let acc = accuracy(t, y);
            assert!((0.0..=100.0).contains(&acc), "{t:?}/{y:?} -> {acc}");
        }
    }

    #[test]
    fn test_accuracy_100_only_on_full_prefix_match() {
        assert_eq!(accuracy("abc", "abc"), 100.0);
        assert!(accuracy("abc", "ab") < 100.0);
        assert!(accuracy("abc", "abx") < 100.0);
    }

    #[test]
    fn test_wpm_floor_applies_below_half_second() {
        let twenty_chars = 20;
        assert_eq!(gross_wpm(twenty_chars, 0.0), gross_wpm(twenty_chars, 0.5));
        assert_eq!(gross_wpm(twenty_chars, 0.1), gross_wpm(twenty_chars, 0.5));
    }

    #[test]
    fn test_wpm_zero_for_empty_typed() {
        assert_eq!(gross_wpm(0, 0.5), 0.0);
    }

    #[test]
    fn test_wpm_known_value() {
        // 50 chars = 10 words in 60 seconds -> 10 wpm
        assert_eq!(gross_wpm(50, 60.0), 10.0);
    }

    #[test]
    fn test_wpm_monotone_in_typed_length() {
        let mut prev = 0.0;
        for n in 0..50 {
            let wpm = gross_wpm(n, 10.0);
            assert!(wpm >= prev);
            prev = wpm;
        }
    }

    #[test]
    fn test_progress_endpoints() {
        assert_eq!(progress_percent("target", ""), 0.0);
        assert_eq!(progress_percent("target", "target"), 100.0);
        // Overflow typing still reads 100%.
        assert_eq!(progress_percent("cat", "cats"), 100.0);
    }

    #[test]
    fn test_progress_partial() {
        assert_eq!(progress_percent("abcd", "ab"), 50.0);
    }

    #[test]
    fn test_progress_empty_target() {
        assert_eq!(progress_percent("", "typed"), 0.0);
    }

    #[test]
    fn test_metrics_compute() {
        let m = Metrics::compute("cat", "cat", 60.0);
        assert_eq!(m.accuracy, 100.0);
        assert_eq!(m.progress, 100.0);
        assert_eq!(m.elapsed_secs, 60.0);
        // 3 chars in a minute
        assert!((m.wpm - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_default_is_zeroed() {
        let m = Metrics::default();
        assert_eq!(m.elapsed_secs, 0.0);
        assert_eq!(m.wpm, 0.0);
        assert_eq!(m.accuracy, 0.0);
        assert_eq!(m.progress, 0.0);
    }
}
