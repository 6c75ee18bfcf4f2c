/// Qualitative rating of a finished (or in-flight) session, from most to
/// least demanding. Tiers are checked top-down so a session lands in the
/// strongest one it satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Great,
    Nice,
    Effort,
    KeepGoing,
}

impl FeedbackTier {
    pub fn rate(accuracy: f64, wpm: f64) -> Self {
        if accuracy >= 90.0 && wpm >= 50.0 {
            FeedbackTier::Excellent
        } else if accuracy >= 80.0 && wpm >= 40.0 {
            FeedbackTier::Great
        } else if accuracy >= 70.0 && wpm >= 30.0 {
            FeedbackTier::Nice
        } else if accuracy >= 60.0 {
            FeedbackTier::Effort
        } else {
            FeedbackTier::KeepGoing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => {
                "Excellent typing! Speed and accuracy are both impressive."
            }
            FeedbackTier::Great => "Great job! Strong balance of speed and accuracy.",
            FeedbackTier::Nice => "Nice work! Keep practicing to lift both speed and accuracy.",
            FeedbackTier::Effort => "Good effort. Focus on accuracy first, speed will follow.",
            FeedbackTier::KeepGoing => {
                "Keep going. Aim for accuracy first, then gradually increase speed."
            }
        }
    }
}

/// Coarse good/ok/bad bucket used to tint a metric readout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricLevel {
    Good,
    Ok,
    Bad,
}

impl MetricLevel {
    fn bucket(value: f64, good: f64, ok: f64) -> Self {
        if value >= good {
            MetricLevel::Good
        } else if value >= ok {
            MetricLevel::Ok
        } else {
            MetricLevel::Bad
        }
    }

    pub fn for_wpm(wpm: f64) -> Self {
        Self::bucket(wpm, 50.0, 30.0)
    }

    pub fn for_accuracy(accuracy: f64) -> Self {
        Self::bucket(accuracy, 90.0, 75.0)
    }
}
