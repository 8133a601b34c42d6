/// Result of one submitted quiz step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    /// Step index within the course.
    pub step: usize,
    /// Selected option index.
    pub selected: usize,
    pub correct: bool,
}

/// Per-course quiz results, owned by the hosting application and passed
/// through explicitly rather than living in ambient shared state. Nothing
/// here survives the process.
#[derive(Clone, Debug, Default)]
pub struct CourseProgress {
    results: Vec<QuizResult>,
}

impl CourseProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted answer. Resubmitting the same step replaces the
    /// earlier result.
    pub fn record_quiz(&mut self, step: usize, selected: usize, correct: bool) {
        self.results.retain(|r| r.step != step);
        self.results.push(QuizResult {
            step,
            selected,
            correct,
        });
    }

    pub fn quiz_result(&self, step: usize) -> Option<&QuizResult> {
        self.results.iter().find(|r| r.step == step)
    }

    /// (correct, answered) counts across all submitted quizzes.
    pub fn score(&self) -> (usize, usize) {
        let correct = self.results.iter().filter(|r| r.correct).count();
        (correct, self.results.len())
    }

    pub fn reset(&mut self) {
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resubmit_replaces() {
        let mut p = CourseProgress::new();
        p.record_quiz(4, 0, false);
        p.record_quiz(4, 1, true);
        assert_eq!(p.score(), (1, 1));
        assert_eq!(p.quiz_result(4).unwrap().selected, 1);
    }

    #[test]
    fn test_score_counts_per_step() {
        let mut p = CourseProgress::new();
        p.record_quiz(2, 1, true);
        p.record_quiz(5, 3, false);
        assert_eq!(p.score(), (1, 2));
    }
}
