// 🏆 Quiz Progression - forward-only traversal with reveal and score
//
// One question is live at a time. Selecting an option reveals the answer and
// locks the question; an explicit advance moves forward. There is no way back
// and no reset: after the last question the round is complete for good.

use crate::content::QuizQuestion;

// ============================================================================
// QUIZ ROUND
// ============================================================================

/// Mutable state for one pass through the question list
#[derive(Debug)]
pub struct QuizRound {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    revealed: bool,
    score: usize,
    completed: bool,
}

impl QuizRound {
    /// Start a round over the given questions.
    ///
    /// An empty list completes immediately with a zero score.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let completed = questions.is_empty();
        QuizRound {
            questions,
            current: 0,
            selected: None,
            revealed: false,
            score: 0,
            completed,
        }
    }

    /// The live question, None once the round is complete
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.completed {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// Zero-based index of the live question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Option picked for the live question, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// True once the live question's answer has been shown
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Correct answers so far; never decreases
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Progress through the round as a 0..=1 fraction of questions reached
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 1.0;
        }
        if self.completed {
            return 1.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64
    }

    /// Answer the live question.
    ///
    /// Returns whether the pick was correct, or None when the call is inert:
    /// round complete, answer already revealed, or the index is out of range.
    /// Once revealed, the options are locked; a question can never score twice.
    pub fn select(&mut self, option: usize) -> Option<bool> {
        if self.completed || self.revealed {
            return None;
        }

        let question = self.questions.get(self.current)?;
        if option >= question.options.len() {
            return None;
        }

        let is_correct = option == question.correct;
        self.selected = Some(option);
        self.revealed = true;
        if is_correct {
            self.score += 1;
        }

        Some(is_correct)
    }

    /// Move past a revealed question.
    ///
    /// Steps to the next question, or completes the round after the last one.
    /// Inert before reveal and after completion; returns whether state moved.
    pub fn advance(&mut self) -> bool {
        if self.completed || !self.revealed {
            return false;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.revealed = false;
        } else {
            self.completed = true;
        }

        true
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::QuestionBank;

    fn default_round() -> QuizRound {
        QuizRound::new(QuestionBank::new().questions().to_vec())
    }

    #[test]
    fn test_ppf_answer_scores_first_point() {
        let mut round = default_round();

        // Question id '1': PPF lock-in, correct option is index 1
        assert_eq!(round.current_question().unwrap().id, "1");
        assert_eq!(round.score(), 0);

        assert_eq!(round.select(1), Some(true));
        assert_eq!(round.score(), 1);
        assert!(round.is_revealed());
    }

    #[test]
    fn test_revealed_question_is_inert() {
        let mut round = default_round();

        assert_eq!(round.select(0), Some(false));
        let score_after_reveal = round.score();

        // Picking again, right or wrong, changes nothing
        assert_eq!(round.select(1), None);
        assert_eq!(round.select(0), None);
        assert_eq!(round.score(), score_after_reveal);
        assert_eq!(round.selected(), Some(0));
    }

    #[test]
    fn test_out_of_range_option_ignored() {
        let mut round = default_round();

        assert_eq!(round.select(7), None);
        assert!(!round.is_revealed());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut round = default_round();

        assert!(!round.advance());
        assert_eq!(round.current_index(), 0);

        round.select(0);
        assert!(round.advance());
        assert_eq!(round.current_index(), 1);
        assert!(!round.is_revealed());
        assert_eq!(round.selected(), None);
    }

    #[test]
    fn test_full_traversal_visits_each_index_once() {
        let mut round = default_round();
        let total = round.total();
        let mut visited = Vec::new();

        while !round.is_completed() {
            visited.push(round.current_index());
            round.select(0);
            round.advance();
        }

        // 0..N-1 in order, no skips, no repeats
        assert_eq!(visited, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn test_final_score_counts_correct_picks() {
        let questions = QuestionBank::new().questions().to_vec();
        let answers: Vec<usize> = questions.iter().map(|q| q.correct).collect();
        let mut round = QuizRound::new(questions);

        // Answer the first correctly, the rest wrong
        for (i, answer) in answers.iter().enumerate() {
            let pick = if i == 0 { *answer } else { (*answer + 1) % 4 };
            round.select(pick);
            round.advance();
        }

        assert!(round.is_completed());
        assert_eq!(round.score(), 1);
        assert!(round.score() <= round.total());
    }

    #[test]
    fn test_perfect_round() {
        let questions = QuestionBank::new().questions().to_vec();
        let answers: Vec<usize> = questions.iter().map(|q| q.correct).collect();
        let mut round = QuizRound::new(questions);

        for answer in answers {
            assert_eq!(round.select(answer), Some(true));
            round.advance();
        }

        assert_eq!(round.score(), round.total());
    }

    #[test]
    fn test_completed_round_is_terminal() {
        let mut round = default_round();
        while !round.is_completed() {
            round.select(0);
            round.advance();
        }

        let final_score = round.score();
        assert!(round.current_question().is_none());
        assert_eq!(round.select(0), None);
        assert!(!round.advance());
        assert_eq!(round.score(), final_score);
    }

    #[test]
    fn test_empty_round_completes_immediately() {
        let round = QuizRound::new(Vec::new());
        assert!(round.is_completed());
        assert_eq!(round.score(), 0);
        assert!((round.progress() - 1.0).abs() < f64::EPSILON);
    }
}
