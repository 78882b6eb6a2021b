// ❓ Quiz Questions - multiple-choice question bank
// The progression state machine lives in crate::quiz; this file only holds the
// questions themselves.

use serde::{Deserialize, Serialize};

// ============================================================================
// QUIZ QUESTION
// ============================================================================

/// A multiple-choice question with one correct option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Stable identifier from the source data
    pub id: String,

    pub question: String,

    /// Options in display order
    pub options: Vec<String>,

    /// Index into `options` of the correct answer
    pub correct: usize,

    /// Shown after the answer is revealed
    pub explanation: String,
}

impl QuizQuestion {
    /// True when `correct` points at a real option
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.correct < self.options.len()
    }
}

// ============================================================================
// QUESTION BANK
// ============================================================================

/// All quiz questions, in asking order
pub struct QuestionBank {
    questions: Vec<QuizQuestion>,
}

impl QuestionBank {
    /// Create a bank seeded with the default questions
    pub fn new() -> Self {
        let mut bank = QuestionBank {
            questions: Vec::new(),
        };
        bank.register_default_questions();
        bank
    }

    fn register_default_questions(&mut self) {
        self.register(QuizQuestion {
            id: "1".to_string(),
            question: "What is the lock-in period for PPF in India?".to_string(),
            options: vec![
                "10 years".to_string(),
                "15 years".to_string(),
                "20 years".to_string(),
                "5 years".to_string(),
            ],
            correct: 1,
            explanation: "PPF has a mandatory lock-in period of 15 years, after which \
                          you can withdraw or extend."
                .to_string(),
        });

        self.register(QuizQuestion {
            id: "2".to_string(),
            question: "What does SIP stand for?".to_string(),
            options: vec![
                "Simple Investment Plan".to_string(),
                "Systematic Investment Plan".to_string(),
                "Secure Investment Plan".to_string(),
                "Special Investment Plan".to_string(),
            ],
            correct: 1,
            explanation: "SIP stands for Systematic Investment Plan, allowing regular \
                          investments in mutual funds."
                .to_string(),
        });

        self.register(QuizQuestion {
            id: "3".to_string(),
            question: "Which payment method is most popular for digital transactions \
                       in India?"
                .to_string(),
            options: vec![
                "Credit Card".to_string(),
                "Debit Card".to_string(),
                "UPI".to_string(),
                "Net Banking".to_string(),
            ],
            correct: 2,
            explanation: "UPI has become the most popular digital payment method in \
                          India due to its convenience and instant transfers."
                .to_string(),
        });
    }

    /// Add a question to the bank
    pub fn register(&mut self, question: QuizQuestion) {
        self.questions.push(question);
    }

    /// All questions in asking order
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Look up a question by its id
    pub fn get(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bank_has_three_questions() {
        let bank = QuestionBank::new();
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn test_every_question_is_well_formed() {
        let bank = QuestionBank::new();
        for q in bank.questions() {
            assert!(q.is_well_formed(), "bad correct index on question {}", q.id);
            assert_eq!(q.options.len(), 4);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn test_ppf_question_answer() {
        let bank = QuestionBank::new();
        let ppf = bank.get("1").unwrap();

        // The PPF lock-in question: option 1 ("15 years") is correct
        assert_eq!(ppf.correct, 1);
        assert_eq!(ppf.options[ppf.correct], "15 years");
    }

    #[test]
    fn test_malformed_question_detected() {
        let q = QuizQuestion {
            id: "x".to_string(),
            question: "?".to_string(),
            options: vec!["a".to_string()],
            correct: 3,
            explanation: String::new(),
        };
        assert!(!q.is_well_formed());
    }
}
