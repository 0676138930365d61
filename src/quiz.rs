//! Lesson quiz scoring and per-quiz answer state.
//!
//! Quizzes are static question lists. A [`QuizState`] records the learner's
//! selections against one quiz, scores them on submit, and refuses further
//! changes until [`reset`](QuizState::reset) is called.

use crate::error::{FinlitError, Result};
use crate::models::Quiz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Count the questions whose selected option matches the correct answer.
///
/// Unanswered questions and selections for indices outside the quiz score
/// nothing.
pub fn score(quiz: &Quiz, answers: &BTreeMap<usize, usize>) -> u32 {
    quiz.questions
        .iter()
        .enumerate()
        .filter(|(idx, q)| answers.get(idx) == Some(&q.correct_answer))
        .count() as u32
}

/// Check that every question has options and a correct answer among them.
pub fn validate(quiz: &Quiz) -> Result<()> {
    for (idx, q) in quiz.questions.iter().enumerate() {
        if q.options.is_empty() {
            return Err(FinlitError::InvalidArgument(format!(
                "question {} has no options",
                idx
            )));
        }
        if q.correct_answer >= q.options.len() {
            return Err(FinlitError::InvalidArgument(format!(
                "question {} has correct answer {} but only {} options",
                idx,
                q.correct_answer,
                q.options.len()
            )));
        }
    }
    Ok(())
}

/// In-memory answers for one quiz.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizState {
    answers: BTreeMap<usize, usize>,
    submitted: bool,
    score: u32,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` as the answer to `question`, replacing any earlier
    /// choice.
    ///
    /// Fails once the quiz has been submitted, or if either index is out of
    /// range for `quiz`.
    pub fn select(&mut self, quiz: &Quiz, question: usize, option: usize) -> Result<()> {
        if self.submitted {
            return Err(FinlitError::QuizAlreadySubmitted);
        }
        let q = quiz.questions.get(question).ok_or_else(|| {
            FinlitError::InvalidArgument(format!("no question at index {}", question))
        })?;
        if option >= q.options.len() {
            return Err(FinlitError::InvalidArgument(format!(
                "question {} has no option {}",
                question, option
            )));
        }
        self.answers.insert(question, option);
        Ok(())
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    /// True when every question of `quiz` has a selection.
    pub fn is_complete(&self, quiz: &Quiz) -> bool {
        (0..quiz.len()).all(|idx| self.answers.contains_key(&idx))
    }

    /// Score the current selections and lock the state.
    ///
    /// Partially answered quizzes may be submitted; unanswered questions
    /// count as wrong.
    pub fn submit(&mut self, quiz: &Quiz) -> Result<u32> {
        if self.submitted {
            return Err(FinlitError::QuizAlreadySubmitted);
        }
        self.score = score(quiz, &self.answers);
        self.submitted = true;
        debug!(score = self.score, total = quiz.len(), "quiz submitted");
        Ok(self.score)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Score from the last submit, `0` before submission.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the selection for `question` is correct. `None` before
    /// submission or when unanswered.
    pub fn is_correct(&self, quiz: &Quiz, question: usize) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        let chosen = self.answers.get(&question)?;
        quiz.questions
            .get(question)
            .map(|q| q.correct_answer == *chosen)
    }

    /// Clear answers, submission flag and score.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.submitted = false;
        self.score = 0;
    }
}
