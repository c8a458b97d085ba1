use alloc::string::String;
use serde::{Deserialize, Serialize};

/// What a clue cell currently shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    QuestionShown,
    AnswerShown,
}

impl RevealState {
    /// Next state on activation, `None` once the answer is showing.
    pub const fn next(self) -> Option<Self> {
        use RevealState::*;
        match self {
            Hidden => Some(QuestionShown),
            QuestionShown => Some(AnswerShown),
            AnswerShown => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::AnswerShown)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    /// Advances the reveal state and returns the text the cell should now display.
    pub fn activate(&mut self) -> Option<&str> {
        use RevealState::*;

        let next = self.reveal_state.next()?;
        self.reveal_state = next;
        match next {
            QuestionShown => Some(self.question.as_str()),
            AnswerShown => Some(self.answer.as_str()),
            Hidden => None,
        }
    }
}
