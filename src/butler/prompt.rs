//! The input side of a session.
//!
//! Handlers never touch stdin or stdout. They ask questions and show intermediate
//! output (pages of a listing, the record being edited) through a [`Prompt`]; the binary
//! supplies a terminal implementation and tests supply [`fixtures::ScriptedPrompt`].

use crate::error::Result;

pub trait Prompt {
    /// Asks `question` and returns the answer without its trailing newline.
    /// Returns [`ButlerError::InputClosed`](crate::error::ButlerError::InputClosed)
    /// once no more input can arrive.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Shows text that is not the final result of a command.
    fn show(&mut self, text: &str);
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::ButlerError;
    use std::collections::VecDeque;

    /// Answers questions from a fixed script and records everything it was shown.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub questions: Vec<String>,
        pub shown: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }

        pub fn push_answers<I, S>(&mut self, answers: I)
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.answers.extend(answers.into_iter().map(Into::into));
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.questions.push(question.to_string());
            self.answers.pop_front().ok_or(ButlerError::InputClosed)
        }

        fn show(&mut self, text: &str) {
            self.shown.push(text.to_string());
        }
    }
}
