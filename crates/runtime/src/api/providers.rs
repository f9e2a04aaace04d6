//! Input provider abstraction.
//!
//! A session asks its [`InputProvider`] for one line at a time. Interactive
//! front ends read from a terminal; tests script the lines up front.

use std::collections::VecDeque;
use std::fmt;

use bowling_core::EntryState;

use super::errors::Result;

/// What the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prompt {
    /// A throw token (or `m`/`q`) for the given entry position.
    Throw(EntryState),
    /// A frame correction line `frame t1 t2 [t3]` (or `q`).
    Correction,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Throw(state) => write!(
                f,
                "{state} (m to modify a previous frame, q to quit)"
            ),
            Self::Correction => {
                write!(f, "Frame Throw_1 Throw_2 [Throw_3] (q to go back)")
            }
        }
    }
}

/// Source of user input lines for a session.
///
/// Returning `Ok(None)` means the input is exhausted and is treated as quit.
pub trait InputProvider {
    fn next_input(&mut self, prompt: &Prompt) -> Result<Option<String>>;
}

/// Replays a fixed list of lines, then reports end of input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_input(&mut self, _prompt: &Prompt) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Adapts a closure into an [`InputProvider`].
pub struct InputFn<F>(pub F);

impl<F> InputProvider for InputFn<F>
where
    F: FnMut(&Prompt) -> Result<Option<String>>,
{
    fn next_input(&mut self, prompt: &Prompt) -> Result<Option<String>> {
        (self.0)(prompt)
    }
}
