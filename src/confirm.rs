use std::io::{BufRead, Write};

/// Human-in-the-loop gate in front of destructive operations. Injected so the
/// batch logic can be exercised with a scripted responder.
pub trait ConfirmationGate {
    /// Present `prompt` and block for a yes/no answer. Only `yes` or `y`
    /// (case-insensitive) counts as affirmative.
    fn ask(&mut self, prompt: &str) -> std::io::Result<bool>;
}

/// Blocking read from the operator's terminal. No timeout: the process waits
/// indefinitely for an answer.
pub struct StdinGate;

impl ConfirmationGate for StdinGate {
    fn ask(&mut self, prompt: &str) -> std::io::Result<bool> {
        print!("{}", prompt);
        std::io::stdout().flush()?;

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        let answer = answer.trim();

        Ok(answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
pub struct ScriptedGate {
    pub answer: bool,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedGate {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl ConfirmationGate for ScriptedGate {
    fn ask(&mut self, prompt: &str) -> std::io::Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.answer)
    }
}
