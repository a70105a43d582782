#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Hard,
}

/// A prompt gating a dice roll. The expected answer is matched
/// case-insensitively with surrounding whitespace ignored; internal
/// whitespace must match exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub tier: Tier,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>, tier: Tier) -> Self {
        Question {
            prompt: prompt.into(),
            answer: answer.into(),
            tier,
        }
    }

    pub fn matches(&self, submitted: &str) -> bool {
        normalize(submitted) == normalize(&self.answer)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question::new("What has hands but can't clap?", answer, Tier::Easy)
    }

    #[test]
    fn test_matching_ignores_case_and_surrounding_whitespace() {
        assert!(question("clock").matches("  Clock "));
        assert!(question("Clock").matches("clock"));
    }

    #[test]
    fn test_matching_rejects_a_different_word() {
        assert!(!question("clock").matches("Clockwork"));
        assert!(!question("clock").matches(""));
    }

    #[test]
    fn test_internal_whitespace_must_match_exactly() {
        assert!(question("grandfather clock").matches(" Grandfather Clock "));
        assert!(!question("grandfather clock").matches("grandfather  clock"));
    }
}
