use aetheria_state::Transcript;
use tracing::{debug, warn};

use crate::counter::TokenCounter;

/// Keeps a transcript's summed token count under a fixed ceiling.
///
/// Eviction is first-in first-out over the non-system messages. The system
/// message is pinned: when it alone exceeds the budget the transcript is
/// left at that single message and the budget stays exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetEnforcer {
    budget: usize,
}

/// What a single enforcement pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enforcement {
    pub evicted: usize,
    pub total_tokens: usize,
    pub within_budget: bool,
}

impl BudgetEnforcer {
    pub fn new(budget: usize) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn enforce(&self, transcript: &mut Transcript, counter: &dyn TokenCounter) -> Enforcement {
        // Counts are taken once; evicting index 1 pops the front of `counts[1..]`.
        let counts: Vec<usize> = transcript
            .messages()
            .iter()
            .map(|m| counter.count_message(m))
            .collect();
        let mut total: usize = counts.iter().sum();
        let mut evicted = 0;

        while total > self.budget && transcript.len() > 1 {
            if transcript.evict_oldest().is_none() {
                break;
            }
            evicted += 1;
            total -= counts[evicted];
        }

        let within_budget = total <= self.budget;
        if evicted > 0 {
            debug!(
                evicted,
                total_tokens = total,
                budget = self.budget,
                model = counter.model_name(),
                "evicted oldest messages to fit token budget"
            );
        }
        if !within_budget {
            warn!(
                total_tokens = total,
                budget = self.budget,
                "system message alone exceeds the token budget"
            );
        }

        Enforcement {
            evicted,
            total_tokens: total,
            within_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aetheria_core::Message;
    use pretty_assertions::assert_eq;

    /// One token per whitespace-separated word.
    struct WordCounter;

    impl TokenCounter for WordCounter {
        fn count_text(&self, text: &str) -> usize {
            text.split_whitespace().count()
        }

        fn model_name(&self) -> &str {
            "words"
        }
    }

    fn transcript(system: &str, rest: &[&str]) -> Transcript {
        let mut t = Transcript::new(system);
        for (i, content) in rest.iter().enumerate() {
            if i % 2 == 0 {
                t.push_user(*content);
            } else {
                t.push_assistant(*content);
            }
        }
        t
    }

    #[test]
    fn test_no_eviction_under_budget() {
        let mut t = transcript("sys", &["one two", "three"]);
        let report = BudgetEnforcer::new(10).enforce(&mut t, &WordCounter);

        assert_eq!(
            report,
            Enforcement {
                evicted: 0,
                total_tokens: 4,
                within_budget: true
            }
        );
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_fifo_eviction_removes_oldest_first() {
        // sys=1, m1=3, m2=2, m3=2 → total 8; budget 5 needs only m1 gone.
        let mut t = transcript("sys", &["a b c", "d e", "f g"]);
        let report = BudgetEnforcer::new(5).enforce(&mut t, &WordCounter);

        assert_eq!(report.evicted, 1);
        assert_eq!(report.total_tokens, 5);
        assert_eq!(
            t.messages(),
            &[
                Message::system("sys"),
                Message::assistant("d e"),
                Message::user("f g"),
            ]
        );
    }

    #[test]
    fn test_eviction_converges_to_budget() {
        let mut t = transcript("sys", &["a b c d", "e f g", "h i", "j"]);
        let enforcer = BudgetEnforcer::new(3);
        let report = enforcer.enforce(&mut t, &WordCounter);

        assert!(report.within_budget);
        assert!(WordCounter.count_messages(t.messages()) <= 3);
        assert_eq!(report.evicted, 3);
        assert_eq!(report.total_tokens, 2);
        assert_eq!(t.history(), &[Message::assistant("j")]);
    }

    #[test]
    fn test_system_message_is_pinned_when_over_budget() {
        let mut t = transcript("a very long system instruction", &["hello there", "hi"]);
        let report = BudgetEnforcer::new(2).enforce(&mut t, &WordCounter);

        assert_eq!(report.evicted, 2);
        assert!(!report.within_budget);
        assert_eq!(report.total_tokens, 5);
        assert_eq!(
            t.messages(),
            &[Message::system("a very long system instruction")]
        );
    }

    #[test]
    fn test_system_only_transcript_is_untouched() {
        let mut t = Transcript::new("a b c d e f");
        let report = BudgetEnforcer::new(1).enforce(&mut t, &WordCounter);

        assert_eq!(report.evicted, 0);
        assert_eq!(t.len(), 1);
    }
}
