use super::topics::Topic;
use crate::core::Message;
use rand::seq::SliceRandom;
use rand::Rng;

/// Локальный стилист: ответы по ключевым словам, без сети
pub struct LocalStylist;

impl LocalStylist {
    pub fn classify_and_respond(user_input: &str) -> Message {
        Self::classify_and_respond_with(user_input, &mut rand::thread_rng())
    }

    /// Same as [`LocalStylist::classify_and_respond`] with a caller-supplied RNG.
    pub fn classify_and_respond_with<R: Rng + ?Sized>(user_input: &str, rng: &mut R) -> Message {
        let topic = Topic::classify(user_input);
        let profile = topic.profile();
        let reply = profile.replies.choose(rng).copied().unwrap_or_default();

        log::debug!("🎯 Тема: {:?}", topic);

        Message::assistant(
            reply,
            profile.suggestions.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn suggestions_of(topic: Topic) -> Vec<String> {
        topic
            .profile()
            .suggestions
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_reply_shape_for_any_input() {
        let inputs = [
            "oi",
            "quais cores ficam bem em mim",
            "trabalho",
            "xyz123",
            "   ",
            "Que acessórios combinam com meu estilo?",
        ];
        for input in inputs {
            let message = LocalStylist::classify_and_respond(input);
            assert_eq!(message.sender, Sender::Assistant);
            assert!(!message.content.is_empty());
            assert_eq!(message.suggestions().len(), 3);
        }
    }

    #[test]
    fn test_colors_reply() {
        let message = LocalStylist::classify_and_respond("quais cores ficam bem em mim");

        assert_eq!(message.suggestions(), suggestions_of(Topic::Colors).as_slice());
        assert!(Topic::Colors.profile().replies.contains(&message.content.as_str()));
    }

    #[test]
    fn test_work_reply() {
        let message = LocalStylist::classify_and_respond("o que vestir no trabalho?");

        assert!(Topic::Work.profile().replies.contains(&message.content.as_str()));
        assert_eq!(message.suggestions(), suggestions_of(Topic::Work).as_slice());
    }

    #[test]
    fn test_unknown_input_falls_back_to_general() {
        let message = LocalStylist::classify_and_respond("xyz123");

        assert!(Topic::General.profile().replies.contains(&message.content.as_str()));
        assert_eq!(message.suggestions(), suggestions_of(Topic::General).as_slice());
    }

    #[test]
    fn test_uppercase_input_matches_same_topic() {
        let upper = LocalStylist::classify_and_respond("CORES");
        let lower = LocalStylist::classify_and_respond("cores");

        assert_eq!(upper.suggestions(), lower.suggestions());
        assert!(Topic::Colors.profile().replies.contains(&upper.content.as_str()));
    }

    #[test]
    fn test_every_reply_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..500 {
            let message = LocalStylist::classify_and_respond_with("paleta", &mut rng);
            seen.insert(message.content);
        }

        assert_eq!(seen.len(), Topic::Colors.profile().replies.len());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            let a = LocalStylist::classify_and_respond_with("makeup", &mut first);
            let b = LocalStylist::classify_and_respond_with("makeup", &mut second);
            assert_eq!(a.content, b.content);
        }
    }
}
