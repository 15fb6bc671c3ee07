use super::message::{Conversation, Message};
use crate::ai::LocalStylist;
use crate::config::Config;
use rand::Rng;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Called from the reply task once a message is ready (egui uses it to request a repaint).
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// Artificial "thinking" time before a reply shows up: `base + [0, jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl ThinkingDelay {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base: config.reply_delay,
            jitter: config.reply_jitter,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rng.gen_range(0..jitter_ms))
    }
}

/// A reply that has been chosen but not yet shown.
///
/// The owner decides when (or whether) to surface it: [`PendingReply::wait`]
/// honours the delay, [`PendingReply::into_message`] skips it.
#[derive(Debug, Clone)]
pub struct PendingReply {
    message: Message,
    delay: Duration,
}

impl PendingReply {
    pub fn new(message: Message, delay: Duration) -> Self {
        Self { message, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn into_message(self) -> Message {
        self.message
    }

    pub async fn wait(self) -> Message {
        tokio::time::sleep(self.delay).await;
        self.message
    }
}

/// Chat session with the scripted stylist.
///
/// Owns the conversation log. Replies are delivered by background tasks
/// through a channel and only land in the log when [`StyleAssistant::poll`]
/// is called from the UI thread.
pub struct StyleAssistant {
    assistant_name: String,
    delay: ThinkingDelay,
    conversation: Conversation,
    reply_sender: std_mpsc::Sender<Message>,
    reply_receiver: std_mpsc::Receiver<Message>,
    tasks: Vec<JoinHandle<()>>,
    in_flight: usize,
    repaint: Option<RepaintHook>,
}

impl StyleAssistant {
    pub fn new(config: &Config) -> Self {
        let (reply_sender, reply_receiver) = std_mpsc::channel();

        Self {
            assistant_name: config.assistant_name.clone(),
            delay: ThinkingDelay::from_config(config),
            conversation: Conversation::new(&config.assistant_name),
            reply_sender,
            reply_receiver,
            tasks: Vec::new(),
            in_flight: 0,
            repaint: None,
        }
    }

    pub fn with_repaint(mut self, hook: RepaintHook) -> Self {
        self.repaint = Some(hook);
        self
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn is_typing(&self) -> bool {
        self.in_flight > 0
    }

    /// Picks the reply and its delay without scheduling anything.
    pub fn prepare_reply(&self, user_input: &str) -> PendingReply {
        let mut rng = rand::thread_rng();
        let message = LocalStylist::classify_and_respond_with(user_input, &mut rng);
        PendingReply::new(message, self.delay.sample(&mut rng))
    }

    /// Appends the user's message and schedules the stylist's answer.
    ///
    /// Blank input is ignored and `false` is returned. Suggestion chips go
    /// through here as well.
    pub fn send(&mut self, user_input: &str) -> bool {
        if user_input.trim().is_empty() {
            return false;
        }

        self.conversation.push(Message::user(user_input.trim()));
        let reply = self.prepare_reply(user_input);
        self.schedule(reply);
        true
    }

    pub fn schedule(&mut self, reply: PendingReply) {
        log::debug!("⏳ Ответ через {} мс", reply.delay().as_millis());

        let sender = self.reply_sender.clone();
        let repaint = self.repaint.clone();

        let handle = tokio::spawn(async move {
            let message = reply.wait().await;

            if let Err(e) = sender.send(message) {
                log::warn!("Ошибка отправки ответа: {}", e);
            }

            if let Some(repaint) = repaint {
                repaint();
            }
        });

        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(handle);
        self.in_flight += 1;
    }

    /// Moves delivered replies into the conversation. Returns how many arrived.
    pub fn poll(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(message) = self.reply_receiver.try_recv() {
            self.conversation.push(message);
            self.in_flight = self.in_flight.saturating_sub(1);
            delivered += 1;
        }

        if delivered > 0 {
            log::debug!("💬 Получено ответов: {}", delivered);
        }
        delivered
    }

    /// Aborts every scheduled reply. Anything already queued, or sent by a task
    /// that could not be stopped in time, is dropped with the old channel.
    pub fn cancel_pending(&mut self) {
        let cancelled = self.in_flight;
        for task in self.tasks.drain(..) {
            task.abort();
        }
        // Новый канал: задача, уже прошедшая sleep, пишет в старый
        let (reply_sender, reply_receiver) = std_mpsc::channel();
        self.reply_sender = reply_sender;
        self.reply_receiver = reply_receiver;
        self.in_flight = 0;

        if cancelled > 0 {
            log::info!("🛑 Отменено ответов: {}", cancelled);
        }
    }

    pub fn reset(&mut self) {
        self.cancel_pending();
        self.conversation = Conversation::new(&self.assistant_name);
        log::info!("🗑️  История разговора очищена");
    }
}

impl Drop for StyleAssistant {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Topic;
    use crate::core::Sender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_config(delay_ms: u64, jitter_ms: u64) -> Config {
        let mut config = Config::from_lookup(|_| None);
        config.reply_delay = Duration::from_millis(delay_ms);
        config.reply_jitter = Duration::from_millis(jitter_ms);
        config
    }

    #[test]
    fn test_delay_without_jitter_is_exact() {
        let delay = ThinkingDelay {
            base: Duration::from_millis(1000),
            jitter: Duration::ZERO,
        };
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(delay.sample(&mut rng), Duration::from_millis(1000));
    }

    #[test]
    fn test_delay_stays_in_range() {
        let delay = ThinkingDelay {
            base: Duration::from_millis(1000),
            jitter: Duration::from_millis(1000),
        };
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let sampled = delay.sample(&mut rng);
            assert!(sampled >= Duration::from_millis(1000));
            assert!(sampled < Duration::from_millis(2000));
        }
    }

    #[test]
    fn test_pending_reply_can_skip_delay() {
        let message = Message::assistant("oi", vec![]);
        let reply = PendingReply::new(message, Duration::from_secs(5));

        assert_eq!(reply.delay(), Duration::from_secs(5));
        assert_eq!(reply.into_message().content, "oi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_is_ignored() {
        let mut assistant = StyleAssistant::new(&test_config(1000, 0));

        assert!(!assistant.send("   "));
        assert!(!assistant.send(""));
        assert_eq!(assistant.conversation().len(), 1);
        assert!(!assistant.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let mut assistant = StyleAssistant::new(&test_config(1000, 0));

        assert!(assistant.send("  quais cores ficam bem em mim  "));
        assert!(assistant.is_typing());

        let user = &assistant.conversation().messages()[1];
        assert_eq!(user.sender, Sender::User);
        assert_eq!(user.content, "quais cores ficam bem em mim");

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(assistant.poll(), 0);
        assert!(assistant.is_typing());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(assistant.poll(), 1);
        assert!(!assistant.is_typing());

        let reply = assistant.conversation().last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(Topic::Colors.profile().replies.contains(&reply.content.as_str()));
        assert_eq!(reply.suggestions().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_scheduled_reply() {
        let mut assistant = StyleAssistant::new(&test_config(1000, 1000));

        assistant.send("trabalho");
        assistant.cancel_pending();
        assert!(!assistant.is_typing());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(assistant.poll(), 0);
        assert_eq!(assistant.conversation().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_reply_after_cancel_is_dropped() {
        let mut assistant = StyleAssistant::new(&test_config(1000, 0));
        assistant.send("bolsa");

        // Задача, которая уже проснулась и держит отправителя
        let late_sender = assistant.reply_sender.clone();
        assistant.reset();
        let _ = late_sender.send(Message::assistant("atrasada", Vec::new()));

        assert_eq!(assistant.poll(), 0);
        assert_eq!(assistant.conversation().len(), 1);
        assert!(!assistant.is_typing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_several_messages_in_flight() {
        let mut assistant = StyleAssistant::new(&test_config(500, 500));

        assistant.send("bolsa");
        assistant.send("batom");
        assert!(assistant.is_typing());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(assistant.poll(), 2);
        assert!(!assistant.is_typing());
        assert_eq!(assistant.conversation().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repaint_hook_fires_on_delivery() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let hook: RepaintHook = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let mut assistant = StyleAssistant::new(&test_config(100, 0)).with_repaint(hook);

        assistant.send("oi");
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(assistant.poll(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_starts_fresh_conversation() {
        let mut assistant = StyleAssistant::new(&test_config(1000, 0));
        let first_session = assistant.conversation().session_id();

        assistant.send("maquiagem");
        assistant.reset();

        assert_eq!(assistant.conversation().len(), 1);
        assert_ne!(assistant.conversation().session_id(), first_session);
        assert!(!assistant.is_typing());
    }
}
