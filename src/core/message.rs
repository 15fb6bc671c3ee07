use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Кто написал сообщение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat bubble. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub suggestions: Option<Vec<String>>,
}

impl Message {
    /// Сообщение пользователя, без подсказок
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), Sender::User, None)
    }

    pub fn assistant(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::new(content.into(), Sender::Assistant, Some(suggestions))
    }

    fn new(content: String, sender: Sender, suggestions: Option<Vec<String>>) -> Self {
        let timestamp = Local::now();
        Self {
            // Millisecond clock id; two messages in the same millisecond collide.
            id: timestamp.timestamp_millis().to_string(),
            content,
            sender,
            timestamp,
            suggestions,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }
}

/// Append-only chat log for one assistant session.
#[derive(Debug, Clone)]
pub struct Conversation {
    session_id: Uuid,
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts a conversation with the assistant greeting already in place.
    pub fn new(assistant_name: &str) -> Self {
        let session_id = Uuid::new_v4();
        log::debug!("📍 Conversation session {}", session_id);
        Self {
            session_id,
            messages: vec![greeting(assistant_name)],
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

fn greeting(assistant_name: &str) -> Message {
    let mut message = Message::assistant(
        format!(
            "Olá! Eu sou a {}, sua assistente de estilo pessoal com IA! 💫 Analisei seu perfil e estou aqui para te ajudar a descobrir seu potencial de estilo. Com base na sua análise facial e preferências, vou te dar dicas personalizadas que vão realçar sua beleza natural. O que você gostaria de explorar primeiro?",
            assistant_name
        ),
        vec![
            "Que cores realçam minha beleza?".to_string(),
            "Como criar looks para diferentes ocasiões?".to_string(),
            "Que acessórios combinam com meu estilo?".to_string(),
            "Dicas de maquiagem personalizadas".to_string(),
        ],
    );
    message.id = "1".to_string();
    message
}
