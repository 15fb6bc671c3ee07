pub mod agent;
pub mod message;

pub use agent::{PendingReply, RepaintHook, StyleAssistant, ThinkingDelay};
pub use message::{Conversation, Message, Sender};
