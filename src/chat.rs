use crate::ai::ChatResult;
use crate::types::ChatMessage;

pub const GREETING: &str =
    "Hi! I'm Chronos. How can I help you manage your time or plan your day?";
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process that.";
pub const ERROR_REPLY: &str = "An error occurred. Please try again later.";

/// A request ready to go to the model: the new message plus everything said
/// before it.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingTurn {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

/// Append-only transcript of one chat session.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
            loading: false,
        }
    }
}

impl ChatSession {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Records the user message and enters the loading state. Returns `None`
    /// for blank input or while a reply is still outstanding.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingTurn> {
        if !self.can_send(input) {
            return None;
        }
        let message = input.trim().to_string();
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(message.clone()));
        self.loading = true;
        Some(PendingTurn { message, history })
    }

    /// Appends exactly one model message for the outstanding turn.
    pub fn complete(&mut self, reply: ChatResult<String>) {
        let content = match reply {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, "chat turn failed");
                ERROR_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::model(content));
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::ChatError;
    use crate::types::Role;

    #[test]
    fn opens_with_greeting() {
        let session = ChatSession::default();
        assert_eq!(session.messages(), &[ChatMessage::model(GREETING)]);
        assert!(!session.is_loading());
    }

    #[test]
    fn begin_send_snapshots_prior_history() {
        let mut session = ChatSession::default();
        let turn = session.begin_send("  what time is it?  ").unwrap();
        assert_eq!(turn.message, "what time is it?");
        assert_eq!(turn.history, vec![ChatMessage::model(GREETING)]);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, Role::User);
        assert!(session.is_loading());
    }

    #[test]
    fn refuses_blank_input_and_concurrent_sends() {
        let mut session = ChatSession::default();
        assert!(session.begin_send("   ").is_none());
        session.begin_send("one").unwrap();
        assert!(session.begin_send("two").is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn failure_appends_apology_and_clears_loading() {
        let mut session = ChatSession::default();
        session.begin_send("hello").unwrap();
        session.complete(Err(ChatError::new("boom")));
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2], ChatMessage::model(ERROR_REPLY));
        assert!(!session.is_loading());
    }

    #[test]
    fn empty_reply_gets_placeholder() {
        let mut session = ChatSession::default();
        session.begin_send("hello").unwrap();
        session.complete(Ok("  ".into()));
        assert_eq!(session.messages()[2].content, EMPTY_REPLY);
    }
}
