//! Integration tests for the Chronos AI boundary and chat session
//!
//! Mock sources stand in for the network so failures can be forced.

use async_trait::async_trait;
use chronos::ai::{
    BriefService, BriefSource, ChatBackend, ChatError, ChatResult, fallback_snapshot,
};
use chronos::chat::{ChatSession, ERROR_REPLY, GREETING};
use chronos::geo::Coordinates;
use chronos::types::{ChatMessage, Role};
use std::sync::Mutex;

struct FixedBrief(&'static str);

#[async_trait]
impl BriefSource for FixedBrief {
    async fn generate_brief(&self, _coords: Coordinates) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingBrief;

#[async_trait]
impl BriefSource for FailingBrief {
    async fn generate_brief(&self, _coords: Coordinates) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("connection refused"))
    }
}

/// Records what each turn was sent and answers from a script.
struct ScriptedChat {
    replies: Mutex<Vec<ChatResult<String>>>,
    seen: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl ScriptedChat {
    fn new(replies: Vec<ChatResult<String>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatBackend for ScriptedChat {
    async fn reply(&self, message: &str, history: &[ChatMessage]) -> ChatResult<String> {
        self.seen
            .lock()
            .unwrap()
            .push((message.to_string(), history.to_vec()));
        self.replies.lock().unwrap().remove(0)
    }
}

/// One turn the way the chat panel drives it: record, ask, complete.
async fn run_turn(session: &mut ChatSession, backend: &dyn ChatBackend, input: &str) -> bool {
    let Some(turn) = session.begin_send(input) else {
        return false;
    };
    let reply = backend.reply(&turn.message, &turn.history).await;
    session.complete(reply);
    true
}

mod brief_tests {
    use super::*;

    const VALID: &str = r#"{"weather":{"location":"Kyoto","temp":8,"condition":"Light rain",
        "humidity":81,"wind":"6 km/h","icon":"🌧️"},
        "brief":{"greeting":"Good evening!","fact":"Kyoto has over 1,600 temples.",
        "advice":"Bring an umbrella."}}"#;

    #[tokio::test]
    async fn valid_reply_is_used() {
        let service = BriefService::new(FixedBrief(VALID));
        let snapshot = service.fetch_weather_and_brief(35.01, 135.77).await;
        assert_eq!(snapshot.weather.location, "Kyoto");
        assert_eq!(snapshot.weather.temp, 8.0);
        assert_eq!(snapshot.brief.advice, "Bring an umbrella.");
    }

    #[tokio::test]
    async fn request_failure_yields_fallback() {
        let service = BriefService::new(FailingBrief);
        let snapshot = service.fetch_weather_and_brief(35.01, 135.77).await;
        assert_eq!(snapshot, fallback_snapshot());
    }

    #[tokio::test]
    async fn invalid_json_yields_fallback() {
        for reply in ["", "not json at all", "{\"weather\": {}}", "{\"brief\": 3}"] {
            let service = BriefService::new(FixedBrief(reply));
            let snapshot = service.fetch_weather_and_brief(0.0, 0.0).await;
            assert_eq!(snapshot, fallback_snapshot(), "reply: {reply:?}");
        }
    }

    #[tokio::test]
    async fn fallback_payload_is_the_documented_one() {
        let snapshot = BriefService::new(FailingBrief)
            .fetch_weather_and_brief(1.0, 1.0)
            .await;
        let weather = snapshot.weather;
        assert_eq!(weather.location, "Unknown");
        assert_eq!(weather.temp, 22.0);
        assert_eq!(weather.condition, "Clear");
        assert_eq!(weather.humidity, 45);
        assert_eq!(weather.wind, "10km/h");
        assert_eq!(weather.icon, "☀️");
        assert_eq!(snapshot.brief.greeting, "Hello!");
        assert_eq!(
            snapshot.brief.fact,
            "A day on Venus is longer than a year on Venus."
        );
        assert_eq!(
            snapshot.brief.advice,
            "Take a moment to breathe deeply today."
        );
    }
}

mod chat_tests {
    use super::*;

    #[tokio::test]
    async fn turn_sends_prior_history_and_appends_reply() {
        let backend = ScriptedChat::new(vec![Ok("It is 09:00.".to_string())]);
        let mut session = ChatSession::default();

        assert!(run_turn(&mut session, &backend, "What time is it?").await);

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "What time is it?");
        assert_eq!(seen[0].1, vec![ChatMessage::model(GREETING)]);

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Model, Role::User, Role::Model]);
        assert_eq!(session.messages()[2].content, "It is 09:00.");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn failing_backend_appends_one_apology() {
        let backend = ScriptedChat::new(vec![Err(ChatError::new("503"))]);
        let mut session = ChatSession::default();
        let before = session.messages().len();

        run_turn(&mut session, &backend, "hello").await;

        assert_eq!(session.messages().len(), before + 2);
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.content, ERROR_REPLY);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn history_grows_append_only() {
        let backend = ScriptedChat::new(vec![Ok("one".into()), Ok("two".into())]);
        let mut session = ChatSession::default();
        run_turn(&mut session, &backend, "first").await;
        let after_first = session.messages().to_vec();
        run_turn(&mut session, &backend, "second").await;

        assert_eq!(&session.messages()[..after_first.len()], after_first.as_slice());
        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen[1].1, after_first);
    }

    #[tokio::test]
    async fn blank_input_never_reaches_backend() {
        let backend = ScriptedChat::new(Vec::new());
        let mut session = ChatSession::default();
        assert!(!run_turn(&mut session, &backend, "   ").await);
        assert!(backend.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn stale_reply_still_lands_after_panel_closes() {
        let mut session = ChatSession::default();
        let turn = session.begin_send("plan my day").unwrap();
        // The panel closing does not touch the session; the reply arrives later.
        session.complete(Ok(format!("Plan for: {}", turn.message)));
        assert_eq!(
            session.messages().last().unwrap().content,
            "Plan for: plan my day"
        );
    }
}
