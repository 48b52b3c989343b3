use cucumber::World;
use issue_digest::notify::Notifier;
use std::collections::HashMap;
use std::sync::Mutex;
use wiremock::MockServer;

/// Notifier double that keeps every message it is handed.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn send(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct Api(pub MockServer);

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Api").field(&self.0.uri()).finish()
    }
}

#[derive(Debug, Default, World)]
pub struct DigestWorld {
    pub api: Option<Api>,
    pub env: HashMap<String, String>,
    pub captured_output: Vec<u8>,
    pub run_result: Option<Result<(), anyhow::Error>>,
    pub notifier: RecordingNotifier,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    DigestWorld::run("features").await;
}

mod steps;
