use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::ai::TextGenerator;
use crate::trip::TripRequest;

/// A [`TextGenerator`] that replays canned replies in order and records every
/// prompt it receives. Once the script runs out every call fails.
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<&'static str, &'static str>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<&'static str, &'static str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match reply {
            Some(Ok(text)) => Ok(text.to_string()),
            Some(Err(msg)) => Err(anyhow!(msg)),
            None => Err(anyhow!("script exhausted")),
        }
    }
}

/// A valid three-day Paris trip for one adult with a 1500 EUR budget.
pub fn sample_trip() -> TripRequest {
    TripRequest {
        city: "Paris".to_string(),
        budget: 1500.0,
        currency: "EUR".to_string(),
        days: 3,
        adults: 1,
        children: 0,
        travel_date: None,
        notes: None,
    }
}
