//! Chat Session
//!
//! Conversation log for one chat window: user messages, bot replies with a
//! simulated typing delay, and quick-reply buttons.

use crate::error::{ChatError, ChatResult};
use crate::intents::Intent;
use crate::processor::ChatProcessor;
use crate::responses;
use chrono::{DateTime, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// A canned message offered as a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickReply {
    pub text: &'static str,
    pub intent: Intent,
}

pub const QUICK_REPLIES: &[QuickReply] = &[
    QuickReply {
        text: "Services",
        intent: Intent::Services,
    },
    QuickReply {
        text: "Experience",
        intent: Intent::Experience,
    },
    QuickReply {
        text: "Pricing",
        intent: Intent::Pricing,
    },
    QuickReply {
        text: "Get Started",
        intent: Intent::Started,
    },
];

/// One entry of the conversation log, never modified once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: u64,
    pub text: String,
    pub is_from_bot: bool,
    pub sent_at: DateTime<Local>,
}

pub struct ChatSession {
    processor: Arc<ChatProcessor>,
    messages: Vec<ConversationMessage>,
    next_id: u64,
    typing_delay: (Duration, Duration),
}

impl ChatSession {
    /// Start a session; the log opens with the bot's greeting
    pub fn new(processor: Arc<ChatProcessor>, typing_delay: (Duration, Duration)) -> Self {
        let mut session = Self {
            processor,
            messages: Vec::new(),
            next_id: 1,
            typing_delay,
        };
        session.push(responses::respond(Intent::Greeting).to_string(), true);
        session
    }

    /// Session that replies without a typing pause
    pub fn instant(processor: Arc<ChatProcessor>) -> Self {
        Self::new(processor, (Duration::ZERO, Duration::ZERO))
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Send a user message and wait for the bot reply.
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, text: &str) -> Option<&ConversationMessage> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank message");
            return None;
        }

        self.push(text.to_string(), false);

        let delay = self.pick_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let reply = self.processor.process(text);
        info!("💬 '{}' -> {}", text, reply.intent);
        self.push(reply.text.to_string(), true);
        self.messages.last()
    }

    /// Send the quick reply at `index`
    pub async fn send_quick_reply(&mut self, index: usize) -> Option<&ConversationMessage> {
        let quick = QUICK_REPLIES.get(index)?;
        self.send(quick.text).await
    }

    /// Write the conversation log as pretty JSON
    pub fn save_transcript(&self, path: &Path) -> ChatResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.messages)?;
        std::fs::write(path, content).map_err(|e| {
            ChatError::Transcript(format!("failed to write {}: {}", path.display(), e))
        })?;
        info!("Saved {} messages to {}", self.messages.len(), path.display());
        Ok(())
    }

    fn push(&mut self, text: String, is_from_bot: bool) {
        self.messages.push(ConversationMessage {
            id: self.next_id,
            text,
            is_from_bot,
            sent_at: Local::now(),
        });
        self.next_id += 1;
    }

    fn pick_delay(&self) -> Duration {
        let (min, max) = self.typing_delay;
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}
