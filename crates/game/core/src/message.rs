//! Player-facing message log.
//!
//! Actions report what happened through a [`MessageSink`]. The core writes to
//! it and never reads it back; rendering and history are the caller's concern.

/// Colour tag attached to every message. The renderer maps tags to colours.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MessageColor {
    #[default]
    White,
    #[strum(serialize = "player_atk")]
    PlayerAttack,
    #[strum(serialize = "enemy_atk")]
    EnemyAttack,
    PlayerDie,
    EnemyDie,
    Descend,
    WelcomeText,
    Invalid,
    Impossible,
    /// Red alerts: breakage and jams.
    Warning,
}

/// Fire-and-forget sink for player-facing messages.
pub trait MessageSink {
    fn add_message(&mut self, text: String, color: MessageColor);
}

/// A single logged line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub text: String,
    pub color: MessageColor,
}

/// In-memory message log, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|message| message.text.as_str())
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.messages.iter().any(|message| message.text == text)
    }
}

impl MessageSink for MessageLog {
    fn add_message(&mut self, text: String, color: MessageColor) {
        self.messages.push(Message { text, color });
    }
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub(crate) fn hit_points(amount: u32) -> String {
    if amount == 1 {
        "1 hit point".to_owned()
    } else {
        format!("{amount} hit points")
    }
}
