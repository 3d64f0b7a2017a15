//! Participant Registry wire types.

use serde::{Deserialize, Serialize};

/// Bootcamp track offered by the registry.
///
/// The write path identifies tracks by numeric id, the read path by display
/// label. The backend never reconciles the two encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bootcamp {
    Frontend,
    Backend,
}

impl Bootcamp {
    /// Numeric identifier used on the write path.
    pub fn id(self) -> u8 {
        match self {
            Bootcamp::Frontend => 1,
            Bootcamp::Backend => 2,
        }
    }

    /// Display label used on the read path.
    pub fn label(self) -> &'static str {
        match self {
            Bootcamp::Frontend => "Frontend",
            Bootcamp::Backend => "Backend",
        }
    }

    /// Parse a user-supplied track name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" => Some(Bootcamp::Frontend),
            "backend" => Some(Bootcamp::Backend),
            _ => None,
        }
    }
}

impl std::fmt::Display for Bootcamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Registration request body (write contract).
#[derive(Debug, Clone, Serialize)]
pub struct NewParticipant {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "discordUser")]
    pub discord_user: String,
    #[serde(rename = "bootcampIds")]
    pub bootcamp_ids: Vec<u8>,
    pub motivation: String,
}

/// Stored registration returned by the listing endpoint (read contract).
#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "discordUser")]
    pub discord_user: String,
    pub motivation: String,
    #[serde(rename = "bootcampChoices", default)]
    pub bootcamp_choices: Vec<String>,
}
