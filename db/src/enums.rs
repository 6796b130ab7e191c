use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// Outcome of a match. Absence is never represented; a newly created match
/// defaults to `WillBePlayed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::MatchResult"]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    #[db_rename = "will be played"]
    #[serde(rename = "will be played")]
    WillBePlayed,
    Win,
    Loss,
    Draw,
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::WillBePlayed
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let desc = match self {
            Self::WillBePlayed => "will be played",
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
        };

        f.write_str(desc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::PlayerType"]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    Batsman,
    Bowler,
    Allrounder,
    Wicketkeeper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::TeamRole"]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Player,
    Captain,
    #[db_rename = "vice-captain"]
    #[serde(rename = "vice-captain")]
    ViceCaptain,
}

impl Default for TeamRole {
    fn default() -> Self {
        Self::Player
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DbEnum, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::ApplicationStatus"]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl Default for ApplicationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let desc = match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        };

        f.write_str(desc)
    }
}
