// Roster module - the card data shown by the deck
//
// A roster holds two ordered lists of cards: team members and projects.
// It is loaded from a TOML file:
//
//   [[members]]
//   name = "Amitava Datta"
//   role = "Team Leader"
//   email = "..."
//
//   [[projects]]
//   title = "Portfolio Website"
//   description = "..."
//
// Ids are optional in the file; missing ids are derived from the name/title.
// When no roster file exists the bundled sample roster is used instead.

mod card;
mod sample;

pub use card::{CardContent, CardId, CardRecord, MemberProfile, ProjectSummary};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Errors while loading a roster file
#[derive(Debug)]
pub enum RosterError {
    /// File exists but could not be read
    Read { path: PathBuf, message: String },
    /// File is not valid roster TOML
    Parse(String),
    /// Two cards in the same list resolve to the same id
    DuplicateId(CardId),
    /// A card has no usable id (blank name/title and no explicit id)
    MissingId { index: usize },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "Cannot read roster {}: {}", path.display(), message)
            }
            Self::Parse(msg) => write!(f, "Invalid roster file: {}", msg),
            Self::DuplicateId(id) => write!(f, "Duplicate card id '{}'", id),
            Self::MissingId { index } => {
                write!(f, "Card #{} has no id and no name to derive one from", index + 1)
            }
        }
    }
}

impl std::error::Error for RosterError {}

/// Member entry as written in the roster file
#[derive(Debug, Deserialize)]
struct FileMember {
    id: Option<String>,
    #[serde(flatten)]
    profile: MemberProfile,
}

/// Project entry as written in the roster file
#[derive(Debug, Deserialize)]
struct FileProject {
    id: Option<String>,
    #[serde(flatten)]
    summary: ProjectSummary,
}

#[derive(Debug, Deserialize, Default)]
struct FileRoster {
    #[serde(default)]
    members: Vec<FileMember>,
    #[serde(default)]
    projects: Vec<FileProject>,
}

/// Loaded roster, ready to hand to the deck controllers
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    pub members: Vec<CardRecord<MemberProfile>>,
    pub projects: Vec<CardRecord<ProjectSummary>>,
}

impl Roster {
    /// Parse roster TOML
    pub fn from_toml_str(contents: &str) -> Result<Self, RosterError> {
        let file: FileRoster =
            toml::from_str(contents).map_err(|e| RosterError::Parse(e.to_string()))?;

        let members = file
            .members
            .into_iter()
            .map(|m| (m.id, m.profile.name.clone(), m.profile))
            .collect();

        let projects = file
            .projects
            .into_iter()
            .map(|p| (p.id, p.summary.title.clone(), p.summary))
            .collect();

        Ok(Self {
            members: assign_ids(members)?,
            projects: assign_ids(projects)?,
        })
    }

    /// Load a roster file from disk
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = std::fs::read_to_string(path).map_err(|e| RosterError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if given, otherwise the bundled sample. A path that was
    /// asked for but cannot be read is an error, never a silent fallback.
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, RosterError> {
        match path {
            Some(p) => {
                let roster = Self::load(p)?;
                tracing::info!(
                    "Loaded roster {}: {} member(s), {} project(s)",
                    p.display(),
                    roster.members.len(),
                    roster.projects.len()
                );
                Ok(roster)
            }
            None => {
                tracing::info!("No roster file configured, using sample roster");
                Ok(Self::sample())
            }
        }
    }

    /// Re-read the roster while running. A configured file that has gone
    /// missing is an error so the user sees why nothing changed.
    pub fn reload(path: Option<&Path>) -> Result<Self, RosterError> {
        match path {
            Some(p) => {
                let roster = Self::load(p)?;
                tracing::info!(
                    "Reloaded roster {}: {} member(s), {} project(s)",
                    p.display(),
                    roster.members.len(),
                    roster.projects.len()
                );
                Ok(roster)
            }
            None => Ok(Self::sample()),
        }
    }

    /// The bundled sample roster
    pub fn sample() -> Self {
        sample::roster()
    }

    /// Pretty JSON dump for `crewdeck roster --json`
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize roster")
    }
}

/// Resolve ids (explicit or derived from the display name) and reject duplicates
fn assign_ids<P>(entries: Vec<(Option<String>, String, P)>) -> Result<Vec<CardRecord<P>>, RosterError> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());

    for (index, (explicit, name, payload)) in entries.into_iter().enumerate() {
        let id = match explicit {
            Some(id) if !id.trim().is_empty() => CardId::new(id.trim()),
            _ => CardId::slug(&name),
        };
        if id.as_str().is_empty() {
            return Err(RosterError::MissingId { index });
        }
        if !seen.insert(id.clone()) {
            return Err(RosterError::DuplicateId(id));
        }
        records.push(CardRecord::new(id, payload));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_members_and_projects() {
        let roster = Roster::from_toml_str(
            r##"
            [[members]]
            name = "Amitava Datta"
            role = "Team Leader"
            email = "amitava@example.com"

            [[members]]
            id = "pd"
            name = "Pranay De"
            role = "Team Member"

            [[projects]]
            title = "Portfolio Website"
            description = "A modern portfolio."
            link = "#"
            "##,
        )
        .unwrap();

        let ids: Vec<_> = roster.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["amitava-datta", "pd"]);
        assert_eq!(roster.members[0].payload.role, "Team Leader");
        assert_eq!(roster.projects[0].id.as_str(), "portfolio-website");
    }

    #[test]
    fn empty_file_is_empty_roster() {
        let roster = Roster::from_toml_str("").unwrap();
        assert!(roster.members.is_empty());
        assert!(roster.projects.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[members]]
            name = "Same Name"
            [[members]]
            name = "same  name"
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, RosterError::DuplicateId(ref id) if id.as_str() == "same-name"));
    }

    #[test]
    fn blank_name_without_id_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[projects]]
            title = "!!!"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::MissingId { index: 0 }));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Roster::from_toml_str("[[members]]\nname = ").unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn sample_roster_has_unique_ids() {
        let roster = Roster::sample();
        assert_eq!(roster.members.len(), 6);
        assert_eq!(roster.projects.len(), 2);

        let unique: HashSet<_> = roster.members.iter().map(|m| &m.id).collect();
        assert_eq!(unique.len(), roster.members.len());
    }

    #[test]
    fn reload_of_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("crewdeck-test-no-such-roster.toml");
        assert!(matches!(
            Roster::reload(Some(&path)),
            Err(RosterError::Read { .. })
        ));
        assert_eq!(Roster::reload(None).unwrap().members.len(), 6);
    }

    #[test]
    fn load_or_sample_of_missing_explicit_path_is_an_error() {
        let path = std::env::temp_dir().join("crewdeck-test-missing-startup-roster.toml");
        assert!(matches!(
            Roster::load_or_sample(Some(&path)),
            Err(RosterError::Read { .. })
        ));
        assert_eq!(Roster::load_or_sample(None).unwrap().projects.len(), 2);
    }

    #[test]
    fn optional_fields_default_when_omitted() {
        let roster = Roster::from_toml_str(
            r#"
            [[members]]
            id = "guest"
            name = "Guest Speaker"
            github = "guest-speaker"

            [[projects]]
            title = "Hackathon"
            "#,
        )
        .unwrap();

        let guest = &roster.members[0];
        assert_eq!(guest.id.as_str(), "guest");
        assert_eq!(guest.payload.name, "Guest Speaker");
        assert_eq!(guest.payload.role, "");
        assert_eq!(guest.payload.github, "guest-speaker");
        assert_eq!(roster.projects[0].payload.description, "");
    }

    #[test]
    fn json_dump_is_valid_json_with_ids() {
        let json = Roster::sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["members"].as_array().map(Vec::len), Some(6));
        assert!(json.contains("\"amitava-datta\""));
        assert!(json.contains("\"portfolio-website\""));
    }
}
