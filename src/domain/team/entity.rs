//! Team profile entity

use serde::{Deserialize, Serialize};

/// A team member and the file holding their portrait
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    /// Image file name, relative to the configured images directory
    pub image: String,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
        }
    }
}

/// Base64-encoded portrait of a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberImage {
    pub name: String,
    pub data: String,
}

/// Static description of the team behind the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamProfile {
    #[serde(default = "default_team_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_members")]
    pub members: Vec<TeamMember>,
}

fn default_team_name() -> String {
    "MONA".to_string()
}

fn default_description() -> String {
    "We are top tier team with coding experience of 1 million years in the bag 🚀".to_string()
}

fn default_members() -> Vec<TeamMember> {
    vec![
        TeamMember::new("Andriani", "andriani.png"),
        TeamMember::new("Danit", "danit.jpg"),
        TeamMember::new("Jan", "jan.jpg"),
        TeamMember::new("Hana", "hana.jpg"),
    ]
}

impl Default for TeamProfile {
    fn default() -> Self {
        Self {
            name: default_team_name(),
            description: default_description(),
            members: default_members(),
        }
    }
}

impl TeamProfile {
    /// Member names in roster order
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}
