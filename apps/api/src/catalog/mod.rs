//! Skill Catalog — the static role and resource tables behind the analyzer.
//!
//! Both tables ship as JSON assets embedded in the binary and can be
//! overridden with `ROLES_PATH` / `RESOURCES_PATH`. They are loaded once at
//! startup, validated, and then immutable behind an `Arc` in `AppState`.

use std::collections::{HashMap, HashSet};
use std::fs;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_ROLES: &str = include_str!("../../assets/roles.json");
const DEFAULT_RESOURCES: &str = include_str!("../../assets/resources.json");

/// Returned whenever a skill has no catalog entry. Resource resolution is
/// total: a lookup miss is never an error.
pub const FALLBACK_RESOURCE: &str = "search for tutorials online";

/// A target role with its required and optional skill tokens.
/// Token order is significant: it drives roadmap week numbering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub core: Vec<String>,
    pub secondary: Vec<String>,
}

/// Immutable role table + skill-to-resource table.
#[derive(Debug)]
pub struct SkillCatalog {
    roles: Vec<RoleProfile>,
    resources: HashMap<String, String>,
}

impl SkillCatalog {
    /// Loads the catalog from the given file paths, falling back to the
    /// embedded assets when a path is not configured.
    pub fn load(roles_path: Option<&str>, resources_path: Option<&str>) -> Result<Self> {
        let roles_json = match roles_path {
            Some(path) => {
                fs::read_to_string(path).with_context(|| format!("reading role table {path}"))?
            }
            None => DEFAULT_ROLES.to_string(),
        };
        let resources_json = match resources_path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("reading resource table {path}"))?,
            None => DEFAULT_RESOURCES.to_string(),
        };
        Self::from_json(&roles_json, &resources_json)
    }

    /// Parses and validates both tables. Skill tokens and resource keys are
    /// normalized to lowercase here so matching and lookup never have to
    /// case-fold again.
    pub fn from_json(roles_json: &str, resources_json: &str) -> Result<Self> {
        let mut roles: Vec<RoleProfile> =
            serde_json::from_str(roles_json).context("parsing role table")?;
        let raw_resources: HashMap<String, String> =
            serde_json::from_str(resources_json).context("parsing resource table")?;

        if roles.is_empty() {
            bail!("role table is empty");
        }

        let mut seen = HashSet::new();
        for role in &mut roles {
            role.name = role.name.trim().to_string();
            if role.name.is_empty() {
                bail!("role table contains a role with an empty name");
            }
            if !seen.insert(role.name.to_lowercase()) {
                bail!("duplicate role '{}' in role table", role.name);
            }
            normalize_tokens(&mut role.core);
            normalize_tokens(&mut role.secondary);
            // An empty core list would make the readiness score a division
            // by zero, so it is rejected at load time.
            if role.core.is_empty() {
                bail!("role '{}' has no core skills", role.name);
            }
        }

        let resources = raw_resources
            .into_iter()
            .map(|(skill, url)| (skill.trim().to_lowercase(), url))
            .collect();

        Ok(Self { roles, resources })
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    /// Case-insensitive role lookup by name.
    pub fn role(&self, name: &str) -> Option<&RoleProfile> {
        let wanted = name.trim().to_lowercase();
        self.roles.iter().find(|r| r.name.to_lowercase() == wanted)
    }

    /// Resolves a skill token to a learning resource. Total: unknown skills
    /// resolve to [`FALLBACK_RESOURCE`].
    pub fn resolve(&self, skill: &str) -> &str {
        self.resources
            .get(&skill.trim().to_lowercase())
            .map(String::as_str)
            .unwrap_or(FALLBACK_RESOURCE)
    }
}

fn normalize_tokens(tokens: &mut Vec<String>) {
    for token in tokens.iter_mut() {
        *token = token.trim().to_lowercase();
    }
    tokens.retain(|t| !t.is_empty());
}
