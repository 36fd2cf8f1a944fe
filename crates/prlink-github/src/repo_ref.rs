use std::fmt;

use anyhow::{anyhow, bail, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Repository coordinates parsed from an `owner/name` slug.
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (owner, name) = trimmed
            .split_once('/')
            .ok_or_else(|| anyhow!("invalid repository '{raw}', expected owner/repo"))?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            bail!("invalid repository '{raw}', expected owner/repo");
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::RepoRef;

    #[test]
    fn unit_repo_ref_parses_owner_and_name() {
        let repo = RepoRef::parse(" owner/repo ").expect("repo");
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.name, "repo");
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn regression_repo_ref_rejects_malformed_slugs() {
        for raw in ["", "owner", "/repo", "owner/", "owner/repo/extra"] {
            let error = RepoRef::parse(raw).expect_err("malformed slug should fail");
            assert!(error.to_string().contains("expected owner/repo"), "{raw}");
        }
    }
}
