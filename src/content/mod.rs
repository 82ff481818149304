//! Page content
//!
//! Everything the page shows besides navigation. Built-in content is used
//! unless a TOML content file is configured; missing keys in that file fall
//! back to the built-in values field by field.

mod animation;
mod counter;

pub use animation::{CountUp, Typewriter};
pub use counter::{random_below, SessionStorage, ViewCounter};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Owner {
    /// Full name, typed out in the hero
    pub name: String,
    /// Short form used in the footer
    pub short_name: String,
    pub tagline: String,
    pub tags: Vec<String>,
    pub resume_url: Option<String>,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            name: "Bassa Naga Jala Suryanarayana".to_string(),
            short_name: "B N J S Narayana".to_string(),
            tagline: "A passionate software developer and tech enthusiast. I enjoy building \
                      high-performance, scalable web applications and exploring cutting-edge \
                      technologies."
                .to_string(),
            tags: [
                "Building Web Applications",
                "Tech Enthusiast",
                "Open Source Projects",
                "Salesforce Developer",
                "Investing Time in Tech",
                "Web3 Enthusiast",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
            resume_url: Some(
                "https://drive.google.com/file/d/1zPn_LlaukI98ax1kQ3Cta30f6xjawNXu/view".to_string(),
            ),
        }
    }
}

/// Animated hero statistic
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    /// Count-up duration
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub blurb: String,
    pub email: String,
    pub links: Vec<Link>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            blurb: "Open to collaborations, freelance work and a good tech conversation.".to_string(),
            email: "hello@example.com".to_string(),
            links: vec![
                Link {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                Link {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/example".to_string(),
                },
            ],
        }
    }
}

/// Complete page content
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub owner: Owner,
    pub stats: Vec<Stat>,
    pub expertise: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Role>,
    pub certifications: Vec<Certification>,
    pub contact: Contact,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            owner: Owner::default(),
            stats: vec![
                Stat {
                    label: "Years Experience".to_string(),
                    value: 3,
                    duration_ms: 1200,
                },
                Stat {
                    label: "Projects Completed".to_string(),
                    value: 20,
                    duration_ms: 1400,
                },
            ],
            expertise: vec![
                skill("Web Development", "React, Next.js and Tailwind front ends backed by Node services"),
                skill("Salesforce", "Apex, Lightning Web Components and platform automation"),
                skill("Web3", "Smart contracts and wallet-connected dapps"),
                skill("Tooling", "Git, CI pipelines, Linux and the occasional Rust CLI"),
            ],
            projects: vec![
                Project {
                    title: "Portfolio".to_string(),
                    description: "This site: scroll-aware navigation, scroll-spy highlighting and animated stats".to_string(),
                    tech: vec!["Next.js".to_string(), "Tailwind".to_string()],
                    link: None,
                },
                Project {
                    title: "Expense Splitter".to_string(),
                    description: "Group expense tracking with settle-up suggestions".to_string(),
                    tech: vec!["React".to_string(), "Firebase".to_string()],
                    link: None,
                },
                Project {
                    title: "NFT Gallery".to_string(),
                    description: "Wallet-connected gallery for browsing on-chain collections".to_string(),
                    tech: vec!["Solidity".to_string(), "ethers.js".to_string()],
                    link: None,
                },
            ],
            experience: vec![Role {
                title: "Salesforce Developer".to_string(),
                organization: "Consulting".to_string(),
                period: "2022 - present".to_string(),
                summary: "Custom Lightning components, integrations and data migrations".to_string(),
            }],
            certifications: vec![
                Certification {
                    name: "Platform Developer I".to_string(),
                    issuer: "Salesforce".to_string(),
                    year: Some(2023),
                },
                Certification {
                    name: "Responsive Web Design".to_string(),
                    issuer: "freeCodeCamp".to_string(),
                    year: None,
                },
            ],
            contact: Contact::default(),
        }
    }
}

fn skill(title: &str, detail: &str) -> Skill {
    Skill {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

impl Portfolio {
    /// Parse content from TOML; absent tables keep built-in values
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse content file")
    }

    /// Load from `path`, or the built-in content when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read content file {}", path.display()))?;
        let portfolio = Self::from_toml(&contents)
            .with_context(|| format!("in {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded page content");
        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_content_has_every_section() {
        let p = Portfolio::default();
        assert!(!p.owner.name.is_empty());
        assert_eq!(p.stats.len(), 2);
        assert_eq!(p.stats[0].value, 3);
        assert_eq!(p.stats[1].duration_ms, 1400);
        assert!(!p.projects.is_empty());
        assert!(!p.experience.is_empty());
        assert!(!p.certifications.is_empty());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let p = Portfolio::from_toml(
            r#"
[owner]
name = "Ada Lovelace"

[[projects]]
title = "Analytical Engine notes"
description = "Note G"
"#,
        )
        .unwrap();
        assert_eq!(p.owner.name, "Ada Lovelace");
        // Unset owner fields fall back
        assert_eq!(p.owner.short_name, Owner::default().short_name);
        assert_eq!(p.projects.len(), 1);
        assert!(p.projects[0].tech.is_empty());
        assert_eq!(p.stats, Portfolio::default().stats);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Portfolio::from_toml("[[projects]]\ntitle = 3").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Portfolio::load(Some(Path::new("/nonexistent/folio.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/folio.toml"));
    }
}
