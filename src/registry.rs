//! Platform targets and the template registry.
//!
//! The registry is an explicit read-only map built once at startup and handed
//! to the generator, not a module-level global. Lookup is total: every
//! (platform, stack) pair resolves to either a stack-specific template or the
//! platform's generic one.

use std::collections::HashMap;
use std::str::FromStr;

use crate::classifier::StackLabel;
use crate::error::Error;
use crate::templates;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    GithubActions,
    GitlabCi,
    Jenkins,
    AzureDevops,
    CircleCi,
}

impl PlatformTarget {
    pub const ALL: [PlatformTarget; 5] = [
        PlatformTarget::GithubActions,
        PlatformTarget::GitlabCi,
        PlatformTarget::Jenkins,
        PlatformTarget::AzureDevops,
        PlatformTarget::CircleCi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformTarget::GithubActions => "github-actions",
            PlatformTarget::GitlabCi => "gitlab-ci",
            PlatformTarget::Jenkins => "jenkins",
            PlatformTarget::AzureDevops => "azure-devops",
            PlatformTarget::CircleCi => "circleci",
        }
    }

    fn expected_list() -> String {
        PlatformTarget::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for PlatformTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "github-actions" | "github" => Ok(PlatformTarget::GithubActions),
            "gitlab-ci" | "gitlab" => Ok(PlatformTarget::GitlabCi),
            "jenkins" => Ok(PlatformTarget::Jenkins),
            "azure-devops" | "azure" => Ok(PlatformTarget::AzureDevops),
            "circleci" => Ok(PlatformTarget::CircleCi),
            other => Err(Error::UnsupportedPlatform {
                name: other.to_string(),
                expected: PlatformTarget::expected_list(),
            }),
        }
    }
}

/// Static pipeline text with placeholders, plus where it belongs inside the
/// target project.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub body: &'static str,
    pub deploy_block: &'static str,
    pub output_path: &'static str,
}

pub struct TemplateRegistry {
    specific: HashMap<(PlatformTarget, StackLabel), Template>,
    generic: HashMap<PlatformTarget, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let mut specific = HashMap::new();
        let mut generic = HashMap::new();

        for platform in PlatformTarget::ALL {
            let (standard, fallback) = platform_templates(platform);
            generic.insert(platform, fallback);
            // The standard template is parameterized by the stack's toolchain,
            // so every recognized stack registers it; only `generic` falls
            // through to the platform fallback.
            for label in StackLabel::ALL {
                if label != StackLabel::Generic {
                    specific.insert((platform, label), standard);
                }
            }
        }

        Self { specific, generic }
    }

    /// Resolve a template for the pair. Never fails: unregistered pairs get
    /// the platform's generic template.
    pub fn lookup(&self, platform: PlatformTarget, label: StackLabel) -> Template {
        self.specific
            .get(&(platform, label))
            .copied()
            .unwrap_or_else(|| self.generic[&platform])
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_templates(platform: PlatformTarget) -> (Template, Template) {
    match platform {
        PlatformTarget::GithubActions => (
            Template {
                body: templates::GITHUB_STANDARD,
                deploy_block: templates::GITHUB_DEPLOY_JOB,
                output_path: templates::GITHUB_OUTPUT_PATH,
            },
            Template {
                body: templates::GITHUB_GENERIC,
                deploy_block: templates::GITHUB_DEPLOY_JOB,
                output_path: templates::GITHUB_OUTPUT_PATH,
            },
        ),
        PlatformTarget::GitlabCi => (
            Template {
                body: templates::GITLAB_STANDARD,
                deploy_block: templates::GITLAB_DEPLOY_JOB,
                output_path: templates::GITLAB_OUTPUT_PATH,
            },
            Template {
                body: templates::GITLAB_GENERIC,
                deploy_block: templates::GITLAB_DEPLOY_JOB,
                output_path: templates::GITLAB_OUTPUT_PATH,
            },
        ),
        PlatformTarget::Jenkins => (
            Template {
                body: templates::JENKINS_STANDARD,
                deploy_block: templates::JENKINS_DEPLOY_JOB,
                output_path: templates::JENKINS_OUTPUT_PATH,
            },
            Template {
                body: templates::JENKINS_GENERIC,
                deploy_block: templates::JENKINS_DEPLOY_JOB,
                output_path: templates::JENKINS_OUTPUT_PATH,
            },
        ),
        PlatformTarget::AzureDevops => (
            Template {
                body: templates::AZURE_STANDARD,
                deploy_block: templates::AZURE_DEPLOY_JOB,
                output_path: templates::AZURE_OUTPUT_PATH,
            },
            Template {
                body: templates::AZURE_GENERIC,
                deploy_block: templates::AZURE_DEPLOY_JOB,
                output_path: templates::AZURE_OUTPUT_PATH,
            },
        ),
        PlatformTarget::CircleCi => (
            Template {
                body: templates::CIRCLECI_STANDARD,
                deploy_block: templates::CIRCLECI_DEPLOY_JOB,
                output_path: templates::CIRCLECI_OUTPUT_PATH,
            },
            Template {
                body: templates::CIRCLECI_GENERIC,
                deploy_block: templates::CIRCLECI_DEPLOY_JOB,
                output_path: templates::CIRCLECI_OUTPUT_PATH,
            },
        ),
    }
}
