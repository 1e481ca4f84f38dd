//! Pipeline generation: fill a template and write it to the platform's
//! conventional path inside the project.
//!
//! Rendering is pure textual substitution and is deterministic: identical
//! inputs produce byte-identical output. The write overwrites any existing
//! pipeline file at the target path without merging; that overwrite is
//! expected behavior, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classifier::StackLabel;
use crate::error::Error;
use crate::registry::{PlatformTarget, TemplateRegistry};

/// Project-specific values substituted into templates.
#[derive(Debug, Clone)]
pub struct ProjectMeta {
    pub name: String,
    pub deploy: bool,
}

impl ProjectMeta {
    /// Derive the project name from the directory basename.
    pub fn from_path(path: &Path, deploy: bool) -> Self {
        let name = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("project")
            .to_string();
        Self { name, deploy }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPipeline {
    pub content: String,
    /// Path relative to the output directory, e.g. `.github/workflows/ci.yml`.
    pub relative_path: &'static str,
}

pub struct PipelineGenerator {
    registry: TemplateRegistry,
}

impl PipelineGenerator {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Fill the template for (platform, label) with project values.
    pub fn render(
        &self,
        platform: PlatformTarget,
        label: StackLabel,
        meta: &ProjectMeta,
    ) -> RenderedPipeline {
        let template = self.registry.lookup(platform, label);
        let toolchain = label.toolchain();

        // The {{deploy_job}} line either becomes the deploy block or goes
        // away entirely, so the substitution order matters: the block's own
        // placeholders are filled by the passes below.
        let mut content = if meta.deploy {
            template
                .body
                .replace("\n{{deploy_job}}", template.deploy_block)
        } else {
            template.body.replace("\n{{deploy_job}}", "")
        };

        for (token, value) in [
            ("{{project_name}}", meta.name.as_str()),
            ("{{stack}}", label.as_str()),
            ("{{setup}}", toolchain.setup),
            ("{{install}}", toolchain.install),
            ("{{build}}", toolchain.build),
            ("{{test}}", toolchain.test),
            ("{{image}}", toolchain.image),
        ] {
            content = content.replace(token, value);
        }

        debug!(
            "Rendered {} template for {} ({} bytes)",
            platform.as_str(),
            label.as_str(),
            content.len()
        );
        RenderedPipeline {
            content,
            relative_path: template.output_path,
        }
    }

    /// Render and write the pipeline file, creating parent directories.
    /// Overwrites an existing file at the target path.
    pub fn generate(
        &self,
        platform: PlatformTarget,
        label: StackLabel,
        meta: &ProjectMeta,
        output_dir: &Path,
    ) -> Result<PathBuf, Error> {
        let rendered = self.render(platform, label, meta);
        let output_path = output_dir.join(rendered.relative_path);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: output_path.clone(),
                source,
            })?;
        }
        fs::write(&output_path, &rendered.content).map_err(|source| Error::Write {
            path: output_path.clone(),
            source,
        })?;

        info!("Wrote {} pipeline to {}", platform.as_str(), output_path.display());
        Ok(output_path)
    }
}
