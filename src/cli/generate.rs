use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;
use tracing::info;

use crate::classifier;
use crate::generator::{PipelineGenerator, ProjectMeta};
use crate::registry::{PlatformTarget, TemplateRegistry};
use crate::scanner;

pub fn run(path: &str, platform: &str, deploy: bool, output: Option<String>) -> Result<()> {
    // Both failure modes are checked before anything is written.
    let platform = PlatformTarget::from_str(platform)?;
    let project_path = Path::new(&path);
    let evidence = scanner::scan(project_path)?;

    let classification = classifier::classify(&evidence);
    info!(
        "Detected stack: {} ({})",
        classification.label.as_str(),
        classification.reason
    );

    let meta = ProjectMeta::from_path(project_path, deploy);
    let output_dir = output
        .map(PathBuf::from)
        .unwrap_or_else(|| project_path.to_path_buf());

    let generator = PipelineGenerator::new(TemplateRegistry::new());
    let output_path = generator.generate(platform, classification.label, &meta, &output_dir)?;

    println!("{}", output_path.display());
    Ok(())
}
