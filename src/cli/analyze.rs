use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::classifier::{self, Confidence};
use crate::report;
use crate::scanner;

/// How many evidence files to list before truncating the report.
const MAX_LISTED_EVIDENCE: usize = 15;

pub fn run(path: &str) -> Result<()> {
    let project_path = Path::new(&path);
    info!("Analyzing project at {}", project_path.display());

    let evidence = scanner::scan(project_path)?;
    let classification = classifier::classify(&evidence);
    let report = report::assess(&evidence);

    let confidence = match classification.confidence {
        Confidence::Exact => "exact match",
        Confidence::Fallback => "fallback",
    };

    println!("Project: {}", project_path.display());
    println!(
        "Stack: {} ({})",
        classification.label.as_str(),
        confidence
    );
    println!("Reason: {}", classification.reason);

    if evidence.is_empty() {
        println!("Evidence: none (empty project)");
    } else {
        let files: Vec<&str> = evidence.files().collect();
        println!("Evidence: {} file(s)", files.len());
        for file in files.iter().take(MAX_LISTED_EVIDENCE) {
            println!("  - {}", file);
        }
        if files.len() > MAX_LISTED_EVIDENCE {
            println!("  ... and {} more", files.len() - MAX_LISTED_EVIDENCE);
        }
    }

    println!(
        "Structure: tests={} docker={} monorepo={}",
        yes_no(report.testing),
        yes_no(report.dockerized),
        yes_no(report.monorepo)
    );
    println!("Dependencies: {}", report.dependency_count);
    println!("Complexity: {}", report.complexity.as_str());

    if !report.recommendations.is_empty() {
        println!("Recommendations:");
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }

    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
