//! Structure probes and the complexity/recommendation report printed by
//! `analyze`. None of this feeds generation; it is human-readable output
//! only.

use crate::scanner::Evidence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub testing: bool,
    pub dockerized: bool,
    pub monorepo: bool,
    pub dependency_count: usize,
    pub complexity: Complexity,
    pub recommendations: Vec<String>,
}

const MONOREPO_MARKERS: &[&str] = &["lerna.json", "nx.json", "rush.json", "pnpm-workspace.yaml"];

/// Assess project structure from the scanned evidence.
pub fn assess(evidence: &Evidence) -> ProjectReport {
    let testing = has_tests(evidence);
    let dockerized = evidence.has_file("Dockerfile")
        || evidence.has_file("docker-compose.yml")
        || evidence.has_file("docker-compose.yaml");
    let monorepo = MONOREPO_MARKERS.iter().any(|m| evidence.has_file(m));
    let dependency_count = evidence.dependency_count();

    let mut score = 0;
    if dependency_count > 50 {
        score += 2;
    } else if dependency_count > 20 {
        score += 1;
    }
    if monorepo {
        score += 2;
    }
    if !testing {
        score += 1;
    }
    let complexity = if score >= 5 {
        Complexity::High
    } else if score >= 3 {
        Complexity::Medium
    } else {
        Complexity::Low
    };

    let mut recommendations = Vec::new();
    if complexity == Complexity::High {
        recommendations
            .push("Project complexity is high; consider splitting it into smaller services".into());
    }
    if dependency_count > 100 {
        recommendations.push(format!(
            "{} dependencies detected; consider trimming the dependency set",
            dependency_count
        ));
    }
    if !testing {
        recommendations.push("No tests detected; the generated test step will have nothing to run".into());
    }

    ProjectReport {
        testing,
        dockerized,
        monorepo,
        dependency_count,
        complexity,
        recommendations,
    }
}

fn has_tests(evidence: &Evidence) -> bool {
    evidence.files().any(|f| {
        let name = f.rsplit('/').next().unwrap_or(f);
        matches!(name, "tests" | "test" | "__tests__" | "spec")
            || name.contains(".test.")
            || name.contains(".spec.")
            || name.starts_with("test_")
            || name.ends_with("_test.py")
            || name.ends_with("_test.go")
            || name.ends_with("Test.java")
    })
}
