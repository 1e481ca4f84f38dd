//! Project scanner: collects the evidence a classification is based on.
//!
//! The walk is read-only and bounded to the project root plus one level of
//! subdirectories, so scanning a huge tree stays cheap. Manifest files that
//! carry classification signal (package.json, requirements.txt,
//! pyproject.toml, composer.json, pom.xml/build.gradle) are parsed while we
//! are there; everything else is recorded by relative path only.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Error;

/// Leading package name of a requirements.txt line ("flask>=2.0" -> "flask").
static REQUIREMENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z0-9][A-Za-z0-9._-]*)").unwrap());

/// Directories that never carry classification signal.
const SKIP_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".idea",
    ".venv",
    ".vscode",
    "__pycache__",
    "build",
    "dist",
    "node_modules",
    "target",
    "venv",
];

/// Marker files observed in a project, plus the dependency names pulled out
/// of the manifests that need content inspection. Immutable once scanned.
#[derive(Debug, Clone, Default)]
pub struct Evidence {
    files: BTreeSet<String>,
    node_deps: BTreeSet<String>,
    python_deps: BTreeSet<String>,
    php_deps: BTreeSet<String>,
    spring_marker: bool,
}

impl Evidence {
    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// True if any observed file has the given extension (no leading dot).
    pub fn has_extension(&self, ext: &str) -> bool {
        self.files
            .iter()
            .any(|f| Path::new(f).extension().and_then(|e| e.to_str()) == Some(ext))
    }

    pub fn has_node_dep(&self, name: &str) -> bool {
        self.node_deps.contains(name)
    }

    pub fn has_python_dep(&self, name: &str) -> bool {
        self.python_deps.contains(name)
    }

    pub fn has_php_dep(&self, name: &str) -> bool {
        self.php_deps.contains(name)
    }

    pub fn has_spring_marker(&self) -> bool {
        self.spring_marker
    }

    /// A Python dependency manifest of any flavor is present.
    pub fn has_python_manifest(&self) -> bool {
        self.has_file("requirements.txt")
            || self.has_file("pyproject.toml")
            || self.has_file("setup.py")
            || self.has_file("Pipfile")
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|s| s.as_str())
    }

    pub fn dependency_count(&self) -> usize {
        self.node_deps.len() + self.python_deps.len() + self.php_deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn fixture(files: &[&str], node_deps: &[&str], python_deps: &[&str]) -> Self {
        Self {
            files: files.iter().map(|s| s.to_string()).collect(),
            node_deps: node_deps.iter().map(|s| s.to_string()).collect(),
            python_deps: python_deps.iter().map(|s| s.to_string()).collect(),
            php_deps: BTreeSet::new(),
            spring_marker: false,
        }
    }
}

/// Scan a project directory and collect its evidence.
///
/// Fails with [`Error::ProjectNotFound`] when the path does not exist or is
/// not a directory. The traversal itself never fails the scan: unreadable
/// entries and malformed manifests are logged and skipped.
pub fn scan(path: &Path) -> Result<Evidence, Error> {
    if !path.is_dir() {
        return Err(Error::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut evidence = Evidence::default();
    collect_files(path, path, 0, &mut evidence.files);
    debug!("Collected {} evidence files", evidence.files.len());

    if evidence.files.contains("package.json") {
        evidence.node_deps = read_package_json(&path.join("package.json"));
    }
    if evidence.files.contains("requirements.txt") {
        evidence
            .python_deps
            .extend(read_requirements(&path.join("requirements.txt")));
    }
    if evidence.files.contains("pyproject.toml") {
        evidence
            .python_deps
            .extend(read_pyproject(&path.join("pyproject.toml")));
    }
    if evidence.files.contains("composer.json") {
        evidence.php_deps = read_composer_json(&path.join("composer.json"));
    }
    for build_file in ["pom.xml", "build.gradle", "build.gradle.kts"] {
        if evidence.files.contains(build_file) && file_mentions_spring(&path.join(build_file)) {
            evidence.spring_marker = true;
            break;
        }
    }

    Ok(evidence)
}

/// Record relative paths at the root and one level down.
fn collect_files(root: &Path, dir: &Path, depth: usize, files: &mut BTreeSet<String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if path.is_dir() {
            if SKIP_DIRS.contains(&name) {
                continue;
            }
            // Directory names are evidence too (e.g. src-tauri, k8s)
            if let Ok(rel) = path.strip_prefix(root) {
                files.insert(rel.to_string_lossy().replace('\\', "/"));
            }
            if depth == 0 {
                collect_files(root, &path, 1, files);
            }
        } else if let Ok(rel) = path.strip_prefix(root) {
            files.insert(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: std::collections::BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: std::collections::BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerJson {
    #[serde(default)]
    require: std::collections::BTreeMap<String, serde_json::Value>,
    #[serde(default, rename = "require-dev")]
    require_dev: std::collections::BTreeMap<String, serde_json::Value>,
}

/// Union of dependencies and devDependencies names. Malformed JSON yields an
/// empty set rather than failing the scan.
fn read_package_json(path: &Path) -> BTreeSet<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return BTreeSet::new();
    };
    let manifest: PackageJson = match serde_json::from_str(&content) {
        Ok(m) => m,
        Err(e) => {
            warn!("Ignoring malformed package.json: {}", e);
            return BTreeSet::new();
        }
    };

    manifest
        .dependencies
        .into_keys()
        .chain(manifest.dev_dependencies.into_keys())
        .collect()
}

fn read_requirements(path: &Path) -> BTreeSet<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return BTreeSet::new();
    };
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with(['#', '-']))
        .filter_map(|line| REQUIREMENT_NAME.captures(line))
        .map(|caps| caps[1].to_lowercase())
        .collect()
}

/// Names from `project.dependencies` and `tool.poetry.dependencies`.
fn read_pyproject(path: &Path) -> BTreeSet<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return BTreeSet::new();
    };
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring malformed pyproject.toml: {}", e);
            return BTreeSet::new();
        }
    };

    let mut deps = BTreeSet::new();
    if let Some(list) = value
        .get("project")
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_array())
    {
        for entry in list {
            if let Some(spec) = entry.as_str() {
                if let Some(caps) = REQUIREMENT_NAME.captures(spec) {
                    deps.insert(caps[1].to_lowercase());
                }
            }
        }
    }
    if let Some(table) = value
        .get("tool")
        .and_then(|t| t.get("poetry"))
        .and_then(|p| p.get("dependencies"))
        .and_then(|d| d.as_table())
    {
        deps.extend(table.keys().map(|k| k.to_lowercase()));
    }
    deps
}

fn read_composer_json(path: &Path) -> BTreeSet<String> {
    let Ok(content) = fs::read_to_string(path) else {
        return BTreeSet::new();
    };
    let manifest: ComposerJson = match serde_json::from_str(&content) {
        Ok(m) => m,
        Err(e) => {
            warn!("Ignoring malformed composer.json: {}", e);
            return BTreeSet::new();
        }
    };

    manifest
        .require
        .into_keys()
        .chain(manifest.require_dev.into_keys())
        .collect()
}

fn file_mentions_spring(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| {
            let lower = content.to_lowercase();
            lower.contains("springframework") || lower.contains("spring-boot")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_missing_path() {
        let result = scan(Path::new("/tmp/pipewright-no-such-dir-xyz"));
        assert!(matches!(result, Err(Error::ProjectNotFound { .. })));
    }

    #[test]
    fn test_scan_path_is_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "hello").unwrap();
        assert!(matches!(scan(&file), Err(Error::ProjectNotFound { .. })));
    }

    #[test]
    fn test_scan_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.is_empty());
    }

    #[test]
    fn test_scan_depth_is_bounded() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/deep")).unwrap();
        fs::write(tmp.path().join("src/App.jsx"), "").unwrap();
        fs::write(tmp.path().join("src/deep/hidden.js"), "").unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_file("src/App.jsx"));
        assert!(evidence.has_file("src/deep"));
        assert!(!evidence.has_file("src/deep/hidden.js"));
    }

    #[test]
    fn test_scan_skips_noise_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/react")).unwrap();
        fs::write(tmp.path().join("node_modules/react/package.json"), "{}").unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(!evidence.has_file("node_modules"));
        assert!(!evidence.has_file("node_modules/react/package.json"));
    }

    #[test]
    fn test_package_json_deps() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("package.json"),
            r#"{"dependencies": {"react": "^18.2.0"}, "devDependencies": {"vite": "^5.0.0"}}"#,
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_node_dep("react"));
        assert!(evidence.has_node_dep("vite"));
        assert!(!evidence.has_node_dep("vue"));
    }

    #[test]
    fn test_malformed_package_json_is_tolerated() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("package.json"), "{not json").unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_file("package.json"));
        assert_eq!(evidence.dependency_count(), 0);
    }

    #[test]
    fn test_requirements_names_stripped_and_lowercased() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("requirements.txt"),
            "Django>=4.2\n# comment\n-r other.txt\nrequests==2.31.0\n",
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_python_dep("django"));
        assert!(evidence.has_python_dep("requests"));
        assert!(!evidence.has_python_dep("r"));
    }

    #[test]
    fn test_pyproject_project_and_poetry_deps() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("pyproject.toml"),
            r#"
[project]
name = "svc"
dependencies = ["fastapi>=0.100", "uvicorn[standard]"]

[tool.poetry.dependencies]
httpx = "^0.27"
"#,
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_python_dep("fastapi"));
        assert!(evidence.has_python_dep("uvicorn"));
        assert!(evidence.has_python_dep("httpx"));
    }

    #[test]
    fn test_composer_deps() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("composer.json"),
            r#"{"require": {"laravel/framework": "^11.0"}}"#,
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_php_dep("laravel/framework"));
    }

    #[test]
    fn test_spring_marker_from_pom() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("pom.xml"),
            "<project><groupId>org.springframework.boot</groupId></project>",
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_spring_marker());
    }

    #[test]
    fn test_pom_without_spring_has_no_marker() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("pom.xml"),
            "<project><groupId>com.example</groupId></project>",
        )
        .unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(!evidence.has_spring_marker());
    }

    #[test]
    fn test_has_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("App.csproj"), "<Project/>").unwrap();

        let evidence = scan(tmp.path()).unwrap();
        assert!(evidence.has_extension("csproj"));
        assert!(!evidence.has_extension("sln"));
    }
}
