//! Stack classification: an ordered rule table over scanned evidence.
//!
//! Rules are evaluated top to bottom and the first match wins, which makes
//! precedence auditable: when a project carries markers for several stacks
//! (say both package.json and requirements.txt), the earlier rule decides.
//! Desktop and mobile wrappers are checked before the frontend frameworks
//! they embed, frameworks before their plain runtime, and Node rules before
//! Python, Java, Go, .NET and PHP ones.

use std::str::FromStr;

use anyhow::bail;

use crate::scanner::Evidence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackLabel {
    React,
    Vue,
    Angular,
    Svelte,
    Nodejs,
    PythonDjango,
    PythonFlask,
    PythonFastapi,
    JavaSpring,
    Go,
    Dotnet,
    Php,
    ReactNative,
    Flutter,
    Electron,
    Tauri,
    Generic,
}

impl StackLabel {
    /// Every label, for exhaustive registry checks.
    pub const ALL: [StackLabel; 17] = [
        StackLabel::React,
        StackLabel::Vue,
        StackLabel::Angular,
        StackLabel::Svelte,
        StackLabel::Nodejs,
        StackLabel::PythonDjango,
        StackLabel::PythonFlask,
        StackLabel::PythonFastapi,
        StackLabel::JavaSpring,
        StackLabel::Go,
        StackLabel::Dotnet,
        StackLabel::Php,
        StackLabel::ReactNative,
        StackLabel::Flutter,
        StackLabel::Electron,
        StackLabel::Tauri,
        StackLabel::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StackLabel::React => "react",
            StackLabel::Vue => "vue",
            StackLabel::Angular => "angular",
            StackLabel::Svelte => "svelte",
            StackLabel::Nodejs => "nodejs",
            StackLabel::PythonDjango => "python-django",
            StackLabel::PythonFlask => "python-flask",
            StackLabel::PythonFastapi => "python-fastapi",
            StackLabel::JavaSpring => "java-spring",
            StackLabel::Go => "go",
            StackLabel::Dotnet => "dotnet",
            StackLabel::Php => "php",
            StackLabel::ReactNative => "react-native",
            StackLabel::Flutter => "flutter",
            StackLabel::Electron => "electron",
            StackLabel::Tauri => "tauri",
            StackLabel::Generic => "generic",
        }
    }
}

impl FromStr for StackLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        for label in StackLabel::ALL {
            if label.as_str() == s {
                return Ok(label);
            }
        }
        bail!("Unknown stack label: {}", s)
    }
}

/// Whether a rule matched or the classifier fell back to `generic`. Only the
/// analyze report cares about this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Exact,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub label: StackLabel,
    pub confidence: Confidence,
    /// The evidence that triggered the match, for the analyze report.
    pub reason: String,
}

pub struct Rule {
    pub label: StackLabel,
    pub reason: &'static str,
    matches: fn(&Evidence) -> bool,
}

/// The classification table. Order is the tie-break.
pub static RULES: &[Rule] = &[
    Rule {
        label: StackLabel::Tauri,
        reason: "src-tauri directory or @tauri-apps dependency",
        matches: |e| {
            e.has_file("src-tauri")
                || e.has_node_dep("@tauri-apps/cli")
                || e.has_node_dep("@tauri-apps/api")
        },
    },
    Rule {
        label: StackLabel::Flutter,
        reason: "pubspec.yaml manifest",
        matches: |e| e.has_file("pubspec.yaml"),
    },
    Rule {
        label: StackLabel::ReactNative,
        reason: "react-native dependency in package.json",
        matches: |e| e.has_node_dep("react-native") || e.has_node_dep("expo"),
    },
    Rule {
        label: StackLabel::Electron,
        reason: "electron dependency in package.json",
        matches: |e| e.has_node_dep("electron"),
    },
    Rule {
        label: StackLabel::Angular,
        reason: "angular.json or @angular dependency",
        matches: |e| {
            e.has_file("angular.json")
                || e.has_node_dep("@angular/core")
                || e.has_node_dep("@angular/cli")
        },
    },
    Rule {
        label: StackLabel::Vue,
        reason: "vue dependency in package.json",
        matches: |e| {
            e.has_node_dep("vue") || e.has_node_dep("@vue/cli-service") || e.has_node_dep("nuxt")
        },
    },
    Rule {
        label: StackLabel::Svelte,
        reason: "svelte.config.js or svelte dependency",
        matches: |e| e.has_file("svelte.config.js") || e.has_node_dep("svelte"),
    },
    Rule {
        label: StackLabel::React,
        reason: "react dependency in package.json",
        matches: |e| e.has_node_dep("react") || e.has_node_dep("react-dom"),
    },
    Rule {
        label: StackLabel::Nodejs,
        reason: "package.json manifest",
        matches: |e| e.has_file("package.json"),
    },
    Rule {
        label: StackLabel::PythonDjango,
        reason: "django dependency or manage.py",
        matches: |e| {
            e.has_python_manifest() && (e.has_python_dep("django") || e.has_file("manage.py"))
        },
    },
    Rule {
        label: StackLabel::PythonFlask,
        reason: "flask dependency or app.py",
        matches: |e| e.has_python_manifest() && (e.has_python_dep("flask") || e.has_file("app.py")),
    },
    Rule {
        label: StackLabel::PythonFastapi,
        reason: "fastapi dependency or main.py",
        matches: |e| {
            e.has_python_manifest() && (e.has_python_dep("fastapi") || e.has_file("main.py"))
        },
    },
    Rule {
        label: StackLabel::JavaSpring,
        reason: "Spring references in Maven/Gradle build file",
        matches: |e| e.has_spring_marker(),
    },
    Rule {
        label: StackLabel::Go,
        reason: "go.mod manifest",
        matches: |e| e.has_file("go.mod"),
    },
    Rule {
        label: StackLabel::Dotnet,
        reason: ".csproj/.fsproj/.sln project file",
        matches: |e| e.has_extension("csproj") || e.has_extension("fsproj") || e.has_extension("sln"),
    },
    Rule {
        label: StackLabel::Php,
        reason: "composer.json manifest or artisan script",
        matches: |e| {
            e.has_file("composer.json")
                || e.has_file("artisan")
                || e.has_php_dep("laravel/framework")
        },
    },
];

/// Classify evidence against the rule table. Deterministic for identical
/// evidence; falls back to `generic` when nothing matches.
pub fn classify(evidence: &Evidence) -> Classification {
    for rule in RULES {
        if (rule.matches)(evidence) {
            return Classification {
                label: rule.label,
                confidence: Confidence::Exact,
                reason: rule.reason.to_string(),
            };
        }
    }
    Classification {
        label: StackLabel::Generic,
        confidence: Confidence::Fallback,
        reason: "no recognized stack markers".to_string(),
    }
}
