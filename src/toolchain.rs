//! Per-stack build tooling: the commands and images substituted into
//! pipeline templates.

use crate::classifier::StackLabel;

/// Commands and runtime context for one stack. All values are static text;
/// the generator substitutes them into template placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Toolchain {
    /// Container image for platforms that run jobs in containers.
    pub image: &'static str,
    /// GitHub Actions setup step(s), pre-indented for the workflow template.
    pub setup: &'static str,
    pub install: &'static str,
    pub build: &'static str,
    pub test: &'static str,
}

const NODE_SETUP: &str = "      - name: Setup Node.js
        uses: actions/setup-node@v4
        with:
          node-version: '20'
          cache: npm";

const PYTHON_SETUP: &str = "      - name: Setup Python
        uses: actions/setup-python@v5
        with:
          python-version: '3.12'";

const JAVA_SETUP: &str = "      - name: Setup Java
        uses: actions/setup-java@v4
        with:
          java-version: '17'
          distribution: temurin";

const GO_SETUP: &str = "      - name: Setup Go
        uses: actions/setup-go@v5
        with:
          go-version: '1.22'";

const DOTNET_SETUP: &str = "      - name: Setup .NET
        uses: actions/setup-dotnet@v4
        with:
          dotnet-version: 8.0.x";

const PHP_SETUP: &str = "      - name: Setup PHP
        uses: shivammathur/setup-php@v2
        with:
          php-version: '8.3'";

const FLUTTER_SETUP: &str = "      - name: Setup Flutter
        uses: subosito/flutter-action@v2
        with:
          channel: stable";

// Tauri builds the webview frontend with npm and the shell with cargo.
const TAURI_SETUP: &str = "      - name: Setup Node.js
        uses: actions/setup-node@v4
        with:
          node-version: '20'
          cache: npm
      - name: Setup Rust
        uses: dtolnay/rust-toolchain@stable";

const GENERIC_SETUP: &str = "      - name: Toolchain
        run: echo \"configure your toolchain here\"";

impl StackLabel {
    pub fn toolchain(&self) -> Toolchain {
        match self {
            StackLabel::React
            | StackLabel::Vue
            | StackLabel::Angular
            | StackLabel::Svelte
            | StackLabel::Electron => Toolchain {
                image: "node:20",
                setup: NODE_SETUP,
                install: "npm ci",
                build: "npm run build",
                test: "npm test",
            },
            StackLabel::Nodejs | StackLabel::ReactNative => Toolchain {
                image: "node:20",
                setup: NODE_SETUP,
                install: "npm ci",
                build: "npm run build --if-present",
                test: "npm test",
            },
            StackLabel::Tauri => Toolchain {
                image: "node:20",
                setup: TAURI_SETUP,
                install: "npm ci",
                build: "npm run tauri build",
                test: "npm test",
            },
            StackLabel::PythonDjango => Toolchain {
                image: "python:3.12-slim",
                setup: PYTHON_SETUP,
                install: "pip install -r requirements.txt",
                build: "python manage.py check",
                test: "python -m pytest",
            },
            StackLabel::PythonFlask | StackLabel::PythonFastapi => Toolchain {
                image: "python:3.12-slim",
                setup: PYTHON_SETUP,
                install: "pip install -r requirements.txt",
                build: "python -m compileall -q .",
                test: "python -m pytest",
            },
            StackLabel::JavaSpring => Toolchain {
                image: "maven:3.9-eclipse-temurin-17",
                setup: JAVA_SETUP,
                install: "mvn -B dependency:resolve",
                build: "mvn -B package",
                test: "mvn -B test",
            },
            StackLabel::Go => Toolchain {
                image: "golang:1.22",
                setup: GO_SETUP,
                install: "go mod download",
                build: "go build ./...",
                test: "go test ./...",
            },
            StackLabel::Dotnet => Toolchain {
                image: "mcr.microsoft.com/dotnet/sdk:8.0",
                setup: DOTNET_SETUP,
                install: "dotnet restore",
                build: "dotnet build --no-restore",
                test: "dotnet test --no-restore",
            },
            StackLabel::Php => Toolchain {
                image: "composer:2",
                setup: PHP_SETUP,
                install: "composer install --no-interaction --prefer-dist",
                build: "composer dump-autoload --optimize",
                test: "composer test",
            },
            StackLabel::Flutter => Toolchain {
                image: "ghcr.io/cirruslabs/flutter:stable",
                setup: FLUTTER_SETUP,
                install: "flutter pub get",
                build: "flutter build apk --debug",
                test: "flutter test",
            },
            StackLabel::Generic => Toolchain {
                image: "ubuntu:latest",
                setup: GENERIC_SETUP,
                install: "echo \"add your install command\"",
                build: "echo \"add your build command\"",
                test: "echo \"add your test command\"",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_has_a_complete_toolchain() {
        for label in StackLabel::ALL {
            let tc = label.toolchain();
            assert!(!tc.image.is_empty(), "{} image", label.as_str());
            assert!(!tc.setup.is_empty(), "{} setup", label.as_str());
            assert!(!tc.install.is_empty(), "{} install", label.as_str());
            assert!(!tc.build.is_empty(), "{} build", label.as_str());
            assert!(!tc.test.is_empty(), "{} test", label.as_str());
        }
    }

    #[test]
    fn test_react_uses_npm() {
        let tc = StackLabel::React.toolchain();
        assert_eq!(tc.install, "npm ci");
        assert_eq!(tc.test, "npm test");
        assert!(tc.setup.contains("actions/setup-node"));
    }

    #[test]
    fn test_django_build_runs_checks() {
        let tc = StackLabel::PythonDjango.toolchain();
        assert!(tc.build.contains("manage.py"));
        assert!(tc.install.contains("requirements.txt"));
    }

    #[test]
    fn test_setup_snippets_are_indented_for_the_workflow() {
        for label in StackLabel::ALL {
            let setup = label.toolchain().setup;
            for line in setup.lines() {
                assert!(
                    line.starts_with("      "),
                    "{} setup line not indented: {:?}",
                    label.as_str(),
                    line
                );
            }
            assert!(!setup.ends_with('\n'));
        }
    }
}
