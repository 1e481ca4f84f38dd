//! Rendering and write-path tests for the pipeline generator.

use std::fs;

use pipewright::classifier::StackLabel;
use pipewright::generator::{PipelineGenerator, ProjectMeta};
use pipewright::registry::{PlatformTarget, TemplateRegistry};
use tempfile::TempDir;

fn generator() -> PipelineGenerator {
    PipelineGenerator::new(TemplateRegistry::new())
}

fn meta(name: &str, deploy: bool) -> ProjectMeta {
    ProjectMeta {
        name: name.to_string(),
        deploy,
    }
}

#[test]
fn test_every_pair_renders_without_leftover_placeholders() {
    let gen = generator();
    for platform in PlatformTarget::ALL {
        for label in StackLabel::ALL {
            let rendered = gen.render(platform, label, &meta("acme", true));
            assert!(
                !rendered.content.contains("{{") && !rendered.content.contains("}}"),
                "unresolved placeholder for {}/{}",
                platform.as_str(),
                label.as_str()
            );
            assert!(rendered.content.ends_with('\n'));
        }
    }
}

#[test]
fn test_github_react_pipeline_shape() {
    let gen = generator();
    let rendered = gen.render(
        PlatformTarget::GithubActions,
        StackLabel::React,
        &meta("storefront", false),
    );
    assert!(rendered.content.starts_with("name: storefront CI"));
    assert!(rendered.content.contains("actions/checkout@v4"));
    assert!(rendered.content.contains("actions/setup-node@v4"));
    assert!(rendered.content.contains("run: npm ci"));
    assert!(rendered.content.contains("run: npm test"));
    assert!(rendered.content.contains("run: npm run build"));
}

#[test]
fn test_gitlab_django_pipeline_shape() {
    let gen = generator();
    let rendered = gen.render(
        PlatformTarget::GitlabCi,
        StackLabel::PythonDjango,
        &meta("blog", false),
    );
    assert_eq!(rendered.relative_path, ".gitlab-ci.yml");
    assert!(rendered.content.contains("image: python:3.12-slim"));
    assert!(rendered.content.contains("pip install -r requirements.txt"));
    assert!(rendered.content.contains("python -m pytest"));
}

#[test]
fn test_jenkins_dotnet_pipeline_shape() {
    let gen = generator();
    let rendered = gen.render(
        PlatformTarget::Jenkins,
        StackLabel::Dotnet,
        &meta("api", false),
    );
    assert_eq!(rendered.relative_path, "Jenkinsfile");
    assert!(rendered.content.contains("pipeline {"));
    assert!(rendered.content.contains("sh 'dotnet restore'"));
    assert!(rendered.content.contains("sh 'dotnet test --no-restore'"));
}

#[test]
fn test_azure_go_pipeline_shape() {
    let gen = generator();
    let rendered = gen.render(
        PlatformTarget::AzureDevops,
        StackLabel::Go,
        &meta("svc", false),
    );
    assert_eq!(rendered.relative_path, "azure-pipelines.yml");
    assert!(rendered.content.contains("vmImage: ubuntu-latest"));
    assert!(rendered.content.contains("script: go test ./..."));
}

#[test]
fn test_circleci_php_pipeline_shape() {
    let gen = generator();
    let rendered = gen.render(
        PlatformTarget::CircleCi,
        StackLabel::Php,
        &meta("shop", false),
    );
    assert_eq!(rendered.relative_path, ".circleci/config.yml");
    assert!(rendered.content.contains("version: 2.1"));
    assert!(rendered.content.contains("image: composer:2"));
    assert!(rendered.content.contains("composer install"));
}

#[test]
fn test_deploy_block_only_when_requested() {
    let gen = generator();
    // The deploy block always carries this stub command; stage lists may
    // mention "deploy" even without it (GitLab).
    let marker = "replace with your deploy commands";
    for platform in PlatformTarget::ALL {
        let off = gen.render(platform, StackLabel::Go, &meta("svc", false));
        let on = gen.render(platform, StackLabel::Go, &meta("svc", true));
        assert!(
            !off.content.contains(marker),
            "{} without --deploy should have no deploy step",
            platform.as_str()
        );
        assert!(
            on.content.contains(marker),
            "{} with --deploy should have a deploy step",
            platform.as_str()
        );
    }
}

#[test]
fn test_generating_twice_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let gen = generator();
    let m = meta("acme", true);

    let path1 = gen
        .generate(PlatformTarget::GithubActions, StackLabel::Vue, &m, tmp.path())
        .unwrap();
    let first = fs::read(&path1).unwrap();

    let path2 = gen
        .generate(PlatformTarget::GithubActions, StackLabel::Vue, &m, tmp.path())
        .unwrap();
    let second = fs::read(&path2).unwrap();

    assert_eq!(path1, path2);
    assert_eq!(first, second);
}

#[test]
fn test_nested_output_dirs_are_created() {
    let tmp = TempDir::new().unwrap();
    let gen = generator();
    gen.generate(
        PlatformTarget::CircleCi,
        StackLabel::Go,
        &meta("svc", false),
        tmp.path(),
    )
    .unwrap();
    assert!(tmp.path().join(".circleci/config.yml").is_file());
}
