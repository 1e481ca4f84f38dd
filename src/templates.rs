//! Static pipeline templates, one standard and one generic per platform.
//!
//! Placeholders: `{{project_name}}`, `{{stack}}`, `{{setup}}`, `{{install}}`,
//! `{{build}}`, `{{test}}`, `{{image}}`, `{{deploy_job}}`. The `{{deploy_job}}`
//! line is replaced by the platform's deploy block when deployment is
//! requested and removed otherwise; everything else is plain substitution.

pub const GITHUB_OUTPUT_PATH: &str = ".github/workflows/ci.yml";
pub const GITLAB_OUTPUT_PATH: &str = ".gitlab-ci.yml";
pub const JENKINS_OUTPUT_PATH: &str = "Jenkinsfile";
pub const AZURE_OUTPUT_PATH: &str = "azure-pipelines.yml";
pub const CIRCLECI_OUTPUT_PATH: &str = ".circleci/config.yml";

pub const GITHUB_STANDARD: &str = r#"name: {{project_name}} CI

on:
  push:
    branches: [main, master, develop]
  pull_request:
    branches: [main, master]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
{{setup}}
      - name: Install dependencies
        run: {{install}}
      - name: Run tests
        run: {{test}}
      - name: Build
        run: {{build}}
{{deploy_job}}
"#;

pub const GITHUB_DEPLOY_JOB: &str = r#"
  deploy:
    runs-on: ubuntu-latest
    needs: build
    if: github.ref == 'refs/heads/main' && github.event_name == 'push'
    steps:
      - name: Checkout
        uses: actions/checkout@v4
      - name: Deploy
        run: echo "deploy {{project_name}} (replace with your deploy commands)""#;

pub const GITHUB_GENERIC: &str = r#"name: {{project_name}} CI

on:
  push:
    branches: [main, master, develop]
  pull_request:
    branches: [main, master]

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - name: Checkout
        uses: actions/checkout@v4
      - name: Build
        run: echo "add your build command for {{project_name}}"
      - name: Run tests
        run: echo "add your test command for {{project_name}}"
{{deploy_job}}
"#;

pub const GITLAB_STANDARD: &str = r#"# CI pipeline for {{project_name}} ({{stack}})

image: {{image}}

stages:
  - build
  - test
  - deploy

build:
  stage: build
  script:
    - {{install}}
    - {{build}}

test:
  stage: test
  script:
    - {{install}}
    - {{test}}
{{deploy_job}}
"#;

pub const GITLAB_DEPLOY_JOB: &str = r#"
deploy:
  stage: deploy
  script:
    - echo "deploy {{project_name}} (replace with your deploy commands)"
  only:
    - main"#;

pub const GITLAB_GENERIC: &str = r#"# CI pipeline for {{project_name}} ({{stack}})

image: ubuntu:latest

stages:
  - build
  - test
  - deploy

build:
  stage: build
  script:
    - echo "add your build command for {{project_name}}"

test:
  stage: test
  script:
    - echo "add your test command for {{project_name}}"
{{deploy_job}}
"#;

pub const JENKINS_STANDARD: &str = r#"// Jenkinsfile for {{project_name}} ({{stack}})
pipeline {
    agent any

    stages {
        stage('Install') {
            steps {
                sh '{{install}}'
            }
        }
        stage('Test') {
            steps {
                sh '{{test}}'
            }
        }
        stage('Build') {
            steps {
                sh '{{build}}'
            }
        }
{{deploy_job}}
    }

    post {
        always {
            echo '{{project_name}} pipeline finished'
        }
    }
}
"#;

pub const JENKINS_DEPLOY_JOB: &str = r#"
        stage('Deploy') {
            when { branch 'main' }
            steps {
                sh 'echo "deploy {{project_name}} (replace with your deploy commands)"'
            }
        }"#;

pub const JENKINS_GENERIC: &str = r#"// Jenkinsfile for {{project_name}} ({{stack}})
pipeline {
    agent any

    stages {
        stage('Build') {
            steps {
                sh 'echo "add your build command for {{project_name}}"'
            }
        }
        stage('Test') {
            steps {
                sh 'echo "add your test command for {{project_name}}"'
            }
        }
{{deploy_job}}
    }

    post {
        always {
            echo '{{project_name}} pipeline finished'
        }
    }
}
"#;

pub const AZURE_STANDARD: &str = r#"# Azure Pipelines for {{project_name}} ({{stack}})

trigger:
  branches:
    include:
      - main
      - master

pool:
  vmImage: ubuntu-latest

steps:
  - script: {{install}}
    displayName: Install dependencies
  - script: {{test}}
    displayName: Run tests
  - script: {{build}}
    displayName: Build
{{deploy_job}}
"#;

pub const AZURE_DEPLOY_JOB: &str = r#"
  - script: echo "deploy {{project_name}} (replace with your deploy commands)"
    displayName: Deploy
    condition: and(succeeded(), eq(variables['Build.SourceBranch'], 'refs/heads/main'))"#;

pub const AZURE_GENERIC: &str = r#"# Azure Pipelines for {{project_name}} ({{stack}})

trigger:
  branches:
    include:
      - main
      - master

pool:
  vmImage: ubuntu-latest

steps:
  - script: echo "add your build command for {{project_name}}"
    displayName: Build
  - script: echo "add your test command for {{project_name}}"
    displayName: Run tests
{{deploy_job}}
"#;

pub const CIRCLECI_STANDARD: &str = r#"# CircleCI config for {{project_name}} ({{stack}})
version: 2.1

jobs:
  build:
    docker:
      - image: {{image}}
    steps:
      - checkout
      - run:
          name: Install dependencies
          command: {{install}}
      - run:
          name: Run tests
          command: {{test}}
      - run:
          name: Build
          command: {{build}}
{{deploy_job}}

workflows:
  ci:
    jobs:
      - build
"#;

pub const CIRCLECI_DEPLOY_JOB: &str = r#"
      - run:
          name: Deploy
          command: echo "deploy {{project_name}} (replace with your deploy commands)""#;

pub const CIRCLECI_GENERIC: &str = r#"# CircleCI config for {{project_name}} ({{stack}})
version: 2.1

jobs:
  build:
    docker:
      - image: ubuntu:latest
    steps:
      - checkout
      - run:
          name: Build
          command: echo "add your build command for {{project_name}}"
      - run:
          name: Run tests
          command: echo "add your test command for {{project_name}}"
{{deploy_job}}

workflows:
  ci:
    jobs:
      - build
"#;
