//! pipewright - Detect a project's stack and generate a starter CI/CD
//! pipeline for it.
//!
//! A linear pipeline: scan the project directory for marker files, classify
//! the stack with an ordered rule table, look up the platform template, fill
//! it in and write it to the platform's conventional path. Supports GitHub
//! Actions, GitLab CI, Jenkins, Azure DevOps and CircleCI.

pub mod classifier;
pub mod cli;
pub mod error;
pub mod generator;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod templates;
pub mod toolchain;
