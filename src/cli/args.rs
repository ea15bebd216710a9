//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use clap::Parser;

use crate::config::Config;
use crate::consts::{
    DEFAULT_BRANCH_ENV, DEFAULT_COMMIT_ENV, DEFAULT_CONTEXT, DEFAULT_DOCKER, DEFAULT_GIT,
    DEFAULT_IMAGE_NAME,
};
use crate::core::MetadataSources;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "buildhook")]
#[command(
    about = "Build a container image stamped with branch, commit and build date",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Image tag to build (overrides $IMAGE_NAME)
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) image_name: Option<String>,

    /// Tag used when neither --image-name nor $IMAGE_NAME is set
    #[arg(long, global = true, value_name = "NAME")]
    pub(crate) fallback_image: Option<String>,

    /// Environment variable holding the CI branch [default: TRAVIS_BRANCH]
    #[arg(long, global = true, value_name = "VAR")]
    pub(crate) branch_env: Option<String>,

    /// Environment variable holding the CI commit hash [default: TRAVIS_COMMIT]
    #[arg(long, global = true, value_name = "VAR")]
    pub(crate) commit_env: Option<String>,

    /// Build context directory [default: .]
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) context: Option<String>,

    /// git executable [default: git]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub(crate) git: Option<String>,

    /// docker executable [default: docker]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub(crate) docker: Option<String>,

    /// Output as JSON (metadata and plan)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug output (show config, variables and commands run)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }

        // String options: only apply if CLI didn't set them
        if self.fallback_image.is_none() {
            self.fallback_image = config.fallback_image.clone();
        }
        if self.branch_env.is_none() {
            self.branch_env = config.branch_env.clone();
        }
        if self.commit_env.is_none() {
            self.commit_env = config.commit_env.clone();
        }
        if self.context.is_none() {
            self.context = config.context.clone();
        }
        if self.git.is_none() {
            self.git = config.git.clone();
        }
        if self.docker.is_none() {
            self.docker = config.docker.clone();
        }

        self
    }

    pub(crate) fn fallback_image(&self) -> &str {
        self.fallback_image.as_deref().unwrap_or(DEFAULT_IMAGE_NAME)
    }

    pub(crate) fn branch_env(&self) -> &str {
        self.branch_env.as_deref().unwrap_or(DEFAULT_BRANCH_ENV)
    }

    pub(crate) fn commit_env(&self) -> &str {
        self.commit_env.as_deref().unwrap_or(DEFAULT_COMMIT_ENV)
    }

    pub(crate) fn context(&self) -> &str {
        self.context.as_deref().unwrap_or(DEFAULT_CONTEXT)
    }

    pub(crate) fn git_program(&self) -> &str {
        self.git.as_deref().unwrap_or(DEFAULT_GIT)
    }

    pub(crate) fn docker_program(&self) -> &str {
        self.docker.as_deref().unwrap_or(DEFAULT_DOCKER)
    }

    pub(crate) fn metadata_sources(&self) -> MetadataSources<'_> {
        MetadataSources {
            image_override: self.image_name.as_deref(),
            fallback_image: self.fallback_image(),
            branch_env: self.branch_env(),
            commit_env: self.commit_env(),
        }
    }
}
