/// Build date format passed as `BUILD_DATE`: "2025-01-15T09:30:00Z"
pub(crate) const BUILD_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Tag used when neither `--image-name` nor `IMAGE_NAME` is set
pub(crate) const DEFAULT_IMAGE_NAME: &str = "kbase/relation_engine_api:0.0.4";

pub(crate) const IMAGE_NAME_ENV: &str = "IMAGE_NAME";
pub(crate) const DEFAULT_BRANCH_ENV: &str = "TRAVIS_BRANCH";
pub(crate) const DEFAULT_COMMIT_ENV: &str = "TRAVIS_COMMIT";
pub(crate) const CONFIG_PATH_ENV: &str = "BUILDHOOK_CONFIG";

pub(crate) const DEFAULT_CONTEXT: &str = ".";
pub(crate) const DEFAULT_GIT: &str = "git";
pub(crate) const DEFAULT_DOCKER: &str = "docker";

/// Build-time argument names understood by the Dockerfile
pub(crate) const ARG_BUILD_DATE: &str = "BUILD_DATE";
pub(crate) const ARG_VCS_REF: &str = "VCS_REF";
pub(crate) const ARG_BRANCH: &str = "BRANCH";

pub(crate) const STATUS_LINE: &str = "hooks/build executing...";
