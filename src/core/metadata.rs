//! Build metadata resolution
//!
//! Each value comes from an environment override when one is set and
//! non-empty, and falls back to a default (image name) or a source-control
//! query (branch, commit) otherwise.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ffi::OsString;

use crate::consts::IMAGE_NAME_ENV;
use crate::error::AppError;
use crate::tools::Vcs;
use crate::utils::{debug_log, format_build_date};

/// The four values a build is stamped with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct BuildMetadata {
    pub(crate) image_name: String,
    pub(crate) branch: String,
    pub(crate) date: String,
    pub(crate) commit: String,
}

/// Where each value may be overridden from
#[derive(Debug, Clone, Copy)]
pub(crate) struct MetadataSources<'a> {
    /// `--image-name`, wins over `IMAGE_NAME`
    pub(crate) image_override: Option<&'a str>,
    pub(crate) fallback_image: &'a str,
    pub(crate) branch_env: &'a str,
    pub(crate) commit_env: &'a str,
}

/// A set, non-empty variable; one that is set but not UTF-8 is an error
fn lookup_non_empty<L>(lookup: &L, var: &str) -> Result<Option<String>, AppError>
where
    L: Fn(&str) -> Option<OsString>,
{
    let value = match lookup(var).filter(|v| !v.is_empty()) {
        Some(raw) => Some(raw.into_string().map_err(|_| AppError::NonUnicodeEnv {
            var: var.to_string(),
        })?),
        None => None,
    };
    match &value {
        Some(v) => debug_log(format!("{var}={v}")),
        None => debug_log(format!("{var} not set")),
    }
    Ok(value)
}

impl BuildMetadata {
    /// Resolve all four values in order: image name, branch, date, commit
    ///
    /// `on_start` runs once the image name is known and before any
    /// source-control query. Resolution stops at the first failing query or
    /// the first override that is set but not valid UTF-8.
    pub(crate) fn resolve<L, N, S>(
        sources: &MetadataSources<'_>,
        lookup: L,
        vcs: &dyn Vcs,
        now: N,
        on_start: S,
    ) -> Result<Self, AppError>
    where
        L: Fn(&str) -> Option<OsString>,
        N: FnOnce() -> DateTime<Utc>,
        S: FnOnce(&str),
    {
        let image_name = match sources.image_override.filter(|v| !v.is_empty()) {
            Some(name) => name.to_string(),
            None => lookup_non_empty(&lookup, IMAGE_NAME_ENV)?
                .unwrap_or_else(|| sources.fallback_image.to_string()),
        };

        on_start(&image_name);

        let branch = match lookup_non_empty(&lookup, sources.branch_env)? {
            Some(branch) => branch,
            None => vcs.current_branch()?,
        };

        let date = format_build_date(now());

        let commit = match lookup_non_empty(&lookup, sources.commit_env)? {
            Some(commit) => commit,
            None => vcs.short_revision()?,
        };

        Ok(Self {
            image_name,
            branch,
            date,
            commit,
        })
    }

    /// `KEY=value` lines, keyed by the names the build consumes
    pub(crate) fn to_env_lines(&self) -> String {
        format!(
            "IMAGE_NAME={}\nBRANCH={}\nBUILD_DATE={}\nVCS_REF={}\n",
            self.image_name, self.branch, self.date, self.commit
        )
    }
}
