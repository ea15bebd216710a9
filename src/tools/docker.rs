use crate::consts::{ARG_BRANCH, ARG_BUILD_DATE, ARG_VCS_REF};
use crate::core::BuildMetadata;
use crate::error::AppError;
use crate::utils::shell_join;

use super::process::run;

/// A single `docker build` invocation stamped with build metadata
pub(crate) struct DockerBuild<'a> {
    pub(crate) program: &'a str,
    pub(crate) context: &'a str,
    pub(crate) metadata: &'a BuildMetadata,
}

impl DockerBuild<'_> {
    /// The `(name, value)` build-time arguments, in the order they are passed
    pub(crate) fn build_args(&self) -> [(&'static str, &str); 3] {
        [
            (ARG_BUILD_DATE, self.metadata.date.as_str()),
            (ARG_VCS_REF, self.metadata.commit.as_str()),
            (ARG_BRANCH, self.metadata.branch.as_str()),
        ]
    }

    pub(crate) fn args(&self) -> Vec<String> {
        let mut args = vec!["build".to_string()];
        for (name, value) in self.build_args() {
            args.push("--build-arg".to_string());
            args.push(format!("{name}={value}"));
        }
        args.push("-t".to_string());
        args.push(self.metadata.image_name.clone());
        args.push(self.context.to_string());
        args
    }

    /// Shell-quoted command line, as printed by `plan`
    pub(crate) fn command_line(&self) -> String {
        shell_join(self.program, &self.args())
    }

    pub(crate) fn run(&self) -> Result<(), AppError> {
        let args = self.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run("docker", self.program, &args)
    }
}
