//! External collaborators: source control and the container builder

pub(crate) mod docker;
pub(crate) mod git;
pub(crate) mod process;

pub(crate) use docker::DockerBuild;
pub(crate) use git::{Git, Vcs};
