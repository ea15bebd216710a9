use std::ffi::OsString;

use crate::cli::{Cli, Commands};
use crate::consts::STATUS_LINE;
use crate::core::BuildMetadata;
use crate::error::AppError;
use crate::output::{output_metadata_json, output_plan_json};
use crate::tools::{DockerBuild, Git, Vcs};
use crate::utils::debug_log;

fn env_lookup(var: &str) -> Option<OsString> {
    std::env::var_os(var)
}

fn resolve_metadata(
    cli: &Cli,
    vcs: &dyn Vcs,
    announce: bool,
) -> Result<BuildMetadata, AppError> {
    BuildMetadata::resolve(
        &cli.metadata_sources(),
        env_lookup,
        vcs,
        chrono::Utc::now,
        |image_name| {
            debug_log(format!("image: {image_name}"));
            if announce {
                println!("{STATUS_LINE}");
            }
        },
    )
}

fn handle_metadata(metadata: &BuildMetadata, cli: &Cli) -> Result<(), AppError> {
    if cli.json {
        println!("{}", output_metadata_json(metadata)?);
    } else {
        print!("{}", metadata.to_env_lines());
    }
    Ok(())
}

fn handle_plan(build: &DockerBuild<'_>, cli: &Cli) -> Result<(), AppError> {
    if cli.json {
        println!("{}", output_plan_json(build)?);
    } else {
        println!("{}", build.command_line());
    }
    Ok(())
}

/// Run a command end to end: resolve metadata, then build, print or plan
pub(crate) fn run_command(command: Commands, cli: &Cli) -> Result<(), AppError> {
    let git = Git::new(cli.git_program());
    let metadata = resolve_metadata(cli, &git, command.announces_start())?;

    let build = DockerBuild {
        program: cli.docker_program(),
        context: cli.context(),
        metadata: &metadata,
    };

    match command {
        Commands::Build => build.run(),
        Commands::Metadata => handle_metadata(&metadata, cli),
        Commands::Plan => handle_plan(&build, cli),
    }
}
