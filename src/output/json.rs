use crate::core::BuildMetadata;
use crate::error::AppError;
use crate::tools::DockerBuild;

pub(crate) fn output_metadata_json(metadata: &BuildMetadata) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(metadata)?)
}

/// The planned invocation as `{ program, args, build_args, tag, context }`
pub(crate) fn output_plan_json(build: &DockerBuild<'_>) -> Result<String, AppError> {
    let build_args: serde_json::Map<String, serde_json::Value> = build
        .build_args()
        .into_iter()
        .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
        .collect();
    let value = serde_json::json!({
        "program": build.program,
        "args": build.args(),
        "build_args": build_args,
        "tag": build.metadata.image_name,
        "context": build.context,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
