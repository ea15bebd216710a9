mod json;

pub(crate) use json::{output_metadata_json, output_plan_json};
