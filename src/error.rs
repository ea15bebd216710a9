use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{tool} not found. Please install {tool} or point --{tool} at it.")]
    ToolNotFound { tool: String },

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} {command} {}", describe_exit(.code, .signal))]
    ToolFailed {
        tool: String,
        command: String,
        code: Option<i32>,
        signal: Option<i32>,
    },

    #[error("Invalid UTF-8 from {tool}: {source}")]
    Utf8 {
        tool: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("{tool} {command} printed nothing")]
    EmptyOutput { tool: String, command: String },

    #[error("{var} is set but is not valid UTF-8")]
    NonUnicodeEnv { var: String },

    #[error("Failed to load config {path}: {message}")]
    Config { path: String, message: String },

    #[error("Failed to serialize metadata: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_exit(code: &Option<i32>, signal: &Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("exited with status {code}"),
        (None, Some(signal)) => format!("was killed by signal {signal}"),
        (None, None) => "exited unsuccessfully".to_string(),
    }
}

impl AppError {
    /// Process exit code, following the shell's conventions for child failures
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            AppError::ToolNotFound { .. } => 127,
            AppError::Spawn { .. } => 126,
            AppError::ToolFailed { code, signal, .. } => match (code, signal) {
                (Some(code), _) => *code,
                (None, Some(signal)) => 128 + signal,
                (None, None) => 1,
            },
            AppError::Utf8 { .. }
            | AppError::EmptyOutput { .. }
            | AppError::NonUnicodeEnv { .. }
            | AppError::Config { .. }
            | AppError::Json(_) => 1,
        }
    }

    /// A failed tool has already written its own diagnostics to stderr
    pub(crate) fn should_report(&self) -> bool {
        !matches!(self, AppError::ToolFailed { .. })
    }
}
