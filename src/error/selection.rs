use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("no tests found")]
    Empty,

    #[error("failed to launch finder '{command}': {source}")]
    FinderLaunch {
        command: String,
        source: std::io::Error,
    },

    #[error("finder '{command}' exited with {status}")]
    FinderFailed { command: String, status: String },
}

impl SelectionError {
    pub fn finder_launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::FinderLaunch {
            command: command.into(),
            source,
        }
    }

    pub fn finder_failed(command: impl Into<String>, status: impl ToString) -> Self {
        Self::FinderFailed {
            command: command.into(),
            status: status.to_string(),
        }
    }
}
