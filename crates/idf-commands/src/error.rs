use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandsError {
    /// Every record in the batch was rejected, or the batch was empty.
    /// Fatal: no commands are produced and the refresh command is not
    /// appended.
    #[error("error when trying to create the identity mapping")]
    EmptyBatch,

    #[error("invalid command template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render command: {0}")]
    Render(#[from] handlebars::RenderError),
}

pub type Result<T> = std::result::Result<T, CommandsError>;
