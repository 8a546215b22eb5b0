#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("timer error: {0}")]
    Timer(String),
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
