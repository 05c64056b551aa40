use std::fmt;

#[derive(Debug, Clone)]
pub enum ArchlinksError {
    Validation(String),
    Network(String),
    Serialization(String),
    Clipboard(String),
    ShareUnavailable(String),
    Io(String),
}

impl ArchlinksError {
    pub fn code(&self) -> &'static str {
        match self {
            ArchlinksError::Validation(_) => "E001",
            ArchlinksError::Network(_) => "E002",
            ArchlinksError::Serialization(_) => "E003",
            ArchlinksError::Clipboard(_) => "E004",
            ArchlinksError::ShareUnavailable(_) => "E005",
            ArchlinksError::Io(_) => "E006",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ArchlinksError::Validation(_) => "Validation Error",
            ArchlinksError::Network(_) => "Network Error",
            ArchlinksError::Serialization(_) => "Serialization Error",
            ArchlinksError::Clipboard(_) => "Clipboard Error",
            ArchlinksError::ShareUnavailable(_) => "Share Unavailable",
            ArchlinksError::Io(_) => "I/O Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ArchlinksError::Validation(msg) => msg,
            ArchlinksError::Network(msg) => msg,
            ArchlinksError::Serialization(msg) => msg,
            ArchlinksError::Clipboard(msg) => msg,
            ArchlinksError::ShareUnavailable(msg) => msg,
            ArchlinksError::Io(msg) => msg,
        }
    }

    /// Colored output for one-shot CLI commands
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// Plain output for the TUI status line
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ArchlinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ArchlinksError {}

impl ArchlinksError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::Validation(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::Network(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::Serialization(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::Clipboard(msg.into())
    }

    pub fn share_unavailable<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::ShareUnavailable(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        ArchlinksError::Io(msg.into())
    }
}

impl From<std::io::Error> for ArchlinksError {
    fn from(err: std::io::Error) -> Self {
        ArchlinksError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ArchlinksError {
    fn from(err: serde_json::Error) -> Self {
        ArchlinksError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArchlinksError>;
