use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output file already exists: {path}")]
    OutputExists { path: String },

    #[error("No files to bundle")]
    NoFilesMatched { filter: String },

    #[error("file path invalid")]
    InvalidOutputDirectory { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },
}

impl BundleError {
    /// Soft errors end the run with a printed notice and a zero exit
    /// code; everything else is a real failure.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            BundleError::OutputExists { .. }
                | BundleError::NoFilesMatched { .. }
                | BundleError::InvalidOutputDirectory { .. }
        )
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for BundleError {
    fn user_message(&self) -> String {
        match self {
            BundleError::OutputExists { path } => {
                format!(
                    "Output file already exists: {}. Please choose a different name.",
                    path
                )
            }
            BundleError::NoFilesMatched { filter } => {
                format!("No files to bundle (filter: {})", filter)
            }
            BundleError::InvalidOutputDirectory { .. } => "file path invalid".to_string(),
            BundleError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            BundleError::InvalidPath { path } => {
                format!("Invalid path: {}", path)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            BundleError::OutputExists { .. } => Some(
                "Remove the existing file or pass a different path with --output.".to_string(),
            ),
            BundleError::NoFilesMatched { .. } => Some(
                "Try --language all, or check that the working directory contains matching files."
                    .to_string(),
            ),
            BundleError::InvalidOutputDirectory { path } => Some(format!(
                "The directory for {} does not exist. Create it first or choose another path.",
                path
            )),
            BundleError::Config { .. } => Some(
                "Check your configuration file syntax and ensure all fields are valid.".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for BundleError {
    fn from(error: toml::de::Error) -> Self {
        BundleError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BundleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = BundleError::OutputExists {
            path: "out.txt".to_string(),
        };
        assert!(error.user_message().contains("already exists"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_invalid_output_directory_message() {
        let error = BundleError::InvalidOutputDirectory {
            path: "missing/out.txt".to_string(),
        };
        assert_eq!(error.user_message(), "file path invalid");
    }

    #[test]
    fn test_soft_error_classification() {
        let soft = [
            BundleError::OutputExists {
                path: "x".to_string(),
            },
            BundleError::NoFilesMatched {
                filter: "cs".to_string(),
            },
            BundleError::InvalidOutputDirectory {
                path: "x".to_string(),
            },
        ];
        for error in &soft {
            assert!(error.is_soft(), "should be soft: {}", error);
        }

        assert!(!BundleError::Config {
            message: "bad".to_string()
        }
        .is_soft());
        assert!(
            !BundleError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")).is_soft()
        );
    }
}
