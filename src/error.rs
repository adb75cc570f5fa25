// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Locale(LocaleError),
}

/// Problems found while building a text table.
///
/// These never reach the user: the locale layer logs them and falls back to
/// echoing lookup keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// No source document exists for the language code.
    MissingSource(String),

    /// The source document is not valid TOML.
    Parse { language: String, message: String },
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::MissingSource(code) => {
                write!(f, "no text table found for language '{}'", code)
            }
            LocaleError::Parse { language, message } => {
                write!(f, "text table for '{}' is invalid: {}", language, message)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Locale(e) => write!(f, "Locale Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LocaleError> for Error {
    fn from(err: LocaleError) -> Self {
        Error::Locale(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn locale_error_display_names_language() {
        let err: Error = LocaleError::Parse {
            language: "es".to_string(),
            message: "expected `=`".to_string(),
        }
        .into();
        let rendered = format!("{}", err);
        assert!(rendered.starts_with("Locale Error:"));
        assert!(rendered.contains("'es'"));
    }

    #[test]
    fn missing_source_display() {
        let err = LocaleError::MissingSource("fr".to_string());
        assert_eq!(format!("{}", err), "no text table found for language 'fr'");
    }
}
