use std::fmt;

/// What went wrong, independent of the wording.
///
/// The store itself never fails: unknown ids are no-ops and blank text is
/// rejected before a command is dispatched. Every value here is raised at
/// the boundary around the store, not inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller-side rejection before dispatch: blank task text, a
    /// malformed command line, an unknown theme name.
    Validation,
    /// An id-addressed command named a task that is not in the
    /// collection. The collection is left unchanged.
    NotFound,
    /// Persisted config that could not be decoded.
    Data,
    /// Underlying file or terminal I/O failed.
    Io,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Validation => "invalid_input",
            Self::NotFound => "not_found",
            Self::Data => "invalid_data",
            Self::Io => "io_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn not_found(id: u32) -> Self {
        Self {
            kind: ErrorKind::NotFound,
            message: format!("no task with id {id}"),
        }
    }

    pub fn data<M: Into<String>>(message: M) -> Self {
        Self {
            kind: ErrorKind::Data,
            message: message.into(),
        }
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::{AppError, ErrorKind};

    #[test]
    fn constructors_set_the_matching_kind() {
        assert_eq!(AppError::validation("blank").kind(), ErrorKind::Validation);
        assert_eq!(AppError::not_found(7).kind(), ErrorKind::NotFound);
        assert_eq!(AppError::data("bad json").kind(), ErrorKind::Data);
        assert_eq!(AppError::io("broken pipe").kind(), ErrorKind::Io);
    }

    #[test]
    fn not_found_names_the_missing_id() {
        let err = AppError::not_found(42);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.message(), "no task with id 42");
    }

    #[test]
    fn display_pairs_code_and_message() {
        let err = AppError::validation("task text is required");
        assert_eq!(err.to_string(), "invalid_input - task text is required");
    }
}
