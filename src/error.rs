use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not determine the home directory")]
    NoHome,

    #[error("cannot create vault {}: {source}", path.display())]
    CreateVault { path: PathBuf, source: io::Error },

    #[error("cannot read vault {}: {source}", path.display())]
    ReadVault { path: PathBuf, source: io::Error },

    #[error("note {0} not found")]
    NotFound(String),

    #[error("note {0} already exists")]
    AlreadyExists(String),

    #[error("invalid note name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("cannot read {name}: {source}")]
    Read { name: String, source: io::Error },

    #[error("cannot open {name}: {source}")]
    Open { name: String, source: io::Error },

    #[error("cannot save {name}: {source}")]
    Save { name: String, source: io::Error },

    #[error("cannot close {name}: {source}")]
    Close { name: String, source: io::Error },

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Startup preconditions and terminal failures end the process; everything
    /// else is reported in the active view.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::NoHome | Error::CreateVault { .. } | Error::ReadVault { .. } | Error::Terminal(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;

    #[test]
    fn fatal_classification() {
        assert!(Error::NoHome.is_fatal());
        assert!(Error::ReadVault { path: "/x".into(), source: io::ErrorKind::Other.into() }.is_fatal());
        assert!(!Error::AlreadyExists(String::from("a.md")).is_fatal());
        assert!(!Error::Save { name: String::from("a.md"), source: io::ErrorKind::Other.into() }
            .is_fatal());
    }

    #[test]
    fn messages_name_the_note() {
        let error = Error::InvalidName { name: String::from("a/b"), reason: "contains '/'" };
        assert_eq!(error.to_string(), "invalid note name \"a/b\": contains '/'");
        assert_eq!(Error::NotFound(String::from("x.md")).to_string(), "note x.md not found");
    }
}
