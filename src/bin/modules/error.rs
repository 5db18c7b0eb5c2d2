use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core efield library.
    #[error("Solver error: {0}")]
    Solver(#[from] efield::EfieldError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Errors parsing the boundary conditions TOML file.
    #[error("Failed to parse boundary conditions TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
