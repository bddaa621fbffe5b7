mod io;
mod run;
mod selection;

pub use io::IoError;
pub use run::RunError;
pub use selection::SelectionError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Run(#[from] RunError),
}

pub type Result<T> = std::result::Result<T, Error>;
