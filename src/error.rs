use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("an author needs a name")]
    MissingAuthorName,
}
