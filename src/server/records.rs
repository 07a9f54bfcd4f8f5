use async_graphql::Context;

use crate::datamodel::Library;

use super::schema::{Author, Book};

/// Gives resolvers access to the [`Library`] the schema was built with.
pub trait Records {
    fn library(&self) -> &Library;

    fn find_author_by_id(&self, author_id: i32) -> Option<Author> {
        self.library().find_author_by_id(author_id).map(Author::from)
    }

    fn find_books_by_author_id(&self, author_id: i32) -> Vec<Book> {
        self.library()
            .find_books_by_author_id(author_id)
            .into_iter()
            .map(Book::from)
            .collect()
    }
}

impl Records for Context<'_> {
    fn library(&self) -> &Library {
        self.data_unchecked::<Library>()
    }
}
