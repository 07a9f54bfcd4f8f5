use async_graphql::{ComplexObject, Context, Object, SimpleObject};

use crate::datamodel::{AuthorRecord, BookRecord};
use crate::error::LibraryError;

use super::records::Records;

/// A book written by an author
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Book {
    id: i32,
    name: String,
    author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author of the book
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        ctx.find_author_by_id(self.author_id)
    }
}

impl From<BookRecord> for Book {
    fn from(book: BookRecord) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
        }
    }
}

/// The author of a book
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

#[ComplexObject]
impl Author {
    /// All the books written by this author
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.find_books_by_author_id(self.id)
    }
}

impl From<AuthorRecord> for Author {
    fn from(author: AuthorRecord) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

pub struct Query;

/// Root Query
#[Object]
impl Query {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        ctx.library().book(id?).map(Book::from)
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        ctx.library().author(id?).map(Author::from)
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.library().books().into_iter().map(Book::from).collect()
    }

    /// List of all the author
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        ctx.library().authors().into_iter().map(Author::from).collect()
    }
}

pub struct Mutation;

/// RootMutation
#[Object]
impl Mutation {
    /// Adds a book to the array of books
    async fn add_book(&self, ctx: &Context<'_>, author_id: i32, name: String) -> Book {
        ctx.library().add_book(author_id, name).into()
    }

    /// Adds an author to the array of authors
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
    ) -> async_graphql::Result<Author> {
        let name = name.ok_or(LibraryError::MissingAuthorName)?;
        Ok(ctx.library().add_author(name).into())
    }
}
