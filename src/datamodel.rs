use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct SeedAuthor {
    id: i32,
    name: &'static str,
}

struct SeedBook {
    id: i32,
    name: &'static str,
    author_id: i32,
}

static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor {
        id: 1,
        name: "J. K. Rowling",
    },
    SeedAuthor {
        id: 2,
        name: "J. R. R. Tolkien",
    },
    SeedAuthor {
        id: 3,
        name: "Brent Weeks",
    },
];

static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: 1,
        name: "Harry Potter and the Chamber of Secrets",
        author_id: 1,
    },
    SeedBook {
        id: 2,
        name: "Harry Potter and the Prisoner of Azkaban",
        author_id: 1,
    },
    SeedBook {
        id: 3,
        name: "Harry Potter and the Goblet of Fire",
        author_id: 1,
    },
    SeedBook {
        id: 4,
        name: "The Fellowship of the Ring",
        author_id: 2,
    },
    SeedBook {
        id: 5,
        name: "The Two Towers",
        author_id: 2,
    },
    SeedBook {
        id: 6,
        name: "The Return of the King",
        author_id: 2,
    },
    SeedBook {
        id: 7,
        name: "The Way of Shadows",
        author_id: 3,
    },
    SeedBook {
        id: 8,
        name: "Beyond the Shadows",
        author_id: 3,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i32,
    pub name: String,
}

/// `author_id` points at an [`AuthorRecord::id`], but nothing checks that
/// such an author exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(Debug, Default)]
struct Shelves {
    authors: Vec<AuthorRecord>,
    books: Vec<BookRecord>,
}

/// The in-memory record store.
///
/// Both collections are append-only and keep insertion order. Cloning a
/// `Library` hands out another handle to the same records, which is how the
/// server and the tests share one store.
#[derive(Debug, Clone, Default)]
pub struct Library {
    inner: Arc<RwLock<Shelves>>,
}

impl Library {
    pub fn new(authors: Vec<AuthorRecord>, books: Vec<BookRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Shelves { authors, books })),
        }
    }

    /// A store filled with the three authors and eight books the endpoint
    /// starts out with.
    pub fn seeded() -> Self {
        let authors = SEED_AUTHORS
            .iter()
            .map(|a| AuthorRecord {
                id: a.id,
                name: a.name.into(),
            })
            .collect();
        let books = SEED_BOOKS
            .iter()
            .map(|b| BookRecord {
                id: b.id,
                name: b.name.into(),
                author_id: b.author_id,
            })
            .collect();
        Self::new(authors, books)
    }

    // Writers never leave the shelves half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Shelves> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelves> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn book(&self, id: i32) -> Option<BookRecord> {
        self.read().books.iter().find(|b| b.id == id).cloned()
    }

    pub fn author(&self, id: i32) -> Option<AuthorRecord> {
        self.find_author_by_id(id)
    }

    pub fn books(&self) -> Vec<BookRecord> {
        self.read().books.clone()
    }

    pub fn authors(&self) -> Vec<AuthorRecord> {
        self.read().authors.clone()
    }

    pub fn find_author_by_id(&self, author_id: i32) -> Option<AuthorRecord> {
        self.read()
            .authors
            .iter()
            .find(|a| a.id == author_id)
            .cloned()
    }

    pub fn find_books_by_author_id(&self, author_id: i32) -> Vec<BookRecord> {
        self.read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn add_book(&self, author_id: i32, name: String) -> BookRecord {
        let mut shelves = self.write();
        let book = BookRecord {
            id: next_id(shelves.books.len()),
            name,
            author_id,
        };
        tracing::info!(id = book.id, author_id, name = %book.name, "Adding book");
        shelves.books.push(book.clone());
        book
    }

    pub fn add_author(&self, name: String) -> AuthorRecord {
        let mut shelves = self.write();
        let author = AuthorRecord {
            id: next_id(shelves.authors.len()),
            name,
        };
        tracing::info!(id = author.id, name = %author.name, "Adding author");
        shelves.authors.push(author.clone());
        author
    }
}

/// Ids are handed out as "current length + 1", so they only stay unique as
/// long as nothing is ever removed.
fn next_id(len: usize) -> i32 {
    i32::try_from(len).map_or(i32::MAX, |len| len.saturating_add(1))
}
