use cynic::http::ReqwestExt;
use cynic::serde;
use reqwest::{Url, header};
use serde_json::{Value, json};

/// Talks to a running endpoint, either through the typed operations below or
/// with hand-written documents.
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub async fn run<ResponseData, Vars>(
        &self,
        op: cynic::Operation<ResponseData, Vars>,
    ) -> cynic::GraphQlResponse<ResponseData>
    where
        Vars: serde::Serialize,
        ResponseData: serde::de::DeserializeOwned + 'static,
    {
        self.http
            .post(self.endpoint.clone())
            .run_graphql(op)
            .await
            .unwrap()
    }

    /// POSTs `document` as-is and returns the raw JSON body.
    pub async fn post_document(&self, document: &str) -> Value {
        self.http
            .post(self.endpoint.clone())
            .json(&json!({ "query": document }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    /// GETs the endpoint, passing `document` in the query string if given.
    pub async fn get(&self, document: Option<&str>, accept: &str) -> reqwest::Response {
        let mut req = self
            .http
            .get(self.endpoint.clone())
            .header(header::ACCEPT, accept);
        if let Some(document) = document {
            req = req.query(&[("query", document)]);
        }
        req.send().await.unwrap()
    }
}

#[cynic::schema("library")]
mod schema {}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query")]
pub struct Catalog {
    pub books: Vec<BookListing>,
    pub authors: Vec<AuthorListing>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct LookupVariables {
    pub id: Option<i32>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "LookupVariables")]
pub struct BookLookup {
    #[arguments(id: $id)]
    pub book: Option<BookWithAuthor>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "LookupVariables")]
pub struct AuthorLookup {
    #[arguments(id: $id)]
    pub author: Option<AuthorWithBooks>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddBookVariables {
    pub author_id: i32,
    pub name: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddBookVariables")]
pub struct AddBook {
    #[arguments(authorId: $author_id, name: $name)]
    pub add_book: BookWithAuthor,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddAuthorVariables {
    pub name: Option<String>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddAuthorVariables")]
pub struct AddAuthor {
    #[arguments(name: $name)]
    pub add_author: AuthorListing,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Book")]
pub struct BookListing {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Author")]
pub struct AuthorListing {
    pub id: i32,
    pub name: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Book")]
pub struct BookWithAuthor {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
    pub author: Option<AuthorListing>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Author")]
pub struct AuthorWithBooks {
    pub id: i32,
    pub name: String,
    pub books: Vec<BookListing>,
}
