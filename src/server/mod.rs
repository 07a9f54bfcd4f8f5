use async_graphql::http::GraphiQLSource;
use async_graphql::parser::parse_query;
use async_graphql::parser::types::OperationType;
use async_graphql::{EmptySubscription, Request, Response, Schema, ServerError};
use async_graphql_axum::rejection::GraphQLRejection;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;

use crate::datamodel::Library;

mod records;
mod schema;

use schema::{Mutation, Query};

pub const GRAPHQL_PATH: &str = "/graphql";

pub type LibrarySchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(library: Library) -> LibrarySchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(library)
        .finish()
}

fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.contains("text/html"))
}

/// Whether the operation the request would run is a mutation. Documents that
/// do not parse are left for `execute` to report.
fn selects_mutation(req: &Request) -> bool {
    let Ok(document) = parse_query(&req.query) else {
        return false;
    };
    document.operations.iter().any(|(name, operation)| {
        let selected = match &req.operation_name {
            Some(wanted) => name.is_some_and(|name| name.as_str() == wanted.as_str()),
            None => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}

async fn execute(schema: &LibrarySchema, req: Request) -> GraphQLResponse {
    tracing::debug!(operation = ?req.operation_name, "executing GraphQL request");

    let res = schema.execute(req).await;
    if res.is_err() {
        tracing::debug!(errors = ?res.errors, "GraphQL request finished with errors");
    }
    res.into()
}

/// Browsers asking for HTML get the GraphiQL explorer. Everything else is a
/// query passed in the query string, which must not be a mutation.
#[axum::debug_handler]
async fn graphql_get(
    State(schema): State<LibrarySchema>,
    headers: HeaderMap,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> axum::response::Response {
    if accepts_html(&headers) {
        return graphiql().into_response();
    }

    let req = match req {
        Ok(req) => req.into_inner(),
        Err(rejection) => return rejection.into_response(),
    };

    if selects_mutation(&req) {
        tracing::debug!("refusing mutation sent over GET");
        let res = Response::from_errors(vec![ServerError::new(
            "Can only perform a mutation operation from a POST request.",
            None,
        )]);
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, POST")],
            GraphQLResponse::from(res),
        )
            .into_response();
    }

    execute(&schema, req).await.into_response()
}

#[axum::debug_handler]
async fn graphql_post(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    execute(&schema, req.into_inner()).await
}

pub fn make_app(library: Library) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(build_schema(library))
}
