//! HTTP client for the hosted CMS document store.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::config::AppConfig;

use super::mutation::{Mutation, MutationRequest, PatchMutation};
use super::{DocumentStore, StoreError};

const PAGE_BY_SLUG_QUERY: &str =
    r#"*[_type == "page" && slug.current == $slug && status == "published"][0]"#;
const DOCUMENTS_OF_TYPE_QUERY: &str = "*[_type == $type]";

/// Stateless handle on the CMS HTTP API. Cheap to clone; safe to share
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct SanityStore {
    client: Client,
    base_url: String,
    dataset: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DocResponse {
    #[serde(default)]
    documents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Value,
}

impl SanityStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.cms_base_url.trim_end_matches('/').to_string(),
            dataset: config.cms_dataset.clone(),
            token: config.cms_api_token.clone(),
        }
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn commit(&self, mutation: Mutation) -> Result<(), StoreError> {
        let url = format!("{}/v1/data/mutate/{}", self.base_url, self.dataset);
        let request = MutationRequest::single(mutation);
        let response = self.authed(self.client.post(&url)).json(&request).send().await?;
        check(response).await?;
        Ok(())
    }

    /// Run a GROQ query. `params` are `$name` query-string parameters with
    /// JSON-encoded values, per the CMS query API.
    async fn run_query(&self, groq: &str, params: &[(&str, &str)]) -> Result<Value, StoreError> {
        let url = format!("{}/v1/data/query/{}", self.base_url, self.dataset);
        let mut pairs: Vec<(String, String)> = vec![("query".to_string(), groq.to_string())];
        for (name, value) in params {
            pairs.push((format!("${name}"), Value::String(value.to_string()).to_string()));
        }
        let response = self
            .authed(self.client.get(&url))
            .query(&pairs)
            .send()
            .await?;
        let response = check(response).await?;
        let body: QueryResponse = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(body.result)
    }
}

impl DocumentStore for SanityStore {
    async fn fetch(&self, id: &str) -> Result<Option<Value>, StoreError> {
        let url = format!("{}/v1/data/doc/{}/{}", self.base_url, self.dataset, id);
        let response = self.authed(self.client.get(&url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check(response).await?;
        let body: DocResponse = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(body.documents.into_iter().next())
    }

    async fn create_if_not_exists(&self, document: Value) -> Result<(), StoreError> {
        self.commit(Mutation::CreateIfNotExists(document)).await
    }

    async fn patch_set(&self, id: &str, set: Value) -> Result<(), StoreError> {
        self.commit(Mutation::Patch(PatchMutation {
            id: id.to_string(),
            set,
        }))
        .await
    }

    async fn documents_of_type(&self, doc_type: &str) -> Result<Vec<Value>, StoreError> {
        match self
            .run_query(DOCUMENTS_OF_TYPE_QUERY, &[("type", doc_type)])
            .await?
        {
            Value::Array(documents) => Ok(documents),
            Value::Null => Ok(Vec::new()),
            other => Err(StoreError::Decode(format!(
                "expected an array of documents, got {other}"
            ))),
        }
    }

    async fn published_page(&self, slug: &str) -> Result<Option<Value>, StoreError> {
        match self.run_query(PAGE_BY_SLUG_QUERY, &[("slug", slug)]).await? {
            Value::Null => Ok(None),
            page => Ok(Some(page)),
        }
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body,
    })
}
