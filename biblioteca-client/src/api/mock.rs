//! Mock HTTP client for testing.
//!
//! Returns canned responses or errors and records every request so tests can
//! assert on exactly what went over the wire.

use super::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::error::HttpError;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Notify;

type Outcome = Result<HttpResponse, HttpError>;

/// One-shot response, optionally held until its gate is notified
#[derive(Debug)]
struct Queued {
    outcome: Outcome,
    gate: Option<Arc<Notify>>,
}

/// Mock HTTP client for testing.
///
/// Queued one-shot responses for a method and URL are consumed first, in
/// the order they were queued. After that, responses are matched by method
/// and URL, then by URL alone, then the default. Unmatched requests get a
/// 404.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response("http://api.test/livros", HttpResponse::new(200, "[]"));
/// let api = LivrosApi::new(ApiClient::new("http://api.test", Arc::new(client.clone())));
/// api.listar().await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<(Option<Method>, String), Outcome>>>,
    default_response: Arc<Mutex<Option<Outcome>>>,
    queued: Arc<Mutex<HashMap<(Method, String), VecDeque<Queued>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to any method on `url`
    pub fn set_response(&self, url: &str, response: HttpResponse) {
        self.insert(None, url, Ok(response));
    }

    /// Respond to `method` on `url`
    pub fn on(&self, method: Method, url: &str, response: HttpResponse) {
        self.insert(Some(method), url, Ok(response));
    }

    /// Fail any request to `url` at the transport level
    pub fn set_error(&self, url: &str, error: HttpError) {
        self.insert(None, url, Err(error));
    }

    /// Answer the next matching request once with `response`
    pub fn enqueue(&self, method: Method, url: &str, response: HttpResponse) {
        self.push_queued(method, url, Queued { outcome: Ok(response), gate: None });
    }

    /// Like [`enqueue`](Self::enqueue), but the request is recorded and then
    /// held until the returned gate is notified
    pub fn enqueue_gated(&self, method: Method, url: &str, response: HttpResponse) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push_queued(
            method,
            url,
            Queued {
                outcome: Ok(response),
                gate: Some(gate.clone()),
            },
        );
        gate
    }

    pub fn set_default_response(&self, response: HttpResponse) {
        *self.default_response.lock().unwrap_or_else(PoisonError::into_inner) = Some(Ok(response));
    }

    pub fn set_default_error(&self, error: HttpError) {
        *self.default_response.lock().unwrap_or_else(PoisonError::into_inner) = Some(Err(error));
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Recorded requests with the given method
    pub fn requests_with(&self, method: Method) -> Vec<HttpRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn insert(&self, method: Option<Method>, url: &str, outcome: Outcome) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method, url.to_string()), outcome);
    }

    fn push_queued(&self, method: Method, url: &str, queued: Queued) {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((method, url.to_string()))
            .or_default()
            .push_back(queued);
    }

    fn pop_queued(&self, request: &HttpRequest) -> Option<Queued> {
        self.queued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&(request.method, request.url.clone()))
            .and_then(VecDeque::pop_front)
    }

    fn outcome_for(&self, request: &HttpRequest) -> Outcome {
        let responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
        responses
            .get(&(Some(request.method), request.url.clone()))
            .or_else(|| responses.get(&(None, request.url.clone())))
            .cloned()
            .or_else(|| {
                self.default_response
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone()
            })
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let (outcome, gate) = match self.pop_queued(&request) {
            Some(queued) => (queued.outcome, queued.gate),
            None => (self.outcome_for(&request), None),
        };
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(request);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, url: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: url.to_string(),
            headers: Default::default(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_method_specific_match_wins() {
        let client = MockHttpClient::new();
        client.set_response("http://t/livros/1", HttpResponse::new(200, "any"));
        client.on(Method::Delete, "http://t/livros/1", HttpResponse::new(204, ""));

        let get = client.send(request(Method::Get, "http://t/livros/1")).await.unwrap();
        let delete = client.send(request(Method::Delete, "http://t/livros/1")).await.unwrap();
        assert_eq!(get.status, 200);
        assert_eq!(delete.status, 204);
        assert_eq!(client.requests_with(Method::Delete).len(), 1);
    }

    #[tokio::test]
    async fn test_queued_responses_are_consumed_in_order() {
        let client = MockHttpClient::new();
        client.set_response("http://t/livros", HttpResponse::new(200, "fixed"));
        client.enqueue(Method::Get, "http://t/livros", HttpResponse::new(201, "first"));
        client.enqueue(Method::Get, "http://t/livros", HttpResponse::new(202, "second"));

        let statuses = [
            client.send(request(Method::Get, "http://t/livros")).await.unwrap().status,
            client.send(request(Method::Get, "http://t/livros")).await.unwrap().status,
            client.send(request(Method::Get, "http://t/livros")).await.unwrap().status,
        ];
        assert_eq!(statuses, [201, 202, 200]);

        client.clear_requests();
        assert!(client.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_gated_response_waits_for_release() {
        let client = MockHttpClient::new();
        let gate = client.enqueue_gated(Method::Get, "http://t/livros", HttpResponse::new(200, "[]"));

        let pending = tokio::spawn({
            let client = client.clone();
            async move { client.send(request(Method::Get, "http://t/livros")).await }
        });
        while client.get_requests().is_empty() {
            tokio::task::yield_now().await;
        }
        assert!(!pending.is_finished());

        gate.notify_one();
        assert_eq!(pending.await.unwrap().unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_unmatched_is_not_found() {
        let client = MockHttpClient::new();
        let response = client.send(request(Method::Get, "http://t/nope")).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(client.get_requests().len(), 1);
    }
}
