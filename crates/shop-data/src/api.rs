//! Envelope-aware client.

use crate::{ClientRequestBuilder, Envelope, FetchClient, FetchError, Notifier, TracingNotifier};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Sends requests through a [`FetchClient`] and unwraps the service's
/// `{code, message, data}` envelope.
///
/// Every failure, whether transport, HTTP status, envelope code, or payload
/// shape, is passed to the notifier exactly once and then returned. Nothing
/// is retried.
#[derive(Clone)]
pub struct ApiClient {
    fetch: FetchClient,
    notifier: Arc<dyn Notifier>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("fetch", &self.fetch)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Wrap a client, reporting failures through [`TracingNotifier`].
    pub fn new(fetch: FetchClient) -> Self {
        Self {
            fetch,
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the notifier.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// The underlying HTTP client.
    pub fn fetch(&self) -> &FetchClient {
        &self.fetch
    }

    /// GET `path` and unwrap the payload.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.send(self.fetch.get(path)).await
    }

    /// GET `path` with query parameters.
    pub async fn get_with_query<T, K, V>(
        &self,
        path: &str,
        query: impl IntoIterator<Item = (K, V)>,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        K: Into<String>,
        V: Into<String>,
    {
        self.send(self.fetch.get(path).query(query)).await
    }

    /// POST a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.fetch.post(path).json(body);
        self.send_built(request).await
    }

    /// PUT a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.fetch.put(path).json(body);
        self.send_built(request).await
    }

    /// DELETE `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        self.send(self.fetch.delete(path)).await
    }

    /// POST one file as a multipart form.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, FetchError> {
        let request = self.fetch.post(path).multipart_file(field, file_name, bytes);
        self.send(request).await
    }

    /// Send a prepared request and unwrap the envelope.
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: ClientRequestBuilder,
    ) -> Result<T, FetchError> {
        let result = exchange(request).await;
        self.report(result)
    }

    async fn send_built<T: DeserializeOwned>(
        &self,
        request: Result<ClientRequestBuilder, FetchError>,
    ) -> Result<T, FetchError> {
        match request {
            Ok(request) => self.send(request).await,
            Err(e) => self.report(Err(e)),
        }
    }

    fn report<T>(&self, result: Result<T, FetchError>) -> Result<T, FetchError> {
        if let Err(e) = &result {
            tracing::debug!(error = %e, "API call failed");
            self.notifier.notify(&e.user_message());
        }
        result
    }
}

async fn exchange<T: DeserializeOwned>(request: ClientRequestBuilder) -> Result<T, FetchError> {
    let response = request.send().await?.error_for_status()?;
    let envelope: Envelope = response.json()?;
    envelope.into_result()
}
