//! Network requests to the blob service.

use gloo_net::http::Request;
use url::form_urlencoded;

use crate::config::{DELETE_ENDPOINT, DELETE_KEYS_FIELD, SERVE_ENDPOINT};
use crate::core::DeleteApi;
use crate::core::error::RequestError;

/// [`DeleteApi`] that posts to the service's bulk delete endpoint.
///
/// No timeout and no retry: the request runs until the browser settles it.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpDeleteApi;

impl DeleteApi for HttpDeleteApi {
    async fn delete(&self, keys: &[&str]) -> Result<(), RequestError> {
        let response = Request::post(DELETE_ENDPOINT)
            .header(
                "Content-Type",
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .body(delete_form_body(keys))?
            .send()
            .await?;

        if !response.ok() {
            return Err(RequestError::Http(response.status()));
        }
        Ok(())
    }
}

/// Form body carrying the comma-joined keys.
pub fn delete_form_body(keys: &[&str]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(DELETE_KEYS_FIELD, &keys.join(","))
        .finish()
}

/// Download link for a blob.
pub fn serve_url(key: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("key", key)
        .finish();
    format!("{}?{}", SERVE_ENDPOINT, query)
}
