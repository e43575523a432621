//! Document downloads from the download service.
//!
//! Downloads are tracked per stored path in a [`DownloadRegistry`]. A path that
//! is already downloading cannot be started again, different paths run
//! concurrently, and every in-flight download can be aborted at once when the
//! page goes away.

use crate::shared::config::app_config;
use crate::shared::http::{self, ApiError};
use contracts::shared::documents::document_file_name;
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// In-flight downloads keyed by stored document path.
///
/// Each entry carries the ticket number it was started with, so a stale
/// `finish` from a cancelled run never drops a newer download of the same path.
#[derive(Debug, Default)]
pub struct DownloadRegistry {
    in_flight: HashMap<String, (u64, AbortHandle)>,
    next_ticket: u64,
}

/// Handed out by [`DownloadRegistry::begin`]
#[derive(Debug)]
pub struct DownloadTicket {
    pub number: u64,
    pub registration: AbortRegistration,
}

impl DownloadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a download; `None` when the path is already downloading
    pub fn begin(&mut self, path: &str) -> Option<DownloadTicket> {
        if self.in_flight.contains_key(path) {
            return None;
        }
        let (handle, registration) = AbortHandle::new_pair();
        self.next_ticket += 1;
        let number = self.next_ticket;
        self.in_flight.insert(path.to_string(), (number, handle));
        Some(DownloadTicket {
            number,
            registration,
        })
    }

    /// Forget a finished download (success, failure or abort) if `ticket`
    /// still owns the path
    pub fn finish(&mut self, path: &str, ticket: u64) {
        if matches!(self.in_flight.get(path), Some((number, _)) if *number == ticket) {
            self.in_flight.remove(path);
        }
    }

    pub fn cancel(&mut self, path: &str) -> bool {
        match self.in_flight.remove(path) {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Abort everything; returns how many downloads were stopped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.in_flight.len();
        for (_, (_, handle)) in self.in_flight.drain() {
            handle.abort();
        }
        count
    }

    pub fn is_downloading(&self, path: &str) -> bool {
        self.in_flight.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }
}

/// Outcome of a tracked download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved,
    Aborted,
}

/// Fetch a stored document and hand it to the browser as a file.
///
/// `registration` comes from a [`DownloadTicket`]; aborting its handle
/// resolves this future with [`DownloadOutcome::Aborted`].
pub async fn download_document(
    path: String,
    registration: AbortRegistration,
) -> Result<DownloadOutcome, ApiError> {
    let fetch = fetch_and_save(path);
    match Abortable::new(fetch, registration).await {
        Ok(result) => result.map(|_| DownloadOutcome::Saved),
        Err(_) => Ok(DownloadOutcome::Aborted),
    }
}

async fn fetch_and_save(path: String) -> Result<(), ApiError> {
    let url = app_config().download_url(&path);
    let response = http::get_raw(&url).await?;
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let blob = bytes_to_blob(&bytes, &content_type)?;
    save_blob(&blob, document_file_name(&path)).map_err(ApiError::Decode)
}

fn bytes_to_blob(bytes: &[u8], content_type: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(content_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ApiError::Decode(format!("failed to create blob: {:?}", e)))
}

/// Save a blob through a temporary anchor element
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn test_same_path_is_not_started_twice() {
        let mut registry = DownloadRegistry::new();
        let ticket = registry.begin("docs/msds.pdf").unwrap();
        assert!(registry.begin("docs/msds.pdf").is_none());
        assert!(registry.is_downloading("docs/msds.pdf"));

        registry.finish("docs/msds.pdf", ticket.number);
        assert!(!registry.is_downloading("docs/msds.pdf"));
        assert!(registry.begin("docs/msds.pdf").is_some());
    }

    #[test]
    fn test_unrelated_paths_run_concurrently() {
        let mut registry = DownloadRegistry::new();
        assert!(registry.begin("a.pdf").is_some());
        assert!(registry.begin("b.pdf").is_some());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_cancel_aborts_registered_future() {
        let mut registry = DownloadRegistry::new();
        let ticket = registry.begin("a.pdf").unwrap();
        assert!(registry.cancel("a.pdf"));
        assert!(!registry.cancel("a.pdf"));

        let result = block_on(Abortable::new(pending::<()>(), ticket.registration));
        assert!(result.is_err());
    }

    #[test]
    fn test_late_finish_of_cancelled_run_keeps_restarted_download() {
        let mut registry = DownloadRegistry::new();
        let first = registry.begin("a.pdf").unwrap();
        assert!(registry.cancel("a.pdf"));
        let second = registry.begin("a.pdf").unwrap();
        assert_ne!(first.number, second.number);

        registry.finish("a.pdf", first.number);
        assert!(registry.is_downloading("a.pdf"));
        assert!(registry.begin("a.pdf").is_none());

        assert!(registry.cancel("a.pdf"));
        assert!(block_on(Abortable::new(pending::<()>(), second.registration)).is_err());
    }

    #[test]
    fn test_cancel_all_on_leave() {
        let mut registry = DownloadRegistry::new();
        let first = registry.begin("a.pdf").unwrap();
        let second = registry.begin("b.pdf").unwrap();

        assert_eq!(registry.cancel_all(), 2);
        assert!(registry.is_empty());
        assert!(block_on(Abortable::new(pending::<()>(), first.registration)).is_err());
        assert!(block_on(Abortable::new(pending::<()>(), second.registration)).is_err());
    }

    #[test]
    fn test_finished_download_is_unaffected_by_cancel_all() {
        let mut registry = DownloadRegistry::new();
        let ticket = registry.begin("a.pdf").unwrap();
        let result = block_on(Abortable::new(ready(7), ticket.registration));
        registry.finish("a.pdf", ticket.number);
        assert_eq!(result, Ok(7));
        assert_eq!(registry.cancel_all(), 0);
    }
}
