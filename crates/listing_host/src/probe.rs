//! Remote file metadata probe contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`MetadataProbe`].
pub type ProbeFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that asks a remote address for its size without downloading the body.
pub trait MetadataProbe {
    /// Returns the raw `content-length` header for `url`, or `None` when the response has none.
    ///
    /// The value is returned unparsed; callers own the numeric interpretation.
    fn content_length<'a>(
        &'a self,
        url: &'a str,
    ) -> ProbeFuture<'a, Result<Option<String>, String>>;
}

impl<P: MetadataProbe + ?Sized> MetadataProbe for Rc<P> {
    fn content_length<'a>(
        &'a self,
        url: &'a str,
    ) -> ProbeFuture<'a, Result<Option<String>, String>> {
        (**self).content_length(url)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe for targets without network access. Every address reports no size.
pub struct NoopMetadataProbe;

impl MetadataProbe for NoopMetadataProbe {
    fn content_length<'a>(
        &'a self,
        _url: &'a str,
    ) -> ProbeFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted probe that answers from a per-address table and records every request.
///
/// Addresses without a scripted answer fail with a "network error".
pub struct MemoryMetadataProbe {
    responses: Rc<RefCell<HashMap<String, Result<Option<String>, String>>>>,
    requested: Rc<RefCell<Vec<String>>>,
}

impl MemoryMetadataProbe {
    /// Scripts a successful response carrying `content_length` for `url`.
    pub fn respond(&self, url: &str, content_length: Option<&str>) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Ok(content_length.map(str::to_string)));
    }

    /// Scripts a failed request for `url`.
    pub fn fail(&self, url: &str, message: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Err(message.to_string()));
    }

    /// Addresses probed so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl MetadataProbe for MemoryMetadataProbe {
    fn content_length<'a>(
        &'a self,
        url: &'a str,
    ) -> ProbeFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("network error: {url}")))
        })
    }
}
