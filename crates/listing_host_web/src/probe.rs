//! `fetch`-backed metadata probe.

use listing_host::{MetadataProbe, ProbeFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Probe issuing a `HEAD` request and reading the `content-length` response header.
///
/// Non-success statuses are reported as errors so that error pages never count toward sizes.
pub struct WebMetadataProbe;

impl MetadataProbe for WebMetadataProbe {
    fn content_length<'a>(
        &'a self,
        url: &'a str,
    ) -> ProbeFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                head_content_length(url).await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = url;
                Ok(None)
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn head_content_length(url: &str) -> Result<Option<String>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let init = web_sys::RequestInit::new();
    init.set_method("HEAD");

    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(|e| format!("HEAD {url} failed: {e:?}"))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| format!("HEAD {url} returned a non-response value"))?;
    if !response.ok() {
        return Err(format!("HEAD {url} returned status {}", response.status()));
    }

    response
        .headers()
        .get("content-length")
        .map_err(|e| format!("HEAD {url} headers unreadable: {e:?}"))
}
