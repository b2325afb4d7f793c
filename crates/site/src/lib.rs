mod boot;

pub use boot::{boot, spawn_files_summary};

/// Boots the listing script against the browser page once the document is parsed.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    listing_host_web::on_document_ready(|| {
        let host = listing_host_web::build_host_services();
        spawn_files_summary(host.surface, host.probe);
        // Listeners keep the controller alive for the page lifetime.
        let _controller = boot(host.surface, host.store, &host.events);
    });
}
