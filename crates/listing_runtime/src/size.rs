//! File count and total size aggregation over the page's download links.
//!
//! Each unique address contributes its inline `data-size` hint when that parses, otherwise the
//! `content-length` reported by a metadata probe. All probes are started together and the summary
//! is computed only after every one has settled. A failed or unusable probe contributes zero.

use std::collections::HashSet;

use futures::future::join_all;
use leptos::logging;
use listing_host::{DownloadLink, MetadataProbe, PageElement, PageSurface};

use crate::{format::summary_text, model::SizeSummary};

/// Settled size lookup for one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Resolved(u64),
    Failed,
}

impl ProbeOutcome {
    /// Contribution to the total; failures count as zero.
    pub fn bytes(self) -> u64 {
        match self {
            Self::Resolved(bytes) => bytes,
            Self::Failed => 0,
        }
    }
}

/// Parses a byte count the way the page's integer parsing does: leading whitespace and sign are
/// accepted, parsing stops at the first non-digit, and at least one digit is required.
/// Negative counts are rejected.
pub fn parse_byte_count(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value: u64 = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Keeps the first link of every distinct address, in document order.
pub fn unique_links(links: &[DownloadLink]) -> Vec<&DownloadLink> {
    let mut seen = HashSet::new();
    links
        .iter()
        .filter(|link| seen.insert(link.href.as_str()))
        .collect()
}

async fn resolve_size<M: MetadataProbe + ?Sized>(link: &DownloadLink, probe: &M) -> ProbeOutcome {
    if let Some(bytes) = link.size_hint.as_deref().and_then(parse_byte_count) {
        return ProbeOutcome::Resolved(bytes);
    }

    match probe.content_length(&link.href).await {
        Ok(Some(raw)) => match parse_byte_count(&raw) {
            Some(bytes) => ProbeOutcome::Resolved(bytes),
            None => {
                logging::log!("unusable content-length `{raw}` for {}", link.href);
                ProbeOutcome::Failed
            }
        },
        Ok(None) => ProbeOutcome::Failed,
        Err(err) => {
            logging::log!("size probe for {} failed: {err}", link.href);
            ProbeOutcome::Failed
        }
    }
}

/// Aggregates count and size over the unique addresses of `links`.
///
/// Returns `None` without probing anything when `links` is empty.
pub async fn collect_size_summary<M: MetadataProbe + ?Sized>(
    links: &[DownloadLink],
    probe: &M,
) -> Option<SizeSummary> {
    let unique = unique_links(links);
    if unique.is_empty() {
        return None;
    }

    let outcomes = join_all(unique.iter().map(|link| resolve_size(link, probe))).await;
    let total_bytes = outcomes
        .into_iter()
        .fold(0_u64, |total, outcome| total.saturating_add(outcome.bytes()));

    Some(SizeSummary {
        item_count: unique.len(),
        total_bytes,
    })
}

/// Computes the summary for the page's download links and writes it to the summary target.
///
/// Does nothing when the target element or the links are missing; the target keeps its content.
pub async fn update_files_info<P, M>(surface: &P, probe: &M) -> Option<SizeSummary>
where
    P: PageSurface + ?Sized,
    M: MetadataProbe + ?Sized,
{
    if surface.text(PageElement::FilesInfo).is_none() {
        return None;
    }
    let summary = collect_size_summary(&surface.download_links(), probe).await?;
    surface.set_text(PageElement::FilesInfo, &summary_text(&summary));
    Some(summary)
}
