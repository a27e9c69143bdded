use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct ReplyMetrics {
    replies_total: AtomicU64,
    catalog_hits_total: AtomicU64,
    catalog_misses_total: AtomicU64,
    clarification_total: AtomicU64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub replies_total: u64,
    pub catalog_hits_total: u64,
    pub catalog_misses_total: u64,
    pub clarification_total: u64,
}

impl ReplyMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_reply(&self) {
        self.replies_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_catalog_hit(&self) {
        self.catalog_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_catalog_miss(&self) {
        self.catalog_misses_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_clarification(&self) {
        self.clarification_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            replies_total: self.replies_total.load(Ordering::Relaxed),
            catalog_hits_total: self.catalog_hits_total.load(Ordering::Relaxed),
            catalog_misses_total: self.catalog_misses_total.load(Ordering::Relaxed),
            clarification_total: self.clarification_total.load(Ordering::Relaxed),
        }
    }
}

/// Crates whose `info` events are shown when `RUST_LOG` is unset.
const LIBRARY_TARGETS: [&str; 3] = [
    "medassist_agents",
    "medassist_catalog",
    "medassist_observability",
];

fn default_directives(service_name: &str) -> String {
    std::iter::once(service_name)
        .chain(LIBRARY_TARGETS)
        .map(|target| format!("{target}=info"))
        .collect::<Vec<_>>()
        .join(",")
}

/// JSON logs on stderr, filtered by `RUST_LOG` when set. Only the first call
/// installs a subscriber.
pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let from_env = EnvFilter::try_from_default_env().ok();
        let filter_source = if from_env.is_some() { "RUST_LOG" } else { "default" };
        let filter = from_env.unwrap_or_else(|| EnvFilter::new(default_directives(service_name)));

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!(
            service = service_name,
            filter = filter_source,
            "tracing initialized"
        );
    });
}
