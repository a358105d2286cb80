use crate::core::{ProcessConfig, RequestProcessor, Resolved, Result};
use rayon::prelude::*;

/// One raw parameter string to resolve against one image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub params: String,
    pub image_path: String,
}

impl Request {
    pub fn new(params: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            image_path: image_path.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchStats {
    /// One entry per request, in request order.
    pub resolved: Vec<Result<Resolved>>,
    pub explicit_count: usize,
    pub named_count: usize,
    pub errors: Vec<(String, String)>,
}

pub struct BatchProcessor {
    processor: RequestProcessor,
    thread_pool: Option<rayon::ThreadPool>,
}

impl BatchProcessor {
    /// `max_threads == 0` runs on the global rayon pool.
    pub fn new(config: ProcessConfig, max_threads: usize) -> anyhow::Result<Self> {
        let processor = RequestProcessor::new(config)?;

        let thread_pool = if max_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads)
                .build()?;
            Some(pool)
        } else {
            None
        };

        Ok(Self {
            processor,
            thread_pool,
        })
    }

    pub fn resolve_all(&self, requests: &[Request]) -> BatchStats {
        if requests.is_empty() {
            log::warn!("No requests to resolve");
            return BatchStats::default();
        }

        let resolve = || -> Vec<Result<Resolved>> {
            requests
                .par_iter()
                .map(|request| self.processor.resolve(&request.params, &request.image_path))
                .collect()
        };

        let resolved = match &self.thread_pool {
            Some(pool) => pool.install(resolve),
            None => resolve(),
        };

        let mut stats = BatchStats::default();
        for (request, result) in requests.iter().zip(&resolved) {
            match result {
                Ok(Resolved::Explicit { .. }) => stats.explicit_count += 1,
                Ok(Resolved::Named { .. }) => stats.named_count += 1,
                Err(e) => {
                    log::warn!(
                        "Failed to resolve {:?} for {}: {}",
                        request.params,
                        request.image_path,
                        e
                    );
                    let label = format!("{}?{}", request.image_path, request.params);
                    stats.errors.push((label, e.to_string()));
                }
            }
        }
        stats.resolved = resolved;

        log::info!(
            "Resolved {} requests ({} explicit, {} named, {} failed)",
            requests.len(),
            stats.explicit_count,
            stats.named_count,
            stats.errors.len()
        );

        stats
    }
}
