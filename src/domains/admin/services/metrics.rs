use std::sync::atomic::{AtomicU64, Ordering};

/// API 요청 카운터 (AppState 에 보관, 전역 변수 아님)
/// Request counters owned by the application state
#[derive(Debug, Default)]
pub struct ApiMetrics {
    fileserver_hits: AtomicU64,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_fileserver_hit(&self) {
        self.fileserver_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn fileserver_hits(&self) -> u64 {
        self.fileserver_hits.load(Ordering::Relaxed)
    }

    /// 카운터 초기화, 이전 값 반환
    pub fn reset(&self) -> u64 {
        self.fileserver_hits.swap(0, Ordering::Relaxed)
    }
}
