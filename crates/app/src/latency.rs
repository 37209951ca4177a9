//! Artificial delays for the simulated back-office calls.

/// Wait `ms` milliseconds. Zero returns immediately.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Wait `ms` milliseconds. Zero returns immediately.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    if ms == 0 {
        return;
    }
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
