//! One-shot browser timers for simulated latency and transient messages.

use std::time::Duration;

/// Run `f` once after `delay`. No-op during SSR.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
