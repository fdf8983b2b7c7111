//! Bridges from the executor-agnostic core to Leptos.
//!
//! DESIGN
//! ======
//! [`use_watch`] is one subscription: the receiver moves into a local task
//! that copies every new value into a signal. On cleanup the component's
//! [`Liveness`] flips, so a change arriving after unmount is dropped instead
//! of written into a disposed signal. The receiver itself is released at the
//! next change.

use std::future::Future;

use leptos::prelude::*;
use linkbio::lifecycle::Liveness;
use linkbio::services::AppServices;
use linkbio::state::AccountSnapshot;
use tokio::sync::watch;

/// Run `fut` on the browser event loop. Native builds (tests, `cargo check`
/// without `csr`) have no event loop and drop it.
pub fn spawn_ui<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);

    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Mirror `rx` into a read-only signal owned by the current component.
pub fn use_watch<T>(mut rx: watch::Receiver<T>) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let signal = RwSignal::new(rx.borrow_and_update().clone());
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.unmount()
    });

    spawn_ui(async move {
        while rx.changed().await.is_ok() {
            if !liveness.is_alive() {
                break;
            }
            let next = rx.borrow_and_update().clone();
            if signal.try_set(next).is_some() {
                break;
            }
        }
    });

    signal.read_only()
}

/// This component's subscription to the shared account snapshot.
pub fn use_account() -> ReadSignal<AccountSnapshot> {
    use_watch(expect_context::<AppServices>().account.subscribe())
}
