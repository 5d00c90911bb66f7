use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use mp_core::Envelope;

/// One feed's query logic: an optional local guard plus the engine call.
#[async_trait]
pub(crate) trait FeedQuery<P, T>: Send + Sync + 'static {
    /// Checked on every parameter change before anything else. A `Some`
    /// return settles the feed immediately without touching the engine.
    fn short_circuit(&self, _param: &P) -> Option<Envelope<T>> {
        None
    }

    /// Run the query for `param` and translate the outcome into an
    /// envelope. Must not panic; engine errors become failure envelopes.
    async fn run(&self, param: P) -> Envelope<T>;
}

/// Worker loop shared by all feeds.
///
/// The parameter channel always holds the newest value, so a request only
/// ever runs for the latest parameter. An in-flight request races against
/// further parameter changes and is dropped when superseded; the
/// `has_changed` re-check below closes the window where a change and the
/// response arrive in the same poll, keeping the published envelope
/// last-writer-by-parameter rather than last-writer-by-completion.
pub(crate) async fn drive<P, T, Q>(
    query: Q,
    mut params: watch::Receiver<P>,
    state: watch::Sender<Envelope<T>>,
    debounce: Option<Duration>,
) where
    P: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
    Q: FeedQuery<P, T>,
{
    loop {
        let param = params.borrow_and_update().clone();

        if let Some(settled) = query.short_circuit(&param) {
            state.send_replace(settled);
            if params.changed().await.is_err() {
                return;
            }
            continue;
        }

        if let Some(window) = debounce {
            tokio::select! {
                _ = sleep(window) => {}
                changed = params.changed() => match changed {
                    // The timer restarts from the top with the newer value.
                    Ok(()) => continue,
                    Err(_) => return,
                },
            }
        }

        let previous = state.borrow().clone();
        state.send_replace(previous.into_loading());

        let outcome = {
            let run = query.run(param);
            tokio::pin!(run);
            tokio::select! {
                env = &mut run => Some(env),
                changed = params.changed() => match changed {
                    Ok(()) => None,
                    Err(_) => return,
                },
            }
        };

        let Some(envelope) = outcome else {
            debug!("query superseded mid-flight, dropping its result");
            continue;
        };

        match params.has_changed() {
            Ok(true) => {
                debug!("parameter changed as the query settled, dropping stale result");
                continue;
            }
            Ok(false) => {}
            Err(_) => return,
        }
        state.send_replace(envelope);

        if params.changed().await.is_err() {
            return;
        }
    }
}

/// Ownership handle for a spawned feed worker: parameter input on one side,
/// envelope output on the other. Dropping the handle aborts the worker, so
/// no pending timer or in-flight request outlives its feed.
pub(crate) struct FeedHandle<P, T> {
    params: watch::Sender<P>,
    state: watch::Receiver<Envelope<T>>,
    worker: JoinHandle<()>,
}

impl<P, T> FeedHandle<P, T>
where
    P: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn spawn<Q>(
        query: Q,
        initial: P,
        seed: Envelope<T>,
        debounce: Option<Duration>,
    ) -> Self
    where
        Q: FeedQuery<P, T>,
    {
        let (params, param_rx) = watch::channel(initial);
        let (state_tx, state) = watch::channel(seed);
        let worker = tokio::spawn(drive(query, param_rx, state_tx, debounce));
        Self {
            params,
            state,
            worker,
        }
    }

    pub(crate) fn set(&self, param: P) {
        self.params.send_replace(param);
    }

    /// Re-run the query with the current parameter.
    pub(crate) fn refresh(&self) {
        let current = self.params.borrow().clone();
        self.params.send_replace(current);
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Envelope<T>> {
        self.state.clone()
    }

    pub(crate) fn state(&self) -> Envelope<T> {
        self.state.borrow().clone()
    }

    /// Wait until the feed has settled (not loading, some outcome) and
    /// return that envelope.
    pub(crate) async fn settled(&self) -> Envelope<T> {
        let mut rx = self.state.clone();
        loop {
            let env = rx.borrow_and_update().clone();
            if env.is_settled() {
                return env;
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }
}

impl<P, T> Drop for FeedHandle<P, T> {
    fn drop(&mut self) {
        self.worker.abort();
    }
}
