//! The session object presentation layers talk to.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::analysis::{AnalysisBackend, AnalysisError, AnalysisResult, RequestBuilder, ToneId};
use crate::mvi::Reducer;

use super::intent::SessionIntent;
use super::reducer::SessionReducer;
use super::state::{SessionModel, SessionState, SessionView};

/// How a call to [`AnalysisSession::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Another request was in flight; nothing changed.
    Busy,
    /// Input failed validation; the session is `Failed` and nothing was sent.
    Invalid,
    /// The response was applied; the session is `Success` or `Failed`.
    Applied,
    /// The session was reset while waiting; the response was dropped.
    Stale,
}

/// Owns the lifecycle state and orchestrates the single in-flight call.
///
/// `submit` and `reset` take `&self` so a caller can reset while a submit
/// is suspended on the network. The state lock is never held across an
/// await point.
pub struct AnalysisSession {
    backend: Arc<dyn AnalysisBackend>,
    builder: RequestBuilder,
    model: Mutex<SessionModel>,
    views: watch::Sender<SessionView>,
}

impl AnalysisSession {
    pub fn new(backend: Arc<dyn AnalysisBackend>, builder: RequestBuilder) -> Self {
        let (views, _) = watch::channel(SessionView::default());
        Self {
            backend,
            builder,
            model: Mutex::new(SessionModel::default()),
            views,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.model.lock().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.model.lock().generation
    }

    pub fn view(&self) -> SessionView {
        self.model.lock().state.view()
    }

    pub fn loading(&self) -> bool {
        self.model.lock().state.is_pending()
    }

    pub fn error(&self) -> Option<String> {
        self.model.lock().state.error().map(AnalysisError::message)
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.model.lock().state.result().cloned()
    }

    /// Receive a new [`SessionView`] after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.views.subscribe()
    }

    /// Validate and send one analysis request, then apply its outcome.
    ///
    /// Suspends until the backend settles. A second `submit` while one is
    /// pending returns [`Submission::Busy`] immediately.
    pub async fn submit(&self, raw_text: &str, tone: Option<ToneId>) -> Submission {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("analysis", %request_id);
        self.run(raw_text, tone).instrument(span).await
    }

    async fn run(&self, raw_text: &str, tone: Option<ToneId>) -> Submission {
        let (generation, request) = {
            let mut model = self.model.lock();
            if model.state.is_pending() {
                tracing::debug!(
                    generation = model.generation,
                    "Submission ignored: analysis already in flight"
                );
                return Submission::Busy;
            }

            match self.builder.build(raw_text, tone) {
                Err(error) => {
                    tracing::info!(error = %error, "Submission rejected by validation");
                    self.apply(&mut model, SessionIntent::Invalid { error });
                    return Submission::Invalid;
                }
                Ok(request) => {
                    self.apply(
                        &mut model,
                        SessionIntent::Submit {
                            request: request.clone(),
                        },
                    );
                    (model.generation, request)
                }
            }
        };

        tracing::debug!(generation, "Analysis pending");
        let outcome = self.backend.send(request).await;

        let mut model = self.model.lock();
        if model.generation != generation {
            tracing::debug!(
                generation,
                current = model.generation,
                "Discarding stale analysis response"
            );
            return Submission::Stale;
        }

        if let Err(error) = &outcome {
            tracing::warn!(
                kind = error.kind(),
                status = ?error.status(),
                error = %error,
                "Analysis failed"
            );
        }
        self.apply(&mut model, SessionIntent::Resolved { generation, outcome });
        Submission::Applied
    }

    /// Return to `Idle` from any state, dropping any held result or error.
    ///
    /// A request still in flight is not aborted; its response is ignored.
    pub fn reset(&self) {
        let mut model = self.model.lock();
        let was = model.state.name();
        self.apply(&mut model, SessionIntent::Reset);
        tracing::debug!(from = was, generation = model.generation, "Session reset");
    }

    fn apply(&self, model: &mut SessionModel, intent: SessionIntent) {
        let current = std::mem::take(model);
        *model = SessionReducer::reduce(current, intent);
        self.views.send_replace(model.state.view());
    }
}
