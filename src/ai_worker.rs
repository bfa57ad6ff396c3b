use crate::ai::{self, AiError, ContentGenerator, ModelConfig, OpenRouterClient, RetryPolicy};
use crate::models::{AiEnvelope, AiResponse};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Spawns the background thread that answers workflow requests.
///
/// The thread owns a tokio runtime; each request runs as its own task so a
/// slow evaluation does not hold up a brainstorming request.
pub fn spawn_ai_worker(
    ai_tx: Sender<AiResponse>,
    ai_rx: Receiver<AiEnvelope>,
    model: ModelConfig,
    policy: RetryPolicy,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("air1-prep::ai_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to start AI runtime");
                    answer_with_error(&ai_tx, &ai_rx, AiError::Unavailable(e.to_string()));
                    return;
                }
            };

            let client: Arc<dyn ContentGenerator> = match OpenRouterClient::new(model) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::warn!(error = %e, "AI client unavailable");
                    answer_with_error(&ai_tx, &ai_rx, e);
                    return;
                }
            };

            run_worker(&rt, client, policy, &ai_tx, &ai_rx);
        })
}

/// Serves requests until the request channel disconnects.
pub fn run_worker(
    rt: &tokio::runtime::Runtime,
    generator: Arc<dyn ContentGenerator>,
    policy: RetryPolicy,
    ai_tx: &Sender<AiResponse>,
    ai_rx: &Receiver<AiEnvelope>,
) {
    while let Ok(AiEnvelope { id, request }) = ai_rx.recv() {
        tracing::debug!(?id, ?request, "Worker received request");
        let generator = Arc::clone(&generator);
        let tx = ai_tx.clone();
        rt.spawn(async move {
            let result = ai::execute(generator.as_ref(), policy, request).await;
            if let Err(e) = &result {
                tracing::warn!(?id, error = %e, "AI request failed");
            }
            let _ = tx.send(AiResponse { id, result });
        });
    }
    tracing::info!("Worker channel disconnected, exiting");
}

fn answer_with_error(ai_tx: &Sender<AiResponse>, ai_rx: &Receiver<AiEnvelope>, error: AiError) {
    while let Ok(envelope) = ai_rx.recv() {
        let _ = ai_tx.send(AiResponse {
            id: envelope.id,
            result: Err(error.clone()),
        });
    }
}
