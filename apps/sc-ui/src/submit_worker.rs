//! Background thread for the single submission request.
//!
//! The POST blocks, so it runs off the UI thread; the app polls the channel
//! every frame. Dropping the worker abandons the request without cancelling
//! it at the transport level.

use sc_app::{SubmitClient, SubmitError};
use sc_record::SubmissionPayload;
use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

pub struct SubmitWorker {
    pub result_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

pub enum WorkerMessage {
    Complete,
    Failed { error: SubmitError },
}

impl SubmitWorker {
    pub fn start(client: SubmitClient, payload: SubmissionPayload) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let message = match client.post(&payload) {
                Ok(()) => WorkerMessage::Complete,
                Err(error) => WorkerMessage::Failed { error },
            };
            let _ = tx.send(message);
        });

        Self {
            result_rx: rx,
            _handle: handle,
        }
    }
}
