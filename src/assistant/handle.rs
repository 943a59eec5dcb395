//! Background cycle runner.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use super::{panic_message, Assistant, CycleEnd, CycleEvent};
use crate::domain::Session;

/// Runs listen cycles off the calling thread, one at a time
pub struct AssistantHandle {
    assistant: Arc<Mutex<Assistant>>,
    cycle_active: Arc<AtomicBool>,
    event_tx: Sender<CycleEvent>,
    event_rx: Receiver<CycleEvent>,
}

impl AssistantHandle {
    pub fn new(assistant: Assistant) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            assistant: Arc::new(Mutex::new(assistant)),
            cycle_active: Arc::new(AtomicBool::new(false)),
            event_tx,
            event_rx,
        }
    }

    /// Start a listen cycle on a worker thread.
    ///
    /// Returns `false` without doing anything while another cycle is active.
    pub fn start_cycle(&self) -> bool {
        if self
            .cycle_active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("[habla:assistant] Cycle already active, ignoring trigger");
            return false;
        }

        let assistant = Arc::clone(&self.assistant);
        let cycle_active = Arc::clone(&self.cycle_active);
        let event_tx = self.event_tx.clone();

        thread::spawn(move || {
            let end = panic::catch_unwind(AssertUnwindSafe(|| {
                let mut assistant = assistant.lock().unwrap_or_else(|p| p.into_inner());
                assistant.begin_cycle();
                assistant.run_cycle(&event_tx)
            }))
            .unwrap_or_else(|payload| {
                tracing::error!(
                    "[habla:assistant] Listen cycle panicked: {}",
                    panic_message(payload.as_ref())
                );
                CycleEnd::Failed
            });

            // Clear before announcing so a listener can start the next cycle right away
            cycle_active.store(false, Ordering::Release);
            let _ = event_tx.send(CycleEvent::Finished(end));
        });

        true
    }

    pub fn is_active(&self) -> bool {
        self.cycle_active.load(Ordering::Acquire)
    }

    /// Events of all cycles started through this handle
    pub fn events(&self) -> &Receiver<CycleEvent> {
        &self.event_rx
    }

    /// Session state after the last finished cycle
    pub fn session(&self) -> Session {
        self.assistant
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .session()
    }
}
