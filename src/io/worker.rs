use crate::model::Listing;
use crate::state::ContactSubmission;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use super::catalog::load_catalog;
use super::outbox::append_submission;

pub enum IoCommand {
    LoadCatalog(PathBuf),
    SubmitContact {
        outbox: PathBuf,
        submission: ContactSubmission,
    },
}

pub enum IoResult {
    CatalogLoaded(Vec<Listing>),
    ContactSent,
    ContactFailed(String),
    Error(String),
}

pub fn spawn_worker(ctx: eframe::egui::Context) -> (Sender<IoCommand>, Receiver<IoResult>) {
    spawn_worker_with(move || ctx.request_repaint())
}

/// `wake` runs after every result so the UI picks it up.
pub fn spawn_worker_with<F>(wake: F) -> (Sender<IoCommand>, Receiver<IoResult>)
where
    F: Fn() + Send + 'static,
{
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                IoCommand::LoadCatalog(path) => match load_catalog(&path) {
                    Ok(listings) => {
                        tracing::info!(count = listings.len(), path = %path.display(), "catalog loaded");
                        IoResult::CatalogLoaded(listings)
                    }
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "catalog load failed");
                        IoResult::Error(format!("Failed to load listings: {}", e))
                    }
                },
                IoCommand::SubmitContact { outbox, submission } => {
                    match append_submission(&outbox, &submission) {
                        Ok(()) => {
                            tracing::info!(outbox = %outbox.display(), "contact submission queued");
                            IoResult::ContactSent
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "contact submission failed");
                            IoResult::ContactFailed(e.to_string())
                        }
                    }
                }
            };
            if res_tx.send(result).is_err() {
                break;
            }
            wake();
        }
        tracing::debug!("io worker stopped");
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact::ContactForm;
    use std::time::Duration;

    #[test]
    fn test_worker_loads_catalog_and_wakes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (wake_tx, wake_rx) = channel();
        let (tx, rx) = spawn_worker_with(move || {
            let _ = wake_tx.send(());
        });

        tx.send(IoCommand::LoadCatalog(dir.path().join("missing.json")))
            .expect("send");
        match rx.recv_timeout(Duration::from_secs(5)).expect("result") {
            IoResult::CatalogLoaded(listings) => assert_eq!(listings.len(), 1),
            _ => panic!("expected catalog"),
        }
        wake_rx.recv_timeout(Duration::from_secs(5)).expect("wake");
    }

    #[test]
    fn test_worker_writes_contact_outbox() {
        let dir = tempfile::tempdir().expect("tempdir");
        let outbox = dir.path().join("outbox.jsonl");
        let (tx, rx) = spawn_worker_with(|| {});

        let submission = ContactForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            best_time: "Noon".into(),
            ..Default::default()
        }
        .validate()
        .expect("valid form");

        tx.send(IoCommand::SubmitContact {
            outbox: outbox.clone(),
            submission,
        })
        .expect("send");
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)).expect("result"),
            IoResult::ContactSent
        ));
        assert!(outbox.exists());
    }
}
