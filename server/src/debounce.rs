//! Debounced preview refresh
//!
//! Rapid successive edits coalesce into a single refresh-token bump: each
//! edit aborts the previous pending task and arms a new one. The merge
//! and render paths stay synchronous; this timer only decides *when* the
//! token moves.

use std::time::Duration;

use uuid::Uuid;

use project_model::{EventSink, ProjectEvent};

use crate::state::SessionMap;

/// Arm a refresh that fires after `delay` unless aborted first
///
/// The returned handle must replace (and abort) any previously armed
/// task for the same session. Firing against a session that has since
/// been removed is a no-op.
pub fn schedule_refresh(
    sessions: SessionMap,
    session_id: Uuid,
    delay: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut sessions = sessions.write().await;
        if let Some(session) = sessions.get_mut(&session_id) {
            session.refresh += 1;
            log::debug!(
                "debounced refresh fired for session {session_id} (token={})",
                session.refresh
            );
            session.events.send(ProjectEvent::PreviewInvalidated {
                revision: session.project.revision(),
                refresh: session.refresh,
            });
        }
    })
}
