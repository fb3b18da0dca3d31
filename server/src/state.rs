//! Session state and the operations the HTTP surface exposes
//!
//! Each browser tab owns one `Session`: a project model, a chat
//! transcript, the preview refresh token, and the at-most-one-in-flight
//! generation flag. Sessions live only in memory and die with the
//! process - reload starts over, by design.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use generation::{GenerationClient, GenerationRequest};
use preview_engine::{PreviewCache, SandboxPolicy};
use project_model::{EventSink, Project, ProjectEvent, VecEventSink};

use crate::config::ServerConfig;
use crate::debounce;
use crate::error::ApiError;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of a session's chat transcript
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-tab mutable state
pub struct Session {
    pub id: Uuid,
    pub project: Project,
    pub chat: Vec<ChatMessage>,
    /// Monotonic preview refresh token
    pub refresh: u64,
    /// At most one generation request in flight per session
    pub generating: bool,
    pub events: VecEventSink,
    pub preview: PreviewCache,
    /// Pending debounced refresh, aborted and restarted on every edit
    pub refresh_task: Option<tokio::task::JoinHandle<()>>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            project: Project::with_placeholder(),
            chat: Vec::new(),
            refresh: 0,
            generating: false,
            events: VecEventSink::new(),
            preview: PreviewCache::new(),
            refresh_task: None,
        }
    }

    pub fn push_chat(&mut self, role: ChatRole, text: impl Into<String>) {
        self.chat.push(ChatMessage {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        });
    }

    /// Snapshot for the frontend; drains pending notifications, so each
    /// one is delivered at most once
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            project: self.project.clone(),
            chat: self.chat.clone(),
            refresh: self.refresh,
            generating: self.generating,
            notifications: self.events.drain(),
        }
    }
}

/// JSON snapshot of a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub project: Project,
    pub chat: Vec<ChatMessage>,
    pub refresh: u64,
    pub generating: bool,
    pub notifications: Vec<ProjectEvent>,
}

/// Result of one prompt submission
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOutcome {
    /// False when the generation call failed (the failure notice is in
    /// the chat transcript; the project is untouched)
    pub succeeded: bool,
    pub session: SessionView,
}

/// Shared handle to the session map; the debounce task holds one too
pub type SessionMap = Arc<RwLock<HashMap<Uuid, Session>>>;

/// Shared application state behind the HTTP surface
pub struct AppState {
    pub sessions: SessionMap,
    pub client: GenerationClient,
    pub config: ServerConfig,
    pub sandbox: SandboxPolicy,
}

impl AppState {
    pub fn new(client: GenerationClient, config: ServerConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            client,
            config,
            sandbox: SandboxPolicy::default(),
        }
    }

    pub async fn create_session(&self) -> SessionView {
        let session = Session::new();
        let view = session.view();
        self.sessions.write().await.insert(session.id, session);
        log::info!("created session {}", view.id);
        view
    }

    pub async fn session_view(&self, id: Uuid) -> Result<SessionView, ApiError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(ApiError::SessionNotFound(id))?;
        Ok(session.view())
    }

    /// Tear a session down; an in-flight generation response for it is
    /// discarded when it lands
    pub async fn remove_session(&self, id: Uuid) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.remove(&id).ok_or(ApiError::SessionNotFound(id))?;
        if let Some(task) = session.refresh_task {
            task.abort();
        }
        log::info!("removed session {id}");
        Ok(())
    }

    pub async fn rename_project(&self, id: Uuid, name: &str) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.set_name(name)?;
        Ok(session.view())
    }

    pub async fn add_file(
        &self,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.add_file(name, content)?;
        session.events.send(ProjectEvent::FileAdded {
            name: name.to_string(),
        });
        Ok(session.view())
    }

    /// Commit an editor change to a file's content and (re)arm the
    /// debounced preview refresh
    pub async fn edit_file(
        &self,
        id: Uuid,
        name: &str,
        content: &str,
    ) -> Result<SessionView, ApiError> {
        let delay = Duration::from_millis(self.config.debounce_ms);
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.update_file(name, content)?;
        if let Some(task) = session.refresh_task.take() {
            task.abort();
        }
        session.refresh_task = Some(debounce::schedule_refresh(
            Arc::clone(&self.sessions),
            id,
            delay,
        ));
        Ok(session.view())
    }

    pub async fn remove_file(&self, id: Uuid, name: &str) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.remove_file(name)?;
        session.events.send(ProjectEvent::FileRemoved {
            name: name.to_string(),
            new_active: session.project.active_file_name().map(String::from),
        });
        Ok(session.view())
    }

    pub async fn rename_file(
        &self,
        id: Uuid,
        from: &str,
        to: &str,
    ) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.rename_file(from, to)?;
        session.events.send(ProjectEvent::FileRenamed {
            from: from.to_string(),
            to: to.to_string(),
        });
        Ok(session.view())
    }

    pub async fn select_file(&self, id: Uuid, name: &str) -> Result<SessionView, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        session.project.set_active(name)?;
        Ok(session.view())
    }

    /// Submit a prompt: call the generation collaborator, then merge the
    /// response into the project
    ///
    /// The session lock is released while the call is outstanding; only
    /// the `generating` flag blocks concurrent submissions. A failed call
    /// leaves the project exactly as it was and surfaces the failure as
    /// an assistant chat message.
    pub async fn run_generation(&self, id: Uuid, prompt: &str) -> Result<PromptOutcome, ApiError> {
        let existing_files = {
            let mut sessions = self.sessions.write().await;
            let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
            if session.generating {
                return Err(ApiError::GenerationInFlight);
            }
            session.generating = true;
            session.push_chat(ChatRole::User, prompt);
            session.project.files().to_vec()
        };

        let request = GenerationRequest::new(prompt, existing_files);
        let result = self.client.generate(&request).await;

        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.get_mut(&id) else {
            // The tab went away mid-request; the response has no home
            log::debug!("discarding generation response for removed session {id}");
            return Err(ApiError::SessionNotFound(id));
        };
        session.generating = false;

        let succeeded = match result {
            Ok(response) => {
                if let Some(suggestion) = &response.project_name {
                    session.project.adopt_suggested_name(suggestion);
                }
                let outcome = session.project.apply_generation(&response.files);
                session.refresh += 1;
                session.events.send(ProjectEvent::GenerationMerged {
                    policy: outcome.policy,
                    added: outcome.added,
                    updated: outcome.updated,
                });
                session.events.send(ProjectEvent::PreviewInvalidated {
                    revision: session.project.revision(),
                    refresh: session.refresh,
                });
                let text = if response.explanation.trim().is_empty() {
                    "Project updated successfully.".to_string()
                } else {
                    response.explanation
                };
                session.push_chat(ChatRole::Assistant, text);
                true
            }
            Err(err) => {
                log::warn!("generation failed for session {id}: {err}");
                session.events.send(ProjectEvent::GenerationFailed {
                    reason: err.to_string(),
                });
                session.push_chat(
                    ChatRole::Assistant,
                    "I encountered an error while processing your request. Please try again.",
                );
                false
            }
        };

        Ok(PromptOutcome {
            succeeded,
            session: session.view(),
        })
    }

    /// Render (or reuse) the session's preview document
    pub async fn render_preview(&self, id: Uuid) -> Result<String, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(ApiError::SessionNotFound(id))?;
        let refresh = session.refresh;
        Ok(session.preview.render(&session.project, refresh).to_string())
    }

    /// Export the current, fully-merged file set as a zip archive
    pub async fn export(&self, id: Uuid) -> Result<(String, Vec<u8>), ApiError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or(ApiError::SessionNotFound(id))?;
        let bytes = sitewright_export::archive_bytes(&session.project)?;
        Ok((sitewright_export::archive_file_name(&session.project), bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generation::StaticBackend;

    fn state_with_backend(backend: StaticBackend) -> Arc<AppState> {
        let client = GenerationClient::new(Box::new(backend));
        let config = ServerConfig {
            debounce_ms: 20,
            ..ServerConfig::default()
        };
        Arc::new(AppState::new(client, config))
    }

    fn generation_reply() -> &'static str {
        r#"{"projectName":"demo-site","explanation":"Built it.","files":[{"name":"index.html","content":"<html></html>"},{"name":"style.css","content":"body{}"}]}"#
    }

    #[tokio::test]
    async fn test_successful_generation_merges_and_bumps_refresh() {
        let state = state_with_backend(StaticBackend::replying(generation_reply()));
        let id = state.create_session().await.id;

        let outcome = state.run_generation(id, "build me a site").await.unwrap();

        assert!(outcome.succeeded);
        let project = &outcome.session.project;
        assert_eq!(project.name(), "demo-site");
        assert_eq!(project.len(), 2);
        assert_eq!(project.active_file_name(), Some("index.html"));
        assert_eq!(outcome.session.refresh, 1);
        // user prompt + assistant explanation
        assert_eq!(outcome.session.chat.len(), 2);
        assert_eq!(outcome.session.chat[1].role, ChatRole::Assistant);
        assert_eq!(outcome.session.chat[1].text, "Built it.");
        assert!(outcome
            .session
            .notifications
            .iter()
            .any(|e| matches!(e, ProjectEvent::GenerationMerged { .. })));
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_project_untouched() {
        let state = state_with_backend(StaticBackend::failing("offline"));
        let id = state.create_session().await.id;
        let before = serde_json::to_string(&state.session_view(id).await.unwrap().project).unwrap();

        let outcome = state.run_generation(id, "build me a site").await.unwrap();

        assert!(!outcome.succeeded);
        let after = serde_json::to_string(&outcome.session.project).unwrap();
        assert_eq!(before, after);
        assert!(!outcome.session.generating);
        assert!(outcome.session.chat[1].text.contains("error"));
        assert!(outcome
            .session
            .notifications
            .iter()
            .any(|e| matches!(e, ProjectEvent::GenerationFailed { .. })));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_surfaced_not_propagated() {
        let state = state_with_backend(StaticBackend::replying("certainly! here is"));
        let id = state.create_session().await.id;

        let outcome = state.run_generation(id, "build").await.unwrap();

        assert!(!outcome.succeeded);
        assert_eq!(outcome.session.project.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_generation_rejected() {
        let state = state_with_backend(StaticBackend::replying(generation_reply()));
        let id = state.create_session().await.id;
        {
            let mut sessions = state.sessions.write().await;
            sessions.get_mut(&id).unwrap().generating = true;
        }

        let err = state.run_generation(id, "again").await.unwrap_err();
        assert!(matches!(err, ApiError::GenerationInFlight));
    }

    #[tokio::test]
    async fn test_generation_for_removed_session_is_discarded() {
        let state = state_with_backend(StaticBackend::replying(generation_reply()));
        let id = state.create_session().await.id;

        // Simulate teardown racing the in-flight call: the reconcile
        // phase finds no session and discards the response.
        let state2 = Arc::clone(&state);
        let handle = tokio::spawn(async move { state2.run_generation(id, "build").await });
        state.remove_session(id).await.ok();
        let result = handle.await.unwrap();

        // Either the call finished before removal (fine) or it was
        // discarded with SessionNotFound; it must never panic or recreate
        // the session.
        if let Err(err) = result {
            assert!(matches!(err, ApiError::SessionNotFound(_)));
        }
        assert!(state.sessions.read().await.get(&id).is_none());
    }

    #[tokio::test]
    async fn test_question_without_files_only_adds_chat() {
        let state = state_with_backend(StaticBackend::replying(
            r#"{"explanation":"That is a div.","files":[]}"#,
        ));
        let id = state.create_session().await.id;

        let outcome = state.run_generation(id, "what is a div?").await.unwrap();

        assert!(outcome.succeeded);
        assert_eq!(outcome.session.project.len(), 1);
        assert_eq!(outcome.session.chat[1].text, "That is a div.");
    }

    #[tokio::test]
    async fn test_file_operations_roundtrip() {
        let state = state_with_backend(StaticBackend::failing("unused"));
        let id = state.create_session().await.id;

        state.add_file(id, "index.html", "<html>").await.unwrap();
        state.select_file(id, "index.html").await.unwrap();
        state.rename_file(id, "index.html", "home.html").await.unwrap();
        let view = state.remove_file(id, "README.md").await.unwrap();

        assert_eq!(view.project.len(), 1);
        assert_eq!(view.project.active_file_name(), Some("home.html"));
    }

    #[tokio::test]
    async fn test_duplicate_add_maps_to_error() {
        let state = state_with_backend(StaticBackend::failing("unused"));
        let id = state.create_session().await.id;

        let err = state.add_file(id, "README.md", "again").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Project(project_model::ProjectError::DuplicateFile(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_debounce_coalesces_refreshes() {
        let state = state_with_backend(StaticBackend::failing("unused"));
        let id = state.create_session().await.id;

        state.edit_file(id, "README.md", "one").await.unwrap();
        state.edit_file(id, "README.md", "two").await.unwrap();
        state.edit_file(id, "README.md", "three").await.unwrap();
        assert_eq!(state.session_view(id).await.unwrap().refresh, 0);

        tokio::time::sleep(Duration::from_millis(80)).await;

        let view = state.session_view(id).await.unwrap();
        assert_eq!(view.refresh, 1);
        assert_eq!(view.project.file("README.md").unwrap().content, "three");
    }

    #[tokio::test]
    async fn test_preview_uses_current_state() {
        let state = state_with_backend(StaticBackend::replying(generation_reply()));
        let id = state.create_session().await.id;

        // Placeholder project has no entry point yet
        let fallback = state.render_preview(id).await.unwrap();
        assert!(fallback.contains("No Preview Available"));

        state.run_generation(id, "build").await.unwrap();
        let preview = state.render_preview(id).await.unwrap();
        assert_eq!(preview, "<html></html>");
    }

    #[tokio::test]
    async fn test_export_reflects_committed_edits() {
        use std::io::Read;

        let state = state_with_backend(StaticBackend::failing("unused"));
        let id = state.create_session().await.id;
        state.edit_file(id, "README.md", "edited").await.unwrap();

        let (file_name, bytes) = state.export(id).await.unwrap();
        assert_eq!(file_name, "untitled-project.zip");

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        let mut content = String::new();
        archive
            .by_name("README.md")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "edited");
    }

    #[tokio::test]
    async fn test_unknown_session_rejected() {
        let state = state_with_backend(StaticBackend::failing("unused"));
        let err = state.session_view(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::SessionNotFound(_)));
    }
}
