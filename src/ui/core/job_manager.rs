use super::actions::Action;
use crate::api::ApiClient;
use crate::models::{CompanyDraft, EntityKind, LeadDraft, PartnerDraft};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Owns every background API call. Jobs report back through the action
/// channel handed out by [`JobManager::new`]; the receiver is drained on
/// each tick of the main loop.
pub struct JobManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl JobManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background fetch of one collection.
    pub fn spawn_fetch(&mut self, api: ApiClient, kind: EntityKind) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = format!("Fetching {}", kind.title().to_lowercase());

        let handle = tokio::spawn(async move {
            let action = match kind {
                EntityKind::Leads => match api.fetch_leads().await {
                    Ok(records) => Action::LeadsLoaded(records),
                    Err(e) => Action::FetchFailed {
                        kind,
                        error: e.to_string(),
                    },
                },
                EntityKind::Companies => match api.fetch_companies().await {
                    Ok(records) => Action::CompaniesLoaded(records),
                    Err(e) => Action::FetchFailed {
                        kind,
                        error: e.to_string(),
                    },
                },
                EntityKind::Partners => match api.fetch_partners().await {
                    Ok(records) => Action::PartnersLoaded(records),
                    Err(e) => Action::FetchFailed {
                        kind,
                        error: e.to_string(),
                    },
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Fetch every collection. Used on startup and for a full refresh.
    pub fn spawn_fetch_all(&mut self, api: &ApiClient) {
        for kind in EntityKind::ALL {
            self.spawn_fetch(api.clone(), kind);
        }
    }

    /// Spawn a lead create or update depending on whether `id` is set.
    pub fn spawn_save_lead(&mut self, api: ApiClient, id: Option<String>, draft: LeadDraft) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = match &id {
            Some(id) => format!("Updating lead {id}"),
            None => "Creating lead".to_string(),
        };

        let handle = tokio::spawn(async move {
            let payload = draft.to_payload();
            let updated = id.is_some();
            let result = match &id {
                Some(id) => api.update_lead(id, &payload).await,
                None => api.create_lead(&payload).await,
            };
            let action = match result {
                Ok(()) => Action::SaveCompleted {
                    kind: EntityKind::Leads,
                    updated,
                },
                Err(e) => Action::SaveFailed {
                    kind: EntityKind::Leads,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    pub fn spawn_save_company(&mut self, api: ApiClient, id: Option<String>, draft: CompanyDraft) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = match &id {
            Some(id) => format!("Updating company {id}"),
            None => "Creating company".to_string(),
        };

        let handle = tokio::spawn(async move {
            let payload = draft.to_payload();
            let updated = id.is_some();
            let result = match &id {
                Some(id) => api.update_company(id, &payload).await,
                None => api.create_company(&payload).await,
            };
            let action = match result {
                Ok(()) => Action::SaveCompleted {
                    kind: EntityKind::Companies,
                    updated,
                },
                Err(e) => Action::SaveFailed {
                    kind: EntityKind::Companies,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    pub fn spawn_save_partner(&mut self, api: ApiClient, id: Option<String>, draft: PartnerDraft) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = match &id {
            Some(id) => format!("Updating partner {id}"),
            None => "Creating partner".to_string(),
        };

        let handle = tokio::spawn(async move {
            let payload = draft.to_payload();
            let updated = id.is_some();
            let result = match &id {
                Some(id) => api.update_partner(id, &payload).await,
                None => api.create_partner(&payload).await,
            };
            let action = match result {
                Ok(()) => Action::SaveCompleted {
                    kind: EntityKind::Partners,
                    updated,
                },
                Err(e) => Action::SaveFailed {
                    kind: EntityKind::Partners,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Spawn a delete for a confirmed record.
    pub fn spawn_delete(&mut self, api: ApiClient, kind: EntityKind, id: String) -> JobId {
        let action_sender = self.action_sender.clone();
        let description = format!("Deleting {} {id}", kind.singular());

        let handle = tokio::spawn(async move {
            let result = match kind {
                EntityKind::Leads => api.delete_lead(&id).await,
                EntityKind::Companies => api.delete_company(&id).await,
                EntityKind::Partners => api.delete_partner(&id).await,
            };
            let action = match result {
                Ok(()) => Action::DeleteCompleted(kind),
                Err(e) => Action::DeleteFailed {
                    kind,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, description)
    }

    /// Drop handles of jobs that have already completed.
    pub fn cleanup_finished_jobs(&mut self) {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for id in finished {
            if let Some(job) = self.jobs.remove(&id) {
                log::debug!("{} finished in {:?}", job.description, job.started_at.elapsed());
            }
        }
    }

    /// Whether any job is still running.
    pub fn is_busy(&self) -> bool {
        !self.jobs.is_empty()
    }

    /// Get the number of active jobs
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Cancel all running jobs
    pub fn cancel_all_jobs(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> JobId {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let job = BackgroundJob {
            id: job_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.jobs.insert(job_id, job);
        job_id
    }
}

impl Drop for JobManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_jobs();
    }
}
