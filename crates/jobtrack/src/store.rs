//! Job store: the owned job collection plus its persistence collaborator.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StoreError;
use crate::job::{sample_drafts, Job, JobDraft, JobId};
use crate::storage::JobRepository;
use crate::view::FilterSpec;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    /// Every job in the collection.
    pub total: usize,
    /// Jobs whose status is not `Done`.
    pub active: usize,
    /// Jobs matching the current filters.
    pub filtered: usize,
}

/// Owns the job collection. Every mutation is persisted in full before it
/// returns; a failed save rolls the in-memory change back.
pub struct JobStore {
    jobs: Vec<Job>,
    repo: Box<dyn JobRepository>,
}

impl JobStore {
    /// Loads the whole collection from `repo`. Jobs sharing an id keep the
    /// first occurrence's id; later ones get fresh ids, saved back at once.
    pub fn open(repo: Box<dyn JobRepository>) -> Result<Self, StoreError> {
        let mut jobs = repo.load()?;

        let reassigned = reassign_duplicate_ids(&mut jobs)?;
        if reassigned > 0 {
            repo.save_all(&jobs)?;
        }

        log::info!("Job store opened with {} jobs", jobs.len());
        Ok(Self { jobs, repo })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    fn position(&self, id: JobId) -> Result<usize, StoreError> {
        self.jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Time-based id, bumped past the largest existing id so two jobs added
    /// within the same millisecond stay distinct.
    fn next_id(&self, now: DateTime<Utc>) -> Result<JobId, StoreError> {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let after_last = id_after(&self.jobs).ok_or(StoreError::IdSpaceExhausted)?;
        Ok(millis.max(after_last))
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.repo.save_all(&self.jobs)?;
        Ok(())
    }

    /// Validates and appends a new job.
    pub fn add(&mut self, draft: JobDraft, now: DateTime<Utc>) -> Result<Job, StoreError> {
        let draft = draft.normalize()?;
        let job = Job::from_draft(self.next_id(now)?, draft, now);

        self.jobs.push(job.clone());
        if let Err(e) = self.persist() {
            self.jobs.pop();
            log::error!("Failed to persist new job {}: {}", job.id, e);
            return Err(e);
        }

        log::info!("Added job {} ({})", job.id, job.entry_no);
        Ok(job)
    }

    /// Replaces every editable field of job `id` and stamps `updated_at`.
    pub fn update(
        &mut self,
        id: JobId,
        draft: JobDraft,
        now: DateTime<Utc>,
    ) -> Result<Job, StoreError> {
        let index = self.position(id)?;
        let draft = draft.normalize()?;

        let previous = self.jobs[index].clone();
        self.jobs[index].apply_draft(draft, now);
        if let Err(e) = self.persist() {
            self.jobs[index] = previous;
            log::error!("Failed to persist update of job {}: {}", id, e);
            return Err(e);
        }

        log::info!("Updated job {}", id);
        Ok(self.jobs[index].clone())
    }

    /// Removes job `id`, returning it.
    pub fn delete(&mut self, id: JobId) -> Result<Job, StoreError> {
        let index = self.position(id)?;

        let removed = self.jobs.remove(index);
        if let Err(e) = self.persist() {
            self.jobs.insert(index, removed);
            log::error!("Failed to persist deletion of job {}: {}", id, e);
            return Err(e);
        }

        log::info!("Deleted job {}", id);
        Ok(removed)
    }

    /// Fills an empty store with a few demonstration jobs. Returns how many
    /// were added; a store that already holds jobs is left alone.
    pub fn seed_samples(&mut self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        if !self.jobs.is_empty() {
            return Ok(0);
        }

        for draft in sample_drafts()? {
            let job = Job::from_draft(self.next_id(now)?, draft, now);
            self.jobs.push(job);
        }
        if let Err(e) = self.persist() {
            self.jobs.clear();
            log::error!("Failed to persist sample jobs: {}", e);
            return Err(e);
        }

        log::info!("Seeded {} sample jobs", self.jobs.len());
        Ok(self.jobs.len())
    }

    pub fn stats(&self, filters: &FilterSpec) -> JobStats {
        JobStats {
            total: self.jobs.len(),
            active: self.jobs.iter().filter(|j| j.is_active()).count(),
            filtered: self.jobs.iter().filter(|j| filters.matches(j)).count(),
        }
    }
}

/// Smallest id above every id in `jobs`; `None` once `u64::MAX` is taken.
fn id_after(jobs: &[Job]) -> Option<JobId> {
    match jobs.iter().map(|j| j.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    }
}

fn reassign_duplicate_ids(jobs: &mut [Job]) -> Result<usize, StoreError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    let duplicates: Vec<usize> = jobs
        .iter()
        .enumerate()
        .filter(|(_, job)| !seen.insert(job.id))
        .map(|(index, _)| index)
        .collect();

    for &index in &duplicates {
        let fresh = id_after(jobs).ok_or(StoreError::IdSpaceExhausted)?;
        log::warn!(
            "Duplicate job id {} ({}) reassigned to {}",
            jobs[index].id,
            jobs[index].entry_no,
            fresh
        );
        jobs[index].id = fresh;
    }
    Ok(duplicates.len())
}
