pub mod config;
pub mod db;
pub mod error;
pub mod job;
pub mod logging;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{load_config, load_or_default, Config};
pub use error::{ConfigError, JobError, JobtrackError, StorageError, StoreError};
pub use job::{Color, Job, JobDraft, JobId, JobStatus, Port, Section};
pub use storage::{open_repository, JobRepository};
pub use store::{JobStats, JobStore};
pub use view::{derive, FilterSpec, JobView, PageInfo, PageLink, PageRequest, SortField, ViewState};
