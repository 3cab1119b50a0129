use chrono::{Local, Utc};

use jobtrack::{JobDraft, JobStore};

use crate::cli::AddArgs;

pub fn handle(args: AddArgs, store: &mut JobStore) -> anyhow::Result<()> {
    let draft = JobDraft {
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        color: args.color,
        port: args.port,
        status: args.status,
        section: args.section,
        entry_no: args.entry_no,
        container_no: args.container_no,
        remarks: args.remarks,
    };

    let job = store.add(draft, Utc::now())?;
    println!("Added job {} ({})", job.id, job.entry_no);
    Ok(())
}
