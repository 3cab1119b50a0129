use anyhow::Context;
use chrono::Utc;

use jobtrack::JobStore;

use crate::cli::EditArgs;

pub fn handle(args: EditArgs, store: &mut JobStore) -> anyhow::Result<()> {
    let mut draft = store
        .get(args.id)
        .with_context(|| format!("job {} not found", args.id))?
        .to_draft();

    if let Some(date) = args.date {
        draft.date = date;
    }
    if let Some(color) = args.color {
        draft.color = color;
    }
    if let Some(port) = args.port {
        draft.port = port;
    }
    if let Some(status) = args.status {
        draft.status = status;
    }
    if let Some(section) = args.section {
        draft.section = section;
    }
    if let Some(entry_no) = args.entry_no {
        draft.entry_no = entry_no;
    }
    if let Some(container_no) = args.container_no {
        draft.container_no = container_no;
    }
    if let Some(remarks) = args.remarks {
        draft.remarks = Some(remarks);
    }

    let job = store.update(args.id, draft, Utc::now())?;
    println!("Updated job {} ({})", job.id, job.entry_no);
    Ok(())
}
