use anyhow::Context;
use chrono::Utc;

use jobtrack::job::JobId;
use jobtrack::JobStore;

use crate::output::format_timestamp;

pub fn handle(id: JobId, store: &JobStore) -> anyhow::Result<()> {
    let job = store
        .get(id)
        .with_context(|| format!("job {id} not found"))?;

    let state = if job.is_active() {
        "Active Job"
    } else {
        "Completed Job"
    };
    let days = job.days_since_created(Utc::now());

    println!("{} ({})", job.entry_no, state);
    println!();
    println!("  Job ID:         {}", job.id);
    println!("  Date:           {}", job.date);
    println!("  Color:          {}", job.color);
    println!("  Port:           {}", job.port);
    println!("  Section:        {}", job.section);
    println!("  Status:         {}", job.status);
    println!("  Entry No.:      {}", job.entry_no);
    println!("  Container No.:  {}", job.container_no);
    println!(
        "  Remarks:        {}",
        job.remarks.as_deref().unwrap_or("No remarks")
    );
    println!();
    println!("  Created:        {}", format_timestamp(job.created_at));
    if let Some(updated_at) = job.updated_at {
        println!("  Last Updated:   {}", format_timestamp(updated_at));
    }
    println!(
        "  Total Days:     {} day{}",
        days,
        if days == 1 { "" } else { "s" }
    );
    Ok(())
}
