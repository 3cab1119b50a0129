use std::io::{self, BufRead, Write};

use anyhow::Context;

use jobtrack::job::JobId;
use jobtrack::JobStore;

pub fn handle(id: JobId, yes: bool, store: &mut JobStore) -> anyhow::Result<()> {
    let job = store
        .get(id)
        .with_context(|| format!("job {id} not found"))?;

    if !yes && !confirm(&format!("Delete job {} ({})? [y/N] ", job.id, job.entry_no))? {
        println!("Cancelled");
        return Ok(());
    }

    let removed = store.delete(id)?;
    println!("Deleted job {} ({})", removed.id, removed.entry_no);
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = io::stdout();
    stdout.write_all(prompt.as_bytes())?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
