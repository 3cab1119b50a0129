use chrono::Utc;

use jobtrack::JobStore;

pub fn handle(store: &mut JobStore) -> anyhow::Result<()> {
    match store.seed_samples(Utc::now())? {
        0 => println!("Collection already holds {} jobs, nothing seeded", store.len()),
        added => println!("Added {added} sample jobs"),
    }
    Ok(())
}
