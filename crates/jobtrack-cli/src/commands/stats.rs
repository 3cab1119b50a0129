use jobtrack::view::FilterSpec;
use jobtrack::JobStore;

use crate::cli::StatsArgs;

pub fn handle(args: &StatsArgs, store: &JobStore) -> anyhow::Result<()> {
    let filters = FilterSpec::from_raw(&args.filters.to_raw());
    let stats = store.stats(&filters);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", filters.describe());
    println!("Total jobs:    {}", stats.total);
    println!("Active jobs:   {}", stats.active);
    println!("Filtered jobs: {}", stats.filtered);
    Ok(())
}
