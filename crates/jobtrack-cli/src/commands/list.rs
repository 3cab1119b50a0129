use jobtrack::view::FilterSpec;
use jobtrack::{Config, Job, JobStore, ViewState};

use crate::cli::ListArgs;
use crate::output::{render_page_line, render_table};

const HEADERS: [&str; 9] = [
    "#",
    "Date",
    "Entry No.",
    "Container No.",
    "Port",
    "Section",
    "Status",
    "Color",
    "ID",
];

pub fn handle(args: &ListArgs, store: &JobStore, config: &Config) -> anyhow::Result<()> {
    let mut state = ViewState::new(config.view.sort, config.view.items_per_page);
    if let Some(sort) = args.sort {
        state.set_sort(sort);
    }
    if let Some(per_page) = args.per_page {
        state.set_items_per_page(per_page);
    }
    state.set_filters(FilterSpec::from_raw(&args.filters.to_raw()));
    state.go_to_page(args.page);

    let view = state.render(store.jobs());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", state.filters.describe());
    println!();

    if view.is_empty() {
        if store.is_empty() {
            println!("No jobs found. Add your first job with `jobtrack add` or load examples with `jobtrack seed`.");
        } else {
            println!("No jobs match your current filters.");
        }
        return Ok(());
    }

    let first = view.page_info.first_row_number();
    let rows: Vec<Vec<String>> = view
        .items
        .iter()
        .enumerate()
        .map(|(offset, job)| row(first + offset, job))
        .collect();

    println!("{}", render_table(&HEADERS, &rows));
    println!();
    println!("{}", view.page_info.summary());
    println!("{}", render_page_line(&view.page_info));
    Ok(())
}

fn row(number: usize, job: &Job) -> Vec<String> {
    vec![
        number.to_string(),
        job.date.to_string(),
        job.entry_no.clone(),
        job.container_no.clone(),
        job.port.code().to_string(),
        job.section.to_string(),
        job.status.to_string(),
        job.color.to_string(),
        job.id.to_string(),
    ]
}
