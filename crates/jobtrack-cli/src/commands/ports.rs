use jobtrack::Port;

use crate::output::render_table;

pub fn handle() {
    let rows: Vec<Vec<String>> = Port::ALL
        .iter()
        .map(|port| vec![port.code().to_string(), port.label().to_string()])
        .collect();
    println!("{}", render_table(&["Code", "Port"], &rows));
}
