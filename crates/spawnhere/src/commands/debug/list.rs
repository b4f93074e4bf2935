use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use spawnhere_core::{Window, config, filter};

/// Lists visible top-level windows with the filter's verdict for each.
pub fn execute() {
    let windows = match spawnhere_windows::enumerate_windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };
    let config = config::load();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Title"),
            Cell::new("Class"),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
            Cell::new("Verdict"),
        ]);

    let mut eligible = 0;
    for window in &windows {
        let title = window.title().unwrap_or_default();
        let class = window.class().unwrap_or_default();
        let (width, height) = window
            .rect()
            .map_or((0, 0), |rect| (rect.width, rect.height));

        let verdict = match filter::check(window, &config.filter) {
            Ok(()) => {
                eligible += 1;
                "eligible".to_string()
            }
            Err(reason) => reason.to_string(),
        };

        table.add_row(vec![
            Cell::new(format!("0x{:X}", window.raw())),
            Cell::new(title),
            Cell::new(class),
            Cell::new(width).set_alignment(CellAlignment::Right),
            Cell::new(height).set_alignment(CellAlignment::Right),
            Cell::new(verdict),
        ]);
    }

    println!("{table}");
    println!("\n{} windows found, {eligible} eligible", windows.len());
}
