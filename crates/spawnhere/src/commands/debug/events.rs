use std::sync::mpsc;
use std::thread;

use spawnhere_core::config::FilterConfig;
use spawnhere_core::{Window, WindowEvent, config, filter};
use spawnhere_windows::{Window as WinWindow, ctrl_c, event_loop};

enum Feed {
    Event(WindowEvent),
    Stop,
}

/// Prints translated window events live, with the filter's verdict for
/// every show and foreground event. Nothing is moved. Ctrl+C stops.
pub fn execute() {
    let filter_config = config::load().filter;
    let (feed_tx, feed_rx) = mpsc::channel();

    let (stop_tx, stop_rx) = mpsc::channel();
    if let Err(e) = ctrl_c::set_handler(stop_tx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    let stop_feed = feed_tx.clone();
    thread::spawn(move || {
        if stop_rx.recv().is_ok() {
            let _ = stop_feed.send(Feed::Stop);
        }
    });

    let (event_tx, event_rx) = mpsc::channel();
    let event_loop = match event_loop::start(event_tx, true) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    thread::spawn(move || {
        for event in event_rx {
            if feed_tx.send(Feed::Event(event)).is_err() {
                break;
            }
        }
    });

    println!("Watching window events (press Ctrl+C to stop)...\n");

    while let Ok(Feed::Event(event)) = feed_rx.recv() {
        println!("{}", describe(&event, &filter_config));
    }

    event_loop.stop();
}

fn describe(event: &WindowEvent, filter_config: &FilterConfig) -> String {
    match event {
        // The window is already gone; only the handle is meaningful.
        WindowEvent::Destroyed { .. } => event.to_string(),
        _ => {
            let window = WinWindow::from_raw(event.hwnd());
            let title = window.title().unwrap_or_default();
            let verdict = match filter::check(&window, filter_config) {
                Ok(()) => "eligible".to_string(),
                Err(reason) => reason.to_string(),
            };
            format!("{event} \"{title}\" [{verdict}]")
        }
    }
}
