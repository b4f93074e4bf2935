use std::cell::RefCell;
use std::sync::mpsc::{self, Sender};
use std::thread;

use spawnhere_core::{Error, Result, WindowEvent};
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, EVENT_OBJECT_DESTROY, EVENT_OBJECT_SHOW, EVENT_SYSTEM_FOREGROUND,
    GetMessageW, MSG, PostThreadMessageW, TranslateMessage, WINEVENT_OUTOFCONTEXT,
    WINEVENT_SKIPOWNPROCESS, WM_QUIT,
};

use crate::event;

// Thread-local sender for the WinEvent callback.
thread_local! {
    static EVENT_SENDER: RefCell<Option<Sender<WindowEvent>>> = const { RefCell::new(None) };
}

/// Starts the Win32 event loop on a new thread.
///
/// Installs the show and destroy hooks, plus the foreground hook when
/// `follow_foreground` is set. Returns once the hooks are in place, or
/// with an error if a required hook could not be installed.
pub fn start(event_tx: Sender<WindowEvent>, follow_foreground: bool) -> Result<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<std::result::Result<u32, String>>();

    let handle = thread::spawn(move || {
        EVENT_SENDER.with(|cell| {
            *cell.borrow_mut() = Some(event_tx);
        });

        let thread_id = unsafe { GetCurrentThreadId() };

        let mut hooks = Hooks::default();

        if let Err(e) = hooks.install(EVENT_OBJECT_SHOW, "show") {
            let _ = ready_tx.send(Err(e));
            return;
        }
        if let Err(e) = hooks.install(EVENT_OBJECT_DESTROY, "destroy") {
            let _ = ready_tx.send(Err(e));
            return;
        }
        if follow_foreground
            && let Err(e) = hooks.install(EVENT_SYSTEM_FOREGROUND, "foreground")
        {
            // Show events alone still catch nearly every new window.
            log::warn!("{e}; continuing without foreground events");
        }

        let _ = ready_tx.send(Ok(thread_id));

        run_message_pump();

        // Hooks are removed on this thread when `hooks` drops.
        drop(hooks);
    });

    let thread_id = ready_rx
        .recv()
        .map_err(|_| Error::platform("event loop thread exited unexpectedly"))?
        .map_err(Error::Platform)?;

    Ok(EventLoopHandle { thread_id, handle })
}

/// Handle for controlling the event loop from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Signals the event loop to stop and waits for the thread to finish.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// Installed WinEvent hooks, unhooked on drop.
#[derive(Default)]
struct Hooks(Vec<HWINEVENTHOOK>);

impl Hooks {
    fn install(&mut self, event: u32, name: &str) -> std::result::Result<(), String> {
        // SAFETY: SetWinEventHook registers our callback for one
        // system-wide event. WINEVENT_OUTOFCONTEXT delivers it on this
        // thread's message queue. WINEVENT_SKIPOWNPROCESS ignores our
        // own windows.
        let hook = unsafe {
            SetWinEventHook(
                event,
                event,
                None,
                Some(win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };

        if hook.is_invalid() {
            return Err(format!(
                "failed to set {name} event hook: {}",
                windows::core::Error::from_win32()
            ));
        }

        log::debug!("Installed {name} event hook");
        self.0.push(hook);
        Ok(())
    }
}

impl Drop for Hooks {
    fn drop(&mut self) {
        for hook in self.0.drain(..) {
            unsafe {
                let _ = UnhookWinEvent(hook);
            }
        }
    }
}

/// The Win32 message pump. Blocks until WM_QUIT is received.
///
/// Out-of-context hooks are delivered while this thread waits in
/// `GetMessageW`.
fn run_message_pump() {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// The WinEvent callback.
///
/// Only translates and forwards; all window queries happen on the
/// daemon thread.
unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    id_object: i32,
    id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if let Some(window_event) = event::translate(event, hwnd, id_object, id_child) {
        EVENT_SENDER.with(|cell| {
            if let Some(sender) = cell.borrow().as_ref() {
                let _ = sender.send(window_event);
            }
        });
    }
}
