use spawnhere_core::WindowEvent;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_DESTROY, EVENT_OBJECT_SHOW, EVENT_SYSTEM_FOREGROUND,
};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or menu item.
const OBJID_WINDOW: i32 = 0;

/// Child ID indicating the object itself rather than one of its children.
const CHILDID_SELF: i32 = 0;

/// Translates a raw Win32 event into a platform-agnostic `WindowEvent`.
///
/// Returns `None` for sub-object notifications, null handles and event
/// types the watcher does not consume.
pub fn translate(event: u32, hwnd: HWND, id_object: i32, id_child: i32) -> Option<WindowEvent> {
    if id_object != OBJID_WINDOW || id_child != CHILDID_SELF || hwnd.is_invalid() {
        return None;
    }

    let hwnd = hwnd.0 as usize;

    match event {
        EVENT_OBJECT_SHOW => Some(WindowEvent::Shown { hwnd }),
        EVENT_SYSTEM_FOREGROUND => Some(WindowEvent::Foreground { hwnd }),
        EVENT_OBJECT_DESTROY => Some(WindowEvent::Destroyed { hwnd }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::EVENT_OBJECT_LOCATIONCHANGE;

    fn hwnd(value: usize) -> HWND {
        HWND(value as *mut _)
    }

    #[test]
    fn show_on_window_object_becomes_shown() {
        assert_eq!(
            translate(EVENT_OBJECT_SHOW, hwnd(0x10), OBJID_WINDOW, CHILDID_SELF),
            Some(WindowEvent::Shown { hwnd: 0x10 })
        );
    }

    #[test]
    fn foreground_and_destroy_are_translated() {
        assert_eq!(
            translate(EVENT_SYSTEM_FOREGROUND, hwnd(0x20), 0, 0),
            Some(WindowEvent::Foreground { hwnd: 0x20 })
        );
        assert_eq!(
            translate(EVENT_OBJECT_DESTROY, hwnd(0x20), 0, 0),
            Some(WindowEvent::Destroyed { hwnd: 0x20 })
        );
    }

    #[test]
    fn sub_object_events_are_dropped() {
        // OBJID_CARET = -8
        assert_eq!(translate(EVENT_OBJECT_SHOW, hwnd(0x10), -8, 0), None);
        assert_eq!(translate(EVENT_OBJECT_DESTROY, hwnd(0x10), 0, 3), None);
    }

    #[test]
    fn null_handle_is_dropped() {
        assert_eq!(translate(EVENT_OBJECT_SHOW, hwnd(0), 0, 0), None);
    }

    #[test]
    fn unrelated_event_types_are_dropped() {
        assert_eq!(
            translate(EVENT_OBJECT_LOCATIONCHANGE, hwnd(0x10), 0, 0),
            None
        );
    }
}
