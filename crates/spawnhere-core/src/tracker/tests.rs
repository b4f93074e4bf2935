use super::*;
use crate::config::Config;
use crate::fake::{Call, FakeDesktop, FakeWindow};
use crate::{Point, Rect};

const NOTEPAD: usize = 0x100;
const TOOLTIP: usize = 0x200;

/// Desktop with an eligible window on monitor 1 and the cursor on
/// monitor 2, so every relocation produces a move.
fn setup() -> Tracker<FakeDesktop> {
    let mut desktop = FakeDesktop::two_monitors();
    desktop.add(NOTEPAD, FakeWindow::app("Notepad", Rect::new(100, 100, 400, 300)));
    desktop.add(
        TOOLTIP,
        FakeWindow::app("tooltips_class32", Rect::new(10, 10, 200, 60)),
    );
    desktop.cursor = Some(Point::new(3000, 500));
    Tracker::new(desktop, &Config::default())
}

fn moves(tracker: &mut Tracker<FakeDesktop>) -> usize {
    tracker
        .desktop_mut()
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::SetRect(..)))
        .count()
}

#[test]
fn first_show_relocates_and_tracks() {
    // Arrange
    let mut tracker = setup();

    // Act
    let outcome = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert_eq!(
        outcome,
        Outcome::Relocated(Placement::MoveTo(Rect::new(2053, 134, 400, 300)))
    );
    assert!(tracker.is_tracked(NOTEPAD));
    assert_eq!(moves(&mut tracker), 1);
}

#[test]
fn repeated_events_move_only_once() {
    // Arrange
    let mut tracker = setup();

    // Act
    tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    let second = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    let third = tracker.handle(&WindowEvent::Foreground { hwnd: NOTEPAD });

    // Assert
    assert_eq!(second, Outcome::AlreadyTracked);
    assert_eq!(third, Outcome::AlreadyTracked);
    assert_eq!(moves(&mut tracker), 1);
    assert_eq!(tracker.tracked_count(), 1);
}

#[test]
fn show_and_foreground_for_same_window_are_deduplicated() {
    // Arrange
    let mut tracker = setup();

    // Act: foreground arrives first this time.
    let first = tracker.handle(&WindowEvent::Foreground { hwnd: NOTEPAD });
    let second = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert!(matches!(first, Outcome::Relocated(_)));
    assert_eq!(second, Outcome::AlreadyTracked);
    assert_eq!(moves(&mut tracker), 1);
}

#[test]
fn ineligible_window_is_never_tracked_or_moved() {
    // Arrange
    let mut tracker = setup();

    // Act
    for _ in 0..5 {
        let shown = tracker.handle(&WindowEvent::Shown { hwnd: TOOLTIP });
        let focused = tracker.handle(&WindowEvent::Foreground { hwnd: TOOLTIP });

        // Assert
        assert!(matches!(shown, Outcome::Ineligible(Rejection::ReservedClass(_))));
        assert!(matches!(focused, Outcome::Ineligible(_)));
    }
    assert!(!tracker.is_tracked(TOOLTIP));
    assert_eq!(tracker.tracked_count(), 0);
    assert!(tracker.desktop_mut().calls().is_empty());
}

#[test]
fn ineligible_window_is_reevaluated_on_later_events() {
    // Arrange: window starts hidden, then becomes visible.
    let mut tracker = setup();
    tracker
        .desktop_mut()
        .windows
        .get_mut(&NOTEPAD)
        .unwrap()
        .visible = false;

    // Act
    let hidden = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    tracker
        .desktop_mut()
        .windows
        .get_mut(&NOTEPAD)
        .unwrap()
        .visible = true;
    let visible = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert_eq!(hidden, Outcome::Ineligible(Rejection::Hidden));
    assert!(matches!(visible, Outcome::Relocated(Placement::MoveTo(_))));
}

#[test]
fn destroy_forgets_window_and_reused_handle_is_fresh() {
    // Arrange
    let mut tracker = setup();
    tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Act
    let destroyed = tracker.handle(&WindowEvent::Destroyed { hwnd: NOTEPAD });
    let reshown = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert_eq!(destroyed, Outcome::Forgotten);
    assert!(matches!(reshown, Outcome::Relocated(_)));
    assert_eq!(moves(&mut tracker), 2);
}

#[test]
fn destroy_of_unknown_window_is_a_noop() {
    // Arrange
    let mut tracker = setup();

    // Act
    let first = tracker.handle(&WindowEvent::Destroyed { hwnd: 0xDEAD });
    let again = tracker.handle(&WindowEvent::Destroyed { hwnd: 0xDEAD });

    // Assert
    assert_eq!(first, Outcome::Ignored);
    assert_eq!(again, Outcome::Ignored);
    assert_eq!(tracker.tracked_count(), 0);
}

#[test]
fn destroy_is_unconditional_even_for_now_ineligible_windows() {
    // Arrange: tracked while eligible, then turned into a tool window.
    let mut tracker = setup();
    tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    tracker
        .desktop_mut()
        .windows
        .get_mut(&NOTEPAD)
        .unwrap()
        .style
        .tool_window = true;

    // Act
    let outcome = tracker.handle(&WindowEvent::Destroyed { hwnd: NOTEPAD });

    // Assert
    assert_eq!(outcome, Outcome::Forgotten);
    assert!(!tracker.is_tracked(NOTEPAD));
}

#[test]
fn window_already_on_cursor_monitor_is_tracked_but_not_moved() {
    // Arrange
    let mut tracker = setup();
    tracker.desktop_mut().cursor = Some(Point::new(500, 500));

    // Act
    let outcome = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    tracker.desktop_mut().cursor = Some(Point::new(3000, 500));
    let later = tracker.handle(&WindowEvent::Foreground { hwnd: NOTEPAD });

    // Assert
    assert_eq!(outcome, Outcome::Relocated(Placement::Skip));
    assert_eq!(later, Outcome::AlreadyTracked);
    assert_eq!(moves(&mut tracker), 0);
}

#[test]
fn failed_query_still_marks_window_tracked() {
    // Arrange
    let mut tracker = setup();
    tracker.desktop_mut().cursor = None;

    // Act
    let first = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });
    tracker.desktop_mut().cursor = Some(Point::new(3000, 500));
    let retry = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert_eq!(first, Outcome::Failed);
    assert_eq!(retry, Outcome::AlreadyTracked);
    assert!(tracker.is_tracked(NOTEPAD));
    assert_eq!(moves(&mut tracker), 0);
}

#[test]
fn vanished_window_is_rejected_not_tracked() {
    // Arrange: an event for a handle the desktop no longer knows.
    let mut tracker = setup();

    // Act
    let outcome = tracker.handle(&WindowEvent::Shown { hwnd: 0x999 });

    // Assert
    assert_eq!(outcome, Outcome::Ineligible(Rejection::Gone));
    assert_eq!(tracker.tracked_count(), 0);
}

#[test]
fn null_handle_is_ignored() {
    let mut tracker = setup();

    assert_eq!(tracker.handle(&WindowEvent::Shown { hwnd: 0 }), Outcome::Ignored);
    assert_eq!(
        tracker.handle(&WindowEvent::Foreground { hwnd: 0 }),
        Outcome::Ignored
    );
}

#[test]
fn foreground_events_are_ignored_when_disabled() {
    // Arrange
    let mut config = Config::default();
    config.events.foreground = false;
    let mut desktop = FakeDesktop::two_monitors();
    desktop.add(NOTEPAD, FakeWindow::app("Notepad", Rect::new(100, 100, 400, 300)));
    desktop.cursor = Some(Point::new(3000, 500));
    let mut tracker = Tracker::new(desktop, &config);

    // Act
    let focused = tracker.handle(&WindowEvent::Foreground { hwnd: NOTEPAD });
    let shown = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    assert_eq!(focused, Outcome::Ignored);
    assert!(matches!(shown, Outcome::Relocated(_)));
}

#[test]
fn maximized_window_is_remaximized_on_cursor_monitor() {
    // Arrange
    let mut tracker = setup();
    {
        let window = tracker.desktop_mut().windows.get_mut(&NOTEPAD).unwrap();
        window.maximized = true;
        window.rect = Some(Rect::new(0, 0, 1920, 1040));
    }

    // Act
    let outcome = tracker.handle(&WindowEvent::Shown { hwnd: NOTEPAD });

    // Assert
    let expected = Rect::new(2600, 250, 1200, 900);
    assert_eq!(
        outcome,
        Outcome::Relocated(Placement::RestoreCenterAndMaximize(expected))
    );
    assert_eq!(
        tracker.desktop_mut().calls(),
        vec![
            Call::Restore(NOTEPAD),
            Call::SetRect(NOTEPAD, expected),
            Call::Maximize(NOTEPAD),
        ]
    );
}
