//! In-memory desktop used by unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Desktop, Error, Monitor, Point, Rect, Result, Window, WindowStyle};

/// A mutation performed on a fake window, recorded in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetRect(usize, Rect),
    Restore(usize),
    Maximize(usize),
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub hwnd: usize,
    pub exists: bool,
    pub visible: bool,
    pub style: WindowStyle,
    pub title: String,
    pub class: Option<String>,
    pub rect: Option<Rect>,
    pub maximized: bool,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeWindow {
    /// A visible, captioned top-level window of the given class.
    pub fn app(class: &str, rect: Rect) -> Self {
        Self {
            hwnd: 0,
            exists: true,
            visible: true,
            style: WindowStyle {
                child: false,
                tool_window: false,
                caption: true,
            },
            title: format!("{class} window"),
            class: Some(class.to_string()),
            rect: Some(rect),
            maximized: false,
            calls: Rc::default(),
        }
    }

    fn gone(hwnd: usize, calls: Rc<RefCell<Vec<Call>>>) -> Self {
        Self {
            hwnd,
            exists: false,
            visible: false,
            style: WindowStyle::default(),
            title: String::new(),
            class: None,
            rect: None,
            maximized: false,
            calls,
        }
    }
}

impl Window for FakeWindow {
    fn exists(&self) -> bool {
        self.exists
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn title(&self) -> Result<String> {
        Ok(self.title.clone())
    }

    fn class(&self) -> Result<String> {
        self.class.clone().ok_or_else(|| Error::platform("no class"))
    }

    fn rect(&self) -> Result<Rect> {
        self.rect.ok_or_else(|| Error::platform("no rect"))
    }

    fn style(&self) -> WindowStyle {
        self.style
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn set_rect(&self, rect: &Rect) -> Result<()> {
        self.calls.borrow_mut().push(Call::SetRect(self.hwnd, *rect));
        Ok(())
    }

    fn restore(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Restore(self.hwnd));
        Ok(())
    }

    fn maximize(&self) -> Result<()> {
        self.calls.borrow_mut().push(Call::Maximize(self.hwnd));
        Ok(())
    }
}

pub struct FakeDesktop {
    pub windows: HashMap<usize, FakeWindow>,
    pub monitors: Vec<Monitor>,
    pub cursor: Option<Point>,
    /// When `false`, every monitor lookup fails.
    pub monitors_available: bool,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl FakeDesktop {
    /// Monitor 1 at (0,0) 1920x1040 and monitor 2 to its right at
    /// (1920,0) 2560x1400. The cursor starts on monitor 1.
    pub fn two_monitors() -> Self {
        Self {
            windows: HashMap::new(),
            monitors: vec![
                Monitor::new(1, Rect::new(0, 0, 1920, 1040)),
                Monitor::new(2, Rect::new(1920, 0, 2560, 1400)),
            ],
            cursor: Some(Point::new(960, 520)),
            monitors_available: true,
            calls: Rc::default(),
        }
    }

    /// Registers a window under `hwnd`, wiring its calls into this desktop.
    pub fn add(&mut self, hwnd: usize, mut window: FakeWindow) {
        window.hwnd = hwnd;
        window.calls = self.calls.clone();
        self.windows.insert(hwnd, window);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn nearest(&self, point: Point) -> Result<Monitor> {
        if !self.monitors_available {
            return Err(Error::platform("monitor info unavailable"));
        }
        self.monitors
            .iter()
            .min_by_key(|m| {
                let a = m.work_area;
                let dx = (a.left() - point.x).max(point.x - (a.right() - 1)).max(0);
                let dy = (a.top() - point.y).max(point.y - (a.bottom() - 1)).max(0);
                i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy)
            })
            .copied()
            .ok_or_else(|| Error::platform("no monitors"))
    }
}

impl Desktop for FakeDesktop {
    type Window = FakeWindow;

    fn window(&self, hwnd: usize) -> FakeWindow {
        self.windows
            .get(&hwnd)
            .cloned()
            .unwrap_or_else(|| FakeWindow::gone(hwnd, self.calls.clone()))
    }

    fn cursor_position(&self) -> Result<Point> {
        self.cursor.ok_or_else(|| Error::platform("no cursor"))
    }

    fn monitor_from_point(&self, point: Point) -> Result<Monitor> {
        self.nearest(point)
    }

    fn monitor_from_rect(&self, rect: &Rect) -> Result<Monitor> {
        if !self.monitors_available {
            return Err(Error::platform("monitor info unavailable"));
        }
        let overlap = |m: &Monitor| {
            let a = m.work_area;
            let w = (rect.right().min(a.right()) - rect.left().max(a.left())).max(0);
            let h = (rect.bottom().min(a.bottom()) - rect.top().max(a.top())).max(0);
            i64::from(w) * i64::from(h)
        };
        match self.monitors.iter().max_by_key(|m| overlap(*m)) {
            Some(m) if overlap(m) > 0 => Ok(*m),
            _ => self.nearest(Point::new(
                rect.x + rect.width / 2,
                rect.y + rect.height / 2,
            )),
        }
    }
}
