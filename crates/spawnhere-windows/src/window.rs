use std::mem;

use spawnhere_core::{Error, Rect, Result, WindowStyle};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GWL_STYLE, GetClassNameW, GetWindowLongPtrW, GetWindowRect,
    GetWindowTextLengthW, GetWindowTextW, IsWindow, IsWindowVisible, IsZoomed, SHOW_WINDOW_CMD,
    SW_MAXIMIZE, SW_RESTORE, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SetWindowPos,
    ShowWindow, WS_CAPTION, WS_CHILD, WS_EX_TOOLWINDOW,
};

use crate::error::OrPlatform;

/// Classes that only repaint after a programmatic resize when
/// `WM_NCCALCSIZE` fires, which requires `SWP_FRAMECHANGED`.
const FRAME_CHANGED_CLASSES: &[&str] = &["Chrome_WidgetWin_1", "MozillaWindowClass"];

/// A top-level window, wrapping a Win32 `HWND`.
///
/// Holds only the handle; every query goes to the OS. The handle may
/// outlive the window it names, in which case `exists()` is false and
/// the other queries fail or return empty values.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Wraps a handle value carried in a `WindowEvent`.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// The handle as a pointer-sized integer, as used by the tracker.
    pub fn raw(&self) -> usize {
        self.hwnd.0 as usize
    }

    /// Visible frame bounds: DWM extended frame, or `GetWindowRect`
    /// when DWM has no answer.
    fn visible_frame(&self) -> Result<RECT> {
        let mut frame = RECT::default();
        // SAFETY: DWM writes at most size_of::<RECT>() bytes into `frame`.
        let dwm = unsafe {
            DwmGetWindowAttribute(
                self.hwnd,
                DWMWA_EXTENDED_FRAME_BOUNDS,
                &mut frame as *mut RECT as *mut _,
                mem::size_of::<RECT>() as u32,
            )
        };
        if dwm.is_err() {
            unsafe { GetWindowRect(self.hwnd, &mut frame) }.or_platform()?;
        }
        Ok(frame)
    }

    /// Full window bounds, including the invisible resize borders.
    fn outer_frame(&self) -> Result<RECT> {
        let mut outer = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut outer) }.or_platform()?;
        Ok(outer)
    }

    fn needs_frame_changed(&self) -> bool {
        spawnhere_core::Window::class(self)
            .is_ok_and(|class| FRAME_CHANGED_CLASSES.contains(&class.as_str()))
    }

    fn show(&self, cmd: SHOW_WINDOW_CMD) -> Result<()> {
        if !spawnhere_core::Window::exists(self) {
            return Err(Error::platform(format!("window 0x{:X} is gone", self.raw())));
        }
        // ShowWindow returns the previous visibility, not an error.
        unsafe {
            let _ = ShowWindow(self.hwnd, cmd);
        }
        Ok(())
    }
}

impl spawnhere_core::Window for Window {
    fn exists(&self) -> bool {
        unsafe { IsWindow(Some(self.hwnd)).as_bool() }
    }

    fn is_visible(&self) -> bool {
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }

    fn title(&self) -> Result<String> {
        // SAFETY: GetWindowTextW writes at most buffer.len() characters.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length <= 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied.max(0) as usize]))
        }
    }

    fn class(&self) -> Result<String> {
        // 256 is the maximum class name length in Win32.
        let mut buffer = [0u16; 256];
        let length = unsafe { GetClassNameW(self.hwnd, &mut buffer) };
        if length <= 0 {
            return Err(Error::platform(format!("no class name for 0x{:X}", self.raw())));
        }
        Ok(String::from_utf16_lossy(&buffer[..length as usize]))
    }

    fn rect(&self) -> Result<Rect> {
        let frame = self.visible_frame()?;
        Ok(Rect::from_edges(frame.left, frame.top, frame.right, frame.bottom))
    }

    fn style(&self) -> WindowStyle {
        // An invalid handle reads as 0: no caption, so it gets filtered.
        let (style, ex_style) = unsafe {
            (
                GetWindowLongPtrW(self.hwnd, GWL_STYLE) as u32,
                GetWindowLongPtrW(self.hwnd, GWL_EXSTYLE) as u32,
            )
        };
        style_from_bits(style, ex_style)
    }

    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn set_rect(&self, rect: &Rect) -> Result<()> {
        let outer = self.outer_frame()?;
        let visible = self.visible_frame()?;
        let target = outer_rect_for(rect, &outer, &visible);

        let mut flags = SWP_NOZORDER | SWP_NOACTIVATE;
        if self.needs_frame_changed() {
            flags |= SWP_FRAMECHANGED;
        }

        log::trace!(
            "set_rect 0x{:X}: visible ({},{} {}x{}) outer ({},{} {}x{})",
            self.raw(),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            target.x,
            target.y,
            target.width,
            target.height
        );

        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                target.x,
                target.y,
                target.width,
                target.height,
                flags,
            )
        }
        .or_platform()
    }

    fn restore(&self) -> Result<()> {
        self.show(SW_RESTORE)
    }

    fn maximize(&self) -> Result<()> {
        self.show(SW_MAXIMIZE)
    }
}

/// Decodes the style bits the eligibility filter looks at.
///
/// `WS_CAPTION` is `WS_BORDER | WS_DLGFRAME`; either bit counts.
fn style_from_bits(style: u32, ex_style: u32) -> WindowStyle {
    WindowStyle {
        child: style & WS_CHILD.0 != 0,
        tool_window: ex_style & WS_EX_TOOLWINDOW.0 != 0,
        caption: style & WS_CAPTION.0 != 0,
    }
}

/// The outer rectangle to pass to `SetWindowPos` so that the visible
/// frame lands exactly on `target`.
///
/// `outer` and `visible` are the window's current bounds with and
/// without the invisible drop-shadow borders.
fn outer_rect_for(target: &Rect, outer: &RECT, visible: &RECT) -> Rect {
    let left = visible.left - outer.left;
    let top = visible.top - outer.top;
    let right = outer.right - visible.right;
    let bottom = outer.bottom - visible.bottom;

    Rect::new(
        target.x - left,
        target.y - top,
        target.width + left + right,
        target.height + top + bottom,
    )
}
