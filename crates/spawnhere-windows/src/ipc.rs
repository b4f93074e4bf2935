use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use spawnhere_core::ipc::{Command, PIPE_NAME, Response};
use spawnhere_core::{Error, Result};
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

use crate::error::OrPlatform;

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;

/// A Named Pipe server that the daemon uses to accept CLI connections.
///
/// Each connection carries exactly one command and one response.
pub struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    /// Creates the pipe without waiting for a connection.
    pub fn create() -> Result<Self> {
        let pipe_name = HSTRING::from(PIPE_NAME);

        // SAFETY: CreateNamedPipeW creates a new named pipe instance.
        // We pass valid parameters and check for INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &pipe_name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                512, // output buffer size
                512, // input buffer size
                0,   // default timeout
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err(Error::platform("failed to create named pipe"));
        }

        Ok(Self { handle })
    }

    /// Blocks until a client connects, then reads one command.
    pub fn accept_command(&self) -> Result<Command> {
        // SAFETY: ConnectNamedPipe blocks until a client connects.
        unsafe { ConnectNamedPipe(self.handle, None) }.or_platform()?;

        let mut reader = BufReader::new(duplicate_handle_as_file(self.handle)?);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        Ok(serde_json::from_str(line.trim())?)
    }

    /// Sends a response back to the connected client and disconnects.
    pub fn send_response(&self, response: &Response) -> Result<()> {
        let mut writer = duplicate_handle_as_file(self.handle)?;
        writeln!(writer, "{}", serde_json::to_string(response)?)?;
        writer.flush()?;

        // SAFETY: FlushFileBuffers blocks until the client has read all
        // data. Without it, DisconnectNamedPipe discards unread data and
        // the client gets error 233.
        unsafe {
            let _ = FlushFileBuffers(self.handle);
        }

        // SAFETY: frees the instance for the next connection.
        unsafe { DisconnectNamedPipe(self.handle) }.or_platform()
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// RAII guard that closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the guard owns this handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Sends a command to the daemon and waits for its response.
///
/// The pipe handle is closed by the guard, even on error paths.
pub fn send_command(command: &Command) -> Result<Response> {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: CreateFileW opens an existing named pipe as a client.
    let handle = unsafe {
        CreateFileW(
            &pipe_name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )
    }
    .or_platform()?;

    let _guard = HandleGuard(handle);

    let mut writer = duplicate_handle_as_file(handle)?;
    writeln!(writer, "{}", serde_json::to_string(command)?)?;
    writer.flush()?;

    let mut reader = BufReader::new(duplicate_handle_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(serde_json::from_str(line.trim())?)
}

/// Checks whether the daemon's pipe exists without consuming a
/// connection.
pub fn is_daemon_running() -> bool {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: WaitNamedPipeW with a 1 ms timeout returns almost
    // immediately.
    unsafe { WaitNamedPipeW(&pipe_name, 1).as_bool() }
}

/// Duplicates a HANDLE and wraps it as a `File`, so the original handle
/// and the File can be closed independently.
fn duplicate_handle_as_file(handle: HANDLE) -> Result<File> {
    let mut dup = HANDLE::default();

    // SAFETY: the duplicate is owned by the returned File.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )
        .or_platform()?;

        Ok(File::from_raw_handle(dup.0))
    }
}
