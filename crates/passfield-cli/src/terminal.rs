//! Raw terminal input for live editing.
//!
//! `RawMode` switches stdin out of canonical mode so each keystroke arrives
//! as it is typed, and restores the previous settings on drop. `KeyDecoder`
//! turns the incoming byte stream into keys.

/// A decoded keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    /// Ctrl-U
    ClearLine,
    /// Enter or Ctrl-D
    Submit,
    /// Ctrl-C
    Interrupt,
    /// Escape sequences, stray control bytes, invalid UTF-8
    Ignored,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    #[default]
    None,
    /// Saw ESC
    Start,
    /// Inside `ESC [` or `ESC O`, waiting for the final byte
    Sequence,
}

/// Incremental byte-to-key decoder.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    utf8: Vec<u8>,
    expected: usize,
    escape: EscapeState,
}

impl KeyDecoder {
    /// Feed one byte. Returns a key once a full keystroke has been read.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.escape {
            EscapeState::Start => {
                if byte == b'[' || byte == b'O' {
                    self.escape = EscapeState::Sequence;
                    return None;
                }
                // A lone ESC; the byte after it is an ordinary key
                self.escape = EscapeState::None;
                return self.feed(byte);
            }
            EscapeState::Sequence => {
                if (0x40..=0x7E).contains(&byte) {
                    self.escape = EscapeState::None;
                    return Some(Key::Ignored);
                }
                return None;
            }
            EscapeState::None => {}
        }

        if !self.utf8.is_empty() {
            return self.continue_utf8(byte);
        }

        match byte {
            0x1B => {
                self.escape = EscapeState::Start;
                None
            }
            0x03 => Some(Key::Interrupt),
            0x04 | b'\r' | b'\n' => Some(Key::Submit),
            0x08 | 0x7F => Some(Key::Backspace),
            0x15 => Some(Key::ClearLine),
            b'\t' => Some(Key::Char('\t')),
            0x00..=0x1F => Some(Key::Ignored),
            0x20..=0x7E => Some(Key::Char(byte as char)),
            _ => self.start_utf8(byte),
        }
    }

    fn start_utf8(&mut self, byte: u8) -> Option<Key> {
        let expected = match byte {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Some(Key::Ignored),
        };
        self.expected = expected;
        self.utf8.push(byte);
        None
    }

    fn continue_utf8(&mut self, byte: u8) -> Option<Key> {
        if byte & 0xC0 != 0x80 {
            // Drop the truncated sequence and decode this byte afresh
            self.utf8.clear();
            return self.feed(byte);
        }
        self.utf8.push(byte);
        if self.utf8.len() < self.expected {
            return None;
        }
        let key = std::str::from_utf8(&self.utf8)
            .ok()
            .and_then(|s| s.chars().next())
            .map(Key::Char)
            .unwrap_or(Key::Ignored);
        self.utf8.clear();
        Some(key)
    }
}

/// Whether raw key input is available on this platform.
pub fn raw_mode_supported() -> bool {
    cfg!(unix)
}

/// Guard that keeps stdin in raw mode until dropped.
#[cfg(unix)]
pub struct RawMode {
    original: libc::termios,
}

#[cfg(unix)]
impl RawMode {
    pub fn enable() -> anyhow::Result<Self> {
        use std::mem::MaybeUninit;

        let mut original = MaybeUninit::<libc::termios>::uninit();
        // SAFETY: tcgetattr fills the termios struct on success
        if unsafe { libc::tcgetattr(libc::STDIN_FILENO, original.as_mut_ptr()) } != 0 {
            return Err(anyhow::anyhow!(
                "Failed to read terminal settings: {}",
                std::io::Error::last_os_error()
            ));
        }
        let original = unsafe { original.assume_init() };

        let mut raw = original;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::ISIG | libc::IEXTEN);
        raw.c_iflag &= !(libc::IXON | libc::ICRNL);
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;

        // SAFETY: raw is a valid termios derived from the current settings
        if unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, &raw) } != 0 {
            return Err(anyhow::anyhow!(
                "Failed to enter raw mode: {}",
                std::io::Error::last_os_error()
            ));
        }
        tracing::trace!("terminal in raw mode");
        Ok(Self { original })
    }
}

#[cfg(unix)]
impl Drop for RawMode {
    fn drop(&mut self) {
        // SAFETY: restores the settings captured in enable()
        unsafe {
            libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, &self.original);
        }
        tracing::trace!("terminal restored");
    }
}

#[cfg(not(unix))]
pub struct RawMode;

#[cfg(not(unix))]
impl RawMode {
    pub fn enable() -> anyhow::Result<Self> {
        Err(anyhow::anyhow!("Raw key input is not supported on this platform"))
    }
}
