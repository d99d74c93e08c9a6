//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::{OutputFormat, OutputMode};

const DEFAULT_WIDTH: usize = 80;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// Color is off when stdout is not a TTY, `NO_COLOR` is set, `TERM=dumb`,
    /// or `no_color` is requested.
    pub fn from_env(
        json: bool,
        format: Option<OutputFormat>,
        no_color: bool,
        ascii: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            is_tty,
            color: is_tty && !no_color && !no_color_env && !term_is_dumb,
            unicode: !ascii,
            width: terminal_width().unwrap_or(DEFAULT_WIDTH),
            mode: OutputMode::resolve(json, format, is_tty, term_is_dumb),
        }
    }

    /// Plain, colorless, ASCII context.
    pub fn plain() -> Self {
        Self {
            is_tty: false,
            color: false,
            unicode: false,
            width: DEFAULT_WIDTH,
            mode: OutputMode::Plain,
        }
    }

    /// Check if interactive prompts are allowed.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && std::io::stdin().is_terminal()
    }
}

/// Terminal width from `COLUMNS`, then the TTY itself.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|width| *width > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize struct.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl returned success, so winsize has been filled in.
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_plain_context() {
        let ctx = UiContext::plain();
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
        assert!(ctx.width > 0);
    }
}
