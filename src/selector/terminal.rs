use std::env;
use std::io::{self, IsTerminal};

/// What the current terminal can do, captured once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSupport {
    pub term_is_dumb: bool,
    pub stdin_tty: bool,
    /// The menu draws on stderr; stdout belongs to command substitution
    pub stderr_tty: bool,
}

impl TerminalSupport {
    pub fn detect() -> Self {
        Self {
            term_is_dumb: term_is_dumb(env::var("TERM").ok().as_deref()),
            stdin_tty: io::stdin().is_terminal(),
            stderr_tty: io::stderr().is_terminal(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        !self.term_is_dumb && self.stdin_tty && self.stderr_tty
    }
}

/// `TERM=dumb`, an empty `TERM`, or (outside Windows consoles) no `TERM` at all
fn term_is_dumb(term: Option<&str>) -> bool {
    match term {
        None => !cfg!(windows),
        Some(term) => term.is_empty() || term == "dumb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_is_dumb() {
        assert!(term_is_dumb(Some("dumb")));
        assert!(term_is_dumb(Some("")));
        assert!(!term_is_dumb(Some("xterm-256color")));
    }

    #[cfg(unix)]
    #[test]
    fn test_unset_term_is_dumb_on_unix() {
        assert!(term_is_dumb(None));
    }

    #[test]
    fn test_interactive_requires_ttys() {
        let base = TerminalSupport { term_is_dumb: false, stdin_tty: true, stderr_tty: true };
        assert!(base.is_interactive());
        assert!(!TerminalSupport { stdin_tty: false, ..base }.is_interactive());
        assert!(!TerminalSupport { stderr_tty: false, ..base }.is_interactive());
        assert!(!TerminalSupport { term_is_dumb: true, ..base }.is_interactive());
    }
}
