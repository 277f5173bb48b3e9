//! Plain-text rendering of fetched HTML
//!
//! Rendering is delegated to an external tool (`lynx`) invoked as a child
//! process: HTML goes in on stdin, rendered text comes back on stdout. The
//! trait keeps the rest of the program independent of that choice; tests and
//! alternative front-ends can substitute their own renderer.

use crate::{FetchError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Capability interface for turning HTML into readable terminal text.
pub trait TextRenderer {
    /// Renders `html` to plain text.
    fn render(&self, html: &str) -> Result<String>;
}

/// Renders HTML by piping it through `lynx -stdin -dump`.
#[derive(Debug)]
pub struct LynxRenderer {
    /// Renderer binary to invoke. Overridable so tests can exercise the
    /// spawn-failure path without depending on what is installed.
    program: String,
}

impl Default for LynxRenderer {
    fn default() -> Self {
        Self {
            program: "lynx".to_string(),
        }
    }
}

impl TextRenderer for LynxRenderer {
    fn render(&self, html: &str) -> Result<String> {
        run_renderer(&self.program, html).map_err(|source| FetchError::Render { source })
    }
}

fn run_renderer(program: &str, html: &str) -> std::io::Result<String> {
    let mut child = Command::new(program)
        .args(["-stdin", "-dump"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin was requested as piped above, so the handle is always present.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(html.as_bytes())?;
        // Dropping the handle closes lynx's stdin so it can finish.
    }

    let output = child.wait_with_output()?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseRenderer;

    impl TextRenderer for UppercaseRenderer {
        fn render(&self, html: &str) -> Result<String> {
            Ok(html.to_uppercase())
        }
    }

    #[test]
    fn test_renderer_is_substitutable() {
        let renderer = UppercaseRenderer;
        assert_eq!(renderer.render("hi").unwrap(), "HI");
    }

    #[test]
    fn test_missing_binary_surfaces_render_error() {
        // Point the real renderer at a binary that cannot exist.
        let renderer = LynxRenderer {
            program: "go2web-no-such-renderer".to_string(),
        };

        let err = renderer.render("<p>hi</p>").unwrap_err();
        assert!(matches!(err, FetchError::Render { .. }));
    }
}
