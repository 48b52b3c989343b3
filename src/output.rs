use std::io::{self, Write};

/// Writes `message` to stdout and, when given, to the capture `writer` as well.
///
/// A failing stdout is logged rather than returned; only the capture writer can fail the call.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        tracing::error!(error = %e, "failed to write to stdout");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}
