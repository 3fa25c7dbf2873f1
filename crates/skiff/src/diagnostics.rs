use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes an error to stderr with a colored severity prefix. The message
/// itself carries the diagnostic category tag and 0-indexed line.
pub fn emit_error(err: &crate::Error) {
    let mut stream = StandardStream::stderr(ColorChoice::Auto);

    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red)).set_bold(true);

    let _ = stream.set_color(&spec);
    let _ = write!(stream, "error");
    let _ = stream.reset();
    let _ = writeln!(stream, ": {err}");
}
