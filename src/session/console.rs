use crate::error::TurnError;
use crate::ui::style;
use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

/// Terminal output of a session: dialog goes to `out`, diagnostics to `err`.
pub struct Console<W: Write, E: Write> {
    out: W,
    err: E,
}

impl Console<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> Console<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn banner(&mut self, text: &str) {
        emit(&mut self.out, style::accent(text));
    }

    /// The model's dialog, printed as-is.
    pub fn say(&mut self, dialog: &str) {
        emit(&mut self.out, dialog);
    }

    pub fn report(&mut self, error: &TurnError) {
        tracing::debug!(error = ?error, "turn failed");
        emit(
            &mut self.err,
            style::warning(format_args!("{error}\nTry again with another prompt.")),
        );
    }

    pub fn note(&mut self, text: impl Display) {
        emit(&mut self.err, style::dim(text));
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }
}

fn emit(sink: &mut impl Write, text: impl Display) {
    if let Err(e) = writeln!(sink, "{text}").and_then(|()| sink.flush()) {
        tracing::warn!("failed to write to terminal: {e}");
    }
}
