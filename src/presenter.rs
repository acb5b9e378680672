use crate::advisor::Report;
use crate::error::Result;
use std::io::Write;
use tracing::warn;

/// Front-end boundary. The core only ever hands over finished reports and
/// user-facing error messages.
pub trait Presenter {
    fn render_report(&mut self, report: &Report) -> Result<()>;

    fn show_error(&mut self, message: &str) -> Result<()>;
}

/// Writes reports to one stream and errors to another.
pub struct TerminalPresenter<W, E> {
    out: W,
    err: E,
}

impl TerminalPresenter<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<W: Write, E: Write> TerminalPresenter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> Presenter for TerminalPresenter<W, E> {
    fn render_report(&mut self, report: &Report) -> Result<()> {
        writeln!(self.out, "=== {} ===", report.tab)?;
        for pane in &report.panes {
            writeln!(self.out)?;
            writeln!(self.out, "--- {} ---", pane.title)?;
            writeln!(self.out, "{}", pane.text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "Error: {}", message)?;
        self.err.flush()?;
        Ok(())
    }
}

/// Hand the outcome of an action to `presenter`.
///
/// Input problems are shown to the user and reported as `Ok(false)`; any
/// other failure is returned to the caller.
pub fn present<P: Presenter + ?Sized>(presenter: &mut P, outcome: Result<Report>) -> Result<bool> {
    match outcome {
        Ok(report) => {
            presenter.render_report(&report)?;
            Ok(true)
        }
        Err(e) if e.is_user_error() => {
            warn!("Rejected input: {}", e);
            presenter.show_error(&e.to_string())?;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Convenience for reports that cannot fail.
pub fn present_report<P: Presenter + ?Sized>(presenter: &mut P, report: Report) -> Result<()> {
    present(presenter, Ok(report)).map(|_| ())
}
