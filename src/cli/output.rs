//! Colored terminal output for build status.
//!
//! Status goes to stdout; errors always go to stderr regardless of `quiet`.

use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for consistent colored terminal output
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// Print a progress message
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.tagged("⋯", ColorSpec::new().set_fg(Some(Color::Magenta)), message)
    }

    /// Print a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.tagged(
            "✓",
            ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true),
            message,
        )
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.tagged("→", ColorSpec::new().set_fg(Some(Color::Blue)), message)
    }

    /// Print an aligned `label: value` line (for artifact details)
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        self.emit(|buffer| {
            buffer.set_color(ColorSpec::new().set_bold(true))?;
            write!(buffer, "    {:<10}", format!("{label}:"))?;
            buffer.reset()?;
            writeln!(buffer, " {value}")
        })
    }

    /// Print a section header
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.emit(|buffer| {
            writeln!(buffer)?;
            buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
            writeln!(buffer, "═══ {title} ═══")?;
            buffer.reset()
        })
    }

    /// Print indented text (for sub-items)
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.emit(|buffer| writeln!(buffer, "    {message}"))
    }

    /// Print an error message to stderr (always shown)
    pub fn error(&self, message: &str) {
        let bufwtr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = bufwtr.buffer();
        let written = write_tagged(
            &mut buffer,
            "✗",
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
            message,
        )
        .and_then(|()| bufwtr.print(&buffer));

        if written.is_err() {
            // Stderr failed - fallback to stdout as last resort
            println!("[STDERR ERROR] ✗ {message}");
        }
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn tagged(&self, symbol: &str, spec: &ColorSpec, message: &str) -> io::Result<()> {
        self.emit(|buffer| write_tagged(buffer, symbol, spec, message))
    }

    fn emit<F>(&self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Buffer) -> io::Result<()>,
    {
        if self.quiet {
            return Ok(());
        }

        let mut buffer = self.bufwtr.buffer();
        render(&mut buffer)?;
        self.bufwtr.print(&buffer)
    }
}

fn write_tagged(
    buffer: &mut Buffer,
    symbol: &str,
    spec: &ColorSpec,
    message: &str,
) -> io::Result<()> {
    buffer.set_color(spec)?;
    write!(buffer, "{symbol}")?;
    buffer.reset()?;
    writeln!(buffer, " {message}")
}
