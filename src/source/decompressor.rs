//! Data source that pipes the data file through an external decompression program.

use crate::error::{BibleError, Result};
use crate::source::DataSource;
use log::{debug, warn};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, ChildStdout, Command, ExitStatus, Stdio};

/// Arguments that make the usual tools (`xz`, `gzip`, `bzip2`, `zstd`) write the
/// decompressed file to standard output.
pub const DEFAULT_ARGS: [&str; 2] = ["-d", "-c"];

/// Runs `<program> <args...> <path>` and streams its standard output.
#[derive(Debug, Clone)]
pub struct DecompressorSource {
    program: String,
    args: Vec<String>,
    path: PathBuf,
}

impl DecompressorSource {
    pub fn new(program: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::with_args(program, DEFAULT_ARGS, path)
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I, path: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            path: path.into(),
        }
    }

    fn spawn(&self) -> Result<ChildGuard> {
        debug!(
            "spawning decompressor: {} {} {}",
            self.program,
            self.args.join(" "),
            self.path.display()
        );
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| BibleError::decompressor_launch(&self.program, e))?;
        Ok(ChildGuard::new(child))
    }
}

impl DataSource for DecompressorSource {
    fn describe(&self) -> String {
        format!("{} (via {})", self.path.display(), self.program)
    }

    fn read_with(&self, consume: &mut dyn FnMut(&mut dyn BufRead) -> Result<()>) -> Result<()> {
        let mut guard = self.spawn()?;
        let stdout = guard
            .take_stdout()
            .ok_or_else(|| BibleError::other("decompressor output was not captured"))?;
        let mut reader = BufReader::new(stdout);

        if let Err(err) = consume(&mut reader) {
            drop(reader);
            guard.kill_and_reap();
            return Err(err);
        }

        // the child may still be writing; let it finish before waiting on it
        io::copy(&mut reader, &mut io::sink())
            .map_err(|e| BibleError::file_error("Failed to drain decompressor output", e))?;
        drop(reader);

        let status = guard.wait()?;
        debug!("decompressor {} exited with {}", self.program, status);
        if !status.success() {
            return Err(BibleError::decompressor_failed(
                &self.program,
                status.to_string(),
            ));
        }
        Ok(())
    }
}

/// Owns the child process and guarantees it is reaped on every exit path.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self {
            child,
            reaped: false,
        }
    }

    fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.stdout.take()
    }

    fn wait(&mut self) -> Result<ExitStatus> {
        let status = self
            .child
            .wait()
            .map_err(|e| BibleError::file_error("Failed to wait for decompressor", e))?;
        self.reaped = true;
        Ok(status)
    }

    fn kill_and_reap(&mut self) {
        if self.reaped {
            return;
        }
        if let Err(err) = self.child.kill() {
            // already exited on its own; waiting below still reaps it
            debug!("decompressor kill failed: {err}");
        }
        if let Err(err) = self.child.wait() {
            warn!("failed to reap decompressor process: {err}");
        }
        self.reaped = true;
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        self.kill_and_reap();
    }
}
