//! Where a rendered chart goes: a file on disk, or a viewer we wait on

use crate::cdf::Cdf;
use crate::error::{CdfError, Result};
use crate::plot::CdfPlot;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tempfile::NamedTempFile;

/// Destination for a rendered CDF chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// Write SVG to this path and return immediately
    File(PathBuf),
    /// Write SVG to a scratch file, open it, and block until the viewer exits.
    /// `None` selects the platform default viewer.
    Viewer { command: Option<String> },
}

impl RenderTarget {
    /// Render `cdf` with `plot` to this target
    pub fn render(&self, plot: &CdfPlot, cdf: &Cdf) -> Result<()> {
        match self {
            RenderTarget::File(path) => plot.write_svg(cdf, path),
            RenderTarget::Viewer { command } => {
                let svg = plot.render_svg(cdf)?;
                let launcher = match command {
                    Some(command) => Launcher::blocking(command),
                    None => default_viewer(),
                };
                launcher.show(&svg)
            }
        }
    }
}

/// A viewer command and how it behaves once started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher<'a> {
    /// Program plus whitespace-separated args; the file path is appended
    pub command: &'a str,
    /// Returns only once the viewer is closed
    pub blocks: bool,
    /// A non-zero exit means the file was not opened
    pub reports_status: bool,
}

impl<'a> Launcher<'a> {
    /// A user-supplied viewer: waited on, exit status checked
    pub fn blocking(command: &'a str) -> Self {
        Self {
            command,
            blocks: true,
            reports_status: true,
        }
    }

    /// Write `svg` to a scratch file and open it
    ///
    /// The file is removed once a blocking viewer exits. Detaching launchers
    /// return before the viewer has read it, so for those it is kept.
    pub fn show(&self, svg: &str) -> Result<()> {
        let scratch = write_scratch_svg(svg)?;

        let status = viewer_status(self.command, scratch.path())?;
        if self.reports_status && !status.success() {
            return Err(CdfError::ViewerStatus {
                command: self.command.to_string(),
                status,
            });
        }

        if !self.blocks {
            let (_, path) = scratch.keep().map_err(|e| CdfError::Write {
                path: std::env::temp_dir(),
                source: e.error,
            })?;
            tracing::info!(path = %path.display(), "kept CDF plot for detached viewer");
        }
        Ok(())
    }
}

/// Platform opener
///
/// `open -W` waits for the window to close. `xdg-open` and `explorer` hand
/// the file off and return; `explorer` exits non-zero even on success.
pub fn default_viewer() -> Launcher<'static> {
    if cfg!(target_os = "macos") {
        Launcher::blocking("open -W")
    } else if cfg!(target_os = "windows") {
        Launcher {
            command: "explorer",
            blocks: false,
            reports_status: false,
        }
    } else {
        Launcher {
            command: "xdg-open",
            blocks: false,
            reports_status: true,
        }
    }
}

/// Write `svg` to a new `latency-cdf-*.svg` file under the temp dir
fn write_scratch_svg(svg: &str) -> Result<NamedTempFile> {
    let write_err = |source| CdfError::Write {
        path: std::env::temp_dir(),
        source,
    };

    let mut file = tempfile::Builder::new()
        .prefix("latency-cdf-")
        .suffix(".svg")
        .tempfile()
        .map_err(write_err)?;
    file.write_all(svg.as_bytes()).map_err(write_err)?;

    tracing::debug!(path = %file.path().display(), "wrote CDF plot for viewer");
    Ok(file)
}

/// Run `command` (program plus whitespace-separated args) on `path` and wait
fn viewer_status(command: &str, path: &Path) -> Result<ExitStatus> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| CdfError::Viewer {
        command: command.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "empty viewer command"),
    })?;

    tracing::debug!(command, path = %path.display(), "launching viewer");

    Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|source| CdfError::Viewer {
            command: command.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewer_not_empty() {
        assert!(!default_viewer().command.trim().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_default_viewer_xdg_open_detaches() {
        let launcher = default_viewer();
        assert_eq!(launcher.command, "xdg-open");
        assert!(!launcher.blocks);
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_default_viewer_explorer_status_ignored() {
        let launcher = default_viewer();
        assert_eq!(launcher.command, "explorer");
        assert!(!launcher.reports_status);
    }

    #[test]
    fn test_custom_viewer_blocks_and_reports_status() {
        let launcher = Launcher::blocking("eog");
        assert!(launcher.blocks);
        assert!(launcher.reports_status);
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_without_status_tolerates_failure_exit() {
        // explorer-style launcher: exit code says nothing about the file
        let launcher = Launcher {
            command: "false",
            blocks: true,
            reports_status: false,
        };
        launcher.show("<svg/>").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_with_status_rejects_failure_exit() {
        let err = Launcher::blocking("false").show("<svg/>").unwrap_err();
        assert!(matches!(err, CdfError::ViewerStatus { .. }));
    }

    #[test]
    fn test_launcher_empty_command() {
        let err = Launcher::blocking("   ").show("<svg/>").unwrap_err();
        assert!(matches!(err, CdfError::Viewer { .. }));
    }

    #[test]
    fn test_launcher_missing_program() {
        let err = Launcher::blocking("latency-cdf-no-such-viewer-binary").show("<svg/>").unwrap_err();
        match err {
            CdfError::Viewer { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("expected viewer launch error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_success() {
        Launcher::blocking("true").show("<svg/>").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_viewer_target_receives_rendered_file() {
        // `test -s` succeeds only for an existing, non-empty file
        let cdf = Cdf::from_samples(vec![0.2, 0.1]).unwrap();
        let target = RenderTarget::Viewer {
            command: Some("test -s".to_string()),
        };
        target.render(&CdfPlot::default(), &cdf).unwrap();
    }

    #[test]
    fn test_file_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let cdf = Cdf::from_samples(vec![1.0]).unwrap();

        RenderTarget::File(path.clone())
            .render(&CdfPlot::default(), &cdf)
            .unwrap();
        assert!(path.exists());
    }
}
