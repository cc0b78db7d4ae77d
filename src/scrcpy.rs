use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Probe the mirroring tool before committing to a launch, so a missing or
/// broken install surfaces as a pre-flight error instead of an opaque child
/// failure.
pub async fn ensure_available(scrcpy: &Path) -> Result<()> {
    match Command::new(scrcpy).arg("--version").output().await {
        Ok(_) => Ok(()),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::MissingExecutable {
                tool: scrcpy.display().to_string(),
            })
        }
        Err(source) => Err(Error::Launch { source }),
    }
}

/// Run a mirroring session and block until it ends.
///
/// The child inherits our terminal, so its output streams straight through
/// and the operator's Ctrl-C is delivered to it by the kernel as part of the
/// foreground process group. We keep running through the signal ourselves so
/// the child can shut down cleanly and we can still report its status.
pub async fn run_session(scrcpy: &Path, args: &[String]) -> Result<i32> {
    debug!(tool = %scrcpy.display(), ?args, "launching mirroring session");

    let mut child = Command::new(scrcpy)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => Error::MissingExecutable {
                tool: scrcpy.display().to_string(),
            },
            _ => Error::Launch { source },
        })?;

    // Swallow SIGINT in the parent for the lifetime of the session: the
    // child owns the interrupt and we only report how it ended.
    tokio::spawn(async {
        loop {
            let _ = tokio::signal::ctrl_c().await;
        }
    });

    let status = child
        .wait()
        .await
        .map_err(|source| Error::Launch { source })?;

    debug!(?status, "mirroring session ended");
    Ok(exit_code(status))
}

/// Translate a child exit status into the code we exit with ourselves.
/// Signal deaths map to the conventional 128+signo.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
