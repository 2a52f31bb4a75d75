//! Best-effort completion sounds

use std::io::Write;

use tokio::process::Command;
use tracing::debug;

/// External program run when a countdown completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChimeCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Run the chime program and wait for it to exit
pub async fn play_chime(chime: &ChimeCommand) -> Result<(), String> {
    debug!("Playing chime: {} {:?}", chime.program, chime.args);

    let output = Command::new(&chime.program)
        .args(&chime.args)
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", chime.program, e))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!("{} exited with {}: {}", chime.program, output.status, stderr.trim()))
    }
}

/// Write the BEL control character to the terminal
pub fn ring_bell() -> Result<(), String> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(b"\x07")
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("Failed to ring terminal bell: {}", e))
}
