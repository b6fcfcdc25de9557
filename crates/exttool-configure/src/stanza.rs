//! The git-config stanza patcher
//!
//! Writes the four-section diff/merge tool registration into an existing
//! git-config file without disturbing unrelated content. A file holds at
//! most one instance of the stanza: when the tool's section headers are
//! already present only the two `cmd` lines belonging to them are rewritten,
//! so a re-run after a launcher reinstall updates the path in place instead
//! of duplicating the block.
//!
//! This is a line-oriented patch, not a git-config parser: a `cmd` line is
//! ours exactly when the immediately preceding line is one of our own
//! section headers. Other tools' `cmd` lines are never touched.

use std::path::Path;

use tracing::info;

use crate::{Error, Result};
use exttool_fs::io;

/// Tool identifier registered in the git-config sections.
pub const TOOL_NAME: &str = "SeqFileDiffer";

/// Marker that identifies the tool's difftool/mergetool section headers.
const TOOL_MARKER: &str = "\"SeqFileDiffer\"]";

fn difftool_header() -> String {
    format!("[difftool \"{TOOL_NAME}\"]")
}

fn mergetool_header() -> String {
    format!("[mergetool \"{TOOL_NAME}\"]")
}

// The $-placeholders are substituted by Git, not by this tool; the argument
// templates must reach the config file byte-for-byte.
fn diff_cmd_line(launcher: &Path) -> String {
    format!(
        "\tcmd = \"\\\"{}\\\" \\\"$LOCAL\\\" \\\"$REMOTE\\\"\"",
        launcher.display()
    )
}

fn merge_cmd_line(launcher: &Path) -> String {
    format!(
        "\tcmd = \"\\\"{}\\\" \\\"$BASE\\\" \\\"$LOCAL\\\" \\\"$REMOTE\\\" \\\"$MERGED\\\"\"",
        launcher.display()
    )
}

fn stanza_block(launcher: &Path) -> [String; 8] {
    [
        "\n[diff]".to_string(),
        format!("\ttool = {TOOL_NAME}"),
        difftool_header(),
        diff_cmd_line(launcher),
        "[merge]".to_string(),
        format!("\ttool = {TOOL_NAME}"),
        mergetool_header(),
        merge_cmd_line(launcher),
    ]
}

fn contains_stanza(content: &str) -> bool {
    content.lines().any(|line| line.contains(TOOL_MARKER))
}

/// Insert or update the tool stanza in a git-config file.
///
/// Appends the stanza when absent; otherwise rewrites only the `cmd` lines
/// directly below the tool's own section headers with the current launcher
/// path. Patching twice with the same launcher leaves the file byte
/// identical.
pub fn patch(config_path: &Path, launcher: &Path) -> Result<()> {
    if launcher.as_os_str().is_empty() {
        return Err(Error::MissingLauncherPath);
    }

    let content = io::read_text(config_path)?;

    if contains_stanza(&content) {
        info!(
            "Tool stanza already present in '{}', updating the cmd lines",
            config_path.display()
        );
        update_in_place(config_path, &content, launcher)
    } else {
        append_stanza(config_path, launcher)?;
        info!("Tool stanza added to '{}'", config_path.display());
        Ok(())
    }
}

fn append_stanza(config_path: &Path, launcher: &Path) -> Result<()> {
    io::append_lines(config_path, &stanza_block(launcher)).map_err(Error::from)
}

fn update_in_place(config_path: &Path, content: &str, launcher: &Path) -> Result<()> {
    let difftool = difftool_header();
    let mergetool = mergetool_header();

    let mut lines: Vec<String> = content.lines().map(str::to_owned).collect();

    for index in 1..lines.len() {
        if !lines[index].contains("cmd") {
            continue;
        }

        if lines[index - 1].contains(&difftool) {
            lines[index] = diff_cmd_line(launcher);
        } else if lines[index - 1].contains(&mergetool) {
            lines[index] = merge_cmd_line(launcher);
        }
    }

    let mut updated = lines.join("\n");
    updated.push('\n');

    io::write_atomic(config_path, updated.as_bytes()).map_err(Error::from)
}
