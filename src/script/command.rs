//! A single command within an IGV batch script.

use std::path::PathBuf;

use crate::window::Window;

/// A command understood by IGV's batch mode.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Resets the session.
    New,

    /// Selects the reference genome.
    Genome(String),

    /// Sets the directory that snapshots are saved to.
    SnapshotDirectory(PathBuf),

    /// Sets the maximum height of each panel.
    MaxPanelHeight(u64),

    /// Loads an alignment file.
    Load(PathBuf),

    /// Navigates to a window on a chromosome.
    Goto {
        /// The chromosome label.
        chromosome: String,

        /// The window to display.
        window: Window,
    },

    /// Saves a snapshot with the given filename.
    Snapshot(String),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::New => write!(f, "new"),
            Command::Genome(genome) => write!(f, "genome {genome}"),
            Command::SnapshotDirectory(path) => write!(f, "snapshotDirectory {}", path.display()),
            Command::MaxPanelHeight(height) => write!(f, "maxPanelHeight {height}"),
            Command::Load(path) => write!(f, "load {}", path.display()),
            Command::Goto { chromosome, window } => write!(
                f,
                "goto {chromosome}:{}-{}",
                window.start(),
                window.end()
            ),
            Command::Snapshot(filename) => write!(f, "snapshot {filename}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Command::New.to_string(), "new");
        assert_eq!(Command::Genome(String::from("b37")).to_string(), "genome b37");
        assert_eq!(
            Command::SnapshotDirectory(PathBuf::from("/shots")).to_string(),
            "snapshotDirectory /shots"
        );
        assert_eq!(Command::MaxPanelHeight(10000).to_string(), "maxPanelHeight 10000");
        assert_eq!(
            Command::Load(PathBuf::from("/bams/a.bam")).to_string(),
            "load /bams/a.bam"
        );
        assert_eq!(
            Command::Snapshot(String::from("A_chr1_pos5.png")).to_string(),
            "snapshot A_chr1_pos5.png"
        );
    }

    #[test]
    fn test_goto_with_negative_start() {
        let command = Command::Goto {
            chromosome: String::from("MT"),
            window: Window::around(10.0, 150.0),
        };

        assert_eq!(command.to_string(), "goto MT:-65-85");
    }
}
