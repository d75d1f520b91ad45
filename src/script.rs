//! IGV batch scripts.

pub mod command;

use std::io;
use std::path::Path;
use std::path::PathBuf;

use nonempty::NonEmpty;

pub use command::Command;

use crate::config::Config;
use crate::table::Record;
use crate::window::Window;

/// The reference genome every snapshot is taken against.
pub const GENOME: &str = "b37";

/// The extension of each snapshot image.
pub const SNAPSHOT_EXTENSION: &str = "png";

/// The separator used between identifiers in a snapshot filename.
const IDENTIFIER_SEPARATOR: &str = "-";

/// An append-only IGV batch script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script(Vec<Command>);

impl Script {
    /// Gets the commands in the script.
    pub fn commands(&self) -> &[Command] {
        &self.0
    }

    /// Gets the number of commands (lines) in the script.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the script has no commands.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends the commands needed to snapshot a single variant across its
    /// matched alignment files.
    ///
    /// The block is always `4 + paths.len() + 2` lines: session reset, genome,
    /// snapshot directory, panel height, one load per path, navigation, and
    /// the snapshot itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    ///
    /// use igvbatch::config::Builder;
    /// use igvbatch::script::Script;
    /// use igvbatch::table::Record;
    /// use igvbatch::window::Window;
    /// use nonempty::nonempty;
    ///
    /// let config = Builder::default()
    ///     .input("variants.tsv")
    ///     .snapshot_directory("/shots")
    ///     .try_build()?;
    /// let record = Record::new("1", "12345", nonempty![String::from("BS001")]);
    /// let paths = nonempty![PathBuf::from("/bams/sampleA_BS001.bam")];
    ///
    /// let mut script = Script::default();
    /// script.push_snapshot(&config, &record, &paths, Window::around(12345.0, 150.0));
    ///
    /// assert_eq!(
    ///     script.to_string(),
    ///     "new\n\
    ///      genome b37\n\
    ///      snapshotDirectory /shots\n\
    ///      maxPanelHeight 10000\n\
    ///      load /bams/sampleA_BS001.bam\n\
    ///      goto 1:12270-12420\n\
    ///      snapshot BS001_chr1_pos12345.png"
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn push_snapshot(
        &mut self,
        config: &Config,
        record: &Record,
        paths: &NonEmpty<PathBuf>,
        window: Window,
    ) {
        self.0.push(Command::New);
        self.0.push(Command::Genome(GENOME.to_string()));
        self.0.push(Command::SnapshotDirectory(
            config.snapshot_directory().to_path_buf(),
        ));
        self.0.push(Command::MaxPanelHeight(config.panel_height()));
        self.0
            .extend(paths.iter().map(|path| Command::Load(path.clone())));
        self.0.push(Command::Goto {
            chromosome: record.chromosome().to_string(),
            window,
        });
        self.0.push(Command::Snapshot(snapshot_filename(record)));
    }

    /// Writes the script to a file, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, self.to_string())
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, command) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{command}")?;
        }

        Ok(())
    }
}

/// Builds the snapshot filename for a record.
fn snapshot_filename(record: &Record) -> String {
    let identifiers = record
        .identifiers()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(IDENTIFIER_SEPARATOR);

    format!(
        "{identifiers}_chr{}_pos{}.{SNAPSHOT_EXTENSION}",
        record.chromosome(),
        record.position()
    )
}

#[cfg(test)]
mod tests {
    use nonempty::nonempty;
    use tempdir::TempDir;

    use super::*;
    use crate::config::Builder;

    fn config() -> Config {
        Builder::default()
            .input("variants.tsv")
            .snapshot_directory("/shots")
            .panel_height(500)
            .try_build()
            .unwrap()
    }

    #[test]
    fn test_block_layout() {
        let record = Record::new(
            "X",
            "1000",
            nonempty![String::from("BS001"), String::from("BS002")],
        );
        let paths = nonempty![
            PathBuf::from("/bams/BS001.bam"),
            PathBuf::from("/bams/BS002.bam"),
            PathBuf::from("/bams/BS002_rerun.bam")
        ];

        let mut script = Script::default();
        script.push_snapshot(&config(), &record, &paths, Window::around(1000.0, 150.0));

        assert_eq!(script.len(), 4 + paths.len() + 2);

        let commands = script.commands();
        assert_eq!(commands[0], Command::New);
        assert_eq!(commands[1], Command::Genome(String::from("b37")));
        assert_eq!(
            commands[2],
            Command::SnapshotDirectory(PathBuf::from("/shots"))
        );
        assert_eq!(commands[3], Command::MaxPanelHeight(500));
        assert_eq!(commands[4], Command::Load(PathBuf::from("/bams/BS001.bam")));
        assert_eq!(commands[5], Command::Load(PathBuf::from("/bams/BS002.bam")));
        assert_eq!(
            commands[6],
            Command::Load(PathBuf::from("/bams/BS002_rerun.bam"))
        );
        assert_eq!(commands[7].to_string(), "goto X:925-1075");
        assert_eq!(
            commands[8].to_string(),
            "snapshot BS001-BS002_chrX_pos1000.png"
        );
    }

    #[test]
    fn test_blocks_are_newline_joined() -> Result<(), Box<dyn std::error::Error>> {
        let config = config();
        let mut script = Script::default();

        let first = Record::new("1", "100", nonempty![String::from("A")]);
        let second = Record::new("2", "200", nonempty![String::from("B")]);

        script.push_snapshot(
            &config,
            &first,
            &nonempty![PathBuf::from("/bams/A.bam")],
            Window::around(100.0, 10.0),
        );
        script.push_snapshot(
            &config,
            &second,
            &nonempty![PathBuf::from("/bams/B.bam")],
            Window::around(200.0, 10.0),
        );

        let dir = TempDir::new("script")?;
        let path = dir.path().join("batch.txt");
        script.write_to(&path)?;

        let written = std::fs::read_to_string(&path)?;
        let expected = script
            .commands()
            .iter()
            .map(|command| command.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(written, expected);
        assert!(!written.starts_with('\n'));
        assert!(!written.ends_with('\n'));
        assert_eq!(written.lines().count(), 14);
        Ok(())
    }

    #[test]
    fn test_empty_script() {
        let script = Script::default();
        assert!(script.is_empty());
        assert_eq!(script.to_string(), "");
    }
}
