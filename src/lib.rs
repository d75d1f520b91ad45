//! `igvbatch` is a crate for generating [IGV] batch scripts that snapshot a
//! table of variants across the alignment files of the samples they were
//! observed in.
//!
//! Generation is a single pass over the table:
//!
//! - The [`table::Reader`] parses the header line and yields a
//!   [`table::Record`] (chromosome, position, and identifier tokens) for each
//!   subsequent row.
//! - The [`matcher::Matcher`] lists the alignment directory once and finds
//!   every `.bam` file whose name contains one of the record's identifiers.
//! - The [`window::Window`] centered on the record's position is computed.
//! - The [`script::Script`] gains a block of commands that loads the matched
//!   files, navigates to the window, and takes a snapshot.
//!
//! Records without any matching alignment files are skipped. The script is
//! written only after every record was processed.
//!
//! Most users will want the [`generator::run()`] entry point, which drives the
//! whole pipeline from a [`config::Config`].
//!
//! ```
//! use igvbatch::config::Builder;
//! use igvbatch::matcher::Matcher;
//! use igvbatch::table::Reader;
//!
//! let config = Builder::default()
//!     .input("variants.tsv")
//!     .snapshot_directory("/snapshots")
//!     .try_build()?;
//!
//! let data = b"chrom\tstart\tID\n1\t12345\tBS001\n2\t500\tBS999\n";
//! let reader = Reader::new(&data[..]);
//!
//! let (script, summary) = igvbatch::generator::generate_from(&config, reader, || {
//!     Ok(Matcher::from_filenames("/bams", ["sampleA_BS001.bam"]))
//! })?;
//!
//! assert_eq!(summary.snapshots(), 1);
//! assert_eq!(summary.skipped(), 1);
//!
//! for command in script.commands() {
//!     println!("{command}");
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [IGV]: https://igv.org/doc/desktop/#UserGuide/tools/batch/

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod generator;
pub mod matcher;
pub mod script;
pub mod table;
pub mod window;
