//! Song discovery and file processing
//!
//! Songs live in `songs/<song>/input/`. Each recognized input file is
//! converted and its variants written to the sibling `output/` folder. A
//! failing song is reported and skipped; the others still run.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::converters::cabc_to_abc::{convert_document, ConversionError, ConversionSettings, InputKind};
use crate::diagnostics::Diagnostics;

/// Input file names recognized inside a song's input folder, in processing order
pub const INPUT_FILES: [&str; 3] = [
    "notes.cabc.abc",
    "notes-lyrics.cabc.abc",
    "notes-lyrics-taala.cabc.abc",
];

/// Extension every CABC input carries
pub const INPUT_EXTENSION: &str = ".cabc.abc";

/// Input folder name and the output folder paired with it
const FOLDER_PAIRS: [(&str, &str); 2] = [("input", "output"), ("inputs", "outputs")];

/// One input file found under the songs directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongInput {
    pub song: String,
    pub path: PathBuf,
    pub kind: InputKind,
}

/// Outcome of converting one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    pub diagnostics: Diagnostics,
}

/// A file that could not be converted
#[derive(Debug, Clone, Serialize)]
pub struct FailedInput {
    pub input: PathBuf,
    pub error: String,
    /// True when the failure is a converter defect
    pub defect: bool,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub converted: Vec<FileReport>,
    pub failed: Vec<FailedInput>,
}

impl RunSummary {
    pub fn record(&mut self, input: &Path, result: Result<FileReport, ConversionError>) {
        match result {
            Ok(report) => self.converted.push(report),
            Err(err) => {
                log::error!("{}", err);
                self.failed.push(FailedInput {
                    input: input.to_path_buf(),
                    error: err.to_string(),
                    defect: err.is_defect(),
                });
            }
        }
    }

    pub fn has_defects(&self) -> bool {
        self.failed.iter().any(|f| f.defect)
    }
}

/// True when `path` names a CABC input file
pub fn is_cabc_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(INPUT_EXTENSION))
        .unwrap_or(false)
}

/// Output folder for an input file when none is given
///
/// `song/input/x.cabc.abc` → `song/output`, `song/inputs/x` → `song/outputs`,
/// anything else → `output/` next to the input.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let parent_name = parent
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (input_dir, output_dir) in FOLDER_PAIRS {
        if parent_name == input_dir {
            let song_dir = parent.parent().unwrap_or_else(|| Path::new(""));
            return song_dir.join(output_dir);
        }
    }
    parent.join(FOLDER_PAIRS[0].1)
}

/// Convert one input file and write its variants
pub fn process_file(
    input: &Path,
    output_dir: Option<&Path>,
    settings: &ConversionSettings,
) -> Result<FileReport, ConversionError> {
    let content = fs::read_to_string(input).map_err(|source| ConversionError::UnreadableInput {
        path: input.to_path_buf(),
        source,
    })?;

    let kind = InputKind::from_path(input);
    let result = convert_document(&content, kind, settings).map_err(|e| e.with_file(input))?;

    let output_dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_dir(input));
    fs::create_dir_all(&output_dir).map_err(|source| ConversionError::WriteFailed {
        path: output_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(result.variants.len());
    for rendered in &result.variants {
        let path = output_dir.join(rendered.variant.file_name());
        fs::write(&path, rendered.content()).map_err(|source| ConversionError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    result.diagnostics.log_all(&input.display().to_string());
    log::info!(
        "converted {} ({:?}): {} file(s) in {}",
        input.display(),
        kind,
        written.len(),
        output_dir.display()
    );

    Ok(FileReport {
        input: input.to_path_buf(),
        output_dir,
        written,
        diagnostics: result.diagnostics,
    })
}

/// Runs conversions over a songs directory
#[derive(Debug, Clone)]
pub struct SongRunner {
    pub songs_dir: PathBuf,
    pub settings: ConversionSettings,
}

impl Default for SongRunner {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("songs"),
            settings: ConversionSettings::default(),
        }
    }
}

impl SongRunner {
    pub fn new(songs_dir: impl Into<PathBuf>, settings: ConversionSettings) -> Self {
        Self {
            songs_dir: songs_dir.into(),
            settings,
        }
    }

    /// Find every input file under the songs directory
    ///
    /// Song folders starting with `_` are skipped. Results are sorted by
    /// song name so runs are reproducible.
    pub fn find_inputs(&self) -> Result<Vec<SongInput>, ConversionError> {
        let entries = fs::read_dir(&self.songs_dir).map_err(|source| {
            ConversionError::UnreadableInput {
                path: self.songs_dir.clone(),
                source,
            }
        })?;

        let mut song_dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.file_name()
                    .map(|n| !n.to_string_lossy().starts_with('_'))
                    .unwrap_or(false)
            })
            .collect();
        song_dirs.sort();

        let mut inputs = Vec::new();
        for song_dir in song_dirs {
            let song = song_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let Some(input_dir) = FOLDER_PAIRS
                .iter()
                .map(|(input, _)| song_dir.join(input))
                .find(|dir| dir.is_dir())
            else {
                log::debug!("skipping {}: no input folder", song_dir.display());
                continue;
            };

            for file_name in INPUT_FILES {
                let path = input_dir.join(file_name);
                if path.is_file() {
                    inputs.push(SongInput {
                        song: song.clone(),
                        kind: InputKind::from_path(&path),
                        path,
                    });
                }
            }
        }
        Ok(inputs)
    }

    /// Convert every input found; failures are recorded, not propagated
    pub fn process_all(&self) -> Result<RunSummary, ConversionError> {
        let inputs = self.find_inputs()?;
        if inputs.is_empty() {
            log::warn!("no CABC files found in {}", self.songs_dir.display());
        } else {
            log::info!("found {} CABC file(s) to process", inputs.len());
        }

        let mut summary = RunSummary::default();
        for input in &inputs {
            log::info!("processing {}/{}", input.song, display_name(&input.path));
            summary.record(&input.path, process_file(&input.path, None, &self.settings));
        }
        Ok(summary)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
