//! File discovery and parallel analysis.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};
use walkdir::WalkDir;

use resplint_analyzer::{AnalyzerOptions, analyze_unit};
use resplint_common::{CancellationToken, Diagnostic, DiagnosticCategory};

use crate::args::CliArgs;
use crate::config::{
    CONFIG_FILE_NAME, FilesConfig, ResplintConfig, load_config, resolve_config_path, resolve_files,
    resolve_options,
};
use crate::loader::load_host_model;

/// Process exit statuses.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;
pub const EXIT_LOAD_FAILURE: i32 = 2;

/// Compiled include/exclude globs.
pub struct FileMatcher {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FileMatcher {
    pub fn new(files: &FilesConfig) -> Result<Self> {
        Ok(Self {
            include: build_glob_set(&files.include)?,
            exclude: build_glob_set(&files.exclude)?,
        })
    }

    /// `relative` is the path below the directory being walked.
    pub fn is_match(&self, relative: &Path) -> bool {
        if self
            .exclude
            .as_ref()
            .is_some_and(|exclude| exclude.is_match(relative))
        {
            return false;
        }
        self.include
            .as_ref()
            .is_none_or(|include| include.is_match(relative))
    }
}

fn build_glob_set(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("invalid glob '{pattern}'"))?);
    }
    Ok(Some(builder.build().context("failed to compile globs")?))
}

/// Host-model files under `paths`, sorted and deduplicated.
///
/// Files named explicitly are always taken. Directories are walked for
/// `*.json` files (except `resplint.json`) that pass the matcher.
pub fn discover_files(paths: &[PathBuf], matcher: &FileMatcher) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            bail!("path not found: {}", path.display());
        }

        for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to walk directory: {}", path.display()))?;
            let file = entry.path();
            if !entry.file_type().is_file() || !is_host_model(file) {
                continue;
            }
            let relative = file.strip_prefix(path).unwrap_or(file);
            if matcher.is_match(relative) {
                files.push(file.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_host_model(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_none_or(|name| name != CONFIG_FILE_NAME)
}

/// A host model that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub failures: Vec<LoadFailure>,
}

impl RunResult {
    /// `EXIT_DIAGNOSTICS` when an error is reported (or a warning, with
    /// `deny_warnings`), `EXIT_LOAD_FAILURE` when a file could not be loaded.
    pub fn exit_status(&self, deny_warnings: bool) -> i32 {
        let failing = self.diagnostics.iter().any(|diag| match diag.category {
            DiagnosticCategory::Error => true,
            DiagnosticCategory::Warning => deny_warnings,
            DiagnosticCategory::Suggestion | DiagnosticCategory::Message => false,
        });
        if failing {
            EXIT_DIAGNOSTICS
        } else if !self.failures.is_empty() {
            EXIT_LOAD_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Analyze every file in parallel. The result is the same as a sequential
/// run: diagnostics are ordered by file, then offset, then method order.
pub fn analyze_files(
    files: &[PathBuf],
    options: &AnalyzerOptions,
    cancel: &CancellationToken,
) -> RunResult {
    let outcomes: Vec<Result<Vec<Diagnostic>>> = files
        .par_iter()
        .map(|path| analyze_file(path, options, cancel))
        .collect();

    let mut result = RunResult {
        files: files.to_vec(),
        ..RunResult::default()
    };
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(diagnostics) => result.diagnostics.extend(diagnostics),
            Err(error) => {
                warn!(path = %path.display(), error = %format!("{error:#}"), "skipping file");
                result.failures.push(LoadFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    result
        .diagnostics
        .sort_by(|a, b| a.file.cmp(&b.file).then(a.start.cmp(&b.start)));
    result
}

fn analyze_file(
    path: &Path,
    options: &AnalyzerOptions,
    cancel: &CancellationToken,
) -> Result<Vec<Diagnostic>> {
    let _span = info_span!("analyze_file", path = %path.display()).entered();
    let unit = load_host_model(path)?;
    Ok(analyze_unit(&unit, options, cancel))
}

/// Resolved configuration for one invocation.
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub options: AnalyzerOptions,
    pub files: Vec<PathBuf>,
}

pub fn prepare(args: &CliArgs, cwd: &Path) -> Result<Invocation> {
    let config_path = resolve_config_path(cwd, args.config.as_deref())?;
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => ResplintConfig::default(),
    };
    let options = resolve_options(&config, args);
    let matcher = FileMatcher::new(&resolve_files(&config, args))?;

    let paths: Vec<PathBuf> = args
        .paths
        .iter()
        .map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                cwd.join(path)
            }
        })
        .collect();
    let files = discover_files(&paths, &matcher)?;

    Ok(Invocation {
        config_path,
        options,
        files,
    })
}

/// Load configuration, discover files and analyze them.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let invocation = prepare(args, cwd)?;
    info!(
        files = invocation.files.len(),
        config = ?invocation.config_path,
        "starting analysis"
    );

    let cancel = CancellationToken::new();
    let analyze = || analyze_files(&invocation.files, &invocation.options, &cancel);
    match args.jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("failed to build worker pool")?;
            Ok(pool.install(analyze))
        }
        None => Ok(analyze()),
    }
}
