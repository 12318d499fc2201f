// Docs Extractor
//
// Main documentation extractor that coordinates other extractors.

use super::class_extractor::extract_class;
use super::entities::*;
use super::error::{DocsError, Result};
use super::filters::is_angular_private_name;
use super::interface_extractor::extract_interface;
use super::oxc_host::OxcDocsHost;
use crate::ngtsc::logging::{Logger, NullLogger};
use crate::ngtsc::metadata::{register_decorator_metadata, MetadataRegistry};
use crate::ngtsc::reflection::{ClassLikeKind, ClassLikeNode, TypeScriptReflectionHost};
use glob::Pattern;
use indexmap::IndexSet;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use rayon::prelude::*;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Documentation extraction options.
#[derive(Debug, Clone, Default)]
pub struct ExtractorOptions {
    /// File patterns to include. Empty means every file passed in.
    pub include_patterns: Vec<String>,
    /// File patterns to exclude. Exclusion wins over inclusion.
    pub exclude_patterns: Vec<String>,
}

/// Result of documentation extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Entries in input file order, then source order.
    pub entries: Vec<DocEntry>,
    /// One message per file that could not be read or parsed.
    pub diagnostics: Vec<String>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Main documentation extractor.
pub struct DocsExtractor {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
    options: ExtractorOptions,
    logger: Box<dyn Logger + Send + Sync>,
}

impl DocsExtractor {
    pub fn new(options: ExtractorOptions, logger: Box<dyn Logger + Send + Sync>) -> Result<Self> {
        let include = compile_patterns(&options.include_patterns)?;
        let exclude = compile_patterns(&options.exclude_patterns)?;

        Ok(Self {
            include,
            exclude,
            options,
            logger,
        })
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract documentation from source files. Files are processed in
    /// parallel; a file that fails is reported in the diagnostics and does
    /// not affect the others.
    pub fn extract(&self, source_files: &[PathBuf]) -> ExtractionResult {
        let files: Vec<&PathBuf> = source_files
            .iter()
            .filter(|file| self.should_include_file(file))
            .collect();

        let outcomes: Vec<Result<Vec<DocEntry>>> = files
            .par_iter()
            .map(|file| {
                self.logger.debug(&format!("Extracting {}", file.display()));
                self.extract_file(file)
            })
            .collect();

        let mut result = ExtractionResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(entries) => result.entries.extend(entries),
                Err(e) => {
                    self.logger.warn(&e.to_string());
                    result.diagnostics.push(e.to_string());
                }
            }
        }

        self.logger.info(&format!(
            "Extracted {} entries from {} files ({} failed)",
            result.entries.len(),
            files.len(),
            result.diagnostics.len()
        ));

        result
    }

    /// Extract documentation from a single file.
    pub fn extract_file(&self, file: &Path) -> Result<Vec<DocEntry>> {
        let source_text = fs::read_to_string(file).map_err(|e| DocsError::io(file, e))?;
        extract_source(&source_text, file)
    }

    /// Check if a file should be included. Relative patterns match the
    /// path or any trailing run of its components, so `src/**/*.ts` accepts
    /// both `src/a.ts` and `/work/src/a.ts`.
    pub fn should_include_file(&self, file: &Path) -> bool {
        if matches_any(&self.exclude, file) {
            return false;
        }

        self.include.is_empty() || matches_any(&self.include, file)
    }

    /// Expand the include patterns relative to `base_dir`, dropping excluded
    /// paths and duplicates. Paths come back in pattern order and are
    /// accepted unchanged by [`DocsExtractor::extract`].
    pub fn discover_files(&self, base_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = IndexSet::new();

        for pattern in &self.options.include_patterns {
            let full_pattern = base_dir.join(pattern);
            let pattern_str = full_pattern.to_string_lossy();

            for entry in glob::glob(&pattern_str)? {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        self.logger.warn(&format!("Skipping unreadable path: {}", e));
                        continue;
                    }
                };

                if path.is_file() && self.should_include_file(&path) {
                    files.insert(path);
                }
            }
        }

        self.logger
            .debug(&format!("Discovered {} files under {}", files.len(), base_dir.display()));
        Ok(files.into_iter().collect())
    }
}

impl Default for DocsExtractor {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            options: ExtractorOptions::default(),
            logger: Box::new(NullLogger::new()),
        }
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(DocsError::from))
        .collect()
}

fn matches_any(patterns: &[Pattern], file: &Path) -> bool {
    patterns.iter().any(|pattern| pattern_matches(pattern, file))
}

fn pattern_matches(pattern: &Pattern, file: &Path) -> bool {
    if pattern.matches_path(file) {
        return true;
    }
    if Path::new(pattern.as_str()).is_absolute() {
        return false;
    }

    let components: Vec<Component<'_>> = file.components().collect();
    (1..components.len()).any(|start| {
        let tail: PathBuf = components[start..].iter().collect();
        pattern.matches_path(&tail)
    })
}

/// Parse one TypeScript source and extract an entry for every named
/// top-level class and interface. Declarations with framework-private
/// names are skipped.
pub fn extract_source(source_text: &str, file: &Path) -> Result<Vec<DocEntry>> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(file)
        .unwrap_or_else(|_| SourceType::default().with_typescript(true).with_module(true));
    let ret = Parser::new(&allocator, source_text, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        return Err(DocsError::Parse {
            path: file.to_path_buf(),
            messages: ret.errors.iter().map(|e| e.to_string()).collect(),
        });
    }
    let program = ret.program;

    let host = TypeScriptReflectionHost::new(source_text).with_file(file);
    let mut registry = MetadataRegistry::new();
    register_decorator_metadata(&host, &program, &mut registry);

    let docs_host = OxcDocsHost::new(source_text);
    let entries = host
        .get_class_like_declarations(&program)
        .iter()
        .filter(|decl| !is_angular_private_name(decl.name()))
        .map(|decl| match decl.kind() {
            ClassLikeKind::Interface => DocEntry::Class(extract_interface(decl, &docs_host)),
            ClassLikeKind::Class => extract_class(decl, &docs_host, &registry),
        })
        .collect();

    Ok(entries)
}
