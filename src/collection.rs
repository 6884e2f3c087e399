//! Collection orchestration.
//!
//! A collection directory holds an `input.json` configuration and a
//! `docs/` directory with one runs file per document (`<stem>.json`).
//! Documents are processed independently and in parallel; their headings
//! are aggregated into a single candidate set, and ranking statistics
//! are computed once over that set, so parallelism never changes the
//! output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rayon::prelude::*;

use crate::config::CollectionConfig;
use crate::error::{Error, Result};
use crate::model::{DocumentRuns, RankedReport, ReportMetadata, Section};
use crate::outline::extract_outline;
use crate::rank::{build_report, rank_sections};

/// Name of the configuration file inside a collection directory.
pub const CONFIG_FILE: &str = "input.json";

/// Name of the runs directory inside a collection directory.
pub const DOCS_DIR: &str = "docs";

/// Path of the runs file for a configured document.
///
/// `"handbook.pdf"` maps to `docs/handbook.json`.
pub fn runs_path(collection_dir: &Path, filename: &str) -> PathBuf {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());
    collection_dir.join(DOCS_DIR).join(format!("{}.json", stem))
}

/// Load one document's extracted runs.
pub fn load_runs(path: impl AsRef<Path>) -> Result<DocumentRuns> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Rank a collection's documents that are already in memory.
///
/// This is the pure core of [`process_collection`]: extract each
/// document's outline, pool the headings as candidates, rank them
/// against the persona query, and build the report.
pub fn analyze_collection(
    config: &CollectionConfig,
    documents: &[(String, DocumentRuns)],
) -> RankedReport {
    let sections: Vec<Section> = documents
        .par_iter()
        .map(|(name, runs)| {
            let outline = extract_outline(runs);
            log::debug!("{}: {} headings", name, outline.len());
            Section::from_headings(name, &outline)
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    let ranked = rank_sections(&config.query(), sections);

    let metadata = ReportMetadata {
        input_documents: config.document_names(),
        persona: config.persona.role.clone(),
        job_to_be_done: config.job_to_be_done.task.clone(),
        processing_timestamp: Utc::now().to_rfc3339(),
    };
    build_report(metadata, &ranked)
}

/// Process one collection directory and write its report.
///
/// A document whose runs file is missing or unreadable contributes
/// nothing and is logged; it never aborts the collection.
pub fn process_collection(collection_dir: &Path, output_dir: &Path) -> Result<PathBuf> {
    let config = CollectionConfig::load(collection_dir.join(CONFIG_FILE))?;

    let documents: Vec<(String, DocumentRuns)> = config
        .documents
        .iter()
        .filter_map(|doc| {
            let path = runs_path(collection_dir, &doc.filename);
            match load_runs(&path) {
                Ok(runs) => Some((doc.filename.clone(), runs)),
                Err(err) => {
                    log::warn!("skipping {}: {}", doc.filename, err);
                    None
                }
            }
        })
        .collect();

    let report = analyze_collection(&config, &documents);

    let collection_name = collection_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "collection".to_string());
    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{}_output.json", collection_name));
    fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;

    log::info!(
        "{}: {} sections ranked, report at {}",
        collection_name,
        report.extracted_sections.len(),
        output_path.display()
    );
    Ok(output_path)
}

/// Process every collection under a directory.
///
/// A subdirectory counts as a collection if it carries an `input.json`.
/// Collections that fail are logged and skipped; the run continues.
pub fn process_collections(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut collection_dirs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir() && p.join(CONFIG_FILE).exists())
        .collect();
    collection_dirs.sort();

    if collection_dirs.is_empty() {
        return Err(Error::Other(format!(
            "no collections found under {}",
            input_dir.display()
        )));
    }

    let mut outputs = Vec::with_capacity(collection_dirs.len());
    for dir in collection_dirs {
        match process_collection(&dir, output_dir) {
            Ok(path) => outputs.push(path),
            Err(err) => log::warn!("skipping collection {}: {}", dir.display(), err),
        }
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DocumentRef, JobToBeDone, Persona};
    use crate::model::{PageRuns, TextRun};

    fn config_for(names: &[&str]) -> CollectionConfig {
        CollectionConfig {
            collection_info: None,
            documents: names
                .iter()
                .map(|n| DocumentRef {
                    filename: n.to_string(),
                    title: n.trim_end_matches(".pdf").to_string(),
                })
                .collect(),
            persona: Persona {
                role: "Safety engineer".to_string(),
            },
            job_to_be_done: JobToBeDone {
                task: "review pump installation procedures".to_string(),
            },
        }
    }

    fn doc_with_headings(texts: &[&str]) -> DocumentRuns {
        let mut lines: Vec<Vec<TextRun>> = (0..4)
            .map(|i| {
                vec![TextRun::new(
                    format!("ordinary body paragraph number {} at base size", i),
                    10.0,
                    "Helvetica",
                    500.0 + i as f32 * 20.0,
                )]
            })
            .collect();
        for (i, text) in texts.iter().enumerate() {
            lines.insert(i, vec![TextRun::new(*text, 20.0, "Helvetica-Bold", 40.0 + i as f32)]);
        }
        DocumentRuns {
            pages: vec![PageRuns { lines }],
        }
    }

    #[test]
    fn test_runs_path_uses_stem() {
        let path = runs_path(Path::new("/data/col"), "handbook.pdf");
        assert_eq!(path, Path::new("/data/col/docs/handbook.json"));
    }

    #[test]
    fn test_analyze_collection_ranks_across_documents() {
        let config = config_for(&["pumps.pdf", "forms.pdf"]);
        let documents = vec![
            (
                "pumps.pdf".to_string(),
                doc_with_headings(&["Pump installation checklist", "Motor wiring"]),
            ),
            (
                "forms.pdf".to_string(),
                doc_with_headings(&["Annual leave form"]),
            ),
        ];

        let report = analyze_collection(&config, &documents);
        assert_eq!(report.metadata.persona, "Safety engineer");
        assert_eq!(
            report.metadata.input_documents,
            vec!["pumps.pdf".to_string(), "forms.pdf".to_string()]
        );
        assert!(!report.extracted_sections.is_empty());
        assert_eq!(
            report.extracted_sections[0].section_title,
            "Pump installation checklist"
        );
        assert_eq!(report.extracted_sections[0].document, "pumps.pdf");
        assert_eq!(report.extracted_sections[0].importance_rank, 1);
    }

    #[test]
    fn test_analyze_collection_empty_documents() {
        let config = config_for(&["ghost.pdf"]);
        let report = analyze_collection(&config, &[]);
        assert!(report.extracted_sections.is_empty());
        assert!(report.subsection_analysis.is_empty());
        assert_eq!(report.metadata.input_documents, vec!["ghost.pdf".to_string()]);
    }

    #[test]
    fn test_process_collection_end_to_end() {
        let root = tempfile::tempdir().unwrap();
        let collection = root.path().join("Collection 1");
        let docs = collection.join(DOCS_DIR);
        fs::create_dir_all(&docs).unwrap();

        config_for(&["pumps.pdf", "missing.pdf"])
            .save(collection.join(CONFIG_FILE))
            .unwrap();
        let runs = doc_with_headings(&["Pump installation checklist"]);
        fs::write(
            docs.join("pumps.json"),
            serde_json::to_string(&runs).unwrap(),
        )
        .unwrap();

        let out_dir = root.path().join("out");
        let output = process_collection(&collection, &out_dir).unwrap();
        assert_eq!(
            output.file_name().unwrap().to_string_lossy(),
            "Collection 1_output.json"
        );

        let report: RankedReport =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        // missing.pdf contributed nothing but still appears in metadata
        assert_eq!(report.metadata.input_documents.len(), 2);
        assert_eq!(report.extracted_sections[0].document, "pumps.pdf");
    }

    #[test]
    fn test_process_collections_skips_broken() {
        let root = tempfile::tempdir().unwrap();
        let good = root.path().join("good");
        fs::create_dir_all(good.join(DOCS_DIR)).unwrap();
        config_for(&[]).save(good.join(CONFIG_FILE)).unwrap();

        let broken = root.path().join("broken");
        fs::create_dir_all(&broken).unwrap();
        fs::write(broken.join(CONFIG_FILE), "not json").unwrap();

        let plain = root.path().join("not-a-collection");
        fs::create_dir_all(&plain).unwrap();

        let outputs =
            process_collections(root.path(), &root.path().join("out")).unwrap();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0]
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("good"));
    }

    #[test]
    fn test_process_collections_empty_input() {
        let root = tempfile::tempdir().unwrap();
        let err = process_collections(root.path(), &root.path().join("out")).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }
}
