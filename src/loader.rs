//! Filesystem collaborator for script bundles.
//!
//! The model itself never touches disk; these helpers turn script files into
//! [`ScriptBundle`] values at the boundary. The bundle name is the file name
//! with its final extension stripped, matching how the generated module
//! exposes scripts as functions.

use crate::model::script::ScriptBundle;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Load one script file as a bundle.
pub fn load_script_bundle(path: &Path) -> Result<ScriptBundle> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty());
    let Some(name) = name else {
        bail!("script path {} has no usable file name", path.display());
    };
    Ok(ScriptBundle::new(name, text))
}

/// Recursively collect every script with `extension` under the given roots.
///
/// Bundles come back sorted by path so repeated loads are deterministic.
/// Missing roots are skipped rather than treated as errors to support
/// optional pre/post-load directories.
pub fn collect_script_bundles(roots: &[PathBuf], extension: &str) -> Result<Vec<ScriptBundle>> {
    let mut paths = Vec::new();
    for root in roots {
        collect_from_dir(root, extension, &mut paths)?;
    }
    paths.sort();
    paths.iter().map(|path| load_script_bundle(path)).collect()
}

fn collect_from_dir(root: &Path, extension: &str, acc: &mut Vec<PathBuf>) -> Result<()> {
    if !root.is_dir() {
        return Ok(());
    }
    for entry in fs::read_dir(root)
        .with_context(|| format!("listing script directory {}", root.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            collect_from_dir(&path, extension, acc)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            acc.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bundle_name_strips_final_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Invoke-Cleanup.ps1");
        fs::write(&path, "function Invoke-Cleanup { }").unwrap();

        let bundle = load_script_bundle(&path).unwrap();
        assert_eq!(bundle.name, "Invoke-Cleanup");
        assert_eq!(bundle.text, "function Invoke-Cleanup { }");
    }

    #[test]
    fn missing_file_errors_with_path_context() {
        let dir = TempDir::new().unwrap();
        let err = load_script_bundle(&dir.path().join("absent.ps1")).unwrap_err();
        assert!(err.to_string().contains("absent.ps1"));
    }

    #[test]
    fn collect_filters_by_extension_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.ps1"), "# b").unwrap();
        fs::write(dir.path().join("a.ps1"), "# a").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("c.ps1"), "# c").unwrap();

        let bundles =
            collect_script_bundles(&[dir.path().to_path_buf()], "ps1").unwrap();
        let names: Vec<_> = bundles.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_root_is_skipped() {
        let dir = TempDir::new().unwrap();
        let bundles =
            collect_script_bundles(&[dir.path().join("absent")], "ps1").unwrap();
        assert!(bundles.is_empty());
    }
}
