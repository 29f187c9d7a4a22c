use crate::core::Storage;
use crate::utils::error::{ConsolidationError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Relative paths are resolved against `base_path`; absolute paths are used as-is.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| ConsolidationError::io(full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        let io_err = |e| ConsolidationError::Io {
            path: full_path.clone(),
            source: e,
        };

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        // 輸出是符號連結時寫到它指向的檔案，連結本身保留
        let target = resolve_symlink(&full_path).map_err(io_err)?;
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());

        // 先寫暫存檔再改名，失敗時不留下半成品
        let tmp_path = temp_sibling(&target);
        let written = fs::write(&tmp_path, data)
            .and_then(|_| match permissions {
                Some(permissions) => fs::set_permissions(&tmp_path, permissions),
                None => Ok(()),
            })
            .and_then(|_| fs::rename(&tmp_path, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_err(e));
        }
        Ok(())
    }
}

fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).or_else(|_| {
            // dangling link: create the file it names
            let link = fs::read_link(path)?;
            Ok(path.parent().unwrap_or(Path::new("")).join(link))
        }),
        _ => Ok(path.to_path_buf()),
    }
}
