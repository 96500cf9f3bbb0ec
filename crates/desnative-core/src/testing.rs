// In-memory collaborators for unit tests.
//
// `MemoryFilesystem` stamps each write with a strictly increasing mtime so
// ordering is deterministic, and can be told to fail specific operations.
// Clones share the same state.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::fs::{DirEntryInfo, FileStat, Filesystem};

#[derive(Debug, Default)]
struct State {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, (Vec<u8>, SystemTime)>,
    tick: u64,
    fail_remove: HashSet<PathBuf>,
    fail_stat: HashSet<PathBuf>,
    fail_list: bool,
    fail_create_dir: bool,
    fail_write: bool,
}

impl State {
    fn next_mtime(&mut self) -> SystemTime {
        self.tick += 1;
        UNIX_EPOCH + Duration::from_secs(1_700_000_000 + self.tick)
    }

    fn add_dir_all(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryFilesystem {
    state: Arc<Mutex<State>>,
}

fn denied(what: &str, path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, format!("{} denied: {}", what, path.display()))
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("not found: {}", path.display()))
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Seed a file (and its parent directories), bypassing failure switches.
    pub fn add_file(&self, path: PathBuf, data: Vec<u8>) {
        let mut st = self.lock();
        if let Some(parent) = path.parent() {
            st.add_dir_all(parent);
        }
        let mtime = st.next_mtime();
        st.files.insert(path, (data, mtime));
    }

    pub fn add_dir(&self, path: PathBuf) {
        self.lock().add_dir_all(&path);
    }

    /// Pin a file's mtime to `secs` after the epoch.
    pub fn set_modified(&self, path: &Path, secs: u64) {
        if let Some(file) = self.lock().files.get_mut(path) {
            file.1 = UNIX_EPOCH + Duration::from_secs(secs);
        }
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.lock().files.get(path).map(|(data, _)| data.clone())
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.lock().dirs.contains(path)
    }

    /// Names of the regular files directly inside `dir`, sorted.
    pub fn file_names(&self, dir: &Path) -> Vec<String> {
        self.lock()
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect()
    }

    pub fn fail_remove(&self, path: PathBuf) {
        self.lock().fail_remove.insert(path);
    }

    pub fn fail_stat(&self, path: PathBuf) {
        self.lock().fail_stat.insert(path);
    }

    pub fn fail_list(&self, on: bool) {
        self.lock().fail_list = on;
    }

    pub fn fail_create_dir(&self, on: bool) {
        self.lock().fail_create_dir = on;
    }

    pub fn fail_write(&self, on: bool) {
        self.lock().fail_write = on;
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut st = self.lock();
        if st.fail_create_dir {
            return Err(denied("mkdir", path));
        }
        st.add_dir_all(path);
        Ok(())
    }

    fn write(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut st = self.lock();
        if st.fail_write {
            return Err(denied("write", path));
        }
        match path.parent() {
            Some(parent) if st.dirs.contains(parent) => {}
            _ => return Err(not_found(path)),
        }
        let mtime = st.next_mtime();
        st.files.insert(path.to_path_buf(), (data.to_vec(), mtime));
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path).ok_or_else(|| not_found(path))
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<io::Result<DirEntryInfo>>> {
        let st = self.lock();
        if st.fail_list {
            return Err(denied("list", dir));
        }
        if !st.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        let subdirs = st
            .dirs
            .iter()
            .filter(|p| p.parent() == Some(dir))
            .map(|p| Ok(DirEntryInfo { path: p.clone(), is_dir: true }));
        let files = st
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .map(|p| Ok(DirEntryInfo { path: p.clone(), is_dir: false }));
        Ok(subdirs.chain(files).collect())
    }

    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let st = self.lock();
        if st.fail_stat.contains(path) {
            return Err(denied("stat", path));
        }
        st.files
            .get(path)
            .map(|(data, modified)| FileStat { modified: *modified, len: data.len() as u64 })
            .ok_or_else(|| not_found(path))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut st = self.lock();
        if st.fail_remove.contains(path) {
            return Err(denied("remove", path));
        }
        st.files.remove(path).map(|_| ()).ok_or_else(|| not_found(path))
    }
}
