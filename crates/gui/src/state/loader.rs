//! Background model loading. File IO and glTF parsing happen on a worker
//! thread; the UI polls for events once per frame.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use crate::asset::{self, LoadedModel};

pub enum LoadEvent {
    /// Bytes read so far, in percent (0..=100).
    Progress(f32),
    Loaded(LoadedModel),
    Failed(String),
}

/// Handle to one in-flight load. Dropping it abandons the load: the worker's
/// sends start failing and it winds down on its own.
pub struct ModelLoader {
    rx: mpsc::Receiver<LoadEvent>,
    path: PathBuf,
}

impl ModelLoader {
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        thread::spawn(move || {
            let progress_tx = tx.clone();
            let result = asset::load_glb(&worker_path, |pct| {
                let _ = progress_tx.send(LoadEvent::Progress(pct));
            });
            let event = match result {
                Ok(model) => LoadEvent::Loaded(model),
                Err(e) => LoadEvent::Failed(e.to_string()),
            };
            let _ = tx.send(event);
        });
        Self { rx, path }
    }

    pub fn poll(&self) -> Vec<LoadEvent> {
        self.rx.try_iter().collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loader state as the UI sees it: progress while loading, the error of the
/// last failed load, nothing else.
#[derive(Default)]
pub struct LoadState {
    active: Option<ModelLoader>,
    pub progress: Option<f32>,
    pub error: Option<String>,
}

impl LoadState {
    /// Kick off a load, replacing (and thereby cancelling) any in-flight one.
    pub fn start(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "loading model");
        self.active = Some(ModelLoader::spawn(path));
        self.progress = Some(0.0);
        self.error = None;
    }

    pub fn in_progress(&self) -> bool {
        self.active.is_some()
    }

    /// Drain worker events. Returns the model once it arrives.
    pub fn poll(&mut self) -> Option<LoadedModel> {
        let loader = self.active.as_ref()?;
        let mut loaded = None;
        for event in loader.poll() {
            match event {
                LoadEvent::Progress(pct) => self.progress = Some(pct),
                LoadEvent::Loaded(model) => loaded = Some(model),
                LoadEvent::Failed(message) => {
                    tracing::error!(path = %loader.path().display(), error = %message, "model load failed");
                    self.error = Some(message);
                    self.active = None;
                    self.progress = None;
                    return None;
                }
            }
        }
        if loaded.is_some() {
            self.active = None;
            self.progress = None;
        }
        loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::time::{Duration, Instant};

    fn poll_until_done(state: &mut LoadState) -> Option<LoadedModel> {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            if let Some(model) = state.poll() {
                return Some(model);
            }
            if !state.in_progress() {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("load did not finish in time");
    }

    #[test]
    fn test_load_round_trip_through_worker() {
        let glb = fixtures::tiny_glb(&[("sole", [0.1, 0.1, 0.1, 1.0])]);
        let path = std::env::temp_dir().join(format!("partview-load-{}.glb", uuid::Uuid::new_v4()));
        std::fs::write(&path, glb).unwrap();

        let mut state = LoadState::default();
        state.start(path.clone());
        assert!(state.in_progress());

        let model = poll_until_done(&mut state).expect("model");
        assert_eq!(model.parts.len(), 1);
        assert_eq!(model.parts[0].name, "sole");
        assert!(!state.in_progress());
        assert!(state.progress.is_none());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_surfaces_error() {
        let mut state = LoadState::default();
        state.start(PathBuf::from("/nonexistent/shoe.glb"));
        assert!(poll_until_done(&mut state).is_none());
        assert!(state.error.is_some());
        assert!(state.progress.is_none());
    }

    #[test]
    fn test_restart_clears_previous_error() {
        let mut state = LoadState::default();
        state.start(PathBuf::from("/nonexistent/shoe.glb"));
        let _ = poll_until_done(&mut state);
        assert!(state.error.is_some());

        state.start(PathBuf::from("/nonexistent/other.glb"));
        assert!(state.error.is_none());
    }
}
