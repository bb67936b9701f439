//! Shared test utilities for integration tests.
//!
//! Not all helpers are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use git2::{Oid, Repository, Signature};

use gitscribe::confirm::ConfirmationProvider;
use gitscribe::error::InferenceError;
use gitscribe::ollama::InferenceClient;

/// A test git repository in a temp directory.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new git repository with user.name/user.email configured.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { dir, repo }
    }

    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file relative to the repo root.
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write file");
    }

    /// Stage a single file.
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(std::path::Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Stage everything and create a commit. Returns the commit OID.
    pub fn commit_all(&self, message: &str) -> Oid {
        let sig = self.signature();
        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .expect("Failed to stage");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Subject of the current HEAD commit.
    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.message().unwrap_or("").to_string())
            .expect("No HEAD commit")
    }

    /// Number of commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> usize {
        let Ok(mut revwalk) = self.repo.revwalk() else {
            return 0;
        };
        if revwalk.push_head().is_err() {
            return 0;
        }
        revwalk.count()
    }
}

/// Inference fake that returns a canned reply and records every prompt.
pub struct FakeInference {
    pub reply: String,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
}

impl FakeInference {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceClient for FakeInference {
    async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Inference fake that always fails with an empty response.
pub struct FailingInference;

#[async_trait]
impl InferenceClient for FailingInference {
    async fn generate(&self, _prompt: &str) -> Result<String, InferenceError> {
        Err(InferenceError::EmptyResponse)
    }
}

/// Confirmation provider with a scripted answer that records every message
/// it was shown.
pub struct ScriptedConfirmation {
    answer: bool,
    pub asked: usize,
    pub shown: Vec<String>,
}

impl ScriptedConfirmation {
    pub fn yes() -> Self {
        Self { answer: true, asked: 0, shown: Vec::new() }
    }

    pub fn no() -> Self {
        Self { answer: false, asked: 0, shown: Vec::new() }
    }
}

impl ConfirmationProvider for ScriptedConfirmation {
    fn confirm_commit(&mut self, message: &str) -> std::io::Result<bool> {
        self.asked += 1;
        self.shown.push(message.to_string());
        Ok(self.answer)
    }
}
