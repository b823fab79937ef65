//! Trace data model and JSON loading
//!
//! A trace is the full ordered recording of execution frames produced by an
//! instrumented interpreter before the viewer starts. The viewer never
//! mutates it; a trace with zero frames is valid and simply leaves nothing
//! to navigate.
//!
//! Two wire forms are accepted: the object form emitted by the producing
//! interpreter (`{"frames": [...]}`, possibly with extra fields such as
//! `breakpoints`, all of which are ignored) and a bare JSON array of frames.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading or decoding a trace file.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace file {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed trace JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One recorded execution step.
///
/// Field names match the producing interpreter's serializer. `stack` holds
/// string-rendered operand-stack entries with index 0 at the bottom;
/// `locals` maps variable names (unique per frame) to rendered values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub function_name: String,
    /// Instruction offset within `function_name`.
    pub ip: usize,
    /// Human-readable rendering of the instruction being executed.
    pub instruction: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub locals: HashMap<String, String>,
}

/// Object wire form: `{"frames": [...]}` plus ignored extras.
#[derive(Deserialize)]
struct TraceFile {
    frames: Vec<Frame>,
}

/// An ordered, immutable sequence of frames, fixed for the life of a
/// viewing session.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Load a trace from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TraceError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let trace = Self::parse_str(&content)?;
        tracing::debug!(
            frames = trace.len(),
            path = %path.display(),
            "loaded trace"
        );
        Ok(trace)
    }

    /// Parse a trace from a JSON string (object form or bare frame array).
    pub fn parse_str(content: &str) -> Result<Self, TraceError> {
        let frames = if content.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<Frame>>(content)?
        } else {
            serde_json::from_str::<TraceFile>(content)?.frames
        };
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
