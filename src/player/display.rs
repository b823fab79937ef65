//! Display model for the viewer
//!
//! `build_update` is the pure notify step: it turns the trace and cursor
//! into a plain value describing everything the renderer shows for one
//! frame. No UI types appear here; binding the model to a terminal (or any
//! other surface) is entirely the renderer's job.

use crate::trace::Trace;

/// Everything the renderer needs for one frame of display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUpdate {
    /// Frame counter text, 1-based: "Frame 3/12". "Frame 0/0" for an
    /// empty trace.
    pub position: String,
    /// 1-based number of the displayed frame; 0 for an empty trace.
    pub frame_number: usize,
    pub frame_count: usize,
    pub function_name: String,
    pub ip: usize,
    pub instruction: String,
    /// Operand stack in display order: most recently pushed entry first
    /// (reverse of storage order).
    pub stack: Vec<String>,
    /// Local variables as `(name, value)` pairs, sorted by name.
    pub locals: Vec<(String, String)>,
}

/// Build the display model for the frame at `cursor`.
///
/// An out-of-range cursor (only possible with an empty trace, where the
/// cursor stays 0) produces a degenerate update with empty content.
pub fn build_update(trace: &Trace, cursor: usize) -> DisplayUpdate {
    let Some(frame) = trace.get(cursor) else {
        return DisplayUpdate {
            position: "Frame 0/0".to_string(),
            frame_number: 0,
            frame_count: trace.len(),
            function_name: String::new(),
            ip: 0,
            instruction: String::new(),
            stack: Vec::new(),
            locals: Vec::new(),
        };
    };

    let mut locals: Vec<(String, String)> = frame
        .locals
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    locals.sort();

    DisplayUpdate {
        position: format!("Frame {}/{}", cursor + 1, trace.len()),
        frame_number: cursor + 1,
        frame_count: trace.len(),
        function_name: frame.function_name.clone(),
        ip: frame.ip,
        instruction: frame.instruction.clone(),
        stack: frame.stack.iter().rev().cloned().collect(),
        locals,
    }
}
