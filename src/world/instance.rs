//! Per-block instance data for instanced cube draws.
//!
//! The buffer is a CPU-side shadow of block positions in storage order. The
//! renderer polls `is_dirty` and re-uploads before its next draw; the world
//! core never holds a GPU handle.

use glam::Vec3;

#[derive(Debug, Clone, Default)]
pub struct InstanceBuffer {
    positions: Vec<Vec3>,
    dirty: bool,
    generation: u64,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a new position list and flags it for upload.
    pub fn replace(&mut self, positions: Vec<Vec3>) {
        self.positions = positions;
        self.dirty = true;
        self.generation += 1;
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Bumped once per replace; lets a renderer notice it missed an upload.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tightly packed `[f32; 3]` per instance.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }
}
