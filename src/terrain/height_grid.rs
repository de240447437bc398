/// Discrete column heights, row-major with `x` varying fastest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightGrid {
    width: u32,
    depth: u32,
    heights: Vec<u32>,
}

impl HeightGrid {
    pub fn new(width: u32, depth: u32, heights: Vec<u32>) -> Self {
        assert_eq!(
            heights.len(),
            width as usize * depth as usize,
            "height grid size mismatch"
        );
        Self {
            width,
            depth,
            heights,
        }
    }

    pub fn filled(width: u32, depth: u32, height: u32) -> Self {
        Self::new(width, depth, vec![height; width as usize * depth as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn get(&self, x: u32, z: u32) -> Option<u32> {
        if x >= self.width || z >= self.depth {
            return None;
        }
        Some(self.heights[z as usize * self.width as usize + x as usize])
    }

    /// `(x, z, height)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let width = self.width.max(1);
        self.heights
            .iter()
            .enumerate()
            .map(move |(i, &h)| (i as u32 % width, i as u32 / width, h))
    }

    /// Number of blocks a world built from this grid holds.
    pub fn total(&self) -> u64 {
        self.heights.iter().map(|&h| h as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
