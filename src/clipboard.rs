use std::collections::HashMap;

use crate::block_position::BlockPosition;
use crate::block_state::BlockState;
use crate::nbt::Tag;

/// A rectangular region of resolved block states copied out of a world.
///
/// Blocks live in a dense grid indexed `y*width*length + z*width + x`.
/// Voxels that carry extra state (containers, signs, ...) have their full
/// tag payload in a sparse side table keyed by grid coordinate. The
/// clipboard is built once by a format decoder and not mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipboard {
    width: u16,
    height: u16,
    length: u16,
    origin: BlockPosition,
    offset: BlockPosition,
    blocks: Vec<BlockState>,
    tile_entities: HashMap<(i32, i32, i32), HashMap<String, Tag>>,
}

impl Clipboard {
    pub(crate) fn new(
        width: u16,
        height: u16,
        length: u16,
        origin: BlockPosition,
        offset: BlockPosition,
        blocks: Vec<BlockState>,
        tile_entities: HashMap<(i32, i32, i32), HashMap<String, Tag>>,
    ) -> Self {
        debug_assert_eq!(
            blocks.len(),
            width as usize * height as usize * length as usize
        );
        Clipboard {
            width,
            height,
            length,
            origin,
            offset,
            blocks,
            tile_entities,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    /// (width, height, length) = (X, Y, Z) extents.
    pub fn dimensions(&self) -> (u16, u16, u16) {
        (self.width, self.height, self.length)
    }

    pub fn volume(&self) -> usize {
        self.blocks.len()
    }

    /// The absolute world coordinate the grid's (0,0,0) corresponds to.
    pub fn origin(&self) -> BlockPosition {
        self.origin
    }

    /// Vector from the origin to the clipboard's minimum corner.
    pub fn offset(&self) -> BlockPosition {
        self.offset
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && x < self.width as i32
            && y < self.height as i32
            && z < self.length as i32
    }

    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        (y as usize * self.width as usize * self.length as usize)
            + (z as usize * self.width as usize)
            + x as usize
    }

    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Option<&BlockState> {
        if !self.contains(x, y, z) {
            return None;
        }
        Some(&self.blocks[self.index(x, y, z)])
    }

    pub fn tile_entity_at(&self, x: i32, y: i32, z: i32) -> Option<&HashMap<String, Tag>> {
        self.tile_entities.get(&(x, y, z))
    }

    pub fn tile_entities(&self) -> &HashMap<(i32, i32, i32), HashMap<String, Tag>> {
        &self.tile_entities
    }

    /// Iterates every voxel with its grid position, X fastest-varying.
    pub fn iter_blocks(&self) -> impl Iterator<Item = (BlockPosition, &BlockState)> {
        let width = self.width as i32;
        let length = self.length as i32;
        self.blocks.iter().enumerate().map(move |(i, block)| {
            let i = i as i32;
            let x = i % width;
            let z = (i / width) % length;
            let y = i / (width * length);
            (BlockPosition::new(x, y, z), block)
        })
    }
}
