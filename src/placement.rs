//! Static block-placement metadata: which pass a block must be written in,
//! which neighbor it attaches to, and where an entity rests on top of it.
//! The tables are built once on first access and never change; lookups are
//! safe to share across threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::block_id as id;

/// Which of the three placement passes a block belongs to. A placement
/// engine writes all `Normal` blocks, then `Late` (blocks that fall off a
/// missing support), then `Final` (blocks whose support is itself a late
/// block).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceOrder {
    Normal,
    Late,
    Final,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// Unit grid vector, with north = -Z and up = +Y.
    pub fn vector(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::South => (0, 0, 1),
            Direction::East => (1, 0, 0),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
        }
    }
}

static SHOULD_PLACE_LAST: Lazy<HashSet<u16>> = Lazy::new(|| {
    HashSet::from([
        id::SAPLING,
        id::BED,
        id::POWERED_RAIL,
        id::DETECTOR_RAIL,
        id::LONG_GRASS,
        id::DEAD_BUSH,
        id::YELLOW_FLOWER,
        id::RED_FLOWER,
        id::BROWN_MUSHROOM,
        id::RED_MUSHROOM,
        id::TORCH,
        id::FIRE,
        id::REDSTONE_WIRE,
        id::CROPS,
        id::LADDER,
        id::MINECART_TRACKS,
        id::LEVER,
        id::STONE_PRESSURE_PLATE,
        id::WOODEN_PRESSURE_PLATE,
        id::REDSTONE_TORCH_OFF,
        id::REDSTONE_TORCH_ON,
        id::STONE_BUTTON,
        id::SNOW,
        id::PORTAL,
        id::REDSTONE_REPEATER_OFF,
        id::REDSTONE_REPEATER_ON,
        id::TRAP_DOOR,
        id::VINE,
        id::LILY_PAD,
        id::NETHER_WART,
        id::PISTON_BASE,
        id::PISTON_STICKY_BASE,
        id::PISTON_EXTENSION,
        id::PISTON_MOVING_PIECE,
        id::COCOA_PLANT,
        id::TRIPWIRE_HOOK,
        id::TRIPWIRE,
        id::FLOWER_POT,
        id::CARROTS,
        id::POTATOES,
        id::WOODEN_BUTTON,
        id::ANVIL,
        id::PRESSURE_PLATE_LIGHT,
        id::PRESSURE_PLATE_HEAVY,
        id::COMPARATOR_OFF,
        id::COMPARATOR_ON,
        id::ACTIVATOR_RAIL,
        id::IRON_TRAP_DOOR,
        id::CARPET,
        id::DOUBLE_PLANT,
        id::DAYLIGHT_SENSOR_INVERTED,
    ])
});

static SHOULD_PLACE_FINAL: Lazy<HashSet<u16>> = Lazy::new(|| {
    HashSet::from([
        id::SIGN_POST,
        id::WOODEN_DOOR,
        id::ACACIA_DOOR,
        id::BIRCH_DOOR,
        id::JUNGLE_DOOR,
        id::DARK_OAK_DOOR,
        id::SPRUCE_DOOR,
        id::WALL_SIGN,
        id::IRON_DOOR,
        id::CACTUS,
        id::REED,
        id::CAKE_BLOCK,
        id::PISTON_EXTENSION,
        id::PISTON_MOVING_PIECE,
        id::STANDING_BANNER,
        id::WALL_BANNER,
    ])
});

static TOP_LIMIT_BY_ID: Lazy<HashMap<u16, f64>> = Lazy::new(|| {
    HashMap::from([
        (id::BED, 0.5625),
        (id::BREWING_STAND, 0.875),
        (id::CAKE_BLOCK, 0.4375),
        (id::CAULDRON, 0.3125),
        (id::COCOA_PLANT, 0.750),
        (id::ENCHANTMENT_TABLE, 0.75),
        (id::FENCE, 1.5),
        (id::LILY_PAD, 0.015625),
        (id::REDSTONE_REPEATER_ON, 0.125),
        (id::REDSTONE_REPEATER_OFF, 0.125),
        (id::SLOW_SAND, 0.875),
        (id::COBBLESTONE_WALL, 1.5),
        (id::FLOWER_POT, 0.375),
        (id::COMPARATOR_OFF, 0.125),
        (id::COMPARATOR_ON, 0.125),
        (id::DAYLIGHT_SENSOR, 0.375),
        (id::HOPPER, 0.625),
        // Defaults when no data value entry matches.
        (id::HEAD, 0.75),
        (id::TRAP_DOOR, 1.0),
        (id::FENCE_GATE, 1.5),
    ])
});

static TOP_LIMIT_BY_ID_DATA: Lazy<HashMap<(u16, u8), f64>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for data in 6..16u8 {
        m.insert((id::CAKE_BLOCK, data), 0.0);
    }
    for data in 0..16u8 {
        if data & 4 != 0 {
            m.insert((id::END_PORTAL_FRAME, data), 1.0);
        } else {
            m.insert((id::END_PORTAL_FRAME, data), 0.8125);
        }
        m.insert((id::HEAD, data), 0.75);
    }
    // Heads on the floor are lower.
    m.insert((id::HEAD, 1), 0.5);
    m.insert((id::HEAD, 9), 0.5);
    for data in 0..8u8 {
        m.insert((id::STEP, data), 0.5);
        m.insert((id::WOODEN_STEP, data), 0.5);
        m.insert((id::STEP2, data), 0.5);
        m.insert((id::SNOW, data), 0.125 * data as f64);
        m.insert((id::SNOW, data + 8), 0.125 * data as f64);
    }
    for data in 0..4u8 {
        m.insert((id::TRAP_DOOR, data), 0.1875); // closed lower trap doors
        m.insert((id::TRAP_DOOR, data + 4), 0.0); // opened lower trap doors
        m.insert((id::TRAP_DOOR, data + 8), 1.0); // closed upper trap doors
        m.insert((id::TRAP_DOOR, data + 12), 0.0); // opened upper trap doors

        m.insert((id::FENCE_GATE, data), 1.5);
        m.insert((id::FENCE_GATE, data + 4), 0.0);
        m.insert((id::FENCE_GATE, data + 8), 1.5);
        m.insert((id::FENCE_GATE, data + 12), 0.0);
    }
    m
});

static ATTACHMENT_BY_ID: Lazy<HashMap<u16, Direction>> = Lazy::new(|| {
    let down = [
        id::SAPLING,
        id::LONG_GRASS,
        id::DEAD_BUSH,
        id::YELLOW_FLOWER,
        id::RED_FLOWER,
        id::BROWN_MUSHROOM,
        id::RED_MUSHROOM,
        id::REDSTONE_WIRE,
        id::CROPS,
        id::SIGN_POST,
        id::WOODEN_DOOR,
        id::STONE_PRESSURE_PLATE,
        id::IRON_DOOR,
        id::WOODEN_PRESSURE_PLATE,
        id::CACTUS,
        id::REED,
        id::CAKE_BLOCK,
        id::REDSTONE_REPEATER_OFF,
        id::REDSTONE_REPEATER_ON,
        id::PUMPKIN_STEM,
        id::MELON_STEM,
        id::NETHER_WART,
        id::TRIPWIRE,
        id::FLOWER_POT,
        id::CARROTS,
        id::POTATOES,
        id::ANVIL,
        id::PRESSURE_PLATE_LIGHT,
        id::PRESSURE_PLATE_HEAVY,
        id::COMPARATOR_OFF,
        id::COMPARATOR_ON,
        id::CARPET,
        id::DOUBLE_PLANT,
        id::STANDING_BANNER,
        id::SPRUCE_DOOR,
        id::BIRCH_DOOR,
        id::JUNGLE_DOOR,
        id::ACACIA_DOOR,
        id::DARK_OAK_DOOR,
    ];
    down.into_iter().map(|id| (id, Direction::Down)).collect()
});

static ATTACHMENT_BY_ID_DATA: Lazy<HashMap<(u16, u8), Direction>> = Lazy::new(|| {
    let mut m = HashMap::new();

    for offset in [0u8, 8] {
        m.insert((id::PISTON_EXTENSION, offset), Direction::Up);
        m.insert((id::PISTON_EXTENSION, offset + 1), Direction::Down);
        add_cardinals(
            &mut m,
            id::PISTON_EXTENSION,
            offset + 2,
            offset + 5,
            offset + 3,
            offset + 4,
        );
    }
    for block_id in [id::TORCH, id::REDSTONE_TORCH_ON, id::REDSTONE_TORCH_OFF] {
        m.insert((block_id, 0), Direction::Down);
        // Data value 5 is historical, kept for old files.
        m.insert((block_id, 5), Direction::Down);
        add_cardinals(&mut m, block_id, 4, 1, 3, 2);
    }
    add_cardinals(&mut m, id::LADDER, 2, 5, 3, 4);
    add_cardinals(&mut m, id::WALL_SIGN, 2, 5, 3, 4);
    for offset in [0u8, 8] {
        add_cardinals(&mut m, id::LEVER, offset + 4, offset + 1, offset + 3, offset + 2);
        m.insert((id::LEVER, offset + 5), Direction::Down);
        m.insert((id::LEVER, offset + 6), Direction::Down);
        m.insert((id::LEVER, offset + 7), Direction::Up);
        m.insert((id::LEVER, offset), Direction::Up);
    }
    for offset in [0u8, 8] {
        add_cardinals(
            &mut m,
            id::STONE_BUTTON,
            offset + 4,
            offset + 1,
            offset + 3,
            offset + 2,
        );
        add_cardinals(
            &mut m,
            id::WOODEN_BUTTON,
            offset + 4,
            offset + 1,
            offset + 3,
            offset + 2,
        );
    }
    m.insert((id::STONE_BUTTON, 0), Direction::Up);
    m.insert((id::STONE_BUTTON, 5), Direction::Down);
    m.insert((id::WOODEN_BUTTON, 0), Direction::Up);
    m.insert((id::WOODEN_BUTTON, 5), Direction::Down);
    for offset in [0u8, 4, 8, 12] {
        add_cardinals(&mut m, id::TRAP_DOOR, offset, offset + 3, offset + 1, offset + 2);
        add_cardinals(
            &mut m,
            id::IRON_TRAP_DOOR,
            offset,
            offset + 3,
            offset + 1,
            offset + 2,
        );
    }
    // Vines are complicated; these are the single-attachment variants.
    m.insert((id::VINE, 0), Direction::Up);
    add_cardinals(&mut m, id::VINE, 1, 2, 4, 8);
    for offset in [0u8, 4, 8, 12] {
        add_cardinals(
            &mut m,
            id::COCOA_PLANT,
            offset,
            offset + 1,
            offset + 2,
            offset + 3,
        );
    }
    for offset in [0u8, 4, 8, 12] {
        add_cardinals(
            &mut m,
            id::TRIPWIRE_HOOK,
            offset + 2,
            offset + 3,
            offset,
            offset + 1,
        );
    }
    add_cardinals(&mut m, id::WALL_BANNER, 4, 2, 5, 3);

    // Rails hang onto the block below them; ascending rails additionally
    // attach toward the block they ascend to.
    for offset in [0u8, 8] {
        for rail in [
            id::POWERED_RAIL,
            id::DETECTOR_RAIL,
            id::MINECART_TRACKS,
            id::ACTIVATOR_RAIL,
        ] {
            add_cardinals(&mut m, rail, offset + 3, offset + 4, offset + 2, offset + 5);
        }
    }

    m
});

static NATURAL_TERRAIN: Lazy<HashSet<u16>> = Lazy::new(|| {
    HashSet::from([
        id::STONE,
        id::GRASS,
        id::DIRT,
        id::BEDROCK,
        id::SAND,
        id::GRAVEL,
        id::CLAY,
        id::MYCELIUM,
        id::PACKED_ICE,
        id::STAINED_CLAY,
        // hell
        id::NETHERRACK,
        id::SLOW_SAND,
        id::LIGHTSTONE,
        id::QUARTZ_ORE,
        // ores
        id::COAL_ORE,
        id::IRON_ORE,
        id::GOLD_ORE,
        id::LAPIS_LAZULI_ORE,
        id::DIAMOND_ORE,
        id::REDSTONE_ORE,
        id::GLOWING_REDSTONE_ORE,
        id::EMERALD_ORE,
    ])
});

fn add_cardinals(
    m: &mut HashMap<(u16, u8), Direction>,
    block_id: u16,
    west: u8,
    north: u8,
    east: u8,
    south: u8,
) {
    m.insert((block_id, west & 0xF), Direction::West);
    m.insert((block_id, north & 0xF), Direction::North);
    m.insert((block_id, east & 0xF), Direction::East);
    m.insert((block_id, south & 0xF), Direction::South);
}

/// Which placement pass the block belongs to. The late set is checked
/// before the final set, so ids present in both (the piston extension
/// pieces) classify as `Late`.
pub fn placement_order(id: u16) -> PlaceOrder {
    if SHOULD_PLACE_LAST.contains(&id) {
        PlaceOrder::Late
    } else if SHOULD_PLACE_FINAL.contains(&id) {
        PlaceOrder::Final
    } else {
        PlaceOrder::Normal
    }
}

/// The Y offset an entity falls to when landing on top of this block at
/// the cell center. 1.0 for full blocks; slabs, cake, open trap doors and
/// the like sit lower, fences and walls reach higher. The id+data entry is
/// consulted before the per-id default.
pub fn top_surface_offset(id: u16, data: u8) -> f64 {
    if let Some(&limit) = TOP_LIMIT_BY_ID_DATA.get(&(id, data & 0xF)) {
        return limit;
    }
    if let Some(&limit) = TOP_LIMIT_BY_ID.get(&id) {
        return limit;
    }
    1.0
}

/// Direction from this block toward the block it needs for support; if
/// that neighbor is destroyed, this block pops off. `None` means the block
/// is freestanding. Data-independent attachments take precedence over the
/// data-keyed table.
pub fn attachment_direction(id: u16, data: u8) -> Option<Direction> {
    if let Some(&direction) = ATTACHMENT_BY_ID.get(&id) {
        return Some(direction);
    }
    ATTACHMENT_BY_ID_DATA.get(&(id, data & 0xF)).copied()
}

/// Whether the block occurs as naturally generated terrain.
pub fn is_natural_terrain(id: u16) -> bool {
    NATURAL_TERRAIN.contains(&id)
}
