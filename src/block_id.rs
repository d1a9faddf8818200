//! Legacy numeric block ids referenced by the placement metadata tables.

pub const STONE: u16 = 1;
pub const GRASS: u16 = 2;
pub const DIRT: u16 = 3;
pub const SAPLING: u16 = 6;
pub const BEDROCK: u16 = 7;
pub const SAND: u16 = 12;
pub const GRAVEL: u16 = 13;
pub const GOLD_ORE: u16 = 14;
pub const IRON_ORE: u16 = 15;
pub const COAL_ORE: u16 = 16;
pub const LAPIS_LAZULI_ORE: u16 = 21;
pub const BED: u16 = 26;
pub const POWERED_RAIL: u16 = 27;
pub const DETECTOR_RAIL: u16 = 28;
pub const PISTON_STICKY_BASE: u16 = 29;
pub const LONG_GRASS: u16 = 31;
pub const DEAD_BUSH: u16 = 32;
pub const PISTON_BASE: u16 = 33;
pub const PISTON_EXTENSION: u16 = 34;
pub const PISTON_MOVING_PIECE: u16 = 36;
pub const YELLOW_FLOWER: u16 = 37;
pub const RED_FLOWER: u16 = 38;
pub const BROWN_MUSHROOM: u16 = 39;
pub const RED_MUSHROOM: u16 = 40;
pub const STEP: u16 = 44;
pub const TORCH: u16 = 50;
pub const FIRE: u16 = 51;
pub const REDSTONE_WIRE: u16 = 55;
pub const DIAMOND_ORE: u16 = 56;
pub const CROPS: u16 = 59;
pub const SIGN_POST: u16 = 63;
pub const WOODEN_DOOR: u16 = 64;
pub const LADDER: u16 = 65;
pub const MINECART_TRACKS: u16 = 66;
pub const WALL_SIGN: u16 = 68;
pub const LEVER: u16 = 69;
pub const STONE_PRESSURE_PLATE: u16 = 70;
pub const IRON_DOOR: u16 = 71;
pub const WOODEN_PRESSURE_PLATE: u16 = 72;
pub const REDSTONE_ORE: u16 = 73;
pub const GLOWING_REDSTONE_ORE: u16 = 74;
pub const REDSTONE_TORCH_OFF: u16 = 75;
pub const REDSTONE_TORCH_ON: u16 = 76;
pub const STONE_BUTTON: u16 = 77;
pub const SNOW: u16 = 78;
pub const CACTUS: u16 = 81;
pub const CLAY: u16 = 82;
pub const REED: u16 = 83;
pub const FENCE: u16 = 85;
pub const NETHERRACK: u16 = 87;
pub const SLOW_SAND: u16 = 88;
pub const LIGHTSTONE: u16 = 89;
pub const PORTAL: u16 = 90;
pub const CAKE_BLOCK: u16 = 92;
pub const REDSTONE_REPEATER_OFF: u16 = 93;
pub const REDSTONE_REPEATER_ON: u16 = 94;
pub const TRAP_DOOR: u16 = 96;
pub const PUMPKIN_STEM: u16 = 104;
pub const MELON_STEM: u16 = 105;
pub const VINE: u16 = 106;
pub const FENCE_GATE: u16 = 107;
pub const MYCELIUM: u16 = 110;
pub const LILY_PAD: u16 = 111;
pub const NETHER_WART: u16 = 115;
pub const ENCHANTMENT_TABLE: u16 = 116;
pub const BREWING_STAND: u16 = 117;
pub const CAULDRON: u16 = 118;
pub const END_PORTAL_FRAME: u16 = 120;
pub const WOODEN_STEP: u16 = 126;
pub const COCOA_PLANT: u16 = 127;
pub const EMERALD_ORE: u16 = 129;
pub const TRIPWIRE_HOOK: u16 = 131;
pub const TRIPWIRE: u16 = 132;
pub const COBBLESTONE_WALL: u16 = 139;
pub const FLOWER_POT: u16 = 140;
pub const CARROTS: u16 = 141;
pub const POTATOES: u16 = 142;
pub const WOODEN_BUTTON: u16 = 143;
pub const HEAD: u16 = 144;
pub const ANVIL: u16 = 145;
pub const PRESSURE_PLATE_LIGHT: u16 = 147;
pub const PRESSURE_PLATE_HEAVY: u16 = 148;
pub const COMPARATOR_OFF: u16 = 149;
pub const COMPARATOR_ON: u16 = 150;
pub const DAYLIGHT_SENSOR: u16 = 151;
pub const QUARTZ_ORE: u16 = 153;
pub const HOPPER: u16 = 154;
pub const ACTIVATOR_RAIL: u16 = 157;
pub const STAINED_CLAY: u16 = 159;
pub const IRON_TRAP_DOOR: u16 = 167;
pub const CARPET: u16 = 171;
pub const PACKED_ICE: u16 = 174;
pub const DOUBLE_PLANT: u16 = 175;
pub const STANDING_BANNER: u16 = 176;
pub const WALL_BANNER: u16 = 177;
pub const DAYLIGHT_SENSOR_INVERTED: u16 = 178;
pub const STEP2: u16 = 182;
pub const SPRUCE_DOOR: u16 = 193;
pub const BIRCH_DOOR: u16 = 194;
pub const JUNGLE_DOOR: u16 = 195;
pub const ACACIA_DOOR: u16 = 196;
pub const DARK_OAK_DOOR: u16 = 197;
