pub mod block_id;
mod block_position;
mod block_state;
mod clipboard;
mod error;
mod legacy;
mod nbt;
mod placement;
mod print_utils;

pub mod formats;

// Public re-exports
pub use block_position::BlockPosition;
pub use block_state::BlockState;
pub use clipboard::Clipboard;
pub use error::SchematicError;
pub use formats::mcedit;
pub use legacy::{LegacyIdResolver, NumericResolver};
pub use nbt::{NamedTag, NbtError, Tag};
pub use placement::{
    attachment_direction, is_natural_terrain, placement_order, top_surface_offset, Direction,
    PlaceOrder,
};
pub use print_utils::{format_clipboard, format_json_clipboard};
