use serde::Serialize;

use crate::clipboard::Clipboard;

#[derive(Serialize)]
struct ClipboardSummary<'a> {
    width: u16,
    height: u16,
    length: u16,
    origin: (i32, i32, i32),
    offset: (i32, i32, i32),
    volume: usize,
    distinct_blocks: Vec<&'a str>,
    tile_entities: usize,
}

impl<'a> ClipboardSummary<'a> {
    fn new(clipboard: &'a Clipboard) -> Self {
        let mut distinct_blocks: Vec<&str> = clipboard
            .iter_blocks()
            .map(|(_, block)| block.name.as_str())
            .collect();
        distinct_blocks.sort_unstable();
        distinct_blocks.dedup();

        ClipboardSummary {
            width: clipboard.width(),
            height: clipboard.height(),
            length: clipboard.length(),
            origin: clipboard.origin().to_tuple(),
            offset: clipboard.offset().to_tuple(),
            volume: clipboard.volume(),
            distinct_blocks,
            tile_entities: clipboard.tile_entities().len(),
        }
    }
}

pub fn format_clipboard(clipboard: &Clipboard) -> String {
    let mut out = String::new();
    let (width, height, length) = clipboard.dimensions();
    out.push_str(&format!(
        "Clipboard: {}x{}x{} ({} voxels)\n",
        width,
        height,
        length,
        clipboard.volume()
    ));
    out.push_str(&format!("  Origin: {:?}\n", clipboard.origin().to_tuple()));
    out.push_str(&format!("  Offset: {:?}\n", clipboard.offset().to_tuple()));
    out.push_str("  Blocks:\n");
    for (position, block) in clipboard.iter_blocks() {
        let marker = if clipboard
            .tile_entity_at(position.x, position.y, position.z)
            .is_some()
        {
            " [tile entity]"
        } else {
            ""
        };
        out.push_str(&format!(
            "    {:?}: {}{}\n",
            position.to_tuple(),
            block.name,
            marker
        ));
    }
    out
}

pub fn format_json_clipboard(clipboard: &Clipboard) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ClipboardSummary::new(clipboard))
}
