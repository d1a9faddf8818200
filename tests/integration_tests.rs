use std::collections::HashMap;
use std::io::Cursor;

use mcedit_schematic_utils::{
    mcedit, placement_order, Clipboard, NamedTag, NumericResolver, PlaceOrder, Tag,
};

fn schematic_stream(extra: Vec<(&str, Tag)>, width: i16, height: i16, length: i16, blocks: Vec<u8>, data: Vec<u8>) -> Vec<u8> {
    let mut compound = HashMap::from([
        ("Width".to_string(), Tag::Short(width)),
        ("Height".to_string(), Tag::Short(height)),
        ("Length".to_string(), Tag::Short(length)),
        ("Materials".to_string(), Tag::String("Alpha".to_string())),
        (
            "Blocks".to_string(),
            Tag::ByteArray(blocks.into_iter().map(|b| b as i8).collect()),
        ),
        (
            "Data".to_string(),
            Tag::ByteArray(data.into_iter().map(|b| b as i8).collect()),
        ),
    ]);
    for (key, tag) in extra {
        compound.insert(key.to_string(), tag);
    }

    let mut buffer = Vec::new();
    NamedTag::new("Schematic", Tag::Compound(compound))
        .write_gzip(&mut buffer)
        .expect("Failed to encode schematic");
    buffer
}

fn decode(stream: &[u8]) -> Clipboard {
    mcedit::load(Cursor::new(stream), &NumericResolver).expect("Failed to decode schematic")
}

#[test]
fn test_checkerboard_decode_covers_every_voxel() {
    let (width, height, length) = (8i16, 8i16, 8i16);
    let volume = (width * height * length) as usize;

    let mut blocks = vec![0u8; volume];
    for x in 0..width as usize {
        for y in 0..height as usize {
            for z in 0..length as usize {
                let index = y * width as usize * length as usize + z * width as usize + x;
                blocks[index] = if (x + y + z) % 2 == 0 { 1 } else { 3 };
            }
        }
    }

    let stream = schematic_stream(vec![], width, height, length, blocks, vec![0; volume]);
    let clipboard = decode(&stream);

    assert_eq!(clipboard.dimensions(), (8, 8, 8));
    assert_eq!(clipboard.volume(), volume);

    let mut stone = 0;
    let mut dirt = 0;
    for x in 0..8 {
        for y in 0..8 {
            for z in 0..8 {
                let block = clipboard.block_at(x, y, z).expect("voxel must exist");
                let expected = if (x + y + z) % 2 == 0 { "legacy:1" } else { "legacy:3" };
                assert_eq!(block.name, expected, "mismatch at ({}, {}, {})", x, y, z);
                if block.name == "legacy:1" {
                    stone += 1;
                } else {
                    dirt += 1;
                }
            }
        }
    }
    assert_eq!(stone + dirt, volume);
    assert_eq!(stone, 256);
}

#[test]
fn test_id_unpacking_round_trips_over_full_domain() {
    // One voxel per possible 12-bit id, high nibbles packed the way the
    // format stores them: low nibble of each AddBlocks byte belongs to the
    // even voxel of the pair, the high nibble to the odd one.
    let volume = 4096usize;
    let blocks: Vec<u8> = (0..volume).map(|i| (i & 0xFF) as u8).collect();
    let data: Vec<u8> = (0..volume).map(|i| (i % 16) as u8).collect();

    let mut add_blocks = vec![0u8; volume / 2];
    for i in 0..volume {
        let high = (i >> 8) as u8;
        if i % 2 == 0 {
            add_blocks[i / 2] |= high & 0x0F;
        } else {
            add_blocks[i / 2] |= (high & 0x0F) << 4;
        }
    }

    let stream = schematic_stream(
        vec![(
            "AddBlocks",
            Tag::ByteArray(add_blocks.into_iter().map(|b| b as i8).collect()),
        )],
        4096,
        1,
        1,
        blocks,
        data,
    );
    let clipboard = decode(&stream);

    assert_eq!(clipboard.volume(), volume);
    for i in 0..volume {
        let block = clipboard.block_at(i as i32, 0, 0).expect("voxel must exist");
        assert_eq!(block.name, format!("legacy:{}", i), "id {} did not round-trip", i);
        if i % 16 != 0 {
            assert_eq!(
                block.properties.get("data"),
                Some(&(i % 16).to_string()),
                "data value lost for id {}",
                i
            );
        }
    }
}

#[test]
fn test_decoding_twice_yields_identical_clipboards() {
    let chest = HashMap::from([
        ("id".to_string(), Tag::String("Chest".to_string())),
        ("x".to_string(), Tag::Int(1)),
        ("y".to_string(), Tag::Int(0)),
        ("z".to_string(), Tag::Int(1)),
        (
            "Items".to_string(),
            Tag::List(vec![Tag::Compound(HashMap::from([(
                "Slot".to_string(),
                Tag::Byte(0),
            )]))]),
        ),
    ]);
    let stream = schematic_stream(
        vec![
            ("TileEntities", Tag::List(vec![Tag::Compound(chest)])),
            ("WEOriginX", Tag::Int(100)),
            ("WEOriginY", Tag::Int(64)),
            ("WEOriginZ", Tag::Int(-20)),
        ],
        2,
        1,
        2,
        vec![54, 0, 0, 54],
        vec![2, 0, 0, 3],
    );

    let first = decode(&stream);
    let second = decode(&stream);
    assert_eq!(first, second);
}

#[test]
fn test_single_voxel_clipboard() {
    let stream = schematic_stream(vec![], 1, 1, 1, vec![7], vec![0]);
    let clipboard = decode(&stream);
    assert_eq!(clipboard.volume(), 1);
    assert_eq!(clipboard.block_at(0, 0, 0).unwrap().name, "legacy:7");
}

#[test]
fn test_tile_entity_payload_survives_end_to_end() {
    let sign = HashMap::from([
        ("id".to_string(), Tag::String("Sign".to_string())),
        ("x".to_string(), Tag::Int(0)),
        ("y".to_string(), Tag::Int(1)),
        ("z".to_string(), Tag::Int(0)),
        ("Text1".to_string(), Tag::String("hello".to_string())),
    ]);
    let stream = schematic_stream(
        vec![("TileEntities", Tag::List(vec![Tag::Compound(sign.clone())]))],
        1,
        2,
        1,
        vec![1, 63],
        vec![0, 0],
    );
    let clipboard = decode(&stream);

    let payload = clipboard
        .tile_entity_at(0, 1, 0)
        .expect("tile entity must be attached to its voxel");
    assert_eq!(payload, &sign);
    assert_eq!(clipboard.tile_entities().len(), 1);
}

#[test]
fn test_three_pass_batching_of_decoded_clipboard() {
    // stone (normal), torch (late), wooden door (final): the order a
    // placement engine would write them in.
    let stream = schematic_stream(vec![], 3, 1, 1, vec![1, 50, 64], vec![0, 0, 0]);
    let clipboard = decode(&stream);

    let mut passes: HashMap<PlaceOrder, Vec<String>> = HashMap::new();
    for (_, block) in clipboard.iter_blocks() {
        let id: u16 = block.name.trim_start_matches("legacy:").parse().unwrap();
        passes.entry(placement_order(id)).or_default().push(block.name.clone());
    }

    assert_eq!(passes[&PlaceOrder::Normal], vec!["legacy:1"]);
    assert_eq!(passes[&PlaceOrder::Late], vec!["legacy:50"]);
    assert_eq!(passes[&PlaceOrder::Final], vec!["legacy:64"]);
}

#[test]
fn test_format_sniffing() {
    let stream = schematic_stream(vec![], 1, 1, 1, vec![0], vec![0]);
    assert!(mcedit::is_format(Cursor::new(&stream)));

    let mut other = Vec::new();
    NamedTag::new("Level", Tag::Compound(HashMap::new()))
        .write_gzip(&mut other)
        .unwrap();
    assert!(!mcedit::is_format(Cursor::new(&other)));
    assert!(!mcedit::is_format(Cursor::new(b"garbage".to_vec())));
}
