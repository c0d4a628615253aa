use serde_json::{json, Value};
use std::io::Write;
use steel_extractor::{
    load_snapshot, load_snapshot_from_bytes, CompactedOwnerShapes, ExtractionRun,
    ExtractorConfig, ExtractorKind, Shape, ShapeTable,
};

fn behaviour() -> Value {
    json!({
        "hasCollision": true, "canOcclude": true, "explosionResistance": 6.0,
        "isRandomlyTicking": false, "forceSolidOff": false, "forceSolidOn": false,
        "pushReaction": "NORMAL", "friction": 0.6, "speedFactor": 1.0,
        "jumpFactor": 1.0, "dynamicShape": false, "destroyTime": 1.5,
        "ignitedByLava": false, "liquid": false, "isAir": false,
        "isRedstoneConductor": true, "isSuffocating": true,
        "requiresCorrectToolForDrops": true, "instrument": "BASEDRUM",
        "replaceable": false
    })
}

fn shape(min: [f64; 3], max: [f64; 3]) -> Value {
    json!({ "min": min, "max": max })
}

fn blocks_section() -> Value {
    let full = shape([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
    let bottom = shape([0.0, 0.0, 0.0], [1.0, 0.5, 1.0]);
    let top = shape([0.0, 0.5, 0.0], [1.0, 1.0, 1.0]);
    let post = shape([0.375, 0.0, 0.375], [0.625, 1.5, 0.625]);

    json!([
        {
            "id": 0, "name": "minecraft:air", "class": "AirBlock",
            "behaviour": behaviour(),
            "states": [{ "collision_shapes": [] }]
        },
        {
            "id": 1, "name": "minecraft:stone", "class": "Block",
            "behaviour": behaviour(),
            "states": [{ "collision_shapes": [full.clone()] }]
        },
        {
            "id": 2, "name": "minecraft:stone_slab", "class": "SlabBlock",
            "behaviour": behaviour(),
            "properties": [
                { "name": "type", "constant": "SLAB_TYPE", "type": "enum",
                  "class": "net.minecraft.world.level.block.state.properties.SlabType" },
                { "name": "waterlogged", "constant": "WATERLOGGED", "type": "bool" }
            ],
            "default_state": ["bottom", "false"],
            "states": [
                { "collision_shapes": [top.clone()] },
                { "collision_shapes": [top] },
                { "collision_shapes": [bottom.clone()] },
                { "collision_shapes": [bottom.clone()] },
                { "collision_shapes": [bottom] },
                { "collision_shapes": [full.clone()] }
            ]
        },
        {
            "id": 3, "name": "minecraft:oak_fence", "class": "FenceBlock",
            "behaviour": behaviour(),
            "properties": [
                { "name": "north", "constant": "NORTH", "type": "bool" },
                { "name": "power", "type": "int" }
            ],
            "default_state": ["false", "0"],
            "states": [
                { "collision_shapes": [post.clone()] },
                { "collision_shapes": [post.clone(), full] },
                { "collision_shapes": [post] }
            ]
        }
    ])
}

fn write_archive(path: &std::path::Path, entries: &[(&str, String)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, contents) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_blocks_round_trip_through_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.json");
    let blocks = blocks_section();
    std::fs::write(
        &input,
        json!({ "blocks": blocks, "block_entity_types": ["minecraft:chest"] }).to_string(),
    )
    .unwrap();

    let snapshot = load_snapshot(&input).unwrap();
    let output = dir.path().join("out");
    let config = ExtractorConfig::default().with_extractors(vec![ExtractorKind::Blocks]);
    let summary = ExtractionRun::with_config(snapshot.clone(), config)
        .run(&output)
        .unwrap();
    assert!(summary.is_success());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(output.join("blocks.json")).unwrap())
            .unwrap();

    let shapes: Vec<Shape> = serde_json::from_value(written["shapes"].clone()).unwrap();
    let mut table = ShapeTable::new();
    for shape in &shapes {
        table.intern(*shape).unwrap();
    }
    assert_eq!(table.len(), shapes.len(), "shape table has duplicates");

    for (block, entry) in snapshot.blocks.iter().zip(written["blocks"].as_array().unwrap()) {
        let collisions: CompactedOwnerShapes =
            serde_json::from_value(entry["collisions"].clone()).unwrap();
        let decoded = collisions.decode(&table, block.states.len()).unwrap();

        for (state, shapes) in block.states.iter().zip(&decoded) {
            assert_eq!(state.collision_shapes.as_ref().unwrap(), shapes);
        }
    }

    let slab = &written["blocks"][2];
    assert_eq!(slab["collisions"]["overwrites"].as_array().unwrap().len(), 3);
    assert_eq!(
        slab["default_properties"],
        json!(["enum_SlabType_bottom", "bool_false"])
    );

    let fence = &written["blocks"][3];
    assert_eq!(fence["properties"], json!(["NORTH", null]));
    assert_eq!(fence["default_properties"], json!(["bool_false", "int_0"]));
    assert_eq!(fence["collisions"]["overwrites"][0]["offset"], 1);
}

#[test]
fn test_full_run_from_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = dir.path().join("snapshot.zip");
    write_archive(
        &archive,
        &[
            ("dump/blocks.json", blocks_section().to_string()),
            (
                "dump/items.json",
                json!([{ "id": 1, "name": "minecraft:stone", "class": "BlockItem",
                         "block": "minecraft:stone", "components": {} }])
                .to_string(),
            ),
            (
                "dump/game_rules.json",
                json!([{ "name": "doFireTick", "category": "updates",
                         "value": { "type": "bool", "default": true } }])
                .to_string(),
            ),
            ("dump/menu_types.json", json!(["minecraft:anvil"]).to_string()),
        ],
    );

    let snapshot = load_snapshot(&archive).unwrap();
    assert_eq!(snapshot.blocks.len(), 4);

    let output = dir.path().join("out");
    let summary = ExtractionRun::new(snapshot).run(&output).unwrap();

    assert!(summary.is_success(), "failures: {:?}", summary.failed);
    assert_eq!(summary.written.len(), ExtractorKind::ALL.len());
    for name in [
        "blocks.json",
        "items.json",
        "entities.json",
        "entity_data_serializers.json",
        "game_rules.json",
        "menutypes.json",
        "block_entities.json",
        "loot_tables.json",
        "classes.json",
    ] {
        assert!(output.join(name).exists(), "missing {}", name);
    }

    let classes: Value =
        serde_json::from_str(&std::fs::read_to_string(output.join("classes.json")).unwrap())
            .unwrap();
    assert_eq!(classes["items"][0]["block"], "stone");
}

#[test]
fn test_repeated_runs_are_identical() {
    let data = {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.zip");
        write_archive(&path, &[("blocks.json", blocks_section().to_string())]);
        std::fs::read(path).unwrap()
    };
    let snapshot = load_snapshot_from_bytes(&data).unwrap();
    let config = ExtractorConfig::default().with_extractors(vec![ExtractorKind::Blocks]);

    let dir = tempfile::tempdir().unwrap();
    let run = ExtractionRun::with_config(snapshot, config);
    run.run(dir.path().join("a")).unwrap();
    run.run(dir.path().join("b")).unwrap();

    assert_eq!(
        std::fs::read(dir.path().join("a").join("blocks.json")).unwrap(),
        std::fs::read(dir.path().join("b").join("blocks.json")).unwrap()
    );
}
