//! Byte-exact round trips through load/save and through XML/JSON export.

use resmod::export;
use resmod::prelude::*;
use resmod::tree;

fn fog_file() -> Vec<u8> {
    let mut data = vec![0u8; 0x14];
    data[0..4].copy_from_slice(b"FOGM");
    data[0x10..0x12].copy_from_slice(&2u16.to_be_bytes());
    data[0x13] = 0x5A; // reserved
    for i in 0..2u8 {
        let mut element = vec![0u8; 0x30];
        element[0..4].copy_from_slice(b"FOGD");
        element[4..8].copy_from_slice(&0x30u32.to_be_bytes());
        element[0x10..0x14].copy_from_slice(&(10.0f32 * (i + 1) as f32).to_be_bytes());
        element[0x14..0x18].copy_from_slice(&1000.0f32.to_be_bytes());
        element[0x20..0x24].copy_from_slice(&[0x80, 0x90, 0xA0, 0xFF]);
        element[0x24] = 0x28 | i; // high bits unknown
        element[0x25] = 1;
        element[0x2F] = 0xC3; // reserved
        data.extend_from_slice(&element);
    }
    let total = data.len() as u32;
    data[4..8].copy_from_slice(&total.to_be_bytes());
    data
}

fn light_file() -> Vec<u8> {
    let mut data = vec![0u8; 0x28];
    data[0..4].copy_from_slice(b"LGHT");
    data[8] = 2;
    data[0x0C..0x10].copy_from_slice(&0xDEADBEEFu32.to_be_bytes());
    data[0x10..0x12].copy_from_slice(&1u16.to_be_bytes());
    data[0x12..0x14].copy_from_slice(&2u16.to_be_bytes());
    data[0x14..0x18].copy_from_slice(&[1, 2, 3, 4]);
    data[0x27] = 0x11; // reserved

    let mut object = vec![0u8; 0x50];
    object[0..4].copy_from_slice(b"LOBJ");
    object[4..8].copy_from_slice(&0x50u32.to_be_bytes());
    object[8] = 2;
    object[0x12] = 2; // point light
    object[0x14..0x16].copy_from_slice(&7u16.to_be_bytes());
    object[0x18..0x1C].copy_from_slice(&(-250.0f32).to_be_bytes());
    object[0x30..0x34].copy_from_slice(&1.5f32.to_be_bytes());
    object[0x34..0x38].copy_from_slice(&[0xFF, 0xEE, 0xDD, 0xCC]);
    object[0x48..0x50].copy_from_slice(&(-2i64).to_be_bytes());
    data.extend_from_slice(&object);

    data.extend_from_slice(&[0x40, 0x40, 0x40, 0xFF, 0, 0, 0, 1]);
    data.extend_from_slice(&[0x20, 0x10, 0x00, 0xFF, 0, 0, 0, 2]);

    let total = data.len() as u32;
    data[4..8].copy_from_slice(&total.to_be_bytes());
    data
}

fn light_map_file() -> Vec<u8> {
    let mut data = vec![0u8; 0x20];
    data[0..4].copy_from_slice(b"LMAP");
    data[0x10..0x12].copy_from_slice(&2u16.to_be_bytes());

    for (name, entries) in [(&b"lm_a"[..], 3u8), (&b"lm_b"[..], 1u8)] {
        let mut texture = vec![0u8; 0x48];
        texture[0..4].copy_from_slice(b"LTEX");
        texture[4..8].copy_from_slice(&(0x48 + entries as u32 * 8).to_be_bytes());
        texture[8] = 2;
        texture[0x10..0x12].copy_from_slice(&(entries as u16).to_be_bytes());
        texture[0x12] = 1;
        texture[0x14..0x14 + name.len()].copy_from_slice(name);
        texture[0x3C..0x40].copy_from_slice(&0.75f32.to_be_bytes());
        for e in 0..entries {
            let mut entry = [0u8; 8];
            entry[0..4].copy_from_slice(&(0.25f32 * (e + 1) as f32).to_be_bytes());
            entry[4] = e * 4; // 0, 4, 8
            entry[5] = 1;
            texture.extend_from_slice(&entry);
        }
        data.extend_from_slice(&texture);
    }

    let total = data.len() as u32;
    data[4..8].copy_from_slice(&total.to_be_bytes());
    data
}

fn fixtures() -> [(Format, Vec<u8>); 3] {
    [
        (Format::Fog, fog_file()),
        (Format::Light, light_file()),
        (Format::LightMap, light_map_file()),
    ]
}

#[test]
fn test_unedited_save_is_identity() {
    for (format, data) in fixtures() {
        let mut resource = format.load(&data).unwrap();
        assert_eq!(resource.size() as usize, data.len(), "{}", format);
        assert_eq!(resource.save().unwrap(), data, "{}", format);
    }
}

#[test]
fn test_xml_roundtrip_all_formats() {
    for (format, data) in fixtures() {
        let resource = format.load(&data).unwrap();
        let xml = export::to_xml(&resource).unwrap();
        assert!(xml.contains(&format!("<{}>", export::root_element(format))));

        let mut imported = export::from_xml(format, &xml).unwrap();
        assert_eq!(imported.save().unwrap(), data, "{}", format);
    }
}

#[test]
fn test_json_roundtrip_all_formats() {
    for (format, data) in fixtures() {
        let resource = format.load(&data).unwrap();
        let json = export::to_json(&resource).unwrap();

        let mut imported = export::from_json(format, &json).unwrap();
        assert_eq!(imported.save().unwrap(), data, "{}", format);
    }
}

#[test]
fn test_registry_picks_format_by_extension() {
    let registry = Registry::builtin();
    let dir = std::env::temp_dir().join(format!("resmod-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    for (format, data) in fixtures() {
        let path = dir.join(format!("sample.{}", format.extension()));
        std::fs::write(&path, &data).unwrap();

        let resource = registry.load_path(&path).unwrap();
        assert_eq!(resource.format(), format);
        assert_eq!(resource.kind(), format.type_name());
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_edit_light_map_recomputes_headers() {
    let mut resource = Format::LightMap.load(&light_map_file()).unwrap();
    let Resource::LightMap(map) = &mut resource else {
        panic!("expected a light map");
    };

    map.light_textures_mut()[1].add_entry(LightTextureEntry::new());
    map.light_textures_mut()[0].set_name("renamed");
    let saved = resource.save().unwrap();

    assert_eq!(saved.len(), light_map_file().len() + 8);
    assert_eq!(u32::from_be_bytes(saved[4..8].try_into().unwrap()) as usize, saved.len());

    let reloaded = Format::LightMap.load(&saved).unwrap();
    let Resource::LightMap(map) = &reloaded else {
        panic!("expected a light map");
    };
    assert_eq!(map.light_textures()[0].name(), "renamed");
    assert_eq!(map.light_textures()[1].entry_count(), 2);
    assert_eq!(tree::depth(&reloaded), 3);
}

#[test]
fn test_light_fields_survive() {
    let resource = Format::Light.load(&light_file()).unwrap();
    let Resource::Light(light) = &resource else {
        panic!("expected a light file");
    };

    let object = &light.light_objects()[0];
    assert_eq!(object.light_type().unwrap(), LightType::Point3D);
    assert_eq!(object.kcl_id(), 7);
    assert_eq!(object.origin().x, -250.0);
    assert_eq!(object.color(), Rgba::new(0xFF, 0xEE, 0xDD, 0xCC));
    assert_eq!(object.unknown9(), -2);

    assert_eq!(light.ambient_lights()[1].color(), Rgba::new(0x20, 0x10, 0x00, 0xFF));
    assert_eq!(light.ambient_lights()[1].unknown(), 2);

    let text = tree::render(&resource);
    assert!(text.contains("Light Objects"));
    assert!(text.contains("Ambient Light 1 [Wii Ambient Light] 0x8"));
}

fn light_map_with_stale_name() -> Vec<u8> {
    let mut data = light_map_file();
    // first LTEX starts at 0x20, name field at +0x14 for 0x28 bytes
    let name = 0x20 + 0x14;
    data[name..name + 8].copy_from_slice(b"abc\0old\0");
    data[name + 0x27] = 0x7F;
    data
}

#[test]
fn test_stale_name_bytes_survive_export() {
    let data = light_map_with_stale_name();
    let resource = Format::LightMap.load(&data).unwrap();

    let xml = export::to_xml(&resource).unwrap();
    let mut imported = export::from_xml(Format::LightMap, &xml).unwrap();
    assert_eq!(imported.save().unwrap(), data);

    let json = export::to_json(&resource).unwrap();
    let mut imported = export::from_json(Format::LightMap, &json).unwrap();
    assert_eq!(imported.save().unwrap(), data);
}

#[test]
fn test_edited_name_text_renames_texture() {
    let resource = Format::LightMap.load(&light_map_with_stale_name()).unwrap();
    let json = export::to_json(&resource).unwrap();
    assert!(json.contains("\"text\": \"abc\""));

    let json = json.replacen("\"text\": \"abc\"", "\"text\": \"xyz\"", 1);
    let imported = export::from_json(Format::LightMap, &json).unwrap();
    let Resource::LightMap(map) = &imported else {
        panic!("expected a light map");
    };
    assert_eq!(map.light_textures()[0].name(), "xyz");
}
