#![no_main]

use libfuzzer_sys::fuzz_target;
use cilmeta::{metadata::tables::TypeDefRaw, MetadataImage};

fuzz_target!(|data: &[u8]| {
    if let Ok(image) = MetadataImage::read(data) {
        if let Some(types) = image.table::<TypeDefRaw>() {
            for row in types {
                let _ = image.strings().get(row.type_name);
            }
        }
        for entry in image.blobs() {
            let _ = entry;
        }
    }
});
