/// ICO container packing
///
/// Modern ICO files can embed PNG data directly, so each buffer is stored
/// as-is (PNG-compressed) rather than converted to a BMP/DIB entry.

use crate::error::{AssetError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::io::Cursor;

/// Pack PNG buffers into a single ICO, keeping the given order
pub fn pack_ico(pngs: &[Vec<u8>]) -> Result<Vec<u8>> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for png in pngs {
        let image = IconImage::read_png(Cursor::new(png)).map_err(AssetError::Ico)?;
        let entry = IconDirEntry::encode_as_png(&image).map_err(AssetError::Ico)?;
        icon_dir.add_entry(entry);
    }

    let mut ico = Vec::new();
    icon_dir.write(&mut ico).map_err(AssetError::Ico)?;
    Ok(ico)
}
