use std::error::Error;

use log::{info, warn};
use pixelqr::{Color, ECLevel, EditorBuilder};

// 7x7 heart, 1 = paint
const HEART: [[u8; 7]; 7] = [
    [0, 1, 1, 0, 1, 1, 0],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 0, 0, 0],
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut editor = EditorBuilder::new()
        .ec_level(ECLevel::H) // Most redundancy, most room for art
        .module_size(15)
        .border(4)
        .build();
    editor.generate(b"https://github.com/YuzukiYukariProject")?;

    let w = editor.canvas().ok_or("no symbol")?.width();
    println!("{}", editor.overlay().ok_or("no symbol")?.to_str());

    // Dark modules get a deep red, light ones a pale pink, so the heart keeps the symbol's
    // contrast. Protected modules under the heart are skipped.
    let (r0, c0) = (w / 2 - 3, w / 2 - 3);
    let mut skipped = 0;
    for (i, row) in HEART.iter().enumerate() {
        for (j, &on) in row.iter().enumerate() {
            if on == 0 {
                continue;
            }
            let (r, c) = (r0 + i, c0 + j);
            let dark = editor.grid().and_then(|g| g.get(r, c)).unwrap_or(false);
            let clr: Color = if dark { "#8B0A1A".parse()? } else { "#FFC0CB".parse()? };
            if editor.paint(r, c, clr).is_err() {
                skipped += 1;
            }
        }
    }
    info!("Painted heart, {skipped} protected modules left untouched");

    if editor.verify() {
        println!("PixelQR - [Readable]");
    } else {
        warn!("Edited symbol no longer decodes");
        println!("PixelQR - [UNREADABLE!]");
    }

    editor.render()?.save("pixel_qr.png")?;
    editor.render_region_map()?.save("pixel_qr_regions.png")?;
    println!("Saved pixel_qr.png and pixel_qr_regions.png");

    Ok(())
}
