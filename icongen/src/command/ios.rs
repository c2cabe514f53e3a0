use crate::GenEnv;
use anyhow::Result;
use icompose::ScalerOpts;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

pub const IOS_ICONS: [(&str, u32); 15] = [
    ("Icon-App-20x20@1x.png", 20),
    ("Icon-App-20x20@2x.png", 40),
    ("Icon-App-20x20@3x.png", 60),
    ("Icon-App-29x29@1x.png", 29),
    ("Icon-App-29x29@2x.png", 58),
    ("Icon-App-29x29@3x.png", 87),
    ("Icon-App-40x40@1x.png", 40),
    ("Icon-App-40x40@2x.png", 80),
    ("Icon-App-40x40@3x.png", 120),
    ("Icon-App-60x60@2x.png", 120),
    ("Icon-App-60x60@3x.png", 180),
    ("Icon-App-76x76@1x.png", 76),
    ("Icon-App-76x76@2x.png", 152),
    ("Icon-App-83.5x83.5@2x.png", 167),
    ("Icon-App-1024x1024@1x.png", 1024),
];

/// Xcode appiconset entries, one per (idiom, scale) the catalog lists.
/// Several entries share a file where the pixel sizes coincide.
const CATALOG: [(&str, &str, &str, &str); 18] = [
    ("iphone", "2x", "20x20", "Icon-App-20x20@2x.png"),
    ("iphone", "3x", "20x20", "Icon-App-20x20@3x.png"),
    ("iphone", "2x", "29x29", "Icon-App-29x29@2x.png"),
    ("iphone", "3x", "29x29", "Icon-App-29x29@3x.png"),
    ("iphone", "2x", "40x40", "Icon-App-40x40@2x.png"),
    ("iphone", "3x", "40x40", "Icon-App-40x40@3x.png"),
    ("iphone", "2x", "60x60", "Icon-App-60x60@2x.png"),
    ("iphone", "3x", "60x60", "Icon-App-60x60@3x.png"),
    ("ipad", "1x", "20x20", "Icon-App-20x20@1x.png"),
    ("ipad", "2x", "20x20", "Icon-App-20x20@2x.png"),
    ("ipad", "1x", "29x29", "Icon-App-29x29@1x.png"),
    ("ipad", "2x", "29x29", "Icon-App-29x29@2x.png"),
    ("ipad", "1x", "40x40", "Icon-App-40x40@1x.png"),
    ("ipad", "2x", "40x40", "Icon-App-40x40@2x.png"),
    ("ipad", "1x", "76x76", "Icon-App-76x76@1x.png"),
    ("ipad", "2x", "76x76", "Icon-App-76x76@2x.png"),
    ("ipad", "2x", "83.5x83.5", "Icon-App-83.5x83.5@2x.png"),
    ("ios-marketing", "1x", "1024x1024", "Icon-App-1024x1024@1x.png"),
];

#[derive(Serialize)]
struct AssetCatalog {
    images: Vec<CatalogImage>,
    info: CatalogInfo,
}

#[derive(Serialize)]
struct CatalogImage {
    idiom: &'static str,
    scale: &'static str,
    size: &'static str,
    filename: &'static str,
}

#[derive(Serialize)]
struct CatalogInfo {
    author: &'static str,
    version: u32,
}

/// Tiny icons need generous padding, the App Store icon almost none.
fn fill_ratio(size: u32) -> f64 {
    match size {
        0..=29 => 0.82,
        30..=60 => 0.86,
        1024.. => 0.95,
        _ => 0.90,
    }
}

pub fn ios(env: &GenEnv) -> Result<()> {
    let dir = env.ios_appiconset();
    std::fs::create_dir_all(&dir)?;
    for (filename, size) in IOS_ICONS {
        let path = dir.join(filename);
        let mut icon = BufWriter::new(File::create(&path)?);
        env.scaler()
            .write(&mut icon, ScalerOpts::with_fill_ratio(size, fill_ratio(size)))?;
        log::info!("created {} ({}x{})", path.display(), size, size);
    }
    let catalog = AssetCatalog {
        images: CATALOG
            .iter()
            .map(|&(idiom, scale, size, filename)| CatalogImage {
                idiom,
                scale,
                size,
                filename,
            })
            .collect(),
        info: CatalogInfo {
            author: "xcode",
            version: 1,
        },
    };
    let path = dir.join("Contents.json");
    std::fs::write(&path, serde_json::to_string_pretty(&catalog)?)?;
    log::info!("created {}", path.display());
    Ok(())
}
