use crate::GenEnv;
use anyhow::Result;
use icompose::ScalerOpts;
use std::fs::File;
use std::io::BufWriter;

/// Maskable icons leave extra padding so the platform's mask shape
/// never clips the logo.
pub const WEB_ICONS: [(&str, u32, f64); 4] = [
    ("Icon-192.png", 192, 0.90),
    ("Icon-512.png", 512, 0.88),
    ("Icon-maskable-192.png", 192, 0.75),
    ("Icon-maskable-512.png", 512, 0.70),
];

pub fn web(env: &GenEnv) -> Result<()> {
    let dir = env.web_icons();
    std::fs::create_dir_all(&dir)?;
    for (filename, size, fill_ratio) in WEB_ICONS {
        let path = dir.join(filename);
        let mut icon = BufWriter::new(File::create(&path)?);
        env.scaler()
            .write(&mut icon, ScalerOpts::with_fill_ratio(size, fill_ratio))?;
        log::info!("created {} ({}x{})", path.display(), size, size);
    }
    Ok(())
}
