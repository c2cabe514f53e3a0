use crate::GenEnv;
use anyhow::Result;
use icompose::ScalerOpts;
use std::fs::File;
use std::io::BufWriter;

pub const DPI_LABEL: [&str; 5] = ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"];

pub const DPI_SIZE: [u32; 5] = [48, 72, 96, 144, 192];

/// Larger launcher icons tolerate a tighter fit.
fn fill_ratio(size: u32) -> f64 {
    if size >= 144 {
        0.92
    } else {
        0.88
    }
}

pub fn android(env: &GenEnv) -> Result<()> {
    let res = env.android_res();
    for (label, size) in DPI_LABEL.iter().zip(DPI_SIZE) {
        let dir = res.join(format!("mipmap-{}", label));
        std::fs::create_dir_all(&dir)?;
        let path = dir.join("ic_launcher.png");
        let mut icon = BufWriter::new(File::create(&path)?);
        env.scaler()
            .write(&mut icon, ScalerOpts::with_fill_ratio(size, fill_ratio(size)))?;
        log::info!("created {} ({}x{})", path.display(), size, size);
    }
    Ok(())
}
