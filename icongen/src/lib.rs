use anyhow::Result;
use clap::Parser;
use icompose::Scaler;
use std::path::{Path, PathBuf};

pub mod command;
mod task;

#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Source logo image.
    #[clap(short, long)]
    pub icon: PathBuf,
    /// Project root the icons are written into.
    #[clap(short, long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Android,
    Ios,
    Web,
    Favicon,
}

impl Platform {
    pub const ALL: &'static [Self] = &[Self::Android, Self::Ios, Self::Web, Self::Favicon];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Web => "web",
            Self::Favicon => "favicon",
        };
        write!(f, "{}", name)
    }
}

/// Holds the decoded source logo and the project root. The logo is
/// loaded and validated once, before any output file is touched.
pub struct GenEnv {
    scaler: Scaler,
    root: PathBuf,
}

impl GenEnv {
    pub fn new(icon: &Path, root: &Path) -> Result<Self> {
        let scaler = Scaler::open(icon)?;
        let (width, height) = scaler.dimensions();
        log::info!("loaded logo {} ({}x{})", icon.display(), width, height);
        Ok(Self {
            scaler,
            root: root.to_path_buf(),
        })
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn android_res(&self) -> PathBuf {
        self.root
            .join("android")
            .join("app")
            .join("src")
            .join("main")
            .join("res")
    }

    pub fn ios_appiconset(&self) -> PathBuf {
        self.root
            .join("ios")
            .join("Runner")
            .join("Assets.xcassets")
            .join("AppIcon.appiconset")
    }

    pub fn web_icons(&self) -> PathBuf {
        self.root.join("web").join("icons")
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }
}
