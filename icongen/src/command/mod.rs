use crate::task::TaskRunner;
use crate::{GenEnv, Platform};
use anyhow::Result;

mod android;
mod favicon;
mod ios;
mod web;

pub use android::android;
pub use favicon::favicon;
pub use ios::ios;
pub use web::web;

pub fn generate(env: &GenEnv, platforms: &[Platform]) -> Result<()> {
    let mut runner = TaskRunner::new(platforms.len() as u32);
    for platform in platforms {
        runner.start_task(format!("Generating {} icons", platform));
        match platform {
            Platform::Android => android(env)?,
            Platform::Ios => ios(env)?,
            Platform::Web => web(env)?,
            Platform::Favicon => favicon(env)?,
        }
        runner.end_task();
    }
    Ok(())
}
