use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Runs the config watcher on its own tokio runtime, off the GTK main loop.
pub fn start_background_services(tx: Sender<AppEvent>) -> std::io::Result<()> {
    let rt = Runtime::new()?;

    thread::Builder::new()
        .name("dialer-background".into())
        .spawn(move || {
            rt.block_on(async {
                tokio::spawn(crate::config::run_async_watcher(tx));
                std::future::pending::<()>().await;
            });
        })?;
    Ok(())
}
