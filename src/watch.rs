use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};

/// Watches `path` on a background thread and sends `()` on every change.
pub fn watch_file(path: PathBuf) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        match notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_)
                    | EventKind::Create(_)
                    | EventKind::Remove(_)
                    | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        }) {
            Ok(mut watcher) => {
                if let Err(e) = watcher.watch(path.as_path(), RecursiveMode::NonRecursive) {
                    log::warn!("cannot watch {}: {}", path.display(), e);
                    return;
                }
                log::info!("watching {} for changes", path.display());
                loop {
                    std::thread::sleep(std::time::Duration::from_secs(3600));
                }
            }
            Err(e) => log::warn!("file watcher unavailable: {}", e),
        }
    });
    rx
}
