#![windows_subsystem = "windows"]

//! FlickUAC - RunAsInvoker flag manager
//!
//! Built with native-windows-gui for a Windows-native interface

#[cfg_attr(not(windows), allow(dead_code))]
mod state;

#[cfg(windows)]
mod dialogs;
#[cfg(windows)]
mod ui;

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use native_windows_gui as nwg;
    use nwg::NativeUi;

    // Console builds get structured logs; release is a pure windowed app
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, EnvFilter};
        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
    tracing::info!("FlickUAC starting");

    nwg::init().context("Failed to initialize native-windows-gui")?;
    nwg::Font::set_global_family("Segoe UI").context("Failed to set default font")?;

    let app = ui::FlickApp::build_ui(Default::default()).context("Failed to build main window")?;
    app.initialize();

    nwg::dispatch_thread_events();
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("FlickUAC manages the Windows registry and only runs on Windows.");
}
