use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Installs the global fmt subscriber at `level`.
///
/// Events go to the browser console on wasm32 and to stderr elsewhere.
/// Only the first call has an effect.
pub fn init(level: LevelFilter) {
    INSTALLED.get_or_init(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level.to_string()))
            .without_time()
            .with_ansi(false)
            .with_target(false);

        #[cfg(target_arch = "wasm32")]
        let result = builder.with_writer(console::MakeConsoleWriter).try_init();
        #[cfg(not(target_arch = "wasm32"))]
        let result = builder.with_writer(std::io::stderr).try_init();

        // Another subscriber may already be installed by the host.
        let _ = result;
        tracing::info!(%level, "logging initialized");
    });
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(message: &str);
    }

    /// Buffers one formatted event and hands it to `console.log` on drop.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if !self.buffer.is_empty() {
                console_log(String::from_utf8_lossy(&self.buffer).trim_end());
            }
        }
    }

    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}
