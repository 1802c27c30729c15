use log::{Level, LevelFilter, Metadata, Record};
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::Mutex;
use std::time::Instant;

/// A logger that logs to stdout and optionally to a file under `logs/`
pub struct MyLog {
    start: Instant,
    log_file: Option<Mutex<BufWriter<File>>>,
}

impl MyLog {
    fn new(to_file: bool) -> Self {
        let log_file = if to_file && cfg!(not(test)) {
            Self::open_log_file()
        } else {
            None
        };

        Self {
            start: Instant::now(),
            log_file,
        }
    }

    fn open_log_file() -> Option<Mutex<BufWriter<File>>> {
        use std::time::SystemTime;
        let _ = std::fs::create_dir("logs");
        File::create(format!(
            "logs/log_{}.log",
            SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_micros())
                .unwrap_or_default()
        ))
        .ok()
        .map(|f| Mutex::new(BufWriter::new(f)))
    }

    /// Installs the logger. Calling it more than once is a no-op.
    pub fn init(to_file: bool) {
        let leaked = Box::leak(Box::new(MyLog::new(to_file)));
        crate::unwrap_orr!(log::set_logger(leaked), return);
        log::set_max_level(LevelFilter::Debug);
        log_panics::init();
    }
}

macro_rules! write_log_stdout {
    ($file:expr, $($arg:tt)*) => {
        println!($($arg)*);

        if let Some(ref m) = $file {
            if let Ok(mut bw) = m.lock() {
                let _ = writeln!(bw, $($arg)*);
                let _ = bw.flush();
            }
        }
    }
}

impl log::Log for MyLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let l = metadata.level();
        match metadata.target() {
            "serde_json" => l <= Level::Warn,
            _ => true,
        }
    }

    fn log(&self, r: &Record<'_>) {
        if r.target() == "panic" {
            write_log_stdout!(self.log_file, "{}", r.args());
            self.flush();
            return;
        }

        if std::thread::panicking() {
            self.flush();
            return;
        }

        if !self.enabled(r.metadata()) {
            return;
        }

        let time = self.start.elapsed().as_micros();
        if r.level() > Level::Warn {
            let module_path = r.module_path_static().unwrap_or_else(|| r.target());
            write_log_stdout!(
                self.log_file,
                "[{:9} {:5} {:12}] {}",
                time,
                r.level(),
                module_path,
                r.args()
            );
        } else {
            write_log_stdout!(
                self.log_file,
                "[{:9} {:5} {}:{}] {}",
                time,
                r.level(),
                r.file().unwrap_or_default(),
                r.line().unwrap_or_default(),
                r.args()
            );
        }
    }

    fn flush(&self) {
        let _ = stdout().flush();
        if let Some(ref x) = self.log_file {
            if let Ok(mut bw) = x.lock() {
                let _ = bw.flush();
            }
        }
    }
}
