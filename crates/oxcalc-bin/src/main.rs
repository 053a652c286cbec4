//! oxcalc entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::translate_key;
use core_config::{Config, load_from};
use core_events::InputEvent;
use core_model::{CalcModel, ViewOptions};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalGuard};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const HELP_LINE: &str = "0-9 . + - * / % | n sign | Enter = | c clear | q quit";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxcalc", version, about = "Left-to-right terminal calculator")]
struct Args {
    /// Optional configuration file path (overrides discovery of `oxcalc.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Button labels to feed in order instead of starting the interactive UI,
    /// e.g. `--keys 2 + 3 =`.
    #[arg(long = "keys", num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,
    /// Batch mode only: print the display after every label.
    #[arg(long = "print-each", requires = "keys")]
    pub print_each: bool,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("oxcalc.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "oxcalc.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn load_config(args: &Args) -> Result<Config> {
        let config = load_from(args.config.clone())?;
        info!(
            target: "runtime.startup",
            config_override = args.config.is_some(),
            config_source = config.source.as_ref().map(|p| p.display().to_string()).as_deref(),
            max_fraction_digits = config.file.format.max_fraction_digits,
            continue_after_result = config.file.behavior.continue_after_result,
            "bootstrap_complete"
        );
        Ok(config)
    }
}

fn view_options(config: &Config) -> ViewOptions {
    ViewOptions {
        group_thousands: config.file.display.group_thousands,
        show_last_expression: config.file.display.show_last_expression,
    }
}

/// Feed `labels` through the model and print the outcome.
fn run_batch<W: Write>(
    model: &mut CalcModel,
    labels: &[String],
    view_opts: &ViewOptions,
    print_each: bool,
    out: &mut W,
) -> Result<()> {
    for label in labels {
        model.on_token(label);
        if print_each {
            writeln!(out, "{label}\t{}", model.view(view_opts).display)?;
        }
    }
    let view = model.view(view_opts);
    if !view.expression.is_empty() {
        writeln!(out, "{}", view.expression)?;
    }
    writeln!(out, "{}", view.display)?;
    Ok(())
}

struct CalcRuntime<'a> {
    model: CalcModel,
    view_opts: ViewOptions,
    terminal: TerminalGuard<'a>,
    width: u16,
}

impl<'a> CalcRuntime<'a> {
    fn run(&mut self) -> Result<()> {
        self.redraw()?;
        loop {
            let Some(event) = core_terminal::read_event()? else {
                continue;
            };
            match event {
                InputEvent::Key(key) => {
                    let Some(action) = translate_key(&key) else {
                        continue;
                    };
                    let res = self.model.dispatch(action);
                    if res.quit {
                        break;
                    }
                    if res.dirty {
                        self.redraw()?;
                    }
                }
                InputEvent::Resize(cols, _rows) => {
                    self.width = cols;
                    self.redraw()?;
                }
            }
        }
        let metrics = self.model.state().metrics;
        info!(
            target: "runtime",
            evaluations = metrics.evaluations,
            errors = metrics.errors,
            "shutdown"
        );
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let view = self.model.view(&self.view_opts);
        let lines = [
            view.expression.as_str(),
            view.display.as_str(),
            "",
            HELP_LINE,
        ];
        self.terminal.backend().draw_right_aligned(&lines, self.width)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let config = AppStartup::load_config(&args)?;
    let view_opts = view_options(&config);
    let mut model = CalcModel::new(config.dispatch_options());

    if !args.keys.is_empty() {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        return run_batch(&mut model, &args.keys, &view_opts, args.print_each, &mut out);
    }

    let mut backend = CrosstermBackend::new();
    backend.set_title("oxcalc")?;
    let width = core_terminal::terminal_width()?;
    let terminal = backend.enter_guard()?;
    let mut runtime = CalcRuntime {
        model,
        view_opts,
        terminal,
        width,
    };
    runtime.run()
}
