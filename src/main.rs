// SPDX-License-Identifier: MPL-2.0
//! Command-line driver running the storefront controllers against in-memory
//! pages and the real orders backend.

use std::fmt;
use std::path::Path;
use std::process::ExitCode;
use std::rc::Rc;

use crown_storefront::application::port::{FormControl, IntersectionEntry};
use crown_storefront::config::{self, Config};
use crown_storefront::domain::gallery::ImageSet;
use crown_storefront::domain::order::{FileAttachment, FormField, FormKind, OrderItemLine};
use crown_storefront::events::EventSource;
use crown_storefront::i18n::I18n;
use crown_storefront::infrastructure::memory::{
    ManualScheduler, MemoryOrderForm, MemoryShowcasePage, RecordingNavigator, RecordingObserver,
};
use crown_storefront::infrastructure::HttpOrderTransport;
use crown_storefront::order_form::{OrderForm, OrderFormSettings, SubmitReport};
use crown_storefront::paths;
use crown_storefront::showcase::{self, ShowcaseController, ShowcaseEvent, ShowcaseSettings};

const HELP: &str = "\
crown_storefront

USAGE:
  crown_storefront [--lang LANG] [--config-dir DIR] <COMMAND>

COMMANDS:
  images                      Print the configured image set
  slideshow [--ticks N]       Run the slideshow for N autoplay ticks (default 3)
  submit --form quick|large   Validate and submit an order
      --field NAME=VALUE      Form field (repeatable)
      --item Q|DESC|MAT|NOTES Item line (repeatable)
      --file PATH             Attachment sent as `files` (repeatable)
      --required NAME         Mark a field as required (repeatable)
";

#[derive(Debug)]
enum CliError {
    Args(String),
    App(crown_storefront::error::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Args(e) => write!(f, "{e}\n\n{HELP}"),
            CliError::App(e) => write!(f, "{e}"),
        }
    }
}

impl From<pico_args::Error> for CliError {
    fn from(err: pico_args::Error) -> Self {
        CliError::Args(err.to_string())
    }
}

impl From<crown_storefront::error::Error> for CliError {
    fn from(err: crown_storefront::error::Error) -> Self {
        CliError::App(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::App(err.into())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(ExitCode::SUCCESS);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    paths::init_cli_override(args.opt_value_from_str("--config-dir")?);

    let (config, warning) = config::load();
    let i18n = Rc::new(I18n::new(lang, &config));
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let command: Option<String> = args.subcommand()?;
    match command.as_deref() {
        Some("images") => {
            ensure_no_extra_args(args)?;
            print_images(&config, &i18n);
            Ok(ExitCode::SUCCESS)
        }
        Some("slideshow") => {
            let ticks: u32 = args.opt_value_from_str("--ticks")?.unwrap_or(3);
            ensure_no_extra_args(args)?;
            run_slideshow(&config, i18n, ticks)
        }
        Some("submit") => submit(args, &config, i18n),
        Some(other) => Err(CliError::Args(format!("unknown command '{other}'"))),
        None => Err(CliError::Args("missing command".to_string())),
    }
}

fn ensure_no_extra_args(args: pico_args::Arguments) -> Result<(), CliError> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(CliError::Args(format!("unexpected arguments: {rest:?}")))
    }
}

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn print_images(config: &Config, i18n: &Rc<I18n>) {
    let images = ImageSet::generate(&config.slideshow.image_set_spec());
    for (index, entry) in images.iter().enumerate() {
        println!("{:>3}  {}  {}", index + 1, entry.full(), entry.thumb_or_full());
    }

    let mut controller = ShowcaseController::new(
        MemoryShowcasePage::complete(),
        ManualScheduler::new(),
        RecordingObserver::new(),
        images,
        ShowcaseSettings::from_config(config),
        Rc::clone(i18n),
    );
    controller.init();
    println!("{}", controller.status_text());
}

fn run_slideshow(config: &Config, i18n: Rc<I18n>, ticks: u32) -> Result<ExitCode, CliError> {
    let images = ImageSet::generate(&config.slideshow.image_set_spec());
    let controller = ShowcaseController::new(
        MemoryShowcasePage::complete(),
        ManualScheduler::new(),
        RecordingObserver::new(),
        images,
        ShowcaseSettings::from_config(config),
        i18n,
    );

    let mut events = EventSource::new();
    let (showcase, _subscription) = showcase::mount(controller, &mut events);

    // A headless page has every thumbnail in view.
    let entries = showcase
        .borrow()
        .observer()
        .observed()
        .into_iter()
        .map(|index| IntersectionEntry {
            index,
            is_intersecting: true,
        })
        .collect();
    events.emit(&ShowcaseEvent::Intersections(entries));
    print_slide(&showcase.borrow());

    let Some(timer) = showcase.borrow().autoplay_timer() else {
        return Ok(ExitCode::SUCCESS);
    };
    let period = showcase
        .borrow()
        .scheduler()
        .period_of(timer)
        .unwrap_or_else(|| config.slideshow.interval().as_duration());

    runtime()?.block_on(async {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately.
        interval.tick().await;
        for _ in 0..ticks {
            interval.tick().await;
            events.emit(&ShowcaseEvent::Tick(timer));
            print_slide(&showcase.borrow());
        }
    });
    Ok(ExitCode::SUCCESS)
}

fn print_slide(
    controller: &ShowcaseController<MemoryShowcasePage, ManualScheduler, RecordingObserver>,
) {
    let src = controller
        .page()
        .track()
        .and_then(|track| track.slide())
        .map_or("-", |slide| slide.src.as_str());
    println!("{}  {src}", controller.status_text());
}

fn submit(
    mut args: pico_args::Arguments,
    config: &Config,
    i18n: Rc<I18n>,
) -> Result<ExitCode, CliError> {
    let kind: FormKind = args.value_from_str("--form")?;
    let fields: Vec<String> = args.values_from_str("--field")?;
    let items: Vec<String> = args.values_from_str("--item")?;
    let files: Vec<String> = args.values_from_str("--file")?;
    let required: Vec<String> = args.values_from_str("--required")?;
    ensure_no_extra_args(args)?;

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        let (name, value) = field
            .split_once('=')
            .ok_or_else(|| CliError::Args(format!("--field expects NAME=VALUE, got '{field}'")))?;
        values.push((name.trim().to_string(), value.to_string()));
    }

    let mut view = MemoryOrderForm::new();
    for name in &required {
        let value = values
            .iter()
            .find(|(field, _)| field == name)
            .map_or("", |(_, value)| value.as_str());
        view = view.with_required(FormControl::text(name, value).with_id(name));
    }
    for (name, value) in &values {
        if !required.contains(name) {
            view = view.with_field(FormField::text(name.as_str(), value.as_str()));
        }
    }
    for item in &items {
        view = view.with_row(OrderItemLine::parse_pipe_separated(item));
    }
    for file in &files {
        view = view.with_field(FormField::file("files", read_attachment(Path::new(file))?));
    }

    let transport = HttpOrderTransport::new(&config.orders.base_url)?;
    let mut navigator = RecordingNavigator::new();
    let mut form = OrderForm::new(
        kind,
        view,
        OrderFormSettings::from_config(config),
        Rc::clone(&i18n),
    );

    let report = runtime()?.block_on(form.submit(&transport, &mut navigator));
    match report {
        SubmitReport::Redirected { outcome, location } => {
            println!("{location}");
            Ok(if outcome.is_accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        SubmitReport::Invalid(errors) => {
            eprintln!("{}", i18n.tr("validation-header"));
            for error in errors {
                eprintln!("  - {error}");
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitReport::Busy => Ok(ExitCode::FAILURE),
    }
}

fn read_attachment(path: &Path) -> Result<FileAttachment, CliError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(FileAttachment {
        file_name,
        content_type: None,
        bytes,
    })
}
