use serde::Serialize;
use std::io::Read;
use voxplot::layout::{LayoutConfig, Pipeline, PipelineError, VisualizationDispatcher};
use voxplot::{EndpointTable, StandardizerRegistry, VisualizationKind};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Pipeline(PipelineError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Pipeline(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PipelineError> for CliError {
    fn from(value: PipelineError) -> Self {
        Self::Pipeline(value)
    }
}

impl From<voxplot::Error> for CliError {
    fn from(value: voxplot::Error) -> Self {
        Self::Pipeline(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Standardize,
    Layout,
    Kinds,
    Endpoint,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    kind: Option<VisualizationKind>,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    endpoints: Option<String>,
}

fn usage() -> &'static str {
    "voxplot-cli\n\
\n\
USAGE:\n\
  voxplot-cli [standardize] --kind <tag> [--pretty] [<path>|-]\n\
  voxplot-cli layout --kind <tag> [--pretty] [--config <path>] [<path>|-]\n\
  voxplot-cli kinds\n\
  voxplot-cli endpoint --kind <tag> [--endpoints <path>]\n\
\n\
KINDS:\n\
  scatter_plot, heat_map_using_bars, multi_series_bar_chart,\n\
  stacked_multi_series_bar_chart, pie_chart\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - standardize prints the canonical data model as JSON.\n\
  - layout prints the render pass (primitives, labels, lines, planes, volume) as JSON.\n\
  - --config takes a layout configuration JSON file; omitted fields keep their defaults.\n\
  - --endpoints takes a JSON object of kind tag -> URL, merged over the local defaults.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "standardize" => args.command = Command::Standardize,
            "layout" => args.command = Command::Layout,
            "kinds" => args.command = Command::Kinds,
            "endpoint" => args.command = Command::Endpoint,
            "--pretty" => args.pretty = true,
            "--kind" => {
                let Some(tag) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.kind = Some(VisualizationKind::from_tag(tag)?);
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--endpoints" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.endpoints = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn load_layout_config(path: Option<&str>) -> Result<LayoutConfig, CliError> {
    match path {
        None => Ok(LayoutConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            LayoutConfig::from_json_str(&text).map_err(|err| CliError::Pipeline(err.into()))
        }
    }
}

fn load_endpoints(path: Option<&str>) -> Result<EndpointTable, CliError> {
    let mut endpoints = EndpointTable::local_defaults();
    if let Some(path) = path {
        let text = std::fs::read_to_string(path)?;
        endpoints.merge(&EndpointTable::from_json_str(&text)?);
    }
    Ok(endpoints)
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Kinds => {
            for kind in VisualizationKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
        Command::Endpoint => {
            let kind = args.kind.ok_or(CliError::Usage(usage()))?;
            let endpoints = load_endpoints(args.endpoints.as_deref())?;
            println!("{}", endpoints.resolve(kind));
            Ok(())
        }
        Command::Standardize => {
            let kind = args.kind.ok_or(CliError::Usage(usage()))?;
            let text = read_input(args.input.as_deref())?;
            let data = StandardizerRegistry::default().standardize(kind, &text)?;
            write_json(&data, args.pretty)
        }
        Command::Layout => {
            let kind = args.kind.ok_or(CliError::Usage(usage()))?;
            let config = load_layout_config(args.config.as_deref())?;
            let text = read_input(args.input.as_deref())?;
            let pipeline = Pipeline::new(
                StandardizerRegistry::default(),
                VisualizationDispatcher::with_config(config),
                EndpointTable::local_defaults(),
            );
            let pass = pipeline.render_sync(kind, &text)?;
            write_json(&pass, args.pretty)
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
