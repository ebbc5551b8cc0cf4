use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use covira::config::{Config, Settings};
use covira::form::run_session;
use covira::locale::Language;
use covira::render::{
    render_header, render_json, render_model_info, render_questions, render_report,
};
use covira::{exit_code, open_model};
use covira_ai::{AnswerSet, Assessor};
use covira_model::{ModelCache, ModelHandle};

#[derive(Debug, Parser)]
#[command(
    name = "covira",
    version,
    about = "COVID-19 exposure risk questionnaire backed by a pre-trained classifier",
    long_about = "covira asks ten yes/no questions about symptoms and exposure history,\n\
        feeds the answers to a pre-trained classifier, and reports a risk percentage\n\
        with a LOW / MODERATE / HIGH RISK label.\n\n\
        This system is for educational purposes only.\n\n\
        EXAMPLES:\n\
        \n  covira form                              Answer the questionnaire interactively\n\
        \n  covira assess --fever --contact          Assess from flags\n\
        \n  covira --lang hindi assess --json        Hindi text, JSON output\n\
        \n  covira --model other.json model          Show artifact metadata"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: covira.toml when present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Model artifact to load
    #[arg(long, value_name = "FILE", global = true)]
    model: Option<PathBuf>,

    /// Language of the user-facing text
    #[arg(long, value_enum, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the questionnaire interactively
    Form(OutputArgs),
    /// Assess the answers given as flags; unset flags mean "no"
    Assess(AssessArgs),
    /// List the questions and their flags
    Questions,
    /// Show the loaded model artifact's metadata
    Model,
}

#[derive(Debug, Args, Clone, Default)]
struct OutputArgs {
    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args, Clone, Default)]
struct AssessArgs {
    /// Breathing Problem
    #[arg(long)]
    breathing: bool,
    /// Fever
    #[arg(long)]
    fever: bool,
    /// Dry Cough
    #[arg(long)]
    dry_cough: bool,
    /// Sore Throat
    #[arg(long)]
    sore_throat: bool,
    /// Hypertension
    #[arg(long)]
    hypertension: bool,
    /// Recent Abroad Travel
    #[arg(long)]
    abroad: bool,
    /// Contact with COVID Patient
    #[arg(long)]
    contact: bool,
    /// Attended Large Gathering
    #[arg(long)]
    gathering: bool,
    /// Visited Public Exposed Places
    #[arg(long)]
    public_place: bool,
    /// Family Working in Public Exposed Places
    #[arg(long)]
    family_public: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl AssessArgs {
    fn answers(&self) -> AnswerSet {
        AnswerSet {
            breathing: self.breathing,
            fever: self.fever,
            dry_cough: self.dry_cough,
            sore_throat: self.sore_throat,
            hypertension: self.hypertension,
            abroad: self.abroad,
            contact: self.contact,
            gathering: self.gathering,
            public_place: self.public_place,
            family_public: self.family_public,
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose > 0 {
        builder.filter_level(match verbose {
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        });
    }
    let _ = builder.try_init();
}

fn load(cache: &ModelCache, settings: &Settings) -> Result<ModelHandle, i32> {
    open_model(cache, &settings.model_path).map_err(|e| {
        eprintln!("error: {e}");
        exit_code(&e)
    })
}

fn print_assessment(
    assessor: &Assessor,
    answers: &AnswerSet,
    settings: &Settings,
    json: bool,
) -> i32 {
    let assessment = match assessor.assess(answers) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return exit_code(&e);
        }
    };
    if json {
        match render_json(&assessment, settings.language) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return 1;
            }
        }
    } else {
        print!("{}", render_report(&assessment, settings.language.pack()));
    }
    0
}

fn run_form(assessor: &Assessor, settings: &Settings, args: &OutputArgs) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize form: {e}");
            return 2;
        }
    };

    let pack = settings.language.pack();
    println!("{}", render_header(pack));
    let outcome = run_session(
        pack,
        |prompt| match rl.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e),
        },
        |text| println!("{text}"),
    );
    let answers = match outcome {
        Ok(Some(answers)) => answers,
        Ok(None) => {
            eprintln!("form aborted");
            return 2;
        }
        Err(e) => {
            eprintln!("error: form failed: {e}");
            return 2;
        }
    };
    println!("\n{}\n", pack.predict);
    print_assessment(assessor, &answers, settings, args.json)
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let settings = config.resolve(cli.model, cli.lang);
    log::debug!("settings: {settings:?}");

    let command = cli.command.unwrap_or(Command::Form(OutputArgs::default()));
    if let Command::Questions = command {
        print!("{}", render_questions(settings.language.pack()));
        return 0;
    }

    // The artifact is loaded once, before any question is asked.
    let cache = ModelCache::new();
    let model = match load(&cache, &settings) {
        Ok(m) => m,
        Err(rc) => return rc,
    };

    match command {
        Command::Model => {
            print!("{}", render_model_info(&model));
            0
        }
        Command::Assess(args) => {
            let assessor = Assessor::new(model);
            print_assessment(&assessor, &args.answers(), &settings, args.output.json)
        }
        Command::Form(args) => run_form(&Assessor::new(model), &settings, &args),
        Command::Questions => 0,
    }
}

fn main() {
    std::process::exit(run_cli());
}
