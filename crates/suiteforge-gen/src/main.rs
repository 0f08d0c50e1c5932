use clap::{Arg, ArgAction, Command};
use suiteforge_gen::suite;
use suiteforge_spec::Specification;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("suiteforge")
        .version("0.1.0")
        .about("Deterministic weighted-random test suite generator")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Generate a test suite from a product specification")
                .arg(
                    Arg::new("spec")
                        .long("spec")
                        .required(true)
                        .help("Path to the XML product specification"),
                )
                .arg(
                    Arg::new("library")
                        .long("library")
                        .default_value(".")
                        .help("Directory that will hold the suite directory"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the run report as JSON"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Load a product specification and print its summary")
                .arg(
                    Arg::new("spec")
                        .long("spec")
                        .required(true)
                        .help("Path to the XML product specification"),
                ),
        );

    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("generate", args)) => {
            let spec_path = args.get_one::<String>("spec").unwrap();
            let library = args.get_one::<String>("library").unwrap();
            let json = args.get_flag("json");

            let spec = load_spec(spec_path);
            match suite::generate_suite(&spec, library) {
                Ok(report) => {
                    if json {
                        match serde_json::to_string_pretty(&report) {
                            Ok(text) => println!("{text}"),
                            Err(e) => {
                                eprintln!("Failed to encode report: {e}");
                                std::process::exit(1);
                            }
                        }
                    } else {
                        print!("{}", report.render_text());
                    }
                }
                Err(e) => {
                    eprintln!("Suite generation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Some(("inspect", args)) => {
            let spec_path = args.get_one::<String>("spec").unwrap();
            let spec = load_spec(spec_path);

            println!("Suite: {} ({})", spec.suite_name(), spec.suite_id());
            println!("Project: {}", spec.project());
            println!("Author: {}", spec.author());
            println!("Product: {}", spec.product().code());
            println!("Seed: {}", spec.seed());
            println!("Cases: {}", spec.count());
            println!("Question sets: {}", spec.product().question_sets().len());
            println!("Coverables: {}", spec.product().coverables().len());
            println!(
                "Quote: {}  Bind: {}",
                spec.policy().should_quote(),
                spec.policy().should_bind()
            );
        }
        _ => {}
    }
}

fn load_spec(path: &str) -> Specification {
    match Specification::load_path(path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Specification error: {e}");
            std::process::exit(1);
        }
    }
}
