use std::process::ExitCode;

use clap::{Parser as ClapParser, Subcommand};
use scopewalk::{
    display_error, init_tracing,
    interpreter::{
        environment::Environment,
        output::{OutputEvent, StdOutput},
    },
    programs::{find_program, Example, EXPRESSIONS, PROGRAMS},
    run_expression, run_program,
    type_checker::type_checker::{CheckerConfig, TypeEnvironment},
    ProgramReport,
};

#[derive(ClapParser)]
#[command(name = "scopewalk")]
#[command(about = "Runs the hand-built example programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the example programs
    List,
    /// Print, type check and evaluate example programs
    Run {
        /// Example names, all of them when empty
        names: Vec<String>,
        /// Restore the type environment after every nested body
        #[arg(long)]
        scoped_types: bool,
        /// Print runtime output while evaluating instead of after
        #[arg(long)]
        stream: bool,
    },
    /// Evaluate and infer the standalone example expressions
    Exprs,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for example in PROGRAMS {
                println!("{:<28}{}", example.name, example.description);
            }
            ExitCode::SUCCESS
        }
        Commands::Run {
            names,
            scoped_types,
            stream,
        } => {
            let config = if scoped_types {
                CheckerConfig::scoped()
            } else {
                CheckerConfig::default()
            };

            let selected: Vec<&Example> = if names.is_empty() {
                PROGRAMS.iter().collect()
            } else {
                let mut selected = vec![];
                for name in names.iter() {
                    match find_program(name) {
                        Some(example) => selected.push(example),
                        None => {
                            eprintln!("Unknown example `{}`, see `scopewalk list`", name);
                            return ExitCode::FAILURE;
                        }
                    }
                }
                selected
            };

            for example in selected {
                if stream {
                    stream_example(example, config);
                } else {
                    let report = run_program(&(example.build)(), config);
                    show_report(example.name, &report);
                }
            }
            ExitCode::SUCCESS
        }
        Commands::Exprs => {
            for example in EXPRESSIONS {
                let report = run_expression(&(example.build)());
                println!("******* {}", example.name);
                println!("{}", report.code);
                println!("{}", report.value);
                println!("{}", report.type_);
                println!();
            }
            ExitCode::SUCCESS
        }
    }
}

fn show_header(name: &str, code: &str, type_check: bool) {
    println!();
    println!("EXAMPLE: {}", name);
    println!("CODE FROM AST:");
    println!("{}", code);
    println!();
    println!("TYPE CHECK: {}", type_check);
    println!();
    println!("RUNTIME RESULT:");
}

fn show_report(name: &str, report: &ProgramReport) {
    show_header(name, &report.code, report.type_check);
    for event in report.output.events() {
        match event {
            OutputEvent::Line(line) => println!("{}", line),
            OutputEvent::Diagnostic(error) => display_error(error),
        }
    }
    println!();
    println!("**************************");
}

fn stream_example(example: &Example, config: CheckerConfig) {
    let program = (example.build)();
    let type_check = program.check_with(config, &mut TypeEnvironment::new());
    show_header(example.name, &program.pretty_print(), type_check);

    program.run(&mut Environment::new(), &mut StdOutput);
    println!();
    println!("**************************");
}
