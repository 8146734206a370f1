use anyhow::{Context, Result};
use clap::Parser;
use gradebook::adapters::persistence::FileRecordStore;
use gradebook::cli::{to_index, CliArgs, CliCommand};
use gradebook::config::Config;
use gradebook::render::{render_grade_scale, render_overall_gpa, render_summary};
use gradebook::services::record_service::RecordService;
use gradebook_core::app::Command;
use gradebook_core::CourseField;
use std::sync::Arc;
use tracing::{error, info};

fn run(args: CliArgs) -> Result<()> {
    if args.command == CliCommand::Grades {
        print!("{}", render_grade_scale());
        return Ok(());
    }

    let config = Config::from_cli_and_file(&args)?;
    info!("Using record file {}", config.data_file.display());

    let store = Arc::new(FileRecordStore::with_path(&config.data_file));
    let mut service = RecordService::open(store);

    match args.command {
        CliCommand::Show | CliCommand::Grades => {}
        CliCommand::Set {
            term,
            course,
            field,
            value,
        } => {
            let field = CourseField::parse(&field, &value)?;
            service.handle_command(Command::SetCourseField {
                term: to_index(term),
                course: to_index(course),
                field,
            })?;
        }
        CliCommand::Remove { term, course } => {
            service.handle_command(Command::RemoveCourse {
                term: to_index(term),
                course: to_index(course),
            })?;
        }
        CliCommand::AddTerm => {
            service.handle_command(Command::AddTerm)?;
        }
        CliCommand::Gpa => {
            let gpa = service
                .compute_overall_gpa()
                .context("Failed to compute overall GPA")?;
            println!("{}", render_overall_gpa(gpa, &config.display));
            return Ok(());
        }
    }

    print!("{}", render_summary(&service.summary(), &config.display));
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing with env filter
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    if let Err(err) = run(args) {
        error!("Command failed: {:#}", err);
        return Err(err);
    }
    Ok(())
}
