//! Command-line gradebook.
//!
//! Keeps students, classrooms, and scores in one JSON state file
//! (`data.json` by default). Each invocation loads the file, runs one
//! command, and writes the whole state back when the command mutates it.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::core::args::{
    AddScoreArgs, ClassroomAverageArgs, CreateClassroomArgs, CreateStudentArgs, EnrollArgs,
    StudentAverageArgs,
};
use gradebook::dispatch::{ClassroomAction, Request, StudentAction, run_request};
use gradebook::handlers::Handlers;
use gradebook::io::config::{DEFAULT_CONFIG_PATH, load_config};
use gradebook::io::state_store::JsonFileStore;
use gradebook::{exit_codes, logging, report};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Track students, classrooms, and scores in a JSON gradebook"
)]
struct Cli {
    /// State file to read and write (overrides `data_path` in the config).
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create students, record scores, and query student averages.
    Student {
        #[command(subcommand)]
        action: Option<StudentCommand>,
    },
    /// Create classrooms, enroll students, and query classroom averages.
    Classroom {
        #[command(subcommand)]
        action: Option<ClassroomCommand>,
    },
    /// Reset the state file to an empty gradebook.
    Clear {
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Subcommand)]
enum StudentCommand {
    /// Create one or more students.
    Create {
        #[arg(allow_hyphen_values = true)]
        names: Vec<String>,
    },
    /// Record a score for a student in a classroom they are enrolled in.
    #[command(name = "add_score")]
    AddScore {
        student: Option<String>,
        #[arg(allow_hyphen_values = true)]
        score: Option<String>,
        classroom: Option<String>,
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Print a student's average score in a classroom.
    Average {
        student: Option<String>,
        classroom: Option<String>,
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Subcommand)]
enum ClassroomCommand {
    /// Create a classroom with its teacher.
    Create {
        classroom: Option<String>,
        teacher: Option<String>,
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Enroll an existing student in a classroom.
    #[command(name = "add_student")]
    AddStudent {
        classroom: Option<String>,
        student: Option<String>,
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    /// Print the average of every score recorded in a classroom.
    Average {
        classroom: Option<String>,
        /// Ignored extra tokens.
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        _extra: Vec<String>,
    },
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Select the request named by the entity/action tokens.
fn to_request(command: Option<Command>) -> Request {
    match command {
        Some(Command::Student {
            action: Some(action),
        }) => student_request(action),
        Some(Command::Classroom {
            action: Some(action),
        }) => classroom_request(action),
        Some(Command::Clear { .. }) => Request::Clear,
        Some(Command::Other(tokens)) => unrecognized(&tokens),
        Some(Command::Student { action: None })
        | Some(Command::Classroom { action: None })
        | None => Request::Invalid,
    }
}

fn student_request(action: StudentCommand) -> Request {
    let action = match action {
        StudentCommand::Create { names } => {
            StudentAction::Create(CreateStudentArgs::from_tokens(names))
        }
        StudentCommand::AddScore {
            student,
            score,
            classroom,
            ..
        } => StudentAction::AddScore(AddScoreArgs::from_tokens(student, score, classroom)),
        StudentCommand::Average {
            student, classroom, ..
        } => {
            StudentAction::Average(StudentAverageArgs::from_tokens(student, classroom))
        }
        StudentCommand::Other(tokens) => return unrecognized(&tokens),
    };
    Request::Student(action)
}

fn classroom_request(action: ClassroomCommand) -> Request {
    let action = match action {
        ClassroomCommand::Create {
            classroom, teacher, ..
        } => {
            ClassroomAction::Create(CreateClassroomArgs::from_tokens(classroom, teacher))
        }
        ClassroomCommand::AddStudent {
            classroom, student, ..
        } => {
            ClassroomAction::AddStudent(EnrollArgs::from_tokens(classroom, student))
        }
        ClassroomCommand::Average { classroom, .. } => {
            ClassroomAction::Average(ClassroomAverageArgs::from_tokens(classroom))
        }
        ClassroomCommand::Other(tokens) => return unrecognized(&tokens),
    };
    Request::Classroom(action)
}

fn unrecognized(tokens: &[String]) -> Request {
    debug!(?tokens, "unrecognized command");
    Request::Invalid
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = load_config(&cli.config)?.with_data_path(cli.data);
    debug!(data_path = %config.data_path.display(), "using state file");

    let handlers = Handlers::new(JsonFileStore::new(&config.data_path));
    let outcome = run_request(&handlers, to_request(cli.command))?;
    print!("{}", report::render(&outcome, config.echo_state)?);
    Ok(outcome.exit_code())
}
