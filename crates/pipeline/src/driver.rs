//! Pipeline driver: the linear load → transform → save sequence shared by
//! both tools, including the exit-code contract.

use crate::args::Options;
use crate::error::PipelineError;
use crate::output::derive_output_path;
use crate::transform::{extract_static_bodies, parse_scale_factor};
use std::path::PathBuf;

/// Process exit status for success, help, and missing required flags.
pub const EXIT_OK: u8 = 0;
/// Process exit status for load, transform, and save failures.
pub const EXIT_FAILURE: u8 = 1;

const RESIZE_USAGE: &str = "\
Usage: phy-resize -file <path> -scale <factor> [-out <path>]
  -help            print this message
  -file <path>     world file to resize (required)
  -scale <factor>  uniform scale factor, decimal (required)
  -out <path>      output file (default: input renamed to *_new.phy)";

const CONVERT_USAGE: &str = "\
Usage: phy-convert -file <path> [-out <path>]
  -help            print this message
  -file <path>     world file to convert (required)
  -out <path>      output file (default: input renamed to *_new.phy)";

/// Which of the two tools is driving the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Uniform geometric rescaling of the whole world.
    Resize,
    /// Extraction of static, non-interacting bodies into the world text.
    Convert,
}

impl Tool {
    fn accepts_scale(self) -> bool {
        matches!(self, Tool::Resize)
    }

    fn usage(self) -> &'static str {
        match self {
            Tool::Resize => RESIZE_USAGE,
            Tool::Convert => CONVERT_USAGE,
        }
    }
}

/// A validated unit of work: where to read, what to do, where to write.
struct Job {
    input: String,
    output: Option<String>,
    action: Action,
}

enum Action {
    /// Raw factor string; parsed after load, before any mutation.
    Scale(String),
    Extract,
}

/// Run one tool invocation over the given argument tokens.
///
/// Prints usage or a single diagnostic line to stdout and returns the
/// process exit status. Help and missing required flags return
/// [`EXIT_OK`] without touching the filesystem; runtime failures return
/// [`EXIT_FAILURE`].
pub fn run<I, S>(tool: Tool, args: I) -> u8
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let opts = Options::parse(args, tool.accepts_scale());
    let Some(job) = validate(tool, opts) else {
        println!("{}", tool.usage());
        return EXIT_OK;
    };
    match execute(job) {
        Ok(saved) => {
            println!("Scaled File saved as: {}", saved.display());
            EXIT_OK
        }
        Err(err) => {
            println!("{err}");
            EXIT_FAILURE
        }
    }
}

/// Reduce options to a job, or `None` when usage should be shown instead.
fn validate(tool: Tool, opts: Options) -> Option<Job> {
    if opts.help {
        return None;
    }
    let input = opts.input?;
    let action = match tool {
        Tool::Resize => Action::Scale(opts.scale?),
        Tool::Convert => Action::Extract,
    };
    Some(Job {
        input,
        output: opts.output,
        action,
    })
}

fn execute(job: Job) -> Result<PathBuf, PipelineError> {
    let mut world = phykit_persist::load_world(&job.input).map_err(PipelineError::Load)?;

    match &job.action {
        Action::Scale(raw) => {
            let factor = parse_scale_factor(raw)?;
            world.scale(factor);
            tracing::info!(factor, "scaled world");
        }
        Action::Extract => {
            let removed = extract_static_bodies(&mut world);
            tracing::info!(removed, remaining = world.body_count(), "extracted static bodies");
        }
    }

    let out = match &job.output {
        Some(path) => PathBuf::from(path),
        None => derive_output_path(&job.input)?,
    };
    phykit_persist::save_world(&world, &out).map_err(PipelineError::Save)?;
    Ok(out)
}
