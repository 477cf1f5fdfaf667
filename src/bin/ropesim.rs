use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ropelib::{parse_commands, Rope};

/// Simulate a two-knot rope and count the cells its tail visits.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of `<U|D|L|R> <count>` motions, one per line
    input: PathBuf,
    /// Where to write the visited-cell count
    output: PathBuf,
    #[arg(short, long)]
    verbose: bool,
    /// Print a map of every cell the tail visited
    #[arg(short, long)]
    trail: bool,
}

/// Nothing is written to `args.output` unless the whole input parsed.
fn run(args: &Args) -> anyhow::Result<Rope> {
    let input = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let start = std::time::Instant::now();
    let commands = parse_commands(&input)?;
    log::debug!("parsed {} commands", commands.len());
    let mut rope = Rope::new();
    for command in commands.iter() {
        rope.apply(command);
    }
    let visited = rope.visited_count();
    log::info!(
        "tail visited {} cells (head ended at {}, tail at {})",
        visited,
        rope.head(),
        rope.tail()
    );
    log::debug!("simulated in {:?}", start.elapsed());
    std::fs::write(&args.output, format!("{}\n", visited))
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(rope)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder()
        .format_module_path(false)
        .format_timestamp_millis()
        .filter_level(log_level)
        .init();
    let rope = run(&args)?;
    if args.trail {
        print!("{}", rope.trail_map()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{run, Args};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ropesim_{}_{}", std::process::id(), name))
    }

    fn args_for(name: &str, input: &str) -> Args {
        let input_path = scratch(&format!("{}.in", name));
        let output_path = scratch(&format!("{}.out", name));
        std::fs::write(&input_path, input).unwrap();
        let _ = std::fs::remove_file(&output_path);
        Args {
            input: input_path,
            output: output_path,
            verbose: false,
            trail: false,
        }
    }

    #[test]
    fn test_writes_count_line() {
        let args = args_for("example", "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n");
        let rope = run(&args).unwrap();
        assert_eq!(rope.visited_count(), 13);
        assert_eq!(std::fs::read_to_string(&args.output).unwrap(), "13\n");
        let _ = std::fs::remove_file(&args.input);
        let _ = std::fs::remove_file(&args.output);
    }

    #[test]
    fn test_empty_input_writes_one() {
        let args = args_for("empty", "");
        run(&args).unwrap();
        assert_eq!(std::fs::read_to_string(&args.output).unwrap(), "1\n");
        let _ = std::fs::remove_file(&args.input);
        let _ = std::fs::remove_file(&args.output);
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let args = args_for("malformed", "R 4\nU x\n");
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(!args.output.exists());
        let _ = std::fs::remove_file(&args.input);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let args = args_for("missing", "");
        std::fs::remove_file(&args.input).unwrap();
        assert!(run(&args).is_err());
        assert!(!args.output.exists());
    }
}
