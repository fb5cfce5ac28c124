mod cli;

use std::io::{self, BufRead};

use clap::Parser;
use cli::{Args, OutputFormat};
use common::debug;
use crawler::run::run;
use land::{input::read_inputs_from_file, report::Report};

/// Larger parcels are never printed
const MAX_PRINT_SIZE: usize = 20;

fn main() {
    let args = Args::parse();
    debug!("{:?}", args);

    if let Some(file_path) = &args.file {
        let inputs = read_inputs_from_file(file_path).expect("Could not read input file");
        for input in inputs {
            process(&args, &input);
        }
        return;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if args.output_format() == OutputFormat::Text {
            println!("Please enter a properly formatted rectangle or set of rectangles: ");
        }

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                debug!("Could not read from stdin: {}", e);
                break;
            }
            None => break,
        };
        if input == "quit" {
            break;
        }

        process(&args, &input);

        if !args.interactive {
            break;
        }
    }
}

/// Runs a single input line and prints its outcome
fn process(args: &Args, input: &str) -> Report {
    let (report, grid) = match run(input, args.width(), args.height()) {
        Ok(result) => {
            #[cfg(feature = "stats")]
            eprintln!("Crawled {} cells/s", result.cells_per_second);
            (Report::success(result.areas), Some(result.grid))
        }
        Err(e) => (Report::failure(&e), None),
    };

    match args.output_format() {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json_string().unwrap()),
    }

    if let Some(grid) = grid.filter(|_| args.print) {
        if grid.width() <= MAX_PRINT_SIZE && grid.height() <= MAX_PRINT_SIZE {
            println!("{}", grid);
        } else {
            debug!("Not printing {}x{} grid", grid.width(), grid.height());
        }
    }

    report
}
