// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use clap::{App, AppSettings, Arg, ArgMatches};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

use blocksmith::error::Result;
use blocksmith::models::config::{parse_flag, ConfigOverrides, GeneratorConfig};
use blocksmith::models::constants::DEFAULT_PROBLEM_PATH;
use blocksmith::systems::blocks::{generate_problem, write_problem};
use blocksmith::systems::renamer::{rename_knowledge_bases, RenameOptions};
use blocksmith::utils::logging::{
    log_error, log_footer, log_header, log_info, log_metric, log_section, log_success,
    log_timestamp,
};

fn main() {
    let matches = App::new("Blocksmith")
        .version("0.1.0")
        .about("Blocks-world problem generator and knowledge-base renamer")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(App::new("problem")
            .about("Generates a random blocks-world planning problem")
            .arg(Arg::new("blocks")
                .short('b')
                .long("blocks")
                .value_name("COUNT")
                .help("Number of blocks (default: 8)")
                .takes_value(true))
            .arg(Arg::new("start-stacks")
                .long("start-stacks")
                .value_name("COUNT")
                .help("Number of stacks in the start state (default: 3)")
                .takes_value(true))
            .arg(Arg::new("goal-stacks")
                .long("goal-stacks")
                .value_name("COUNT")
                .help("Number of stacks in the goal state (default: 2)")
                .takes_value(true))
            .arg(Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Where to write the problem file")
                .takes_value(true))
            .arg(Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG_FILE")
                .help("Load generator settings from a JSON file")
                .takes_value(true))
            .arg(Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the goal-state shuffle")
                .takes_value(true))
            .arg(Arg::new("stdout")
                .long("stdout")
                .help("Print the problem instead of writing a file")
                .takes_value(false)))
        .subcommand(App::new("rename-kb")
            .about("Renames knowledge-base files by the learning rate in their names")
            .arg(Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory to scan (default: current directory)")
                .takes_value(true))
            .arg(Arg::new("dry-run")
                .long("dry-run")
                .help("Only report what would be written")
                .takes_value(false))
            .arg(Arg::new("skip-generated")
                .long("skip-generated")
                .help("Ignore files already named lr_*.kb")
                .takes_value(false)))
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("problem", sub)) => run_problem(sub),
        Some(("rename-kb", sub)) => run_rename(sub),
        _ => Ok(()),
    };

    if let Err(e) = outcome {
        log_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run_problem(matches: &ArgMatches) -> Result<()> {
    let overrides = ConfigOverrides {
        config_file: matches.value_of("config").map(Path::new),
        num_blocks: matches.value_of("blocks"),
        num_start_stacks: matches.value_of("start-stacks"),
        num_goal_stacks: matches.value_of("goal-stacks"),
    };
    let config = GeneratorConfig::resolve(&overrides)?;
    let seed: Option<u64> = parse_flag("seed", matches.value_of("seed"))?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let problem = generate_problem(&config, &mut rng)?;

    if matches.is_present("stdout") {
        print!("{}", problem.render());
        return Ok(());
    }

    let output = PathBuf::from(matches.value_of("output").unwrap_or(DEFAULT_PROBLEM_PATH));

    log_header("PROBLEM GENERATOR");
    log_metric("blocks", config.num_blocks);
    log_metric("start stacks", config.num_start_stacks);
    log_metric("goal stacks", config.num_goal_stacks);
    if let Some(seed) = seed {
        log_metric("seed", seed);
    }

    write_problem(&problem, &output)?;

    log_timestamp("problem written");
    log_success(&format!("Wrote {}", output.display()));
    log_footer();
    Ok(())
}

fn run_rename(matches: &ArgMatches) -> Result<()> {
    let dir = PathBuf::from(matches.value_of("dir").unwrap_or("."));
    let options = RenameOptions {
        dry_run: matches.is_present("dry-run"),
        skip_generated: matches.is_present("skip-generated"),
    };

    log_header("KNOWLEDGE BASE RENAMER");
    log_info(&format!("Scanning {}", dir.display()));
    if options.dry_run {
        log_info("Dry run: nothing will be written");
    }

    log_section("FILES");
    let report = rename_knowledge_bases(&dir, &options)?;

    log_section("SUMMARY");
    log_metric("written", report.written.len());
    log_metric("skipped", report.skipped.len());
    log_metric("overwritten", report.overwritten.len());
    log_timestamp("scan complete");
    log_success("Knowledge bases renamed");
    log_footer();
    Ok(())
}
