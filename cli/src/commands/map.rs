use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use colored::*;

use crate::commands::CommandLine;
use crate::terminal::{colors, print, spinner};
use crate::dprint;
use dirmap_common::config::{Config, DEFAULT_IGNORE_PATTERNS};
use dirmap_common::{success, warn};
use dirmap_core::mapper::{self, MapOptions, MapResult};

/// How many of the heaviest files the summary lists.
const LARGEST_FILES_SHOWN: usize = 5;

type Detail = (String, ColoredString);

pub fn run(args: CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let root: PathBuf = std::path::absolute(&args.root)?;
    prepare_output_dir(args.output.as_deref())?;

    let options = MapOptions {
        output_path: args.output.clone(),
        ignore_patterns: merge_patterns(&args),
    };

    let spinner_on: bool = cfg.quiet == 0;
    if spinner_on {
        spinner::get_spinner().set_message("Walking the directory tree...".to_string());
    }

    let start_time: Instant = Instant::now();
    let outcome = mapper::generate_file_map(&root, &options);
    if spinner_on {
        spinner::get_spinner().finish_and_clear();
    }
    let result: MapResult = outcome?;

    map_ends(&root, &result, start_time.elapsed(), cfg);

    if let Some(output_path) = &args.output {
        success!("Report written to {}", output_path.display());
    }
    Ok(())
}

/// The report's parent directory must exist before the core writes to it.
fn prepare_output_dir(output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(parent) = output.and_then(|path| path.parent())
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn merge_patterns(args: &CommandLine) -> Vec<String> {
    let mut patterns: Vec<String> = if args.no_default_ignores {
        Vec::new()
    } else {
        DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|pattern| pattern.to_string())
            .collect()
    };

    for pattern in &args.ignore {
        if pattern.contains('/') || pattern.contains('\\') {
            warn!(
                "Pattern '{}' contains a path separator; patterns match basenames only",
                pattern
            );
        }
        patterns.push(pattern.clone());
    }

    patterns
}

fn map_ends(root: &Path, result: &MapResult, total_time: Duration, cfg: &Config) {
    if result.file_tokens.is_empty() {
        no_files_found(cfg);
        return;
    }

    if cfg.quiet > 0 {
        success!(
            "Mapped {} files ({} tokens) in {:.2}s",
            result.file_tokens.len(),
            result.token_count.total,
            total_time.as_secs_f64()
        );
        return;
    }

    print::header("map summary", cfg.quiet);
    print::aligned_line("Root", root.display().to_string());
    print::aligned_line("Files", result.file_tokens.len().to_string());
    print::aligned_line(
        "Map tokens",
        result.token_count.file_map_tokens.to_string(),
    );
    print::aligned_line(
        "Content tokens",
        result.token_count.file_contents_tokens.to_string(),
    );
    print::aligned_line(
        "Total tokens",
        result
            .token_count
            .total
            .to_string()
            .color(colors::TOKEN_COUNT)
            .bold(),
    );

    dprint!();
    print::header("largest files", cfg.quiet);
    print_largest_files(result);
    print_summary(result.file_tokens.len(), total_time);
}

fn no_files_found(cfg: &Config) {
    print::header("no files mapped", cfg.quiet);
    print::print_status("Nothing survived the ignore filter");
}

fn print_largest_files(result: &MapResult) {
    let mut files: Vec<(&String, &usize)> = result.file_tokens.iter().collect();
    files.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    files.truncate(LARGEST_FILES_SHOWN);

    let shown: usize = files.len();
    for (idx, (path, count)) in files.into_iter().enumerate() {
        print::tree_head(idx, path);
        print::as_tree_one_level(file_details(*count, result));
        if idx + 1 != shown {
            dprint!();
        }
    }
}

fn file_details(count: usize, result: &MapResult) -> Vec<Detail> {
    let tokens_detail: Detail = (
        "Tokens".to_string(),
        count.to_string().color(colors::TOKEN_COUNT),
    );

    let contents_total: usize = result.token_count.file_contents_tokens;
    let share: usize = if contents_total == 0 {
        0
    } else {
        count * 100 / contents_total
    };
    let share_detail: Detail = ("Share".to_string(), format!("{share}%").normal());

    vec![tokens_detail, share_detail]
}

fn print_summary(files_len: usize, total_time: Duration) {
    let mapped_files: ColoredString = format!("{files_len} files").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: &ColoredString = &format!("Mapping Complete: {mapped_files} packaged in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(output);
}
