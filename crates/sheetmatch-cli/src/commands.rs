use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use tracing::{Level, info, info_span, trace};

use sheetmatch_core::{normalize_key, run_match};
use sheetmatch_ingest::{IngestOptions, read_workbook};
use sheetmatch_model::{ConfigError, MatchConfig, Sheet, Workbook, default_lookup_sheet};
use sheetmatch_output::{OutputFormat, default_output_name, write_output_file};
use sheetmatch_suggest::{HeuristicSuggester, KeySuggester, KeySuggestion, apply_suggestion};

use crate::cli::{InspectArgs, JoinArgs, SuggestArgs};
use crate::config::JoinPlan;
use crate::logging::redact_value;
use crate::types::{JoinReport, SheetRef, SuggestReport};

pub fn run_join(args: &JoinArgs) -> Result<JoinReport> {
    let plan = JoinPlan::from_args(args)?;
    let span = info_span!("run_join", master = %plan.master.display(), lookup = %plan.lookup.display());
    let _guard = span.enter();

    let options = IngestOptions::default().with_infer_types(plan.infer_types);
    let master_book = read_workbook(&plan.master, &options)?;
    let lookup_book = read_workbook(&plan.lookup, &options)?;
    let master = select_sheet(&master_book, plan.master_sheet.as_deref())?;
    let lookup = select_lookup_sheet(
        same_source(&plan.master, &plan.lookup),
        master,
        &lookup_book,
        plan.lookup_sheet.as_deref(),
    )?;

    let mut master_key = plan.master_key.clone();
    let mut lookup_key = plan.lookup_key.clone();
    let mut suggestion = None;
    if args.suggest && (master_key.is_none() || lookup_key.is_none()) {
        suggestion = HeuristicSuggester::default().suggest(
            &master_book.name,
            &master.headers,
            &lookup_book.name,
            &lookup.headers,
        );
        if let Some(found) = &suggestion {
            apply_suggestion(
                &mut master_key,
                &mut lookup_key,
                found,
                &master.headers,
                &lookup.headers,
            );
        }
    }

    let config = MatchConfig::new(
        master_key.unwrap_or_default(),
        lookup_key.unwrap_or_default(),
    )
    .with_append_columns(plan.append.iter().cloned())
    .with_fuzzy(plan.fuzzy);
    config.validate(master, lookup)?;

    let outcome = run_match(&config, master, lookup);
    trace_unmatched_keys(master, &outcome.stats.unmatched_rows, &config);

    let format = plan
        .format
        .or_else(|| plan.output.as_deref().map(OutputFormat::from_path))
        .unwrap_or_default();
    let output = if args.dry_run {
        info!("dry run, no result file written");
        None
    } else {
        let path = plan.output.clone().unwrap_or_else(|| {
            PathBuf::from(default_output_name(Local::now().date_naive(), format))
        });
        write_output_file(&path, &outcome.rows, format)?;
        Some(path)
    };

    Ok(JoinReport {
        master: SheetRef::new(&master_book, master),
        lookup: SheetRef::new(&lookup_book, lookup),
        config,
        outcome,
        output,
        format,
        suggestion,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Workbook> {
    let options = IngestOptions::default().with_infer_types(args.infer_types);
    Ok(read_workbook(&args.path, &options)?)
}

pub fn run_suggest(args: &SuggestArgs) -> Result<SuggestReport> {
    let options = IngestOptions::default();
    let master_book = read_workbook(&args.master, &options)?;
    let lookup_book = read_workbook(&args.lookup, &options)?;
    let master = select_sheet(&master_book, args.master_sheet.as_deref())?;
    let lookup = select_lookup_sheet(
        same_source(&args.master, &args.lookup),
        master,
        &lookup_book,
        args.lookup_sheet.as_deref(),
    )?;

    let suggestion: Option<KeySuggestion> = HeuristicSuggester::new(args.min_score).suggest(
        &master_book.name,
        &master.headers,
        &lookup_book.name,
        &lookup.headers,
    );
    Ok(SuggestReport {
        master: SheetRef::new(&master_book, master),
        lookup: SheetRef::new(&lookup_book, lookup),
        suggestion,
    })
}

fn select_sheet<'a>(book: &'a Workbook, name: Option<&str>) -> Result<&'a Sheet, ConfigError> {
    match name {
        Some(name) => book.sheet(name).ok_or_else(|| ConfigError::SheetNotFound {
            sheet: name.to_string(),
            workbook: book.name.clone(),
        }),
        None => book.first_sheet().ok_or_else(|| ConfigError::EmptyWorkbook {
            workbook: book.name.clone(),
        }),
    }
}

/// True when both paths name the same file or folder on disk.
fn same_source(master: &Path, lookup: &Path) -> bool {
    match (master.canonicalize(), lookup.canonicalize()) {
        (Ok(master), Ok(lookup)) => master == lookup,
        _ => master == lookup,
    }
}

fn select_lookup_sheet<'a>(
    same_source: bool,
    master: &Sheet,
    lookup_book: &'a Workbook,
    name: Option<&str>,
) -> Result<&'a Sheet, ConfigError> {
    if name.is_some() {
        return select_sheet(lookup_book, name);
    }
    default_lookup_sheet(same_source, &master.name, lookup_book).ok_or_else(|| {
        ConfigError::EmptyWorkbook {
            workbook: lookup_book.name.clone(),
        }
    })
}

/// Logs the normalized key of every unmatched master row at trace level.
fn trace_unmatched_keys(master: &Sheet, unmatched_rows: &[usize], config: &MatchConfig) {
    if !tracing::enabled!(Level::TRACE) {
        return;
    }
    for &position in unmatched_rows {
        let Some(row) = master.rows.get(position) else {
            continue;
        };
        let key = normalize_key(row.get(&config.master_key), config.fuzzy);
        trace!(row = position + 1, key = redact_value(&key), "no lookup row for key");
    }
}
