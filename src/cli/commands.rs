//! Command implementations for the sapor CLI.

use std::time::Instant;

use crate::cli::args::{Command, SaporArgs, SearchArgs, StatsArgs};
use crate::cli::loader::load_records;
use crate::cli::output::{self, CorpusStats, HitOutput, SearchResults, TermCount};
use crate::error::Result;
use crate::index::TermId;
use crate::search::{SearchConfig, SearchEngine, SearchHit};
use crate::spelling::corrector::QueryCorrector;

/// How many terms `stats --detailed` lists.
const TOP_TERM_COUNT: usize = 10;

/// Execute a CLI command.
pub fn execute_command(args: SaporArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Search a corpus.
fn run_search(args: SearchArgs, cli_args: &SaporArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus: {}", args.corpus_file.display());
    }

    let records = load_records(&args.corpus_file)?;
    let config = SearchConfig {
        min_similarity: args.min_score,
        max_results: args.limit,
    };
    let corrector = QueryCorrector::new(&args.candidates).with_threshold(args.threshold);
    let engine = SearchEngine::with_corrector(records, config, corrector)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Indexed {} records, {} distinct terms",
            engine.records().len(),
            engine.index().vocabulary().len()
        );
    }

    let start_time = Instant::now();
    let hits = engine.search(&args.query);
    let duration = start_time.elapsed();

    // Re-run the (pure) correction so the output can echo it.
    let corrected_query = {
        let corrected = engine.corrector().correct(&args.query);
        (corrected != args.query.to_lowercase()).then_some(corrected)
    };

    let rendered = render_hits(&hits, &engine);
    let results = SearchResults {
        query: args.query.clone(),
        corrected_query,
        total_hits: rendered.len(),
        hits: rendered,
        duration_ms: duration.as_millis() as u64,
    };

    output::output_search_results(&results, cli_args)
}

/// Resolve hits to their records and lay them out for rendering.
fn render_hits(hits: &[SearchHit], engine: &SearchEngine) -> Vec<HitOutput> {
    hits.iter()
        .enumerate()
        .filter_map(|(index, hit)| {
            engine.record(hit.record_id).map(|record| HitOutput {
                rank: index + 1,
                score: hit.score,
                dish: record.dish.clone(),
                country: record.origin.clone(),
                description: record.description.clone(),
                recipe: (!record.recipe.is_empty()).then(|| record.recipe.clone()),
                image: (!record.image.is_empty()).then(|| record.image.clone()),
            })
        })
        .collect()
}

/// Show corpus and vocabulary statistics.
fn show_stats(args: StatsArgs, cli_args: &SaporArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading corpus: {}", args.corpus_file.display());
    }

    let records = load_records(&args.corpus_file)?;
    let engine = SearchEngine::new(records)?;

    let vocabulary = engine.index().vocabulary();
    let record_count = engine.records().len();

    let mut total_tokens = 0usize;
    for record in engine.records() {
        total_tokens += engine.analyzer().analyze(&record.searchable_text())?.count();
    }
    let avg_tokens_per_record = if record_count == 0 {
        0.0
    } else {
        total_tokens as f64 / record_count as f64
    };

    let top_terms = args.detailed.then(|| {
        let mut counts: Vec<TermCount> = (0..vocabulary.len() as TermId)
            .map(|id| TermCount {
                term: vocabulary.term(id).to_string(),
                records: vocabulary.doc_freq(id),
            })
            .collect();
        // Stable sort: equally frequent terms keep first-encounter order.
        counts.sort_by(|a, b| b.records.cmp(&a.records));
        counts.truncate(TOP_TERM_COUNT);
        counts
    });

    let stats = CorpusStats {
        records: record_count,
        distinct_terms: vocabulary.len(),
        avg_tokens_per_record,
        top_terms,
    };

    output::output_stats(&stats, cli_args)
}
