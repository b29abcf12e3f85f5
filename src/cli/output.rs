//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SaporArgs};
use crate::error::Result;

/// One rendered search hit.
#[derive(Debug, Serialize, Deserialize)]
pub struct HitOutput {
    pub rank: usize,
    pub score: f32,
    pub dish: String,
    pub country: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    /// Present only when correction changed the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_query: Option<String>,
    pub hits: Vec<HitOutput>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Corpus and vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub records: usize,
    pub distinct_terms: usize,
    pub avg_tokens_per_record: f64,
    /// Present only with --detailed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_terms: Option<Vec<TermCount>>,
}

/// A term and the number of records it occurs in.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub records: u32,
}

/// Output search results in the format the arguments ask for.
pub fn output_search_results(results: &SearchResults, args: &SaporArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_search_results_human(results, args);
            Ok(())
        }
        OutputFormat::Json => output_json(results, args),
    }
}

/// Output corpus statistics in the format the arguments ask for.
pub fn output_stats(stats: &CorpusStats, args: &SaporArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_stats_human(stats, args);
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output search results in human format.
fn output_search_results_human(results: &SearchResults, args: &SaporArgs) {
    if args.verbosity() > 0 {
        if let Some(corrected) = &results.corrected_query {
            println!("Searching for \"{corrected}\" (corrected from \"{}\")", results.query);
        } else {
            println!("Searching for \"{}\"", results.query);
        }
        println!();
    }

    if results.hits.is_empty() {
        println!("No matches.");
        return;
    }

    for hit in &results.hits {
        println!("{}. {} ({}) - score {:.3}", hit.rank, hit.dish, hit.country, hit.score);
        println!("   {}", hit.description);
        if let Some(recipe) = &hit.recipe {
            println!("   recipe: {recipe}");
        }
        if let Some(image) = &hit.image {
            println!("   image: {image}");
        }
        println!();
    }

    if args.verbosity() > 0 {
        println!("{} result(s) in {}ms", results.total_hits, results.duration_ms);
    }
}

/// Output corpus statistics in human format.
fn output_stats_human(stats: &CorpusStats, _args: &SaporArgs) {
    println!("Records: {}", stats.records);
    println!("Distinct terms: {}", stats.distinct_terms);
    println!("Average tokens per record: {:.1}", stats.avg_tokens_per_record);

    if let Some(top_terms) = &stats.top_terms {
        println!();
        println!("Most frequent terms:");
        for entry in top_terms {
            println!("  {} ({} records)", entry.term, entry.records);
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SaporArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
